//! furnace-icons: icon asset generation for the Code Furnace desktop app.
//!
//! This crate renders the full application icon set — per-size PNGs, a
//! multi-resolution Windows ICO, and (on macOS) an ICNS bundle — from either
//! of two sources:
//!
//! - the vector logo (`design/logo.svg`), rasterized with resvg, or
//! - a self-contained procedural rendering of the volcanic furnace badge.
//!
//! Every output is enumerated in the static tables of the [`plan`] module;
//! the [`batch`] drivers iterate them, apply the configured corner rounding
//! and drop shadow, and hand the 512 px base to the [`bundle`] packagers.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! // Render the procedural icon set into an output directory.
//! furnace_icons::batch::generate_builtin(Path::new("src-tauri/icons")).unwrap();
//! ```

pub mod artwork;
pub mod batch;
pub mod bundle;
pub mod draw;
pub mod effects;
pub mod error;
pub mod plan;
pub mod theme;
pub mod vector;

pub use bundle::{IcnsPackager, IconUtil};
pub use effects::{ShadowOptions, DEFAULT_RADIUS_PERCENT};
pub use error::{Error, Result};
pub use plan::{IconEntry, CORE_ICONS, ICONSET_SIZES, ICO_SIZES, STORE_LOGOS};
