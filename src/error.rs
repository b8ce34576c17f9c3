//! Error types for icon generation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while rendering or packaging icons.
///
/// The batch drivers treat these in two tiers: a missing source asset or a
/// per-entry render/save failure aborts the run, while bundle packaging
/// errors ([`Error::IconUtilUnavailable`], [`Error::IconUtilFailed`] and
/// ICO write failures) are reported as warnings and the run continues.
#[derive(Debug, Error)]
pub enum Error {
    /// The mandatory SVG logo could not be found.
    #[error("source SVG not found: {}", .0.display())]
    MissingSource(PathBuf),

    /// The SVG source could not be read from disk.
    #[error("failed to read {}", path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The SVG source could not be parsed.
    #[error("failed to parse SVG: {0}")]
    SvgParse(#[from] resvg::usvg::Error),

    /// A pixel buffer of the requested size could not be allocated.
    ///
    /// `tiny_skia` rejects zero-sized pixmaps; this surfaces that as an error
    /// instead of a panic.
    #[error("cannot allocate a {size}x{size} pixel buffer")]
    PixmapAlloc { size: u32 },

    /// An image could not be encoded or written.
    #[error(transparent)]
    Image(#[from] image::ImageError),

    /// Filesystem or encoder I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The `iconutil` tool is not present on this system.
    ///
    /// ICNS bundles can only be compiled on macOS.
    #[error("iconutil is not available on this system")]
    IconUtilUnavailable,

    /// `iconutil` ran but exited unsuccessfully.
    #[error("iconutil failed ({status}): {stderr}")]
    IconUtilFailed { status: String, stderr: String },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
