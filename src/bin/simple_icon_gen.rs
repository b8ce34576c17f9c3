//! Generates the app icon set without any external assets.
//!
//! The volcanic furnace badge is drawn procedurally at each configured size,
//! so this works even when the SVG logo (or an SVG rasterizer) is not
//! available.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug, Parser)]
#[clap(
    name = "simple-icon-gen",
    about = "Generate app icons from the built-in procedural design"
)]
struct Args {
    /// Output directory for the generated icons.
    #[clap(short, long, value_name = "DIR", default_value = "src-tauri/icons")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Code Furnace Simple Icon Generator");
    println!("{}", "=".repeat(45));

    furnace_icons::batch::generate_builtin(&args.output)
        .context("icon generation failed")?;

    println!("\nIcon generation complete!");
    println!("Generated icons in: {}", args.output.display());
    Ok(())
}
