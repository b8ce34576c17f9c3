//! Generates the full app icon set from the vector logo.
//!
//! Rasterizes `design/logo.svg` at every configured size, applies corner
//! rounding and a drop shadow where the table says so, and packages the
//! Windows ICO and (on macOS) the ICNS bundle.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug, Parser)]
#[clap(name = "generate-icons", about = "Generate all app icons from the SVG logo")]
struct Args {
    /// Path to the source SVG logo.
    #[clap(short, long, value_name = "FILE", default_value = "design/logo.svg")]
    source: PathBuf,

    /// Output directory for the generated icons.
    #[clap(short, long, value_name = "DIR", default_value = "src-tauri/icons")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Code Furnace Icon Generator");
    println!("{}", "=".repeat(40));

    furnace_icons::batch::generate_from_svg(&args.source, &args.output)
        .context("icon generation failed")?;

    println!("\nIcon generation complete!");
    println!("Generated icons in: {}", args.output.display());
    Ok(())
}
