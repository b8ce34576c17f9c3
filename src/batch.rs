//! Batch drivers for the two icon pipelines.
//!
//! Each driver walks the static tables in [`crate::plan`], renders every
//! entry, applies the configured post-processing, and saves the PNG. After
//! the main loop the bundle packagers run as best-effort extras: their
//! failures are printed as warnings and never fail the run. The only fatal
//! conditions are a missing/unreadable SVG source and per-entry render or
//! save errors.

use std::fs;
use std::path::Path;

use image::RgbaImage;

use crate::bundle::{self, IconUtil};
use crate::effects::{self, ShadowOptions, DEFAULT_RADIUS_PERCENT};
use crate::error::Result;
use crate::plan::{IconEntry, CORE_ICONS, ICO_SIZES, STORE_LOGOS};
use crate::{artwork, vector};

/// Filename of the 512 px base icon that feeds the bundle packagers.
const BASE_ICON: &str = "icon.png";

/// Runs the vector-source pipeline: rasterize the SVG logo at every
/// configured size, post-process, save, then package ICO and ICNS bundles
/// from the 512 px base.
///
/// A missing or unparsable SVG aborts before any output is written.
pub fn generate_from_svg(svg_path: &Path, out_dir: &Path) -> Result<()> {
    let tree = vector::load_svg(svg_path)?;
    fs::create_dir_all(out_dir)?;

    for entry in CORE_ICONS.iter().chain(STORE_LOGOS.iter()) {
        log_entry(entry);

        let mut img = vector::rasterize(&tree, entry.size)?;
        if entry.rounded {
            img = effects::round_corners(&img, DEFAULT_RADIUS_PERCENT);
        }
        if entry.shadow {
            img = effects::drop_shadow(&img, ShadowOptions::default());
        }
        img.save(out_dir.join(entry.file_name))?;
    }

    // The bundles are built from the post-processed 512 px base on disk.
    let base = image::open(out_dir.join(BASE_ICON))?.to_rgba8();

    println!("\nGenerating platform-specific formats...");
    warn_on_failure(
        "icon.ico",
        bundle::write_ico_from_base(&base, &out_dir.join("icon.ico")),
    );
    warn_on_failure(
        "icon.icns",
        bundle::write_icns(&base, &out_dir.join("icon.icns"), &IconUtil),
    );

    Ok(())
}

/// Runs the procedural pipeline: synthesize the furnace badge at every
/// configured size, round where flagged, save, then pack an ICO from fresh
/// per-size renders.
///
/// The procedural pipeline never applies shadows.
pub fn generate_builtin(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)?;

    for entry in CORE_ICONS.iter().chain(STORE_LOGOS.iter()) {
        log_entry(entry);

        let mut img = artwork::render(entry.size);
        if entry.rounded {
            img = effects::round_corners(&img, DEFAULT_RADIUS_PERCENT);
        }
        img.save(out_dir.join(entry.file_name))?;
    }

    println!("Generating icon.ico for Windows...");
    let frames: Vec<RgbaImage> = ICO_SIZES.iter().map(|&size| artwork::render(size)).collect();
    warn_on_failure("icon.ico", bundle::write_ico(&frames, &out_dir.join("icon.ico")));

    Ok(())
}

fn log_entry(entry: &IconEntry) {
    println!(
        "Generating {} ({}x{}) - {}",
        entry.file_name, entry.size, entry.size, entry.label
    );
}

/// Downgrades a bundle-packaging failure to a warning.
fn warn_on_failure(what: &str, result: Result<()>) {
    match result {
        Ok(()) => println!("Generated {} successfully", what),
        Err(e) => eprintln!("Warning: could not generate {}: {}", what, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::path::PathBuf;

    const LOGO_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="512" height="512"><circle cx="256" cy="256" r="200" fill="#ff4500"/></svg>"##;

    fn temp_dir(test: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("furnace-batch-{}-{}", test, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn missing_svg_aborts_before_any_output() {
        let out = temp_dir("missing-svg");
        let err = generate_from_svg(Path::new("/nonexistent/logo.svg"), &out).unwrap_err();
        assert!(matches!(err, Error::MissingSource(_)));
        assert!(!out.exists(), "no output directory is created");
    }

    #[test]
    fn vector_pipeline_writes_every_table_entry() {
        let out = temp_dir("vector-full");
        fs::create_dir_all(&out).unwrap();
        let svg = out.join("logo.svg");
        fs::write(&svg, LOGO_SVG).unwrap();

        generate_from_svg(&svg, &out).unwrap();

        for entry in CORE_ICONS.iter().chain(STORE_LOGOS.iter()) {
            let img = image::open(out.join(entry.file_name)).unwrap().to_rgba8();
            assert_eq!(
                img.dimensions(),
                (entry.size, entry.size),
                "{} has the configured size",
                entry.file_name
            );
        }
        assert!(out.join("icon.ico").exists());

        fs::remove_dir_all(&out).unwrap();
    }

    #[test]
    fn rounded_shadowed_base_has_clear_corners_and_opaque_center() {
        let out = temp_dir("vector-scenario");
        fs::create_dir_all(&out).unwrap();
        let svg = out.join("logo.svg");
        fs::write(&svg, LOGO_SVG).unwrap();

        generate_from_svg(&svg, &out).unwrap();

        let img = image::open(out.join("icon.png")).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (512, 512));
        assert_eq!(img.get_pixel(0, 0)[3], 0);
        assert_eq!(img.get_pixel(511, 0)[3], 0);
        assert_eq!(img.get_pixel(256, 256)[3], 255);

        fs::remove_dir_all(&out).unwrap();
    }

    #[test]
    fn builtin_pipeline_writes_pngs_and_ico() {
        let out = temp_dir("builtin-full");
        generate_builtin(&out).unwrap();

        for entry in CORE_ICONS.iter().chain(STORE_LOGOS.iter()) {
            let img = image::open(out.join(entry.file_name)).unwrap().to_rgba8();
            assert_eq!(img.dimensions(), (entry.size, entry.size));
        }

        let ico = ico::IconDir::read(fs::File::open(out.join("icon.ico")).unwrap()).unwrap();
        assert_eq!(ico.entries().len(), ICO_SIZES.len());

        fs::remove_dir_all(&out).unwrap();
    }
}
