//! Platform icon-bundle packaging (ICO and ICNS).
//!
//! ICO files are assembled in-process with the `ico` crate. ICNS bundles
//! need Apple's `iconutil`, so that step goes through the [`IcnsPackager`]
//! trait: the renderer stages the Apple-mandated resolutions into an
//! `.iconset` directory and hands packaging to whichever provider is
//! available. Both packagers are best-effort extras — the batch drivers
//! downgrade their failures to warnings.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::process::Command;

use image::{imageops, RgbaImage};

use crate::error::{Error, Result};
use crate::plan::{ICONSET_SIZES, ICO_SIZES};

// ============================================================================
// ICO
// ============================================================================

/// Resamples the base image to each of the given sizes with Lanczos3.
pub fn resize_frames(base: &RgbaImage, sizes: &[u32]) -> Vec<RgbaImage> {
    sizes
        .iter()
        .map(|&size| imageops::resize(base, size, size, imageops::FilterType::Lanczos3))
        .collect()
}

/// Writes a multi-resolution ICO file from a set of pre-rendered frames.
pub fn write_ico(frames: &[RgbaImage], path: &Path) -> Result<()> {
    let mut dir = ico::IconDir::new(ico::ResourceType::Icon);
    for frame in frames {
        let image =
            ico::IconImage::from_rgba_data(frame.width(), frame.height(), frame.as_raw().clone());
        dir.add_entry(ico::IconDirEntry::encode(&image)?);
    }

    let file = BufWriter::new(File::create(path)?);
    dir.write(file)?;
    Ok(())
}

/// Writes a multi-resolution ICO by resampling a single base image to the
/// standard Windows frame sizes.
pub fn write_ico_from_base(base: &RgbaImage, path: &Path) -> Result<()> {
    write_ico(&resize_frames(base, &ICO_SIZES), path)
}

// ============================================================================
// ICNS
// ============================================================================

/// Compiles a staged `.iconset` directory into an ICNS bundle.
///
/// Abstracting the native tool behind a trait keeps the rendering code
/// independent of whether the tool exists on the running system, and lets
/// tests substitute a fake provider.
pub trait IcnsPackager {
    /// Probes whether this provider can run at all on this system.
    fn available(&self) -> bool;

    /// Compiles `iconset_dir` into an ICNS bundle at `output`.
    fn package(&self, iconset_dir: &Path, output: &Path) -> Result<()>;
}

/// The macOS `iconutil` command-line tool.
pub struct IconUtil;

impl IcnsPackager for IconUtil {
    fn available(&self) -> bool {
        Command::new("iconutil")
            .arg("--help")
            .output()
            .is_ok()
    }

    fn package(&self, iconset_dir: &Path, output: &Path) -> Result<()> {
        let result = Command::new("iconutil")
            .args(["-c", "icns"])
            .arg(iconset_dir)
            .arg("-o")
            .arg(output)
            .output()
            .map_err(|_| Error::IconUtilUnavailable)?;

        if result.status.success() {
            Ok(())
        } else {
            Err(Error::IconUtilFailed {
                status: result.status.to_string(),
                stderr: String::from_utf8_lossy(&result.stderr).into_owned(),
            })
        }
    }
}

/// Returns the staging directory for an ICNS output path
/// (`icon.icns` → `icon.iconset`).
pub fn iconset_dir_for(icns_path: &Path) -> PathBuf {
    icns_path.with_extension("iconset")
}

/// Writes the Apple-mandated resolution set into a staging directory.
///
/// The 1024 px variant is upscaled from the base; all others are downscaled
/// with Lanczos3.
pub fn stage_iconset(base: &RgbaImage, iconset_dir: &Path) -> Result<()> {
    fs::create_dir_all(iconset_dir)?;
    for (size, name) in ICONSET_SIZES {
        let resized = imageops::resize(base, size, size, imageops::FilterType::Lanczos3);
        resized.save(iconset_dir.join(name))?;
    }
    Ok(())
}

/// Builds an ICNS bundle from a base image via the given packager.
///
/// Stages the iconset next to the output path, invokes the packager, and
/// removes the staging directory on success. On failure the staging
/// directory is left in place for inspection.
pub fn write_icns(base: &RgbaImage, path: &Path, packager: &dyn IcnsPackager) -> Result<()> {
    if !packager.available() {
        return Err(Error::IconUtilUnavailable);
    }

    let iconset_dir = iconset_dir_for(path);
    stage_iconset(base, &iconset_dir)?;
    packager.package(&iconset_dir, path)?;
    fs::remove_dir_all(&iconset_dir)?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn temp_dir(test: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("furnace-icons-{}-{}", test, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn base_image(size: u32) -> RgbaImage {
        RgbaImage::from_pixel(size, size, Rgba([255, 69, 0, 255]))
    }

    #[test]
    fn ico_contains_all_windows_frame_sizes() {
        let dir = temp_dir("ico-frames");
        let path = dir.join("icon.ico");
        write_ico_from_base(&base_image(512), &path).unwrap();

        let read = ico::IconDir::read(File::open(&path).unwrap()).unwrap();
        let mut sizes: Vec<u32> = read.entries().iter().map(|e| e.width()).collect();
        sizes.sort_unstable();
        assert_eq!(sizes, vec![16, 24, 32, 48, 64, 128, 256]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn resize_frames_are_exact() {
        let frames = resize_frames(&base_image(100), &[16, 48]);
        assert_eq!(frames[0].dimensions(), (16, 16));
        assert_eq!(frames[1].dimensions(), (48, 48));
    }

    #[test]
    fn staging_writes_all_ten_variants() {
        let dir = temp_dir("iconset-stage");
        let iconset = dir.join("icon.iconset");
        stage_iconset(&base_image(64), &iconset).unwrap();

        for (_, name) in ICONSET_SIZES {
            assert!(iconset.join(name).exists(), "missing {}", name);
        }

        fs::remove_dir_all(&dir).unwrap();
    }

    struct FakePackager {
        succeed: bool,
    }

    impl IcnsPackager for FakePackager {
        fn available(&self) -> bool {
            true
        }

        fn package(&self, iconset_dir: &Path, output: &Path) -> Result<()> {
            // The staging directory must be fully populated before packaging.
            assert!(iconset_dir.join("icon_512x512.png").exists());
            if self.succeed {
                fs::write(output, b"icns").map_err(Error::from)
            } else {
                Err(Error::IconUtilFailed {
                    status: "exit code: 1".into(),
                    stderr: "boom".into(),
                })
            }
        }
    }

    #[test]
    fn icns_success_removes_staging_dir() {
        let dir = temp_dir("icns-ok");
        let path = dir.join("icon.icns");
        write_icns(&base_image(64), &path, &FakePackager { succeed: true }).unwrap();

        assert!(path.exists());
        assert!(!iconset_dir_for(&path).exists());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn icns_failure_leaves_staging_dir_for_inspection() {
        let dir = temp_dir("icns-fail");
        let path = dir.join("icon.icns");
        let err = write_icns(&base_image(64), &path, &FakePackager { succeed: false }).unwrap_err();

        assert!(matches!(err, Error::IconUtilFailed { .. }));
        assert!(iconset_dir_for(&path).exists());

        fs::remove_dir_all(&dir).unwrap();
    }

    struct UnavailablePackager;

    impl IcnsPackager for UnavailablePackager {
        fn available(&self) -> bool {
            false
        }

        fn package(&self, _: &Path, _: &Path) -> Result<()> {
            unreachable!("package must not be called when unavailable")
        }
    }

    #[test]
    fn icns_unavailable_packager_is_reported_before_staging() {
        let dir = temp_dir("icns-missing");
        let path = dir.join("icon.icns");
        let err = write_icns(&base_image(64), &path, &UnavailablePackager).unwrap_err();

        assert!(matches!(err, Error::IconUtilUnavailable));
        assert!(!iconset_dir_for(&path).exists());

        fs::remove_dir_all(&dir).unwrap();
    }
}
