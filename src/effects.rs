//! Post-processing filters applied after rasterization.
//!
//! Both filters are pure functions of an image and their parameters:
//! [`round_corners`] clips the icon with a rounded-rectangle alpha mask, and
//! [`drop_shadow`] composites a blurred shadow layer beneath it. The batch
//! driver applies them in that fixed order when both are enabled.

use image::{imageops, Rgba, RgbaImage};

use crate::draw::composite_over;

/// Default corner radius, as a percentage of the icon's side length.
pub const DEFAULT_RADIUS_PERCENT: f32 = 20.0;

/// Clips the icon to a rounded rectangle.
///
/// A full-opacity rounded-rectangle mask (radius = `radius_percent` of the
/// side length) replaces the image's alpha channel outright; existing alpha
/// is overwritten, not intersected. Idempotent for a given radius.
pub fn round_corners(img: &RgbaImage, radius_percent: f32) -> RgbaImage {
    let size = img.width().min(img.height());
    let radius = (size as f32 * radius_percent / 100.0) as u32;

    let mut out = img.clone();
    for (x, y, pixel) in out.enumerate_pixels_mut() {
        let alpha = if inside_rounded_rect(x, y, img.width(), img.height(), radius) {
            255
        } else {
            0
        };
        *pixel = Rgba([pixel[0], pixel[1], pixel[2], alpha]);
    }
    out
}

/// Tests whether a pixel lies within the rounded-rectangle mask.
///
/// A point is inside when its distance to the inner rectangle (inset by the
/// radius on every side) is at most the radius.
fn inside_rounded_rect(x: u32, y: u32, width: u32, height: u32, radius: u32) -> bool {
    let r = radius as f32;
    let (x, y) = (x as f32, y as f32);
    let dx = (r - x).max(x - (width as f32 - 1.0 - r)).max(0.0);
    let dy = (r - y).max(y - (height as f32 - 1.0 - r)).max(0.0);
    dx * dx + dy * dy <= r * r
}

/// Parameters for [`drop_shadow`].
#[derive(Debug, Clone, Copy)]
pub struct ShadowOptions {
    /// Shadow color, including its base opacity.
    pub color: Rgba<u8>,

    /// Offset of the shadow layer relative to the icon.
    pub offset: (i32, i32),

    /// Gaussian blur sigma applied to the shadow layer.
    pub blur_radius: f32,
}

impl Default for ShadowOptions {
    fn default() -> Self {
        Self {
            color: Rgba([0, 0, 0, 60]),
            offset: (2, 2),
            blur_radius: 4.0,
        }
    }
}

/// Composites a subtle drop shadow beneath the icon.
///
/// A flat-colored layer the size of the source is Gaussian-blurred, pasted
/// at the configured offset onto a transparent canvas, and the icon is
/// composited over it at the origin. The output keeps the source dimensions
/// so every configured target size is honored exactly.
pub fn drop_shadow(img: &RgbaImage, options: ShadowOptions) -> RgbaImage {
    let (width, height) = img.dimensions();

    let shadow_layer = RgbaImage::from_pixel(width, height, options.color);
    let blurred = imageops::blur(&shadow_layer, options.blur_radius);

    let mut out = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]));
    composite_over(&mut out, &blurred, options.offset.0, options.offset.1);
    composite_over(&mut out, img, 0, 0);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opaque(size: u32) -> RgbaImage {
        RgbaImage::from_pixel(size, size, Rgba([200, 100, 50, 255]))
    }

    #[test]
    fn rounding_preserves_size() {
        let out = round_corners(&opaque(50), DEFAULT_RADIUS_PERCENT);
        assert_eq!(out.dimensions(), (50, 50));
    }

    #[test]
    fn rounding_clears_corners_keeps_center() {
        let out = round_corners(&opaque(100), DEFAULT_RADIUS_PERCENT);
        assert_eq!(out.get_pixel(0, 0)[3], 0);
        assert_eq!(out.get_pixel(99, 0)[3], 0);
        assert_eq!(out.get_pixel(0, 99)[3], 0);
        assert_eq!(out.get_pixel(99, 99)[3], 0);
        assert_eq!(out.get_pixel(50, 50)[3], 255);
        // Edge midpoints sit inside the mask.
        assert_eq!(out.get_pixel(50, 0)[3], 255);
    }

    #[test]
    fn rounding_is_idempotent_on_alpha() {
        let once = round_corners(&opaque(64), DEFAULT_RADIUS_PERCENT);
        let twice = round_corners(&once, DEFAULT_RADIUS_PERCENT);
        assert_eq!(once.as_raw(), twice.as_raw());
    }

    #[test]
    fn rounding_overwrites_existing_alpha() {
        // A fully transparent input becomes opaque inside the mask.
        let img = RgbaImage::from_pixel(40, 40, Rgba([10, 10, 10, 0]));
        let out = round_corners(&img, DEFAULT_RADIUS_PERCENT);
        assert_eq!(out.get_pixel(20, 20)[3], 255);
    }

    #[test]
    fn shadow_preserves_size() {
        let out = drop_shadow(&opaque(64), ShadowOptions::default());
        assert_eq!(out.dimensions(), (64, 64));
    }

    #[test]
    fn shadow_fills_transparent_areas() {
        // A transparent canvas with a small opaque patch: the shadow layer
        // shows through where the icon does not paint.
        let mut img = RgbaImage::from_pixel(20, 20, Rgba([0, 0, 0, 0]));
        for y in 5..15 {
            for x in 5..15 {
                img.put_pixel(x, y, Rgba([255, 255, 255, 255]));
            }
        }
        let out = drop_shadow(&img, ShadowOptions::default());
        assert!(out.get_pixel(17, 17)[3] > 0, "shadow under transparent area");
        assert_eq!(out.get_pixel(10, 10).0, [255, 255, 255, 255]);
    }

    #[test]
    fn rounded_then_shadowed_corner_stays_transparent() {
        let rounded = round_corners(&opaque(512), DEFAULT_RADIUS_PERCENT);
        let out = drop_shadow(&rounded, ShadowOptions::default());
        assert_eq!(out.dimensions(), (512, 512));
        assert_eq!(out.get_pixel(0, 0)[3], 0, "offset leaves the extreme corner clear");
        assert_eq!(out.get_pixel(256, 256)[3], 255);
    }
}
