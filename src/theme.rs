//! The volcanic color palette and color helpers.

use image::Rgba;
use palette::{Hsl, IntoColor, Srgb};

/// Near-black obsidian used for the badge disc and anvil slab.
pub const OBSIDIAN_DARK: Rgba<u8> = Rgba([13, 13, 13, 255]);

/// Lighter obsidian used for the furnace body.
pub const OBSIDIAN_MEDIUM: Rgba<u8> = Rgba([42, 42, 42, 255]);

/// The base lava red-orange.
pub const LAVA_PRIMARY: Rgba<u8> = Rgba([255, 69, 0, 255]);

/// Mid-glow orange.
pub const LAVA_SECONDARY: Rgba<u8> = Rgba([255, 140, 0, 255]);

/// Brightest gold at the heart of the glow.
pub const LAVA_GOLD: Rgba<u8> = Rgba([255, 215, 0, 255]);

/// Warm ember accent.
pub const EMBER: Rgba<u8> = Rgba([255, 112, 67, 255]);

/// Returns the color with its alpha channel replaced.
pub fn with_alpha(color: Rgba<u8>, alpha: u8) -> Rgba<u8> {
    Rgba([color[0], color[1], color[2], alpha])
}

/// Darkens a color by reducing its HSL lightness, preserving alpha.
pub fn darken(color: Rgba<u8>, amount: f32) -> Rgba<u8> {
    let rgb = Srgb::new(
        color[0] as f32 / 255.0,
        color[1] as f32 / 255.0,
        color[2] as f32 / 255.0,
    );
    let mut hsl: Hsl = rgb.into_color();
    hsl.lightness = (hsl.lightness - amount).max(0.0);
    let darkened: Srgb = hsl.into_color();
    Rgba([
        (darkened.red * 255.0).round() as u8,
        (darkened.green * 255.0).round() as u8,
        (darkened.blue * 255.0).round() as u8,
        color[3],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_alpha_preserves_rgb() {
        let c = with_alpha(LAVA_PRIMARY, 150);
        assert_eq!(c.0, [255, 69, 0, 150]);
    }

    #[test]
    fn darken_reduces_brightness_keeps_alpha() {
        let c = darken(LAVA_GOLD, 0.2);
        assert!(c[0] <= LAVA_GOLD[0]);
        assert!(u32::from(c[0]) + u32::from(c[1]) < u32::from(LAVA_GOLD[0]) + u32::from(LAVA_GOLD[1]));
        assert_eq!(c[3], 255);
    }

    #[test]
    fn darken_clamps_at_black() {
        let c = darken(OBSIDIAN_DARK, 1.0);
        assert_eq!(&c.0[..3], &[0, 0, 0]);
    }
}
