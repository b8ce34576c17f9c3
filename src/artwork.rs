//! Procedural rendering of the Code Furnace badge.
//!
//! The illustration — a circular obsidian badge holding a furnace over an
//! anvil, with a layered lava glow, molten cracks, embers, and cooling
//! vents — is described entirely in code. All coordinates are authored at a
//! canonical 512 px resolution and scaled linearly to the requested size, so
//! the same drawing sequence serves every entry in the icon tables.
//!
//! Rendering is deterministic: the same size always produces byte-identical
//! pixels.

use image::{Rgba, RgbaImage};

use crate::draw::{
    draw_line, fill_ellipse, fill_polygon, fill_rect, stroke_ellipse, stroke_polygon, stroke_rect,
};
use crate::theme::{
    self, EMBER, LAVA_GOLD, LAVA_PRIMARY, LAVA_SECONDARY, OBSIDIAN_DARK, OBSIDIAN_MEDIUM,
};

/// The resolution all illustration coordinates are authored at.
pub const BASE_SIZE: u32 = 512;

/// Linear scaling from base-resolution coordinates to target pixels.
#[derive(Debug, Clone, Copy)]
struct Scale(f32);

impl Scale {
    fn new(size: u32) -> Self {
        Self(size as f32 / BASE_SIZE as f32)
    }

    /// Scales a base coordinate, truncating toward zero.
    fn at(self, v: f32) -> i32 {
        (v * self.0) as i32
    }

    /// Scales a stroke width or small radius, never collapsing below 1 px.
    fn stroke(self, v: f32) -> i32 {
        ((v * self.0) as i32).max(1)
    }
}

/// Renders the furnace badge at the given square size.
///
/// Shapes whose scaled dimensions degenerate to zero are skipped, so very
/// small sizes (down to 1×1) render without error — they just carry less of
/// the illustration.
pub fn render(size: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));
    let s = Scale::new(size);
    let center = (size / 2) as i32;

    // Obsidian badge disc with a lava ring just inside its edge.
    fill_ellipse(&mut img, center, center, s.at(240.0), s.at(240.0), OBSIDIAN_DARK);
    stroke_ellipse(
        &mut img,
        center,
        center,
        s.at(220.0),
        s.at(220.0),
        s.stroke(3.0),
        LAVA_PRIMARY,
    );

    // Anvil slab beneath the furnace.
    let anvil = (s.at(160.0), s.at(332.0), s.at(352.0), s.at(380.0));
    fill_rect(&mut img, anvil.0, anvil.1, anvil.2, anvil.3, OBSIDIAN_DARK);
    stroke_rect(
        &mut img,
        anvil.0,
        anvil.1,
        anvil.2,
        anvil.3,
        s.stroke(2.0),
        theme::darken(LAVA_PRIMARY, 0.08),
    );

    // Furnace body.
    let body: Vec<(i32, i32)> = [
        (200.0, 320.0),
        (312.0, 320.0),
        (320.0, 180.0),
        (290.0, 120.0),
        (256.0, 100.0),
        (222.0, 120.0),
        (192.0, 180.0),
    ]
    .iter()
    .map(|&(x, y)| (s.at(x), s.at(y)))
    .collect();
    fill_polygon(&mut img, &body, OBSIDIAN_MEDIUM);
    stroke_polygon(&mut img, &body, s.stroke(3.0), LAVA_SECONDARY);

    // Lava core: five concentric ellipses fading outward-in from gold
    // through orange to red approximate a radial gradient.
    let (core_x, core_y) = (s.at(256.0), s.at(200.0));
    for i in 0..5u32 {
        let step = i as f32;
        let alpha = 255 - i * 40;
        let rw = s.at(45.0 - step * 5.0);
        let rh = s.at(60.0 - step * 8.0);
        let hue = if i < 2 {
            LAVA_GOLD
        } else if i < 4 {
            LAVA_SECONDARY
        } else {
            LAVA_PRIMARY
        };
        fill_ellipse(&mut img, core_x, core_y, rw, rh, theme::with_alpha(hue, alpha as u8));
    }

    // Molten cracks: a sine wave sampled at a fixed base-coordinate step,
    // joined with straight segments.
    let cracks: [(f32, Rgba<u8>, f32); 3] = [
        (160.0, LAVA_GOLD, 3.0),
        (200.0, LAVA_SECONDARY, 4.0),
        (240.0, LAVA_PRIMARY, 3.0),
    ];
    for (base_y, color, width) in cracks {
        let mut prev: Option<(i32, i32)> = None;
        let mut x = 210.0f32;
        while x < 302.0 {
            let sway = 10.0 * (0.1 * (x - 210.0)).sin();
            let point = (s.at(x), s.at(base_y + sway));
            if let Some((px, py)) = prev {
                draw_line(&mut img, px, py, point.0, point.1, s.stroke(width), color);
            }
            prev = Some(point);
            x += 10.0;
        }
    }

    // Furnace mouth with an inner glow.
    let (mouth_x, mouth_y) = (s.at(256.0), s.at(140.0));
    fill_ellipse(&mut img, mouth_x, mouth_y, s.at(25.0), s.at(15.0), Rgba([0, 0, 0, 255]));
    stroke_ellipse(
        &mut img,
        mouth_x,
        mouth_y,
        s.at(25.0),
        s.at(15.0),
        s.stroke(2.0),
        LAVA_PRIMARY,
    );
    fill_ellipse(
        &mut img,
        mouth_x,
        mouth_y,
        s.at(20.0),
        s.at(10.0),
        theme::with_alpha(LAVA_SECONDARY, 150),
    );

    // Embers drifting above the furnace.
    let embers: [(f32, f32, f32, Rgba<u8>); 5] = [
        (200.0, 120.0, 3.0, LAVA_GOLD),
        (320.0, 100.0, 2.0, LAVA_SECONDARY),
        (280.0, 80.0, 2.5, EMBER),
        (180.0, 90.0, 2.0, LAVA_PRIMARY),
        (340.0, 130.0, 1.5, LAVA_SECONDARY),
    ];
    for (x, y, r, color) in embers {
        fill_ellipse(&mut img, s.at(x), s.at(y), s.at(r), s.at(r), color);
    }

    // Cooling vent slits across the lower body.
    let vent_y = s.at(300.0);
    let vent_h = s.stroke(3.0);
    for x in [200.0, 230.0, 260.0, 290.0] {
        fill_rect(
            &mut img,
            s.at(x),
            vent_y,
            s.at(x + 20.0),
            vent_y + vent_h,
            theme::with_alpha(LAVA_PRIMARY, 150),
        );
    }

    // Bright focal point at the heart of the core.
    fill_ellipse(&mut img, center, core_y, s.stroke(12.0), s.stroke(12.0), LAVA_GOLD);
    fill_ellipse(
        &mut img,
        center,
        core_y,
        s.stroke(6.0),
        s.stroke(6.0),
        Rgba([255, 255, 255, 200]),
    );

    img
}
