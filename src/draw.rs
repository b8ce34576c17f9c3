//! Raster drawing primitives.
//!
//! Everything the procedural renderer needs to paint an illustration onto an
//! [`RgbaImage`]: filled and stroked ellipses, polygons, rectangles, thick
//! line segments, and source-over compositing. All primitives clip to the
//! image bounds and silently skip degenerate (zero or negative) dimensions,
//! so callers can scale coordinates down to tiny target sizes without
//! guarding every call.

use std::collections::HashSet;

use image::{Rgba, RgbaImage};

// ============================================================================
// Pixel blending
// ============================================================================

/// Alpha blends two RGBA pixels (source over destination).
pub fn alpha_blend(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    let sa = src[3] as f32 / 255.0;
    let da = dst[3] as f32 / 255.0;

    let out_a = sa + da * (1.0 - sa);
    if out_a == 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let blend = |s: u8, d: u8| -> u8 {
        let sf = s as f32 / 255.0;
        let df = d as f32 / 255.0;
        let out = (sf * sa + df * da * (1.0 - sa)) / out_a;
        (out * 255.0).round() as u8
    };

    Rgba([
        blend(src[0], dst[0]),
        blend(src[1], dst[1]),
        blend(src[2], dst[2]),
        (out_a * 255.0).round() as u8,
    ])
}

/// Blends a single pixel into the image, ignoring out-of-bounds coordinates.
pub fn blend_pixel(img: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>) {
    if x < 0 || y < 0 || x >= img.width() as i32 || y >= img.height() as i32 {
        return;
    }
    let dst = *img.get_pixel(x as u32, y as u32);
    img.put_pixel(x as u32, y as u32, alpha_blend(color, dst));
}

/// Composites a source image onto a destination image at the specified
/// position, using source-over alpha blending.
pub fn composite_over(dest: &mut RgbaImage, src: &RgbaImage, x: i32, y: i32) {
    let dest_width = dest.width() as i32;
    let dest_height = dest.height() as i32;

    for sy in 0..src.height() {
        for sx in 0..src.width() {
            let dx = x + sx as i32;
            let dy = y + sy as i32;

            if dx < 0 || dy < 0 || dx >= dest_width || dy >= dest_height {
                continue;
            }

            let src_pixel = *src.get_pixel(sx, sy);
            let dst_pixel = *dest.get_pixel(dx as u32, dy as u32);
            dest.put_pixel(dx as u32, dy as u32, alpha_blend(src_pixel, dst_pixel));
        }
    }
}

// ============================================================================
// Ellipses
// ============================================================================

/// Fills an ellipse centered at `(cx, cy)` with radii `(rx, ry)`.
///
/// Degenerate radii (≤ 0) are skipped.
pub fn fill_ellipse(img: &mut RgbaImage, cx: i32, cy: i32, rx: i32, ry: i32, color: Rgba<u8>) {
    if rx <= 0 || ry <= 0 {
        return;
    }

    let rx_f = rx as f32;
    let ry_f = ry as f32;
    for y in (cy - ry)..=(cy + ry) {
        for x in (cx - rx)..=(cx + rx) {
            let dx = (x - cx) as f32 / rx_f;
            let dy = (y - cy) as f32 / ry_f;
            if dx * dx + dy * dy <= 1.0 {
                blend_pixel(img, x, y, color);
            }
        }
    }
}

/// Strokes an ellipse outline of the given width.
///
/// The stroke extends inward from the outer radii, matching the concentric
/// one-pixel outlines a painter's loop would produce. Degenerate radii or a
/// width ≤ 0 are skipped; if the width consumes the whole ellipse, the
/// ellipse is filled instead.
pub fn stroke_ellipse(
    img: &mut RgbaImage,
    cx: i32,
    cy: i32,
    rx: i32,
    ry: i32,
    width: i32,
    color: Rgba<u8>,
) {
    if rx <= 0 || ry <= 0 || width <= 0 {
        return;
    }

    let inner_rx = rx - width;
    let inner_ry = ry - width;
    if inner_rx <= 0 || inner_ry <= 0 {
        fill_ellipse(img, cx, cy, rx, ry, color);
        return;
    }

    let (orx, ory) = (rx as f32, ry as f32);
    let (irx, iry) = (inner_rx as f32, inner_ry as f32);
    for y in (cy - ry)..=(cy + ry) {
        for x in (cx - rx)..=(cx + rx) {
            let dx = (x - cx) as f32;
            let dy = (y - cy) as f32;
            let outer = (dx / orx).powi(2) + (dy / ory).powi(2);
            let inner = (dx / irx).powi(2) + (dy / iry).powi(2);
            if outer <= 1.0 && inner > 1.0 {
                blend_pixel(img, x, y, color);
            }
        }
    }
}

// ============================================================================
// Rectangles
// ============================================================================

/// Fills the rectangle with inclusive corners `(x0, y0)`–`(x1, y1)`.
pub fn fill_rect(img: &mut RgbaImage, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba<u8>) {
    if x1 < x0 || y1 < y0 {
        return;
    }
    for y in y0..=y1 {
        for x in x0..=x1 {
            blend_pixel(img, x, y, color);
        }
    }
}

/// Strokes the rectangle border, `width` pixels thick, extending inward.
pub fn stroke_rect(
    img: &mut RgbaImage,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    width: i32,
    color: Rgba<u8>,
) {
    if x1 < x0 || y1 < y0 || width <= 0 {
        return;
    }
    let w = width - 1;
    fill_rect(img, x0, y0, x1, y0 + w, color);
    fill_rect(img, x0, y1 - w, x1, y1, color);
    fill_rect(img, x0, y0 + w + 1, x0 + w, y1 - w - 1, color);
    fill_rect(img, x1 - w, y0 + w + 1, x1, y1 - w - 1, color);
}

// ============================================================================
// Polygons
// ============================================================================

/// Fills a closed polygon using even-odd scanline filling.
///
/// Needs at least three vertices; fewer are skipped.
pub fn fill_polygon(img: &mut RgbaImage, points: &[(i32, i32)], color: Rgba<u8>) {
    if points.len() < 3 {
        return;
    }

    let y_min = points.iter().map(|p| p.1).min().unwrap();
    let y_max = points.iter().map(|p| p.1).max().unwrap();

    for y in y_min..=y_max {
        // Sample at the pixel row's vertical center.
        let scan_y = y as f32 + 0.5;
        let mut crossings: Vec<f32> = Vec::new();

        for i in 0..points.len() {
            let (x0, y0) = points[i];
            let (x1, y1) = points[(i + 1) % points.len()];
            let (fy0, fy1) = (y0 as f32, y1 as f32);
            if (fy0 <= scan_y && scan_y < fy1) || (fy1 <= scan_y && scan_y < fy0) {
                let t = (scan_y - fy0) / (fy1 - fy0);
                crossings.push(x0 as f32 + t * (x1 - x0) as f32);
            }
        }

        crossings.sort_by(f32::total_cmp);
        for pair in crossings.chunks_exact(2) {
            let start = pair[0].ceil() as i32;
            let end = pair[1].floor() as i32;
            for x in start..=end {
                blend_pixel(img, x, y, color);
            }
        }
    }
}

/// Strokes a closed polygon outline with segments of the given width.
pub fn stroke_polygon(img: &mut RgbaImage, points: &[(i32, i32)], width: i32, color: Rgba<u8>) {
    if points.len() < 2 {
        return;
    }
    for i in 0..points.len() {
        let (x0, y0) = points[i];
        let (x1, y1) = points[(i + 1) % points.len()];
        draw_line(img, x0, y0, x1, y1, width, color);
    }
}

// ============================================================================
// Lines
// ============================================================================

/// Draws a line segment of the given width.
///
/// The segment is traced with Bresenham's algorithm and thickened by
/// stamping a disc at each step. Covered pixels are collected first and
/// blended exactly once, so translucent colors do not darken where stamps
/// overlap. A width ≤ 0 is skipped.
pub fn draw_line(
    img: &mut RgbaImage,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    width: i32,
    color: Rgba<u8>,
) {
    if width <= 0 {
        return;
    }

    let radius = (width - 1) / 2;
    let mut covered: HashSet<(i32, i32)> = HashSet::new();

    for (cx, cy) in bresenham(x0, y0, x1, y1) {
        if radius == 0 {
            covered.insert((cx, cy));
            continue;
        }
        let r_f = radius as f32 + 0.5;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if ((dx * dx + dy * dy) as f32).sqrt() <= r_f {
                    covered.insert((cx + dx, cy + dy));
                }
            }
        }
    }

    for (x, y) in covered {
        blend_pixel(img, x, y, color);
    }
}

/// Integer line rasterization (Bresenham).
fn bresenham(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<(i32, i32)> {
    let mut points = Vec::new();
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);

    loop {
        points.push((x, y));
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
    points
}

// ============================================================================
// Tests
// ============================================================================
