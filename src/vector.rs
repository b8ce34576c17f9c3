//! SVG loading and rasterization using resvg/usvg.
//!
//! The vector pipeline parses the logo once into a [`usvg::Tree`] and
//! rasterizes it at each target size. Output buffers are exactly the
//! requested square size with a transparent background wherever the vector
//! content does not paint.

use std::fs;
use std::path::Path;

use image::{Rgba, RgbaImage};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};

use crate::error::{Error, Result};

/// Loads and parses an SVG file.
///
/// A missing file maps to [`Error::MissingSource`], which the batch driver
/// treats as fatal before any output is produced.
pub fn load_svg(path: &Path) -> Result<Tree> {
    if !path.exists() {
        return Err(Error::MissingSource(path.to_path_buf()));
    }

    let data = fs::read(path).map_err(|source| Error::ReadSource {
        path: path.to_path_buf(),
        source,
    })?;

    let opts = Options::default();
    Ok(Tree::from_data(&data, &opts)?)
}

/// Rasterizes a parsed SVG to an exact `size`×`size` RGBA buffer.
///
/// Width and height scale independently so the output is always square,
/// even for logos whose viewbox is not.
pub fn rasterize(tree: &Tree, size: u32) -> Result<RgbaImage> {
    let mut pixmap = Pixmap::new(size, size).ok_or(Error::PixmapAlloc { size })?;

    let svg_size = tree.size();
    let scale_x = size as f32 / svg_size.width();
    let scale_y = size as f32 / svg_size.height();
    let transform = Transform::from_scale(scale_x, scale_y);
    resvg::render(tree, transform, &mut pixmap.as_mut());

    Ok(pixmap_to_rgba_image(&pixmap))
}

/// Converts a tiny_skia Pixmap to an image::RgbaImage.
fn pixmap_to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let width = pixmap.width();
    let height = pixmap.height();
    let mut img = RgbaImage::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let pixel = pixmap.pixel(x, y).unwrap();
            // tiny_skia uses premultiplied alpha, we need to unpremultiply
            let (r, g, b, a) =
                unpremultiply(pixel.red(), pixel.green(), pixel.blue(), pixel.alpha());
            img.put_pixel(x, y, Rgba([r, g, b, a]));
        }
    }

    img
}

/// Unpremultiplies a premultiplied alpha pixel.
fn unpremultiply(r: u8, g: u8, b: u8, a: u8) -> (u8, u8, u8, u8) {
    if a == 0 {
        (0, 0, 0, 0)
    } else {
        let a_f = a as f32 / 255.0;
        (
            (r as f32 / a_f).round().min(255.0) as u8,
            (g as f32 / a_f).round().min(255.0) as u8,
            (b as f32 / a_f).round().min(255.0) as u8,
            a,
        )
    }
}
