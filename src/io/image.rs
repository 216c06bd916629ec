//! PNG export of rendered tilings

use crate::io::error::{Result, TilingError, ensure_parent_dir};
use crate::io::palette::Palette;
use crate::io::raster::RasterCanvas;
use crate::io::render::render_tiling;
use crate::spatial::tile::Tile;
use image::RgbaImage;
use std::path::Path;

/// Rasterize `tiles` onto a `width` x `height` image
pub fn render_image(tiles: &[Tile], width: u32, height: u32, palette: &Palette) -> RgbaImage {
    let mut canvas = RasterCanvas::new(width, height);
    render_tiling(&mut canvas, tiles, palette);
    canvas.into_image()
}

/// Export `tiles` as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_png(
    tiles: &[Tile],
    width: u32,
    height: u32,
    palette: &Palette,
    output_path: &Path,
) -> Result<()> {
    ensure_parent_dir(output_path)?;

    render_image(tiles, width, height, palette)
        .save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| TilingError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
