//! SVG export

use crate::io::configuration::OUTLINE_WIDTH;
use crate::io::error::{Result, ensure_parent_dir, file_system};
use crate::io::palette::{Color, Palette, hex};
use crate::io::render::{TileRenderer, render_tiling};
use crate::spatial::polygon::TilePolygon;
use crate::spatial::tile::Tile;
use std::fmt::Write;
use std::path::Path;

/// In-memory SVG document implementing [`TileRenderer`]
///
/// The view box matches the canvas, so tiles reaching past the edges are clipped
/// by the viewer just like in raster output.
pub struct SvgDocument {
    width: u32,
    height: u32,
    body: String,
}

impl SvgDocument {
    /// Empty document for a `width` x `height` canvas
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            body: String::new(),
        }
    }

    /// Complete SVG markup
    pub fn finish(self) -> String {
        let mut svg = String::with_capacity(self.body.len() + 256);
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height,
        );
        svg.push_str(&self.body);
        svg.push_str("</svg>\n");
        svg
    }
}

impl TileRenderer for SvgDocument {
    fn clear(&mut self, color: Color) {
        self.body.clear();
        let _ = writeln!(
            self.body,
            r#"<rect width="100%" height="100%" fill="{}"/>"#,
            hex(color)
        );
    }

    fn draw_polygon(&mut self, polygon: &TilePolygon, fill: Color, outline: Color) {
        self.body.push_str(r#"<path d=""#);
        for (index, point) in polygon.vertices.iter().enumerate() {
            let command = if index == 0 { 'M' } else { 'L' };
            let _ = write!(self.body, "{command}{:.3} {:.3} ", point.x, point.y);
        }
        let _ = writeln!(
            self.body,
            r#"Z" fill="{}" stroke="{}" stroke-width="{OUTLINE_WIDTH}" data-kind="{}"/>"#,
            hex(fill),
            hex(outline),
            polygon.kind,
        );
    }
}

/// Render `tiles` as SVG markup
pub fn render_svg(tiles: &[Tile], width: u32, height: u32, palette: &Palette) -> String {
    let mut document = SvgDocument::new(width, height);
    render_tiling(&mut document, tiles, palette);
    document.finish()
}

/// Write `tiles` as an SVG file
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The file cannot be written
pub fn export_svg(
    tiles: &[Tile],
    width: u32,
    height: u32,
    palette: &Palette,
    output_path: &Path,
) -> Result<()> {
    ensure_parent_dir(output_path)?;
    std::fs::write(output_path, render_svg(tiles, width, height, palette))
        .map_err(|e| file_system(output_path, "write file", e))
}
