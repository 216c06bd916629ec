//! Drawing surface abstraction
//!
//! The deflation core hands over a flat tile list; a renderer only sees tile
//! polygons and colors, never deflation state.

use crate::io::palette::{Color, Palette};
use crate::spatial::polygon::{TilePolygon, tile_polygon};
use crate::spatial::tile::Tile;

/// A surface that can draw filled and outlined tile polygons
pub trait TileRenderer {
    /// Clear the whole surface to `color`
    fn clear(&mut self, color: Color);

    /// Fill `polygon` with `fill`, then stroke its closed outline with `outline`
    fn draw_polygon(&mut self, polygon: &TilePolygon, fill: Color, outline: Color);
}

/// Draw every tile in order over a cleared background
pub fn render_tiling<R>(renderer: &mut R, tiles: &[Tile], palette: &Palette)
where
    R: TileRenderer + ?Sized,
{
    renderer.clear(palette.background);
    for tile in tiles {
        renderer.draw_polygon(&tile_polygon(tile), palette.fill(tile.kind), palette.outline);
    }
}
