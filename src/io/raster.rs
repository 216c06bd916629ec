//! Scanline rasterization of tile polygons into RGBA images
//!
//! Fills use the even-odd rule sampled at pixel centers, which handles the concave
//! dart outline. Outlines are stamped along each edge at half-pixel steps.

use crate::io::configuration::OUTLINE_WIDTH;
use crate::io::palette::Color;
use crate::io::render::TileRenderer;
use crate::spatial::bounds::BoundingBox;
use crate::spatial::point::Point;
use crate::spatial::polygon::TilePolygon;
use image::{Rgba, RgbaImage};

/// Pixel canvas implementing [`TileRenderer`]
pub struct RasterCanvas {
    image: RgbaImage,
    outline_width: f64,
}

impl RasterCanvas {
    /// Transparent canvas of the given size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
            outline_width: OUTLINE_WIDTH,
        }
    }

    /// Override the outline width in pixels
    #[must_use]
    pub const fn with_outline_width(mut self, width: f64) -> Self {
        self.outline_width = width;
        self
    }

    /// Borrow the rendered image
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Take the rendered image
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    fn bounds(&self) -> BoundingBox {
        BoundingBox::from_points([
            Point::new(0.0, 0.0),
            Point::new(f64::from(self.image.width()), f64::from(self.image.height())),
        ])
    }

    fn put(&mut self, x: i64, y: i64, color: Color) {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };
        if let Some(pixel) = self.image.get_pixel_mut_checked(x, y) {
            *pixel = Rgba(color);
        }
    }

    /// Fill the closed polygon through `vertices` using the even-odd rule
    pub fn fill(&mut self, vertices: &[Point], color: Color) {
        let bounds = BoundingBox::from_points(vertices.iter().copied());
        if bounds.is_empty() {
            return;
        }

        let height = i64::from(self.image.height());
        let width = i64::from(self.image.width());
        let first_row = (bounds.min.y.floor() as i64).max(0);
        let last_row = (bounds.max.y.ceil() as i64).min(height);

        let mut crossings = Vec::with_capacity(vertices.len());
        for row in first_row..last_row {
            let yc = row as f64 + 0.5;
            crossings.clear();

            let edges = vertices
                .iter()
                .zip(vertices.iter().cycle().skip(1))
                .take(vertices.len());
            for (a, b) in edges {
                if (a.y <= yc && yc < b.y) || (b.y <= yc && yc < a.y) {
                    crossings.push(a.x + (yc - a.y) * (b.x - a.x) / (b.y - a.y));
                }
            }
            crossings.sort_by(f64::total_cmp);

            for span in crossings.chunks_exact(2) {
                let &[start, end] = span else {
                    continue;
                };
                let first_col = ((start - 0.5).ceil() as i64).max(0);
                let last_col = ((end - 0.5).ceil() as i64).min(width);
                for col in first_col..last_col {
                    self.put(col, row, color);
                }
            }
        }
    }

    /// Stroke the segment from `a` to `b`
    pub fn line(&mut self, a: Point, b: Point, color: Color) {
        let length = a.distance(b);
        let steps = (length * 2.0).ceil().max(1.0) as i64;
        let radius = ((self.outline_width - 1.0) / 2.0).max(0.0);
        let reach = radius.ceil() as i64;

        for step in 0..=steps {
            let t = step as f64 / steps as f64;
            let x = (b.x - a.x).mul_add(t, a.x);
            let y = (b.y - a.y).mul_add(t, a.y);
            let (px, py) = (x.floor() as i64, y.floor() as i64);

            for dy in -reach..=reach {
                for dx in -reach..=reach {
                    if ((dx * dx + dy * dy) as f64).sqrt() <= radius + f64::EPSILON {
                        self.put(px + dx, py + dy, color);
                    }
                }
            }
        }
    }
}

impl TileRenderer for RasterCanvas {
    fn clear(&mut self, color: Color) {
        for pixel in self.image.pixels_mut() {
            *pixel = Rgba(color);
        }
    }

    fn draw_polygon(&mut self, polygon: &TilePolygon, fill: Color, outline: Color) {
        if !polygon.bounds().intersects(&self.bounds()) {
            return;
        }

        self.fill(&polygon.vertices, fill);
        if self.outline_width > 0.0 {
            for (a, b) in polygon.edges() {
                self.line(a, b, outline);
            }
        }
    }
}
