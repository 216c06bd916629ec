//! Generation-by-generation capture and GIF export
//!
//! Shows the tiling growing one deflation at a time, starting from the sun.

use crate::algorithm::deflation::Deflator;
use crate::io::configuration::{FINAL_FRAME_HOLD_FACTOR, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{Result, TilingError, ensure_parent_dir, file_system};
use crate::io::image::render_image;
use crate::io::palette::Palette;
use crate::spatial::tile::Tile;
use image::{Delay, Frame, RgbaImage};
use std::path::Path;

/// Captures one rendered frame per generation
pub struct GenerationCapture {
    width: u32,
    height: u32,
    palette: Palette,
    frames: Vec<RgbaImage>,
}

impl GenerationCapture {
    /// Empty capture for a `width` x `height` canvas
    pub const fn new(width: u32, height: u32, palette: Palette) -> Self {
        Self {
            width,
            height,
            palette,
            frames: Vec::new(),
        }
    }

    /// Render `tiles` as the next frame
    pub fn capture(&mut self, tiles: &[Tile]) {
        self.frames
            .push(render_image(tiles, self.width, self.height, &self.palette));
    }

    /// Capture `seed` and each of its first `generations` deflations
    ///
    /// Calls `on_generation` with the index of every captured generation.
    pub fn capture_generations<F>(
        &mut self,
        deflator: &Deflator,
        seed: Vec<Tile>,
        generations: u32,
        mut on_generation: F,
    ) where
        F: FnMut(usize),
    {
        for generation in deflator.generations(seed).take(generations as usize + 1) {
            self.capture(&generation.tiles);
            on_generation(generation.index);
        }
    }

    /// Captured frames in order
    pub fn frames(&self) -> &[RgbaImage] {
        &self.frames
    }

    /// Returns the number of captured frames
    pub const fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Export the captured frames as an animated GIF
    ///
    /// Delays below what viewers support are raised to that minimum. The last
    /// frame is held longer so the finished tiling stays visible.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.frames.is_empty() {
            return Err(TilingError::EmptyCapture {
                reason: "no generations captured for animation".to_string(),
            });
        }

        let delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let last = self.frames.len() - 1;
        let frames = self.frames.iter().enumerate().map(|(index, image)| {
            let hold = if index == last {
                FINAL_FRAME_HOLD_FACTOR
            } else {
                1
            };
            Frame::from_parts(
                image.clone(),
                0,
                0,
                Delay::from_numer_denom_ms(delay_ms.saturating_mul(hold), 1),
            )
        });

        ensure_parent_dir(output_path)?;
        let file = std::fs::File::create(output_path)
            .map_err(|e| file_system(output_path, "create file", e))?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .set_repeat(image::codecs::gif::Repeat::Infinite)
            .and_then(|()| encoder.encode_frames(frames))
            .map_err(|e| TilingError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })
    }
}
