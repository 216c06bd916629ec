//! Fill and outline colors

use crate::spatial::tile::TileKind;
use clap::ValueEnum;

/// RGBA color
pub type Color = [u8; 4];

/// Named color sets selectable from the command line
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum PaletteName {
    /// Orange kites and yellow darts with dark gray outlines
    #[default]
    Classic,
    /// Google brand blue kites and yellow darts
    Google,
}

/// Colors used to draw a tiling
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Kite fill
    pub kite: Color,
    /// Dart fill
    pub dart: Color,
    /// Outline stroked around every tile
    pub outline: Color,
    /// Canvas background
    pub background: Color,
}

impl Palette {
    /// Orange, yellow, dark gray on white
    pub const CLASSIC: Self = Self {
        kite: [255, 200, 0, 255],
        dart: [255, 255, 0, 255],
        outline: [64, 64, 64, 255],
        background: [255, 255, 255, 255],
    };

    /// Google 600 blue and yellow with a dark outline
    pub const GOOGLE: Self = Self {
        kite: [26, 115, 232, 255],
        dart: [249, 171, 0, 255],
        outline: [32, 33, 36, 255],
        background: [255, 255, 255, 255],
    };

    /// Palette for a command-line name
    pub const fn named(name: PaletteName) -> Self {
        match name {
            PaletteName::Classic => Self::CLASSIC,
            PaletteName::Google => Self::GOOGLE,
        }
    }

    /// Fill color for a tile kind
    pub const fn fill(&self, kind: TileKind) -> Color {
        match kind {
            TileKind::Kite => self.kite,
            TileKind::Dart => self.dart,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::CLASSIC
    }
}

/// `#rrggbb` form of a color, alpha dropped
pub fn hex(color: Color) -> String {
    let [r, g, b, _] = color;
    format!("#{r:02x}{g:02x}{b:02x}")
}
