//! Generation-zero tiles
//!
//! The sun is a ring of kites sharing the canvas center. Angles start a quarter
//! turn plus one base angle in and advance by two base angles while below `3π`.

use crate::math::constants::T;
use crate::spatial::point::Point;
use crate::spatial::tile::{Tile, TileKind};
use std::f64::consts::{FRAC_PI_2, PI};

/// Canvas width divided by this gives the seed tile size
pub const SEED_SIZE_DIVISOR: f64 = 2.5;

/// Angle of the first sun kite
pub const SUN_START_ANGLE: f64 = FRAC_PI_2 + T;

/// Sun angles are generated while strictly below this bound
pub const SUN_ANGLE_LIMIT: f64 = 3.0 * PI;

/// Angle between consecutive sun kites
pub const SUN_ANGLE_STEP: f64 = 2.0 * T;

/// Center shared by every seed tile
pub fn sun_center(width: f64, height: f64) -> Point {
    Point::new(width / 2.0, height / 2.0)
}

/// Size of every seed tile
pub fn seed_size(width: f64) -> f64 {
    width / SEED_SIZE_DIVISOR
}

/// Sun configuration for a canvas of the given size
///
/// Angles are accumulated by repeated addition so the values match the classic
/// construction bit for bit. Dimensions are expected to be finite and positive;
/// callers at the program boundary check this.
pub fn seed_prototiles(width: f64, height: f64) -> Vec<Tile> {
    let center = sun_center(width, height);
    let size = seed_size(width);

    std::iter::successors(Some(SUN_START_ANGLE), |angle| {
        Some(angle + SUN_ANGLE_STEP)
    })
    .take_while(|&angle| angle < SUN_ANGLE_LIMIT)
    .map(|angle| Tile::new(TileKind::Kite, center.x, center.y, angle, size))
    .collect()
}
