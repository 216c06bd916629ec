//! Geometry constants of the kite and dart tiling

use std::f64::consts::PI;

/// Golden ratio, the scale factor between consecutive generations
pub const G: f64 = 1.618_033_988_749_895;

/// Base angle of the tiling, 36 degrees in radians
pub const T: f64 = PI / 5.0;
