//! Polar displacement in screen space (y grows downwards)
//!
//! Every anchor and vertex in the tiling is produced by the same two expressions,
//! so tiles that coincide geometrically also coincide bit for bit.

use crate::spatial::point::Point;

/// Offset `origin` by `ratio * size` along `theta`, flipping y for screen space
///
/// Evaluates `x + cos(theta) * ratio * size` and `y - sin(theta) * ratio * size`
/// left to right.
// Fused multiply-add rounds differently and would split coincident tiles
#[allow(clippy::suboptimal_flops)]
pub fn polar_offset(origin: Point, theta: f64, ratio: f64, size: f64) -> Point {
    Point {
        x: origin.x + theta.cos() * ratio * size,
        y: origin.y - theta.sin() * ratio * size,
    }
}
