//! Mathematical utilities for the deflation rule

/// Golden ratio and base angle shared by every substitution and drawing step
pub mod constants;
/// Polar displacement helpers in screen coordinates
pub mod trig;
