//! Tests for the golden ratio and base angle constants

#[cfg(test)]
mod tests {
    use kitedart::math::constants::{G, T};
    use std::f64::consts::PI;

    // Tests the literal matches the closed form bit for bit
    // Verified by truncating the literal by one digit
    #[test]
    fn test_golden_ratio_closed_form() {
        assert_eq!(G.to_bits(), ((1.0 + 5.0_f64.sqrt()) / 2.0).to_bits());
    }

    // Tests the defining identity G² = G + 1
    // Verified by replacing G with 1.6
    #[test]
    fn test_golden_ratio_identity() {
        assert!((G * G - (G + 1.0)).abs() < 1e-12);
    }

    // Tests the base angle is 36 degrees
    // Verified by using PI / 4
    #[test]
    fn test_base_angle_is_36_degrees() {
        assert_eq!(T.to_bits(), (PI / 5.0).to_bits());
        assert!((T.to_degrees() - 36.0).abs() < 1e-12);
    }

    // Tests ten base angles make a full turn
    // Verified by changing the divisor
    #[test]
    fn test_base_angle_divides_circle() {
        assert!((10.0 * T - 2.0 * PI).abs() < 1e-12);
    }
}
