/// Round a monetary or percentage value to 2 decimal places.
///
/// Rounds half-up on the scaled integer (standard "round to nearest cent"
/// semantics): 22.225 -> 22.23, 21.2775529 -> 21.28.
#[inline]
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Convert a fractional factor deviation to a percentage.
/// `to_pct(1.04 - 1.0)` -> 4.0
#[inline]
pub fn to_pct(fraction: f64) -> f64 {
    fraction * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_cents_half_up() {
        assert_eq!(round_to_cents(22.225), 22.23);
        assert_eq!(round_to_cents(21.2775529), 21.28);
        assert_eq!(round_to_cents(25.650000000000002), 25.65);
        assert_eq!(round_to_cents(0.0), 0.0);
    }

    #[test]
    fn test_round_to_cents_idempotent() {
        // Re-rounding an already rounded value must be a no-op
        let rounded = round_to_cents(17.505);
        assert_eq!(round_to_cents(rounded), rounded);
    }

    #[test]
    fn test_to_pct() {
        assert!((to_pct(0.04) - 4.0).abs() < 1e-12);
        assert!((to_pct(0.1) - 10.0).abs() < 1e-12);
    }
}
