/// Rounds to `decimals` places using the exact decimal expansion of the
/// binary value, ties to even. `(x * 10^n).round() / 10^n` drifts from this
/// on values like 2.675.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", decimals as usize, value)
        .parse()
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_basic() {
        assert_eq!(round_to(7.9019, 2), 7.9);
        assert_eq!(round_to(79.019, 2), 79.02);
        assert_eq!(round_to(790.190_000_000_1, 4), 790.19);
        assert_eq!(round_to(24.900_000_000_000_002, 1), 24.9);
    }

    #[test]
    fn test_round_uses_binary_value() {
        // 2.675 is stored as 2.67499999...
        assert_eq!(round_to(2.675, 2), 2.67);
        assert_eq!(round_to(1.005, 2), 1.0);
    }

    #[test]
    fn test_round_negative() {
        assert_eq!(round_to(-1.23456, 3), -1.235);
        assert_eq!(round_to(-0.0001, 2), 0.0);
        assert!(round_to(-0.0001, 2).is_sign_negative());
    }

    #[test]
    fn test_round_non_finite_passthrough() {
        assert!(round_to(f64::NAN, 2).is_nan());
        assert_eq!(round_to(f64::INFINITY, 2), f64::INFINITY);
    }
}
