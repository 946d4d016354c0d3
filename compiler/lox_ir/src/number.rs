//! Display form of Lox numbers.

/// Render a number the way `print` shows it.
///
/// Integral values drop the fractional part (`3.0` prints `3`), everything
/// else uses the shortest decimal form that round-trips. Non-finite values
/// print as `NaN`, `Infinity`, and `-Infinity`.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // `Display` for f64 never emits a trailing ".0" or an exponent.
    format!("{n}")
}

#[cfg(test)]
mod tests {
    use super::format_number;

    #[test]
    fn test_integral_values_drop_fraction() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(-12.0), "-12");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn test_fractional_values_keep_decimals() {
        assert_eq!(format_number(3.5), "3.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_non_finite_values() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(1.0 / 0.0), "Infinity");
        assert_eq!(format_number(-1.0 / 0.0), "-Infinity");
    }
}
