//! Presentation-boundary number formatting.
//!
//! Values keep full precision everywhere else; rounding happens only here.

/// Placeholder for values that cannot be computed (e.g. an average over nothing)
pub const MISSING: &str = "—";

/// Fixed-point money value with exactly two decimals
///
/// ```ignore
/// assert_eq!(format_money(3.14159), "3.14");
/// ```
pub fn format_money(value: f64) -> String {
    if !value.is_finite() {
        return MISSING.to_string();
    }
    let formatted = format!("{:.2}", value);
    // -0.001 rounds to "-0.00"
    if formatted == "-0.00" {
        "0.00".to_string()
    } else {
        formatted
    }
}

pub fn format_optional_money(value: Option<f64>) -> String {
    value.map(format_money).unwrap_or_else(|| MISSING.to_string())
}

/// Stock quantities: integers without decimals, fractions with two
pub fn format_quantity(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format_money(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.5), "1234.50");
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(2.005 + 1e-9), "2.01");
        assert_eq!(format_money(-12.346), "-12.35");
        assert_eq!(format_money(-0.001), "0.00");
    }

    #[test]
    fn test_non_finite_is_missing() {
        assert_eq!(format_money(f64::NAN), MISSING);
        assert_eq!(format_money(f64::INFINITY), MISSING);
        assert_eq!(format_optional_money(None), MISSING);
        assert_eq!(format_optional_money(Some(4.0)), "4.00");
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(12.0), "12");
        assert_eq!(format_quantity(2.5), "2.50");
        assert_eq!(format_quantity(-3.0), "-3");
    }
}
