use crate::types::CurrencyCode;

/// Bias added before rounding so amounts stored just below a `.xx5` boundary round up
pub(crate) const ROUNDING_EPSILON: f64 = 1e-14;

/// Largest number of fractional digits rendered
pub const MAX_PRECISION: u32 = 100;

// From 2^52 on every f64 is an integer, so rounding the scaled amount is a no-op
const SCALED_INTEGER_LIMIT: f64 = 4_503_599_627_370_496.0;

/// Round an amount to the smallest denomination of its currency
pub(crate) fn apply_currency_rounding(amount: f64, currency_code: &CurrencyCode) -> f64 {
    match currency_code.rounding_increment() {
        Some(increment) => (amount / increment).round() * increment,
        None => amount,
    }
}

/// Round an amount to `precision` decimal places, half away from zero
///
/// The amount is returned unrounded when scaling it leaves no fractional part to
/// round, which happens for huge precisions or magnitudes.
pub(crate) fn round_to_precision(amount: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    let scaled = (amount + ROUNDING_EPSILON) * factor;

    if !scaled.is_finite() || scaled.abs() >= SCALED_INTEGER_LIMIT {
        return amount;
    }

    let rounded = scaled.round() / factor;
    // No "-0.00"
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Render an amount with exactly `precision` digits after the decimal point
///
/// A negative amount whose rendered digits are all zero loses its sign.
pub(crate) fn render_fixed(amount: f64, precision: u32) -> String {
    let rendered = format!("{:.*}", precision as usize, amount);
    match rendered.strip_prefix('-') {
        Some(unsigned) if unsigned.bytes().all(|b| b == b'0' || b == b'.') => {
            unsigned.to_string()
        }
        _ => rendered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_khr_rounds_to_nearest_hundred() {
        assert_eq!(apply_currency_rounding(1234.0, &CurrencyCode::Khr), 1200.0);
        assert_eq!(apply_currency_rounding(1250.0, &CurrencyCode::Khr), 1300.0);
        assert_eq!(apply_currency_rounding(-1250.0, &CurrencyCode::Khr), -1300.0);
        assert_eq!(apply_currency_rounding(140.0, &CurrencyCode::Khr), 100.0);
        assert_eq!(apply_currency_rounding(49.0, &CurrencyCode::Khr), 0.0);
    }

    #[test]
    fn test_other_currencies_pass_through() {
        assert_eq!(apply_currency_rounding(1234.56, &CurrencyCode::Usd), 1234.56);
        assert_eq!(
            apply_currency_rounding(1234.56, &CurrencyCode::Other("JPY".to_string())),
            1234.56
        );
    }

    #[test]
    fn test_half_rounds_up_despite_binary_representation() {
        // 1.005 is stored as 1.00499999999999989...
        assert_eq!(render_fixed(round_to_precision(1.005, 2), 2), "1.01");
        assert_eq!(render_fixed(round_to_precision(1234.5678, 3), 3), "1234.568");
        assert_eq!(render_fixed(round_to_precision(2.5, 0), 0), "3");
    }

    #[test]
    fn test_tiny_negative_renders_unsigned_zero() {
        assert_eq!(render_fixed(round_to_precision(-0.001, 2), 2), "0.00");
        assert_eq!(render_fixed(round_to_precision(-0.0, 2), 2), "0.00");
    }

    #[test]
    fn test_unrounded_negative_zero_renders_unsigned() {
        assert_eq!(round_to_precision(-1e-60, 40), -1e-60);
        assert_eq!(render_fixed(-1e-60, 40), format!("0.{}", "0".repeat(40)));
        assert_eq!(render_fixed(-0.0, 0), "0");
        assert_eq!(render_fixed(-0.4, 0), "0");
        assert_eq!(render_fixed(-0.6, 0), "-1");
    }

    #[test]
    fn test_render_pads_fraction() {
        assert_eq!(render_fixed(1234.0, 0), "1234");
        assert_eq!(render_fixed(1.5, 3), "1.500");
        assert_eq!(render_fixed(-42.0, 2), "-42.00");
    }

    #[test]
    fn test_huge_scale_is_left_unrounded() {
        assert_eq!(round_to_precision(1.5, MAX_PRECISION), 1.5);
        assert_eq!(round_to_precision(1e300, 2), 1e300);
    }
}
