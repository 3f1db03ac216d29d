/// Base per-day allowance used when no rule covers the trip.
const FALLBACK_PER_DAY: f64 = 100.0;
const FALLBACK_MILES_COEFF: f64 = 0.50;
const FALLBACK_RECEIPTS_COEFF: f64 = 0.80;

/// Formats an amount with exactly two fraction digits.
///
/// The digits come from the exact binary value of `value`, so `2.675` prints as
/// `2.67`. Values sitting exactly halfway between two cents round away from zero.
pub fn format_amount(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0.00".to_string();
    }

    if is_exact_half_cent(value) {
        let rounded = (value.abs() * 100.0).ceil() / 100.0;
        return format!("{:.2}", rounded.copysign(value));
    }

    format!("{:.2}", value)
}

// Exact half-cent ties only exist for multiples of 1/8 with an odd numerator, where
// both `value * 8` and `value * 100` are computed without rounding.
fn is_exact_half_cent(value: f64) -> bool {
    (value * 8.0).fract() == 0.0 && (value * 100.0).abs().fract() == 0.5
}

/// Whether the receipts total ends in exactly 49 cents once rounded to two digits.
pub fn has_forty_nine_penalty(receipts: f64) -> bool {
    format_amount(receipts).ends_with(".49")
}

/// Linear formula applied to unmapped trip durations and to uncovered inputs.
pub fn fallback_amount(days: i64, miles: f64, receipts: f64) -> f64 {
    FALLBACK_PER_DAY * days as f64
        + FALLBACK_MILES_COEFF * miles
        + FALLBACK_RECEIPTS_COEFF * receipts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_two_fraction_digits() {
        assert_eq!(format_amount(370.0), "370.00");
        assert_eq!(format_amount(446.94), "446.94");
        assert_eq!(format_amount(1.5), "1.50");
        assert_eq!(format_amount(-10.0), "-10.00");
    }

    #[test]
    fn rounds_from_the_binary_value() {
        assert_eq!(format_amount(2.675), "2.67");
        assert_eq!(format_amount(1.005), "1.00");
        assert_eq!(format_amount(299.999), "300.00");
    }

    #[test]
    fn exact_ties_round_away_from_zero() {
        assert_eq!(format_amount(0.125), "0.13");
        assert_eq!(format_amount(0.375), "0.38");
        assert_eq!(format_amount(10.625), "10.63");
        assert_eq!(format_amount(-0.125), "-0.13");
    }

    #[test]
    fn negative_zero_prints_unsigned() {
        assert_eq!(format_amount(-0.0), "0.00");
    }

    #[test]
    fn non_finite_values_print_words() {
        assert_eq!(format_amount(f64::NAN), "NaN");
        assert_eq!(format_amount(f64::INFINITY), "Infinity");
        assert_eq!(format_amount(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn penalty_flag_inspects_rounded_cents() {
        assert!(has_forty_nine_penalty(396.49));
        assert!(!has_forty_nine_penalty(396.50));
        assert!(has_forty_nine_penalty(12.4899));
        assert!(!has_forty_nine_penalty(12.4849));
        assert!(has_forty_nine_penalty(0.49));
    }

    #[test]
    fn fallback_is_linear_in_all_inputs() {
        assert_eq!(fallback_amount(15, 100.0, 50.0), 1590.0);
        assert_eq!(fallback_amount(0, 100.0, 50.0), 90.0);
        assert_eq!(fallback_amount(-1, 100.0, 50.0), -10.0);
    }
}
