//! Currency display for the calculator
//!
//! Amounts are shown the way the website always rendered them: thousands
//! grouped with commas, at most three fractional digits, and a `KES` label.

/// Currency label shown before every amount
pub const CURRENCY_LABEL: &str = "KES";

/// Maximum fractional digits kept when grouping
const MAX_FRACTION_DIGITS: usize = 3;

/// Group thousands with commas: 300000 -> "300,000", 1234.5 -> "1,234.5"
pub fn group_thousands(amount: f64) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }
    if amount.is_infinite() {
        return if amount > 0.0 { "∞".to_string() } else { "-∞".to_string() };
    }

    let text = format!("{:.*}", MAX_FRACTION_DIGITS, amount.abs());
    let (int_digits, frac_digits) = match text.split_once('.') {
        Some((i, f)) => (i, f.trim_end_matches('0')),
        None => (text.as_str(), ""),
    };

    let mut out = String::with_capacity(text.len() + int_digits.len() / 3 + 1);
    if amount < 0.0 {
        out.push('-');
    }
    for (i, ch) in int_digits.chars().enumerate() {
        if i > 0 && (int_digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !frac_digits.is_empty() {
        out.push('.');
        out.push_str(frac_digits);
    }
    out
}

/// "KES 300,000"
pub fn format_kes(amount: f64) -> String {
    format!("{} {}", CURRENCY_LABEL, group_thousands(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(1_000.0), "1,000");
        assert_eq!(group_thousands(300_000.0), "300,000");
        assert_eq!(group_thousands(26_993.0), "26,993");
        assert_eq!(group_thousands(1_234_567_890.0), "1,234,567,890");
    }

    #[test]
    fn test_fraction_digits() {
        assert_eq!(group_thousands(1_234.5), "1,234.5");
        assert_eq!(group_thousands(37_036.25), "37,036.25");
        assert_eq!(group_thousands(0.1234), "0.123");
        assert_eq!(group_thousands(2.9999), "3");
    }

    #[test]
    fn test_negative_and_non_finite() {
        assert_eq!(group_thousands(-300_000.0), "-300,000");
        assert_eq!(group_thousands(-0.0), "0");
        assert_eq!(group_thousands(f64::NAN), "NaN");
        assert_eq!(group_thousands(f64::INFINITY), "∞");
        assert_eq!(group_thousands(f64::NEG_INFINITY), "-∞");
    }

    #[test]
    fn test_format_kes() {
        assert_eq!(format_kes(300_000.0), "KES 300,000");
        assert_eq!(format_kes(8_258.0), "KES 8,258");
    }
}
