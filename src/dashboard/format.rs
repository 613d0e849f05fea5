//! Display formatting
//!
//! Numbers follow the en-US `toLocaleString()` conventions the dashboard was
//! designed around: comma thousands separators, at most three fraction digits,
//! trailing zeros trimmed.

/// Maximum fraction digits kept by [`format_grouped`]
const MAX_FRACTION_DIGITS: i32 = 3;

/// Format a number with thousands grouping, e.g. `71595.3` → `71,595.3`
pub fn format_grouped(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let scale = 10f64.powi(MAX_FRACTION_DIGITS);
    let rounded = (value * scale).round() / scale;
    let negative = rounded < 0.0;

    let text = format!("{:.*}", MAX_FRACTION_DIGITS as usize, rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(text.len() + 4);
    if negative {
        out.push('-');
    }
    out.push_str(&group_digits(int_part));
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Insert a comma every three digits from the right
fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut result = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Raw number with a leading `+` when positive, e.g. `+45.2`, `-123.8`, `0`
pub fn format_signed(value: f64) -> String {
    if value > 0.0 {
        format!("+{}", value)
    } else if value == 0.0 {
        "0".to_string()
    } else {
        format!("{}", value)
    }
}

/// Grouped value followed by an optional unit, e.g. `635.2 B USD`
pub fn format_with_unit(value: f64, unit: Option<&str>) -> String {
    match unit {
        Some(u) if !u.is_empty() => format!("{} {}", format_grouped(value), u),
        _ => format_grouped(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping_matches_locale_output() {
        assert_eq!(format_grouped(21731.4), "21,731.4");
        assert_eq!(format_grouped(71595.3), "71,595.3");
        assert_eq!(format_grouped(62840.0), "62,840");
        assert_eq!(format_grouped(5418.0), "5,418");
        assert_eq!(format_grouped(635.2), "635.2");
        assert_eq!(format_grouped(6.50), "6.5");
        assert_eq!(format_grouped(-1.3), "-1.3");
        assert_eq!(format_grouped(0.0), "0");
    }

    #[test]
    fn test_grouping_rounds_to_three_digits() {
        assert_eq!(format_grouped(1234567.891234), "1,234,567.891");
        assert_eq!(format_grouped(0.0005), "0.001");
        assert_eq!(format_grouped(-0.0001), "0");
        assert_eq!(format_grouped(999.9999), "1,000");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_grouped(f64::NAN), "NaN");
        assert_eq!(format_grouped(f64::INFINITY), "∞");
        assert_eq!(format_grouped(f64::NEG_INFINITY), "-∞");
    }

    #[test]
    fn test_signed() {
        assert_eq!(format_signed(45.2), "+45.2");
        assert_eq!(format_signed(-185.0), "-185");
        assert_eq!(format_signed(0.0), "0");
        assert_eq!(format_signed(-0.0), "0");
    }

    #[test]
    fn test_with_unit() {
        assert_eq!(format_with_unit(635.2, Some("B USD")), "635.2 B USD");
        assert_eq!(format_with_unit(21731.4, None), "21,731.4");
        assert_eq!(format_with_unit(6.5, Some("")), "6.5");
    }
}
