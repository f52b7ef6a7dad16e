//! Price Formatting
//!
//! Number parsing with the browser's `parseFloat` prefix rules and
//! two-decimal normalization for the price field.

/// Parse the longest numeric prefix of `input`, like `parseFloat`.
///
/// Leading whitespace is skipped and trailing garbage ignored
/// ("12abc" is 12). Returns `None` when no number can be read.
pub fn parse_float(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        let value = f64::INFINITY;
        return Some(if s.starts_with('-') { -value } else { value });
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

/// Normalized price text for a blurred price field.
///
/// `None` means leave the field alone: it is empty, or it holds nothing
/// that reads as a finite number.
pub fn normalize_price(input: &str) -> Option<String> {
    if input.is_empty() {
        return None;
    }
    parse_float(input)
        .filter(|value| value.is_finite())
        .map(|value| to_fixed(value, 2))
}

/// Enough fractional digits to print any finite `f64` exactly
const EXACT_FRACTION_DIGITS: usize = 1074;

/// `Number.prototype.toFixed`: round the exact binary value to `digits`
/// places, with ties going to the larger magnitude. Negative zero prints
/// without a sign.
pub fn to_fixed(value: f64, digits: usize) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (int_part, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(digits))
        .collect();

    if fraction.as_bytes().get(digits).is_some_and(|d| *d >= b'5') {
        let mut i = kept.len();
        loop {
            if i == 0 {
                kept.insert(0, b'1');
                break;
            }
            i -= 1;
            if kept[i] == b'9' {
                kept[i] = b'0';
            } else {
                kept[i] += 1;
                break;
            }
        }
    }

    let split = kept.len() - digits;
    let mut out = String::with_capacity(kept.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(kept[..split].iter().map(|&b| b as char));
    if digits > 0 {
        out.push('.');
        out.extend(kept[split..].iter().map(|&b| b as char));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_examples() {
        assert_eq!(normalize_price("5").as_deref(), Some("5.00"));
        assert_eq!(normalize_price("3.999").as_deref(), Some("4.00"));
        assert_eq!(normalize_price("12.5").as_deref(), Some("12.50"));
        assert_eq!(normalize_price("0.1").as_deref(), Some("0.10"));
        assert_eq!(normalize_price("-2").as_deref(), Some("-2.00"));
    }

    #[test]
    fn test_exact_ties_round_up_like_to_fixed() {
        assert_eq!(normalize_price("1.125").as_deref(), Some("1.13"));
        assert_eq!(normalize_price("0.125").as_deref(), Some("0.13"));
        assert_eq!(normalize_price("0.375").as_deref(), Some("0.38"));
        assert_eq!(normalize_price("-1.125").as_deref(), Some("-1.13"));
    }

    #[test]
    fn test_binary_near_ties_follow_exact_value() {
        // 2.675 and 1.005 are stored just below the tie
        assert_eq!(normalize_price("2.675").as_deref(), Some("2.67"));
        assert_eq!(normalize_price("1.005").as_deref(), Some("1.00"));
    }

    #[test]
    fn test_negative_zero_has_no_sign() {
        assert_eq!(normalize_price("-0").as_deref(), Some("0.00"));
        assert_eq!(normalize_price("-0.00").as_deref(), Some("0.00"));
        assert_eq!(normalize_price("-0.001").as_deref(), Some("-0.00"));
    }

    #[test]
    fn test_carry_into_integer_part() {
        assert_eq!(normalize_price("9.999").as_deref(), Some("10.00"));
        assert_eq!(normalize_price("99.996").as_deref(), Some("100.00"));
        assert_eq!(to_fixed(0.5, 0), "1");
        assert_eq!(to_fixed(1234.5, 1), "1234.5");
    }

    #[test]
    fn test_empty_is_untouched() {
        assert_eq!(normalize_price(""), None);
    }

    #[test]
    fn test_non_numeric_is_untouched() {
        assert_eq!(normalize_price("abc"), None);
        assert_eq!(normalize_price("   "), None);
        assert_eq!(normalize_price("."), None);
        assert_eq!(normalize_price("-"), None);
        assert_eq!(normalize_price("Infinity"), None);
    }

    #[test]
    fn test_parse_float_prefix_rules() {
        assert_eq!(parse_float("12abc"), Some(12.0));
        assert_eq!(parse_float("  7.25 dollars"), Some(7.25));
        assert_eq!(parse_float(".5"), Some(0.5));
        assert_eq!(parse_float("5."), Some(5.0));
        assert_eq!(parse_float("1e3"), Some(1000.0));
        assert_eq!(parse_float("1e"), Some(1.0));
        assert_eq!(parse_float("2E-2x"), Some(0.02));
        assert_eq!(parse_float("+4"), Some(4.0));
        assert_eq!(parse_float("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_float("$5"), None);
        assert_eq!(parse_float(""), None);
    }

    #[test]
    fn test_prefix_number_is_normalized() {
        assert_eq!(normalize_price("12abc").as_deref(), Some("12.00"));
    }
}
