//! Prefix scanners for user-entered numbers.
//!
//! Both scanners skip leading whitespace, accept an optional sign, and then
//! consume the longest run that still forms a number. Trailing text (units,
//! suffixes, thousands separators) ends the scan without being an error, so
//! `"12.5ms"` reads as `12.5` and `"1,000"` reads as `1`.

/// Scan the longest decimal float at the start of `s`.
///
/// Accepts an optional sign, integer digits and an optional fraction.
/// Exponents are not read: `"1e3"` scans as `1`.
///
/// Returns `None` when no digit is found.
///
/// # Examples
///
/// ```
/// use svcodec_utils::float_prefix;
///
/// assert_eq!(float_prefix("-3.25dB"), Some(-3.25));
/// assert_eq!(float_prefix(".5"), Some(0.5));
/// assert_eq!(float_prefix("1,234"), Some(1.0));
/// assert_eq!(float_prefix("dB"), None);
/// ```
pub fn float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut i = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            i += 1;
            true
        }
        Some(b'+') => {
            i += 1;
            false
        }
        _ => false,
    };

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = &s[int_start..i];

    let mut frac_digits = "";
    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        frac_digits = &s[frac_start..j];
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    // Rebuild a canonical literal so "5." and ".5" parse the same everywhere.
    let mut literal = String::with_capacity(int_digits.len() + frac_digits.len() + 4);
    if negative {
        literal.push('-');
    }
    literal.push_str(if int_digits.is_empty() { "0" } else { int_digits });
    literal.push('.');
    literal.push_str(if frac_digits.is_empty() { "0" } else { frac_digits });

    literal.parse().ok()
}

/// Scan the longest integer at the start of `s`.
///
/// Decimal by default; a `0x`/`0X` prefix switches to hexadecimal. Values
/// beyond the `i64` range saturate.
///
/// Returns `None` when no digit is found.
///
/// # Examples
///
/// ```
/// use svcodec_utils::int_prefix;
///
/// assert_eq!(int_prefix("42secs"), Some(42));
/// assert_eq!(int_prefix(" -7"), Some(-7));
/// assert_eq!(int_prefix("0xff"), Some(255));
/// assert_eq!(int_prefix("12.9"), Some(12));
/// assert_eq!(int_prefix("KB"), None);
/// ```
pub fn int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = match s.get(..2) {
        Some("0x") | Some("0X") => (16, &s[2..]),
        _ => (10, s),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for c in digits.chars() {
        let Some(d) = c.to_digit(radix) else {
            break;
        };
        seen = true;
        value = value.saturating_mul(radix as i64).saturating_add(d as i64);
    }

    if !seen {
        return None;
    }
    Some(if negative { value.saturating_neg() } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_plain() {
        assert_eq!(float_prefix("0"), Some(0.0));
        assert_eq!(float_prefix("440"), Some(440.0));
        assert_eq!(float_prefix("-12.75"), Some(-12.75));
        assert_eq!(float_prefix("+3"), Some(3.0));
    }

    #[test]
    fn test_float_stops_at_garbage() {
        assert_eq!(float_prefix("1.5kHz"), Some(1.5));
        assert_eq!(float_prefix("10-20"), Some(10.0));
        assert_eq!(float_prefix("1.2.3"), Some(1.2));
        assert_eq!(float_prefix("7,5"), Some(7.0));
    }

    #[test]
    fn test_float_partial_forms() {
        assert_eq!(float_prefix("5."), Some(5.0));
        assert_eq!(float_prefix("-.25"), Some(-0.25));
    }

    #[test]
    fn test_float_ignores_exponent() {
        assert_eq!(float_prefix("1e3"), Some(1.0));
        assert_eq!(float_prefix("2.5E-1"), Some(2.5));
    }

    #[test]
    fn test_float_rejects_empty() {
        assert_eq!(float_prefix(""), None);
        assert_eq!(float_prefix("-"), None);
        assert_eq!(float_prefix("."), None);
        assert_eq!(float_prefix("-."), None);
        assert_eq!(float_prefix(",,"), None);
    }

    #[test]
    fn test_float_words_are_not_numbers() {
        assert_eq!(float_prefix("Infinity"), None);
        assert_eq!(float_prefix("-inf"), None);
    }

    #[test]
    fn test_int_decimal() {
        assert_eq!(int_prefix("0"), Some(0));
        assert_eq!(int_prefix("255"), Some(255));
        assert_eq!(int_prefix("-128"), Some(-128));
        assert_eq!(int_prefix("  17 apples"), Some(17));
    }

    #[test]
    fn test_int_hex() {
        assert_eq!(int_prefix("0x1F"), Some(31));
        assert_eq!(int_prefix("0Xdeadbeef"), Some(0xdead_beef));
        assert_eq!(int_prefix("-0x10"), Some(-16));
        assert_eq!(int_prefix("0x"), None);
    }

    #[test]
    fn test_int_rejects_non_numeric() {
        assert_eq!(int_prefix(""), None);
        assert_eq!(int_prefix("-"), None);
        assert_eq!(int_prefix("min"), None);
    }

    #[test]
    fn test_int_saturates() {
        assert_eq!(int_prefix("99999999999999999999999"), Some(i64::MAX));
        assert_eq!(int_prefix("-99999999999999999999999"), Some(-i64::MAX));
    }
}
