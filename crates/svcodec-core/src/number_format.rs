//! Number patterns for rendering engineering values.
//!
//! Patterns use the spreadsheet-style digit placeholders the control panels
//! are configured with:
//!
//! - `0` - a digit that is always shown
//! - `#` - a digit that is shown only when significant
//! - `,` - thousands grouping (integer part only)
//! - `.` - the decimal point
//!
//! | Pattern | 1234.5 | 0.25 | -0.001 |
//! |---|---|---|---|
//! | `"0"` | `1235` | `0` | `0` |
//! | `"0.#"` | `1234.5` | `0.3` | `0` |
//! | `"0.##"` | `1234.5` | `0.25` | `0` |
//! | `"0.000"` | `1234.500` | `0.250` | `-0.001` |
//! | `"#,##0.##"` | `1,234.5` | `0.25` | `0` |
//!
//! Values are rounded to the pattern's maximum fraction digits, halves away
//! from zero. A value that rounds to zero never carries a minus sign.

use std::str::FromStr;

use crate::error::{CodecError, CodecResult};

/// Most fraction digits a pattern may ask for. Larger requests are capped.
pub const MAX_FRACTION_DIGITS: usize = 20;

/// Above this magnitude a double has no fractional part left to round.
const EXACT_INTEGER_LIMIT: f64 = 4_503_599_627_370_496.0;

/// A compiled number pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    min_integer: usize,
    min_fraction: usize,
    max_fraction: usize,
    grouping: bool,
}

impl NumberFormat {
    /// The panel default, `"0.##"`.
    pub const DEFAULT: Self = Self::up_to(2);

    /// Pattern `"0"` followed by `places` optional fraction digits.
    ///
    /// `places` is capped at [`MAX_FRACTION_DIGITS`].
    pub const fn up_to(places: usize) -> Self {
        let places = if places > MAX_FRACTION_DIGITS {
            MAX_FRACTION_DIGITS
        } else {
            places
        };
        Self {
            min_integer: 1,
            min_fraction: 0,
            max_fraction: places,
            grouping: false,
        }
    }

    /// Enable thousands grouping.
    pub const fn with_grouping(mut self) -> Self {
        self.grouping = true;
        self
    }

    /// Compile a pattern string.
    pub fn parse(pattern: &str) -> CodecResult<Self> {
        let invalid = |reason| CodecError::InvalidNumberFormat {
            pattern: pattern.to_string(),
            reason,
        };

        let (integer, fraction) = match pattern.split_once('.') {
            Some((integer, fraction)) => (integer, fraction),
            None => (pattern, ""),
        };

        let mut format = Self {
            min_integer: 0,
            min_fraction: 0,
            max_fraction: 0,
            grouping: false,
        };
        let mut integer_digits = 0;

        for c in integer.chars() {
            match c {
                '0' => {
                    format.min_integer += 1;
                    integer_digits += 1;
                }
                '#' => integer_digits += 1,
                ',' => format.grouping = true,
                _ => return Err(invalid("unexpected character in integer part")),
            }
        }

        for c in fraction.chars() {
            match c {
                '0' => format.min_fraction += 1,
                '#' => {}
                _ => return Err(invalid("unexpected character in fraction part")),
            }
            format.max_fraction += 1;
        }

        if integer_digits == 0 && format.max_fraction == 0 {
            return Err(invalid("pattern has no digit placeholders"));
        }
        if format.max_fraction > MAX_FRACTION_DIGITS {
            return Err(invalid("too many fraction digits"));
        }

        Ok(format)
    }

    /// Render a value.
    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            return if value < 0.0 { "-∞" } else { "∞" }.to_string();
        }

        let rendered = format!("{:.*}", self.max_fraction, self.round(value.abs()));
        let (integer, fraction) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));

        let significant = fraction.trim_end_matches('0').len();
        let fraction = &fraction[..significant.max(self.min_fraction)];

        let mut digits = integer.trim_start_matches('0').to_string();
        if digits.len() < self.min_integer {
            digits.insert_str(0, &"0".repeat(self.min_integer - digits.len()));
        }
        if digits.is_empty() && fraction.is_empty() {
            digits.push('0');
        }
        if self.grouping {
            digits = group_thousands(&digits);
        }

        let is_zero = !integer.bytes().chain(fraction.bytes()).any(|b| b != b'0');

        let mut out = String::with_capacity(digits.len() + fraction.len() + 2);
        if value < 0.0 && !is_zero {
            out.push('-');
        }
        out.push_str(&digits);
        if !fraction.is_empty() {
            out.push('.');
            out.push_str(fraction);
        }
        out
    }

    /// Round a magnitude to the maximum fraction digits, halves up.
    fn round(&self, magnitude: f64) -> f64 {
        let factor = 10_f64.powi(self.max_fraction as i32);
        let scaled = magnitude * factor;
        if scaled < EXACT_INTEGER_LIMIT {
            scaled.round() / factor
        } else {
            magnitude
        }
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for NumberFormat {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(pattern: &str, value: f64) -> String {
        NumberFormat::parse(pattern).unwrap().format(value)
    }

    #[test]
    fn test_default_pattern() {
        assert_eq!(NumberFormat::DEFAULT, NumberFormat::parse("0.##").unwrap());
        assert_eq!(NumberFormat::DEFAULT.format(1.0), "1");
        assert_eq!(NumberFormat::DEFAULT.format(-3.2), "-3.2");
        assert_eq!(NumberFormat::DEFAULT.format(0.256), "0.26");
    }

    #[test]
    fn test_integer_pattern() {
        assert_eq!(fmt("0", 440.4), "440");
        assert_eq!(fmt("0", 99.6), "100");
        assert_eq!(fmt("0", 0.0), "0");
    }

    #[test]
    fn test_optional_fraction_trims() {
        assert_eq!(fmt("0.#", 12.04), "12");
        assert_eq!(fmt("0.#", 12.06), "12.1");
        assert_eq!(fmt("0.###", 12.5), "12.5");
    }

    #[test]
    fn test_fixed_fraction_pads() {
        assert_eq!(fmt("0.000", 1.5), "1.500");
        assert_eq!(fmt("0.0#", 2.0), "2.0");
        assert_eq!(fmt("0.00", 3.0), "3.00");
    }

    #[test]
    fn test_grouping() {
        assert_eq!(fmt("#,##0.##", 1234567.891), "1,234,567.89");
        assert_eq!(fmt("#,##0.##", 999.0), "999");
        assert_eq!(fmt("#,##0.##", -1000.0), "-1,000");
        assert_eq!(fmt("#,##0.##", 0.5), "0.5");
    }

    #[test]
    fn test_min_integer_digits() {
        assert_eq!(fmt("00.#", 5.0), "05");
        assert_eq!(fmt("#.##", 0.5), ".5");
        assert_eq!(fmt("#.##", 0.0), "0");
    }

    #[test]
    fn test_halves_round_away_from_zero() {
        assert_eq!(fmt("0", 0.5), "1");
        assert_eq!(fmt("0", 2.5), "3");
        assert_eq!(fmt("0", -2.5), "-3");
        assert_eq!(fmt("0", 1234.5), "1235");
        assert_eq!(fmt("0.##", 0.125), "0.13");
        assert_eq!(fmt("0.#", 0.25), "0.3");
        assert_eq!(fmt("0.#", -0.25), "-0.3");
    }

    #[test]
    fn test_places_are_capped() {
        assert_eq!(NumberFormat::up_to(70_000), NumberFormat::up_to(MAX_FRACTION_DIGITS));
        assert_eq!(NumberFormat::up_to(usize::MAX).format(1.5), "1.5");
        assert_eq!(NumberFormat::up_to(70_000).format(1e20), "100000000000000000000");
    }

    #[test]
    fn test_no_negative_zero() {
        assert_eq!(fmt("0.##", -0.001), "0");
        assert_eq!(fmt("0", -0.4), "0");
        assert_eq!(fmt("0.##", -0.0), "0");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(NumberFormat::DEFAULT.format(f64::INFINITY), "∞");
        assert_eq!(NumberFormat::DEFAULT.format(f64::NEG_INFINITY), "-∞");
        assert_eq!(NumberFormat::DEFAULT.format(f64::NAN), "NaN");
    }

    #[test]
    fn test_invalid_patterns() {
        assert!(matches!(
            NumberFormat::parse(""),
            Err(CodecError::InvalidNumberFormat { .. })
        ));
        assert!(NumberFormat::parse("abc").is_err());
        assert!(NumberFormat::parse("0.#x").is_err());
        assert!(NumberFormat::parse("0.0.0").is_err());
        assert!(NumberFormat::parse(",").is_err());
        assert!(NumberFormat::parse("0.000000000000000000000").is_err());
    }

    #[test]
    fn test_from_str() {
        let format: NumberFormat = "0.#".parse().unwrap();
        assert_eq!(format, NumberFormat::up_to(1));
    }
}
