//! Formatting options.
//!
//! [`FormatOptions`] bundles the knobs a widget passes on every redraw: short
//! mode, decimal places and an optional number pattern. It is a plain value
//! built with `const` methods, so widgets can keep their options in a
//! `static`. Patterns given as text are compiled once, when the options are
//! built, not on every redraw.
//!
//! # Example
//!
//! ```ignore
//! use svcodec_core::{FormatOptions, NumberFormat};
//!
//! pub static METER_LABELS: FormatOptions = FormatOptions::new()
//!     .with_decimal_places(2);
//!
//! pub static COMPACT: FormatOptions = FormatOptions::new()
//!     .short()
//!     .with_number_format(NumberFormat::up_to(1));
//!
//! // Patterns typed by a user are compiled up front.
//! let custom = FormatOptions::new().with_pattern("#,##0.0");
//! ```

use crate::number_format::NumberFormat;

/// Decimal places value meaning "use the class's own precision".
pub const DP_AUTO: i32 = -1;

/// Options for rendering a raw value as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Omit unit suffixes (some classes substitute abbreviated tokens).
    pub short: bool,

    /// Decimal places to render. [`DP_AUTO`] (or any negative value) keeps
    /// the class default; `n >= 0` renders at most `n` decimals.
    pub decimal_places: i32,

    /// Compiled pattern used where a class defers to the caller. `None`
    /// means `"0.##"`.
    pub number_format: Option<NumberFormat>,
}

impl FormatOptions {
    /// Long form, automatic precision, default pattern.
    pub const fn new() -> Self {
        Self {
            short: false,
            decimal_places: DP_AUTO,
            number_format: None,
        }
    }

    /// Switch to short mode.
    pub const fn short(mut self) -> Self {
        self.short = true;
        self
    }

    /// Set short mode explicitly.
    pub const fn with_short(mut self, short: bool) -> Self {
        self.short = short;
        self
    }

    /// Set the decimal places ([`DP_AUTO`] for the class default).
    pub const fn with_decimal_places(mut self, decimal_places: i32) -> Self {
        self.decimal_places = decimal_places;
        self
    }

    /// Set the caller's compiled number pattern.
    pub const fn with_number_format(mut self, format: NumberFormat) -> Self {
        self.number_format = Some(format);
        self
    }

    /// Compile and set the caller's number pattern.
    ///
    /// A pattern that does not compile is logged once here and left unset,
    /// so rendering uses the default `"0.##"`.
    pub fn with_pattern(mut self, pattern: &str) -> Self {
        self.number_format = match NumberFormat::parse(pattern) {
            Ok(format) => Some(format),
            Err(e) => {
                log::warn!("{}, using default", e);
                None
            }
        };
        self
    }

    /// Explicit decimal places, if any were requested.
    pub const fn fixed_places(&self) -> Option<usize> {
        if self.decimal_places < 0 {
            None
        } else {
            Some(self.decimal_places as usize)
        }
    }

    /// The caller's pattern, or the default `"0.##"`.
    pub const fn caller_format(&self) -> NumberFormat {
        match self.number_format {
            Some(format) => format,
            None => NumberFormat::DEFAULT,
        }
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = FormatOptions::default();
        assert!(!opts.short);
        assert_eq!(opts.decimal_places, DP_AUTO);
        assert_eq!(opts.fixed_places(), None);
        assert_eq!(opts.caller_format(), NumberFormat::DEFAULT);
    }

    #[test]
    fn test_const_builder() {
        const OPTS: FormatOptions = FormatOptions::new()
            .short()
            .with_decimal_places(3)
            .with_number_format(NumberFormat::up_to(1));
        assert!(OPTS.short);
        assert_eq!(OPTS.fixed_places(), Some(3));
        assert_eq!(OPTS.caller_format(), NumberFormat::up_to(1));
    }

    #[test]
    fn test_negative_places_are_auto() {
        let opts = FormatOptions::new().with_decimal_places(-7);
        assert_eq!(opts.fixed_places(), None);
    }

    #[test]
    fn test_pattern_compiled_once() {
        let opts = FormatOptions::new().with_pattern("0.#");
        assert_eq!(opts.number_format, Some(NumberFormat::up_to(1)));

        // Copies carry the compiled pattern, not the text.
        let copy = opts;
        assert_eq!(copy.caller_format(), NumberFormat::up_to(1));
    }

    #[test]
    fn test_bad_pattern_falls_back() {
        let _ = env_logger::builder().is_test(true).try_init();
        let opts = FormatOptions::new().with_pattern("not a pattern");
        assert_eq!(opts.number_format, None);
        assert_eq!(opts.caller_format(), NumberFormat::DEFAULT);
    }
}
