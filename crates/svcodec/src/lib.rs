//! # svcodec
//!
//! State-variable value codec for Soundweb-style device control.
//!
//! Devices exchange every control parameter as a raw 32-bit integer. The
//! parameter's class says what that integer means: a gain in dB, a
//! frequency on a log scale, a pan position, an IP address. This crate turns
//! raw values into numbers, text and fader positions, and back.
//!
//! ## Architecture
//!
//! ```text
//! class id ──lookup──▶ ClassDescriptor { class, transfer, min, max }
//!                             │
//!            ┌────────────────┼─────────────────┐
//!            ▼                ▼                 ▼
//!      to/from_engineering  format/parse   to/from_percentage
//!        (Transfer)        (per class)       (Scale, ticks)
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use svcodec::prelude::*;
//!
//! let gain = lookup(106);
//! assert_eq!(gain.format(10000, false, DP_AUTO, None), "+1dB");
//! assert_eq!(gain.parse("-∞"), GAIN_FLOOR);
//!
//! // A fader showing -40 dB to +10 dB with six labelled ticks.
//! let fader = Scale::new(gain).with_text_bounds(Some("-40dB"), Some("+10dB"));
//! let labels: Vec<String> = fader.ticks(6).into_iter().map(|t| t.label).collect();
//!
//! // Compact meter labels kept in a static.
//! static METER: FormatOptions = FormatOptions::new().short();
//! assert_eq!(lookup(121).format_with(3_000_000, &METER), "1k");
//! ```

// Re-export sub-crates
pub use svcodec_core as core;

pub use svcodec_core::{
    format, from_engineering, from_percentage, lookup, parse, to_engineering, to_percentage,
};

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use svcodec::prelude::*;
/// ```
pub mod prelude {
    pub use svcodec_core::{
        // Conversions
        format, format_with, from_engineering, from_percentage, lookup, parse, to_engineering,
        to_percentage,
        // Classes and descriptors
        descriptors, ClassDescriptor, ClassId, SvClass, Transfer, UNKNOWN,
        // Raw values
        fold_to_wire, Sv, WIRE_MAX, WIRE_MIN,
        // Sentinels
        BOOST_LOW, COMPRESSOR_THRESHOLD_INF, DECIBELS_OUT, GAIN_FLOOR, GAIN_MAX, NOTCH,
        PAN_CENTRE, RATIO_INF,
        // Formatting configuration
        FormatOptions, NumberFormat, DP_AUTO,
        // Widget scales
        RangeMapper, Scale, Tick,
        // Error types
        CodecError, CodecResult,
    };
}
