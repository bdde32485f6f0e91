//! # svcodec-core
//!
//! Conversion between the raw integer state values a Soundweb-style device
//! carries on the wire and the numbers and text a control panel shows.
//!
//! Every state variable belongs to a class (Gain, Frequency, Pan, ...). The
//! class fixes how a raw value maps to an engineering value, how that value
//! is rendered as text, how text is read back, and where the value sits on a
//! fader.
//!
//! ## Conversions
//!
//! - [`lookup`] - class id to [`ClassDescriptor`] (unknown ids fall back)
//! - [`to_engineering`] / [`from_engineering`] - raw value to number and back
//! - [`format`] / [`parse`] - raw value to display text and back
//! - [`to_percentage`] / [`from_percentage`] - raw value to fader position
//!
//! None of these fail. Unknown classes convert with the identity, and text
//! without a number reads as 0.
//!
//! ## Types
//!
//! - [`SvClass`] - every known class, with its protocol id
//! - [`Transfer`] - raw/engineering conversion laws
//! - [`FormatOptions`] - short mode, decimal places and number pattern
//! - [`NumberFormat`] - compiled number patterns like `"0.##"`
//! - [`Scale`] - a class narrowed to a widget's display window
//! - [`RangeMapper`] - raw value to position mapping
//! - [`CodecError`] - errors of the fallible helpers
//!
//! ## Example
//!
//! ```ignore
//! use svcodec_core::{format, lookup, parse, DP_AUTO};
//!
//! let gain = lookup(106);
//! assert_eq!(format(gain, 10000, false, DP_AUTO, None), "+1dB");
//! assert_eq!(parse(gain, "-3.2dB"), -32000);
//! ```

pub mod class;
pub mod config;
pub mod error;
pub mod format;
pub mod number_format;
pub mod parse;
pub mod range;
pub mod registry;
pub mod scale;
pub mod transfer;
pub mod types;

// Re-exports for convenience
pub use class::SvClass;
pub use config::{FormatOptions, DP_AUTO};
pub use error::{CodecError, CodecResult};
pub use format::{format, format_with};
pub use number_format::NumberFormat;
pub use parse::parse;
pub use range::{from_percentage, to_percentage, RangeMapper};
pub use registry::{
    descriptors, from_engineering, lookup, to_engineering, ClassDescriptor, BOOST_LOW,
    COMPRESSOR_THRESHOLD_INF, DECIBELS_OUT, GAIN_FLOOR, GAIN_MAX, NOTCH, PAN_CENTRE, RATIO_INF,
    UNKNOWN,
};
pub use scale::{Scale, Tick};
pub use transfer::Transfer;
pub use types::{fold_to_wire, ClassId, Sv, WIRE_MAX, WIRE_MIN};
