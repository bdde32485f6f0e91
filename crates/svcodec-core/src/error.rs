//! Error types for the state-variable codec.
//!
//! The conversion surface (format, parse, transfer, percentage) never fails:
//! every bad input resolves to a documented fallback value. These errors are
//! returned only by the helper APIs around it, such as typed class-id
//! conversion and number-pattern compilation.

use thiserror::Error;

use crate::types::ClassId;

/// Errors raised by the codec's fallible helpers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The class id is not one the device protocol defines.
    #[error("Unknown state variable class: {0}")]
    UnknownClass(ClassId),

    /// A number pattern such as `"0.##"` could not be compiled.
    #[error("Invalid number format {pattern:?}: {reason}")]
    InvalidNumberFormat {
        /// The pattern as given.
        pattern: String,
        /// What was wrong with it.
        reason: &'static str,
    },
}

/// Result type for codec helper operations.
pub type CodecResult<T> = Result<T, CodecError>;
