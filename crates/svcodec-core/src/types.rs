//! Common types used throughout the codec.

/// Raw state value as carried on the device wire.
///
/// The protocol transmits signed 32-bit integers. Arithmetic is done in
/// `i64` so intermediate results (unsigned renderings, parsed text) cannot
/// overflow before they are folded back with [`fold_to_wire`].
pub type Sv = i64;

/// Protocol class identifier (e.g. 106 = Gain, 121 = Frequency).
pub type ClassId = i64;

/// Smallest raw value the wire can carry.
pub const WIRE_MIN: Sv = i32::MIN as Sv;

/// Largest raw value the wire can carry.
pub const WIRE_MAX: Sv = i32::MAX as Sv;

/// Fold a value into the 32-bit wire domain by keeping its low 32 bits.
///
/// `4294967295` (an unsigned rendering of `-1`) folds back to `-1`.
#[inline]
pub const fn fold_to_wire(value: i64) -> Sv {
    value as i32 as Sv
}
