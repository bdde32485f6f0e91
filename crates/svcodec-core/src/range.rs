//! Mapping raw values to slider positions.
//!
//! A position is the raw value's fraction of a range: 0.0 at the bottom,
//! 1.0 at the top. The mapping is linear in raw units, so for logarithmic
//! classes like frequency a position already follows the log law.
//!
//! Positions are not clamped. A raw value below the range gives a negative
//! position, and a position above 1.0 gives a raw value above the range.
//!
//! # Example
//!
//! ```ignore
//! use svcodec_core::{lookup, RangeMapper};
//!
//! let gain = lookup(106);
//! assert_eq!(gain.denormalize(gain.normalize(-60000)), -60000);
//! ```

use crate::registry::ClassDescriptor;
use crate::transfer::round_nearest;
use crate::types::Sv;

/// Mapping between raw values and positions in a range.
pub trait RangeMapper: Send + Sync {
    /// Position of a raw value (0.0 at the bottom of the range, 1.0 at the top).
    fn normalize(&self, sv: Sv) -> f64;

    /// Nearest raw value at a position.
    fn denormalize(&self, position: f64) -> Sv;

    /// Raw bounds as (min, max).
    fn range(&self) -> (Sv, Sv);
}

/// Position of `sv` within the class bounds.
pub fn to_percentage(descriptor: &ClassDescriptor, sv: Sv) -> f64 {
    let min = descriptor.min as f64;
    let span = descriptor.max as f64 - min;
    (sv as f64 - min) / span
}

/// Raw value at `position` within the class bounds.
pub fn from_percentage(descriptor: &ClassDescriptor, position: f64) -> Sv {
    let min = descriptor.min as f64;
    let span = descriptor.max as f64 - min;
    round_nearest(min + position * span)
}

impl ClassDescriptor {
    /// See [`to_percentage`].
    #[inline]
    pub fn to_percentage(&self, sv: Sv) -> f64 {
        to_percentage(self, sv)
    }

    /// See [`from_percentage`].
    #[inline]
    pub fn from_percentage(&self, position: f64) -> Sv {
        from_percentage(self, position)
    }
}

impl RangeMapper for ClassDescriptor {
    fn normalize(&self, sv: Sv) -> f64 {
        to_percentage(self, sv)
    }

    fn denormalize(&self, position: f64) -> Sv {
        from_percentage(self, position)
    }

    fn range(&self) -> (Sv, Sv) {
        (self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::SvClass;
    use crate::registry::{GAIN_FLOOR, GAIN_MAX};
    use crate::types::{WIRE_MAX, WIRE_MIN};

    #[test]
    fn test_gain_endpoints() {
        let gain = SvClass::Gain.descriptor();
        assert_eq!(gain.to_percentage(GAIN_FLOOR), 0.0);
        assert_eq!(gain.to_percentage(GAIN_MAX), 1.0);
        assert_eq!(gain.from_percentage(0.0), GAIN_FLOOR);
        assert_eq!(gain.from_percentage(1.0), GAIN_MAX);
    }

    #[test]
    fn test_full_wire_range() {
        let freq = SvClass::Frequency.descriptor();
        assert_eq!(freq.to_percentage(WIRE_MIN), 0.0);
        assert_eq!(freq.to_percentage(WIRE_MAX), 1.0);
        assert_eq!(freq.from_percentage(1.0), WIRE_MAX);
        // The midpoint of an odd span sits on a half unit and rounds away from zero.
        assert_eq!(freq.from_percentage(0.5), -1);
    }

    #[test]
    fn test_not_clamped() {
        let db = SvClass::Decibels.descriptor();
        assert!(db.to_percentage(-900_000) < 0.0);
        assert!(db.to_percentage(500_000) > 1.0);
        assert_eq!(db.from_percentage(-0.5), -1_400_000);
        assert_eq!(db.from_percentage(1.5), 1_000_000);
    }

    #[test]
    fn test_round_trip() {
        let db = SvClass::Decibels.descriptor();
        for sv in [-800_000, -123_457, -1, 0, 1, 99_999, 400_000] {
            assert_eq!(db.from_percentage(db.to_percentage(sv)), sv);
        }
    }

    #[test]
    fn test_range_mapper_trait() {
        fn midpoint(mapper: &dyn RangeMapper) -> Sv {
            mapper.denormalize(0.5)
        }

        let db = SvClass::Decibels.descriptor();
        assert_eq!(db.range(), (-800_000, 400_000));
        assert_eq!(midpoint(db), -200_000);
        assert_eq!(db.normalize(-200_000), 0.5);
    }
}
