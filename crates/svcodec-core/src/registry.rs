//! The class registry.
//!
//! A single static table binds every known class to its transfer function
//! and raw bounds. It is built at compile time and never mutated, so lookups
//! need no synchronisation. Ids the table does not hold resolve to
//! [`UNKNOWN`], which converts with the identity and formats as a plain
//! integer.
//!
//! # Example
//!
//! ```ignore
//! use svcodec_core::registry::lookup;
//!
//! let gain = lookup(106);
//! assert_eq!(gain.name(), "Gain");
//! assert_eq!(gain.format(10000, false, -1, None), "+1dB");
//!
//! let missing = lookup(999_999);
//! assert!(missing.is_unknown());
//! ```

use crate::class::SvClass;
use crate::transfer::Transfer;
use crate::types::{ClassId, Sv, WIRE_MAX, WIRE_MIN};

// =============================================================================
// Sentinel raw values
// =============================================================================

/// Lowest gain the panel distinguishes; at or below it gain shows as "-∞dB".
///
/// This is one raw unit above the encoding of -80 dB.
pub const GAIN_FLOOR: Sv = -280_617;

/// Upper gain bound (+10 dB).
pub const GAIN_MAX: Sv = 100_000;

/// Compressor threshold shown as "∞dBu" (compression disabled).
pub const COMPRESSOR_THRESHOLD_INF: Sv = 200_000;

/// Ratio shown as "∞:1" (limiting). One raw unit above 20:1.
pub const RATIO_INF: Sv = 200_001;

/// Lowest boost/cut value of a notch-capable band.
pub const BOOST_LOW: Sv = -150_000;

/// Notch band value shown as "Notch".
pub const NOTCH: Sv = BOOST_LOW - 1;

/// Output level shown as "out" (output disabled).
pub const DECIBELS_OUT: Sv = 0;

/// Pan centre position.
pub const PAN_CENTRE: Sv = 5_000;

/// Bounds of the `Decibels` and `DecibelsOut` classes (-80 dB to +40 dB).
const DECIBELS_MIN: Sv = -800_000;
const DECIBELS_MAX: Sv = 400_000;

// =============================================================================
// Class descriptors
// =============================================================================

/// Everything the codec needs to know about one class.
///
/// Descriptors are plain `Copy` data; the formatter, parser and percentage
/// mapper dispatch on [`class`](Self::class) and call through
/// [`transfer`](Self::transfer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassDescriptor {
    /// The class this descriptor describes.
    pub class: SvClass,
    /// Raw/engineering conversion pair.
    pub transfer: Transfer,
    /// Lowest raw value (inclusive).
    pub min: Sv,
    /// Highest raw value (inclusive).
    pub max: Sv,
}

impl ClassDescriptor {
    /// Create a descriptor spanning the full wire range.
    pub const fn new(class: SvClass, transfer: Transfer) -> Self {
        Self {
            class,
            transfer,
            min: WIRE_MIN,
            max: WIRE_MAX,
        }
    }

    /// Narrow the raw bounds.
    pub const fn with_bounds(mut self, min: Sv, max: Sv) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Protocol id of the class.
    #[inline]
    pub const fn id(&self) -> ClassId {
        self.class.id()
    }

    /// Diagnostic name of the class.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.class.name()
    }

    /// Whether this is the fallback descriptor for unrecognised ids.
    #[inline]
    pub fn is_unknown(&self) -> bool {
        self.class == SvClass::Unknown
    }

    /// Convert a raw value to its engineering value.
    #[inline]
    pub fn to_engineering(&self, sv: Sv) -> f64 {
        self.transfer.to_engineering(sv)
    }

    /// Convert an engineering value to the nearest raw value.
    #[inline]
    pub fn from_engineering(&self, value: f64) -> Sv {
        self.transfer.from_engineering(value)
    }

    /// Long-form unit label of the class ("dB", "Hz", "%", ...).
    ///
    /// Empty for unitless classes. Classes whose unit changes with magnitude
    /// report their base unit (Hz for frequency, s for speed).
    pub const fn units(&self) -> &'static str {
        match self.class {
            SvClass::Gain
            | SvClass::Decibels
            | SvClass::DecibelsOut
            | SvClass::CardInputGain
            | SvClass::Notch => "dB",
            SvClass::Level | SvClass::CompressorThreshold => "dBu",
            SvClass::Frequency => "Hz",
            SvClass::Delay => "ms",
            SvClass::Speed => "s",
            SvClass::Percentage | SvClass::CM1FreeCycles | SvClass::RangedPercentage => "%",
            SvClass::FilterWidth => "Oct",
            SvClass::Phase => "º",
            SvClass::Temperature => "ºC",
            SvClass::Ratio => ":1",
            SvClass::LevelPerSec => "dB/s",
            SvClass::FreeMemory => "KB",
            _ => "",
        }
    }
}

/// Descriptor returned for ids the registry does not hold.
pub static UNKNOWN: ClassDescriptor = ClassDescriptor::new(SvClass::Unknown, Transfer::Identity);

static CLASSES: [ClassDescriptor; 59] = [
    ClassDescriptor::new(SvClass::Discrete, Transfer::Identity),
    ClassDescriptor::new(SvClass::Gain, Transfer::Gain).with_bounds(GAIN_FLOOR, GAIN_MAX),
    ClassDescriptor::new(SvClass::Decibels, Transfer::Scalar).with_bounds(DECIBELS_MIN, DECIBELS_MAX),
    ClassDescriptor::new(SvClass::FixedPointDecibels, Transfer::Identity),
    ClassDescriptor::new(SvClass::DecibelsOut, Transfer::Scalar).with_bounds(DECIBELS_MIN, DECIBELS_MAX),
    ClassDescriptor::new(SvClass::Level, Transfer::Scalar),
    ClassDescriptor::new(SvClass::Mute, Transfer::Identity),
    ClassDescriptor::new(SvClass::Polarity, Transfer::Identity),
    ClassDescriptor::new(SvClass::Switch, Transfer::Identity),
    ClassDescriptor::new(SvClass::Gate, Transfer::Identity),
    ClassDescriptor::new(SvClass::Online, Transfer::Identity),
    ClassDescriptor::new(SvClass::YesNo, Transfer::Identity),
    ClassDescriptor::new(SvClass::Delay, Transfer::Delay),
    ClassDescriptor::new(SvClass::CompressorThreshold, Transfer::Scalar),
    ClassDescriptor::new(SvClass::Ratio, Transfer::Scalar),
    ClassDescriptor::new(SvClass::FilterShape, Transfer::Identity),
    ClassDescriptor::new(SvClass::Frequency, Transfer::Log),
    ClassDescriptor::new(SvClass::Percentage, Transfer::Scalar),
    ClassDescriptor::new(SvClass::PEQFilter, Transfer::Identity),
    ClassDescriptor::new(SvClass::FilterSlope, Transfer::Identity),
    ClassDescriptor::new(SvClass::FilterWidth, Transfer::Scalar),
    ClassDescriptor::new(SvClass::Notch, Transfer::Scalar),
    ClassDescriptor::new(SvClass::Phase, Transfer::Scalar),
    ClassDescriptor::new(SvClass::Source, Transfer::Identity),
    ClassDescriptor::new(SvClass::NoiseType, Transfer::Identity),
    ClassDescriptor::new(SvClass::ExpanderRatio, Transfer::Identity),
    ClassDescriptor::new(SvClass::Speed, Transfer::Speed),
    ClassDescriptor::new(SvClass::CrossoverFilter, Transfer::Identity),
    ClassDescriptor::new(SvClass::MatrixGain, Transfer::Scalar),
    ClassDescriptor::new(SvClass::Pan, Transfer::Scalar),
    ClassDescriptor::new(SvClass::RangedPercentage, Transfer::Identity),
    ClassDescriptor::new(SvClass::IPAddress, Transfer::Identity),
    ClassDescriptor::new(SvClass::RealTimeClock, Transfer::Identity),
    ClassDescriptor::new(SvClass::CardInputGain, Transfer::InputGain),
    ClassDescriptor::new(SvClass::CM1Int24, Transfer::Identity),
    ClassDescriptor::new(SvClass::CM1Int24Sens, Transfer::Identity),
    ClassDescriptor::new(SvClass::Seconds, Transfer::Identity),
    ClassDescriptor::new(SvClass::Byte, Transfer::Identity),
    ClassDescriptor::new(SvClass::SignedByte, Transfer::Identity),
    ClassDescriptor::new(SvClass::SignedWord, Transfer::Identity),
    ClassDescriptor::new(SvClass::Word, Transfer::Identity),
    ClassDescriptor::new(SvClass::Long, Transfer::Identity),
    ClassDescriptor::new(SvClass::UnsignedLong, Transfer::Identity),
    ClassDescriptor::new(SvClass::Float, Transfer::Float),
    ClassDescriptor::new(SvClass::String, Transfer::Identity),
    ClassDescriptor::new(SvClass::Hex, Transfer::Identity),
    ClassDescriptor::new(SvClass::Hex8, Transfer::Identity),
    ClassDescriptor::new(SvClass::CM1FreeCycles, Transfer::FreeCycles),
    ClassDescriptor::new(SvClass::FreeMemory, Transfer::Identity),
    ClassDescriptor::new(SvClass::TimeSpan, Transfer::Identity),
    ClassDescriptor::new(SvClass::PercentageControl, Transfer::Identity),
    ClassDescriptor::new(SvClass::Temperature, Transfer::Temperature),
    ClassDescriptor::new(SvClass::LevelPerSec, Transfer::Identity),
    ClassDescriptor::new(SvClass::WordFloat, Transfer::Identity),
    ClassDescriptor::new(SvClass::SignalNaming, Transfer::Identity),
    ClassDescriptor::new(SvClass::NamingOverride, Transfer::Identity),
    ClassDescriptor::new(SvClass::ChannelSignalNaming, Transfer::Identity),
    ClassDescriptor::new(SvClass::UserCustom, Transfer::Identity),
    ClassDescriptor::new(SvClass::DialNumberString, Transfer::Identity),
];

/// Every registered descriptor, excluding [`UNKNOWN`].
pub fn descriptors() -> &'static [ClassDescriptor] {
    &CLASSES
}

/// Find the descriptor for a class id.
///
/// Never fails: unrecognised ids resolve to [`UNKNOWN`].
pub fn lookup(class_id: ClassId) -> &'static ClassDescriptor {
    match CLASSES.iter().find(|descriptor| descriptor.id() == class_id) {
        Some(descriptor) => descriptor,
        None => {
            log::trace!("No state variable class {}, using Unknown", class_id);
            &UNKNOWN
        }
    }
}

/// Convert a raw value of the described class to its engineering value.
#[inline]
pub fn to_engineering(descriptor: &ClassDescriptor, sv: Sv) -> f64 {
    descriptor.to_engineering(sv)
}

/// Convert an engineering value of the described class to the nearest raw value.
#[inline]
pub fn from_engineering(descriptor: &ClassDescriptor, value: f64) -> Sv {
    descriptor.from_engineering(value)
}

impl SvClass {
    /// The registered descriptor for this class.
    pub fn descriptor(self) -> &'static ClassDescriptor {
        lookup(self.id())
    }
}
