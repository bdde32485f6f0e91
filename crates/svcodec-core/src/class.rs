//! State-variable class identifiers.
//!
//! Every control parameter on the device belongs to a class, identified on
//! the wire by a small integer. [`SvClass`] is the closed set of classes the
//! codec understands; its discriminants are the protocol ids.

use crate::error::CodecError;
use crate::types::ClassId;

macro_rules! sv_classes {
    ($($(#[$meta:meta])* $variant:ident = $id:literal,)+) => {
        /// A state-variable class, with its protocol id as discriminant.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u16)]
        pub enum SvClass {
            $($(#[$meta])* $variant = $id,)+
        }

        impl SvClass {
            /// Every class, in protocol id order.
            pub const ALL: &'static [SvClass] = &[$(SvClass::$variant,)+];

            /// Diagnostic name of the class.
            pub const fn name(self) -> &'static str {
                match self {
                    $(SvClass::$variant => stringify!($variant),)+
                }
            }
        }
    };
}

sv_classes! {
    /// Fallback for ids the codec does not recognise.
    Unknown = 104,
    Discrete = 105,
    Gain = 106,
    Decibels = 107,
    FixedPointDecibels = 108,
    DecibelsOut = 109,
    Level = 110,
    Mute = 111,
    Polarity = 112,
    Switch = 113,
    Gate = 114,
    Online = 115,
    YesNo = 116,
    Delay = 117,
    CompressorThreshold = 118,
    Ratio = 119,
    FilterShape = 120,
    Frequency = 121,
    Percentage = 122,
    PEQFilter = 123,
    FilterSlope = 124,
    FilterWidth = 125,
    Notch = 126,
    Phase = 127,
    Source = 128,
    NoiseType = 129,
    ExpanderRatio = 130,
    Speed = 131,
    CrossoverFilter = 132,
    MatrixGain = 133,
    Pan = 134,
    RangedPercentage = 135,
    IPAddress = 136,
    RealTimeClock = 137,
    CardInputGain = 138,
    CM1Int24 = 139,
    CM1Int24Sens = 140,
    Seconds = 900,
    Byte = 901,
    SignedByte = 902,
    SignedWord = 903,
    Word = 904,
    Long = 905,
    UnsignedLong = 906,
    Float = 907,
    String = 908,
    Hex = 909,
    Hex8 = 910,
    CM1FreeCycles = 911,
    FreeMemory = 912,
    TimeSpan = 913,
    PercentageControl = 914,
    Temperature = 915,
    LevelPerSec = 916,
    WordFloat = 917,
    SignalNaming = 918,
    NamingOverride = 919,
    ChannelSignalNaming = 920,
    UserCustom = 921,
    DialNumberString = 922,
}

impl SvClass {
    /// Protocol id of the class.
    #[inline]
    pub const fn id(self) -> ClassId {
        self as u16 as ClassId
    }

    /// Resolve a protocol id.
    ///
    /// Returns `None` for ids outside the protocol. Note that id 104 resolves
    /// to [`SvClass::Unknown`] itself.
    pub fn from_id(id: ClassId) -> Option<Self> {
        Self::ALL.iter().copied().find(|class| class.id() == id)
    }

    /// Display words for enumerated classes, indexed by raw value.
    ///
    /// The word at index 1 is the class's "on" word used when parsing.
    pub const fn words(self) -> Option<&'static [&'static str]> {
        match self {
            SvClass::Mute => Some(&["Unmuted", "Muted"]),
            SvClass::Polarity => Some(&["Normal", "Inverted"]),
            SvClass::Switch => Some(&["Off", "On"]),
            SvClass::Gate => Some(&["Closed", "Open"]),
            SvClass::Online => Some(&["Offline", "Pending", "Online"]),
            SvClass::YesNo => Some(&["No", "Yes"]),
            _ => None,
        }
    }
}

impl TryFrom<ClassId> for SvClass {
    type Error = CodecError;

    fn try_from(id: ClassId) -> Result<Self, Self::Error> {
        Self::from_id(id).ok_or(CodecError::UnknownClass(id))
    }
}

impl std::fmt::Display for SvClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
