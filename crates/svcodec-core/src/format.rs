//! Rendering raw values as display text.
//!
//! Each class owns its grammar: unit suffix, number pattern, sign handling
//! and a table of sentinel values that render as fixed tokens ("-∞dB",
//! "Notch", "out", ...). Sentinels are exact raw-value matches checked before
//! any numeric formatting.
//!
//! | Class | Long | Short |
//! |---|---|---|
//! | Gain 10000 | `+1dB` | `+1` |
//! | Gain at the floor | `-∞dB` | `-∞` |
//! | Frequency 3000000 | `1kHz` | `1k` |
//! | Percentage 5000 | `50%` | `50%` |
//! | Pan 5000 | `Centre` | `C` |
//! | Pan 0 | `100L` | `L` |
//! | IPAddress 0x0A000001 | `10.0.0.1` | `10.0.0.1` |
//!
//! Formatting never fails. Values a class cannot name (an enumeration index
//! out of range, a clock value outside the calendar) and unknown classes
//! render as the decimal raw value.

use chrono::DateTime;

use crate::class::SvClass;
use crate::config::FormatOptions;
use crate::number_format::NumberFormat;
use crate::registry::{
    ClassDescriptor, COMPRESSOR_THRESHOLD_INF, DECIBELS_OUT, GAIN_FLOOR, NOTCH, PAN_CENTRE,
    RATIO_INF,
};
use crate::types::Sv;

/// Date-time layout of the real-time clock class.
///
/// Example: `Monday, May 28, 2012 11:35:00 AM`.
pub const CLOCK_FORMAT: &str = "%A, %B %d, %Y %-I:%M:%S %p";

/// Pan fully right.
const PAN_RIGHT: Sv = 10_000;

/// Raw pan units per percent of travel from centre.
const PAN_UNITS_PER_PERCENT: f64 = 50.0;

/// Render a raw value.
///
/// `decimal_places` is [`DP_AUTO`](crate::config::DP_AUTO) for the class
/// default; `number_format` is the caller's pattern (`None` for `"0.##"`).
///
/// The pattern is compiled on every call. Widgets that redraw often should
/// build [`FormatOptions`] once with
/// [`with_pattern`](FormatOptions::with_pattern) and call [`format_with`].
pub fn format(
    descriptor: &ClassDescriptor,
    sv: Sv,
    short: bool,
    decimal_places: i32,
    number_format: Option<&str>,
) -> String {
    let mut options = FormatOptions::new()
        .with_short(short)
        .with_decimal_places(decimal_places);
    if let Some(pattern) = number_format {
        options = options.with_pattern(pattern);
    }
    format_with(descriptor, sv, &options)
}

/// Render a raw value with prepared options.
pub fn format_with(descriptor: &ClassDescriptor, sv: Sv, options: &FormatOptions) -> String {
    let r = Renderer {
        descriptor,
        short: options.short,
        places: options.fixed_places(),
        caller: options.caller_format(),
    };

    match descriptor.class {
        SvClass::Gain => {
            if sv <= GAIN_FLOOR {
                r.with_unit("-∞".to_string(), "dB")
            } else {
                r.signed(sv, "dB")
            }
        }
        SvClass::Decibels | SvClass::CardInputGain => r.signed(sv, "dB"),
        SvClass::DecibelsOut => {
            if sv == DECIBELS_OUT {
                "out".to_string()
            } else {
                r.signed(sv, "dB")
            }
        }
        SvClass::Level => r.signed(sv, "dBu"),
        SvClass::Mute
        | SvClass::Polarity
        | SvClass::Switch
        | SvClass::Gate
        | SvClass::Online
        | SvClass::YesNo => enumerated(descriptor.class, sv),
        SvClass::Delay => {
            let ms = r.engineering(sv) * 1000.0;
            r.with_unit(r.number(ms, NumberFormat::up_to(3)), "ms")
        }
        SvClass::CompressorThreshold => {
            if sv == COMPRESSOR_THRESHOLD_INF {
                r.with_unit("∞".to_string(), "dBu")
            } else {
                r.unsigned(sv, "dBu")
            }
        }
        SvClass::Ratio => {
            if sv == RATIO_INF {
                let token = if r.short { "∞" } else { "∞:1" };
                token.to_string()
            } else {
                r.standard(sv, ":1")
            }
        }
        SvClass::Frequency => frequency(r.engineering(sv), r.short),
        SvClass::Percentage => {
            let mut text = NumberFormat::up_to(0).format(r.engineering(sv) * 100.0);
            text.push('%');
            text
        }
        SvClass::FilterWidth => r.unsigned(sv, " Oct"),
        SvClass::Notch => {
            if sv == NOTCH {
                "Notch".to_string()
            } else {
                r.signed(sv, "dB")
            }
        }
        SvClass::Phase => r.unsigned(sv, "º"),
        SvClass::Speed => r.speed(sv),
        SvClass::Pan => r.pan(sv),
        SvClass::IPAddress => ip_address(sv),
        SvClass::RealTimeClock => clock(sv),
        SvClass::Seconds => seconds(sv, r.short),
        SvClass::Byte | SvClass::Word | SvClass::UnsignedLong => (sv as u32).to_string(),
        SvClass::SignedByte | SvClass::SignedWord | SvClass::Long | SvClass::Discrete => {
            sv.to_string()
        }
        SvClass::Float => NumberFormat::up_to(2)
            .with_grouping()
            .format(r.engineering(sv)),
        SvClass::Hex => format!("0x{:x}", sv as u32),
        SvClass::Hex8 => format!("0x{:08x}", sv as u32),
        SvClass::CM1FreeCycles => {
            r.with_unit(r.number(r.engineering(sv), NumberFormat::up_to(1)), "%")
        }
        SvClass::FreeMemory => format!("{}KB", sv >> 10),
        SvClass::Temperature => r.unsigned(sv, "ºC"),
        SvClass::LevelPerSec => {
            let mut text = NumberFormat::up_to(2).format(r.engineering(sv) / 100.0);
            text.push_str("dB/s");
            text
        }
        SvClass::RangedPercentage => format!("{}%", sv),
        _ => sv.to_string(),
    }
}

impl ClassDescriptor {
    /// Render a raw value; see [`format`].
    pub fn format(
        &self,
        sv: Sv,
        short: bool,
        decimal_places: i32,
        number_format: Option<&str>,
    ) -> String {
        format(self, sv, short, decimal_places, number_format)
    }

    /// Render a raw value with prepared options; see [`format_with`].
    pub fn format_with(&self, sv: Sv, options: &FormatOptions) -> String {
        format_with(self, sv, options)
    }
}

/// Shared numeric helpers for one formatting call.
struct Renderer<'d> {
    descriptor: &'d ClassDescriptor,
    short: bool,
    places: Option<usize>,
    caller: NumberFormat,
}

impl Renderer<'_> {
    fn engineering(&self, sv: Sv) -> f64 {
        self.descriptor.to_engineering(sv)
    }

    /// Explicit decimal places win over the class pattern.
    fn number(&self, value: f64, auto: NumberFormat) -> String {
        match self.places {
            Some(places) => NumberFormat::up_to(places).format(value),
            None => auto.format(value),
        }
    }

    fn with_unit(&self, mut text: String, unit: &str) -> String {
        if !self.short {
            text.push_str(unit);
        }
        text
    }

    /// Caller pattern, unit suffix.
    fn unsigned(&self, sv: Sv, unit: &str) -> String {
        self.with_unit(self.number(self.engineering(sv), self.caller), unit)
    }

    /// Caller pattern, unit suffix, "+" for strictly positive values.
    fn signed(&self, sv: Sv, unit: &str) -> String {
        let text = self.unsigned(sv, unit);
        if self.engineering(sv) > 0.0 {
            format!("+{}", text)
        } else {
            text
        }
    }

    /// Fixed `"0.##"` pattern, unit suffix.
    fn standard(&self, sv: Sv, unit: &str) -> String {
        self.with_unit(self.number(self.engineering(sv), NumberFormat::DEFAULT), unit)
    }

    /// Unit follows magnitude and is kept in short mode.
    fn speed(&self, sv: Sv) -> String {
        let secs = self.engineering(sv);
        let (value, unit) = if secs < 0.001 {
            (secs * 1_000_000.0, "µs")
        } else if secs < 1.0 {
            (secs * 1000.0, "ms")
        } else {
            (secs, "s")
        };
        let mut text = self.number(value, self.caller);
        text.push_str(unit);
        text
    }

    /// Percent of travel from centre, from raw units.
    fn pan(&self, sv: Sv) -> String {
        let offset = (sv - PAN_CENTRE).abs() as f64 / PAN_UNITS_PER_PERCENT;
        if sv == PAN_CENTRE {
            return if self.short { "C" } else { "Centre" }.to_string();
        }
        if sv < PAN_CENTRE {
            if self.short && sv == 0 {
                return "L".to_string();
            }
            let mut text = self.number(offset, self.caller);
            text.push('L');
            return text;
        }
        if self.short && sv == PAN_RIGHT {
            return "R".to_string();
        }
        let mut text = self.number(offset, self.caller);
        text.push('R');
        text
    }
}

fn enumerated(class: SvClass, sv: Sv) -> String {
    class
        .words()
        .and_then(|words| usize::try_from(sv).ok().and_then(|i| words.get(i)))
        .map(|word| word.to_string())
        .unwrap_or_else(|| sv.to_string())
}

/// Hz below 1 kHz, kHz above; always automatic precision.
fn frequency(hz: f64, short: bool) -> String {
    if hz >= 1000.0 {
        let pattern = if hz < 10_000.0 {
            NumberFormat::up_to(2)
        } else {
            NumberFormat::up_to(1)
        };
        let mut text = pattern.format(hz / 1000.0);
        text.push_str(if short { "k" } else { "kHz" });
        return text;
    }

    let pattern = if hz < 100.0 {
        NumberFormat::up_to(1)
    } else {
        NumberFormat::up_to(0)
    };
    let mut text = pattern.format(hz);
    if !short {
        text.push_str("Hz");
    }
    text
}

/// Dotted quad, high byte first.
// TODO: confirm the octet order against captured device traffic; the parser
// packs in the same order, so the two stay consistent either way.
fn ip_address(sv: Sv) -> String {
    let a = (sv >> 24) & 0xff;
    let b = (sv >> 16) & 0xff;
    let c = (sv >> 8) & 0xff;
    let d = sv & 0xff;
    format!("{}.{}.{}.{}", a, b, c, d)
}

/// Seconds since the Unix epoch, rendered in UTC.
fn clock(sv: Sv) -> String {
    match DateTime::from_timestamp(sv, 0) {
        Some(time) => time.format(CLOCK_FORMAT).to_string(),
        None => sv.to_string(),
    }
}

fn seconds(sv: Sv, short: bool) -> String {
    let minutes = sv / 60;
    let secs = sv % 60;

    if short {
        return if minutes == 0 {
            format!("{}s", secs)
        } else if secs == 0 {
            format!("{}m", minutes)
        } else {
            format!("{}s", sv)
        };
    }

    if minutes > 0 {
        if secs > 0 {
            format!("{}m {}s", minutes, secs)
        } else if minutes == 1 {
            "1min".to_string()
        } else {
            format!("{}mins", minutes)
        }
    } else {
        format!("{}secs", secs)
    }
}
