//! Reading display text back into raw values.
//!
//! Parsing is best effort and never fails. The text is reduced to a number
//! first (unit suffixes, signs like "+" and spacing are dropped), then each
//! class applies its own scaling and sentinel words. Text with no number in
//! it reads as 0.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use svcodec_utils::{float_prefix, int_prefix};

use crate::class::SvClass;
use crate::registry::{
    ClassDescriptor, COMPRESSOR_THRESHOLD_INF, DECIBELS_OUT, GAIN_FLOOR, NOTCH, PAN_CENTRE,
    RATIO_INF,
};
use crate::types::{fold_to_wire, Sv};

/// Pan value entered as a bare "R". One raw unit short of fully right.
const PAN_RIGHT_TOKEN: Sv = 9_999;

/// Layouts tried, in order, for naive clock text (read as UTC).
const CLOCK_LAYOUTS: [&str; 4] = [
    "%A, %B %d, %Y %I:%M:%S %p",
    "%m/%d/%Y, %I:%M:%S %p",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

/// Parse display text into a raw value.
pub fn parse(descriptor: &ClassDescriptor, text: &str) -> Sv {
    let lower = text.to_lowercase();
    let class = descriptor.class;

    // Ratios are written "4:1"; only the part before the colon is a number.
    let numeric = match class {
        SvClass::Ratio => lower.split(':').next().unwrap_or_default(),
        _ => lower.as_str(),
    };

    let mut value = if has_sentinel(&lower) {
        0.0
    } else {
        number(numeric)
    };
    if text.contains('k') {
        value *= 1000.0;
    }

    match class {
        SvClass::Gain => {
            if lower.contains("-inf") || lower.contains("-∞") {
                GAIN_FLOOR
            } else {
                descriptor.from_engineering(value)
            }
        }
        SvClass::DecibelsOut => {
            if lower.contains("out") {
                DECIBELS_OUT
            } else {
                descriptor.from_engineering(value)
            }
        }
        SvClass::Mute
        | SvClass::Polarity
        | SvClass::Switch
        | SvClass::Gate
        | SvClass::Online
        | SvClass::YesNo => {
            let on_word = class.words().and_then(|words| words.get(1));
            let named = on_word.is_some_and(|word| text.contains(word));
            Sv::from(named || value > 0.0)
        }
        SvClass::Delay | SvClass::Speed => {
            if text.contains("µs") || text.contains('u') || text.contains('U') {
                value /= 1_000_000.0;
            } else if text.contains('m') || text.contains('M') {
                value /= 1000.0;
            }
            descriptor.from_engineering(value)
        }
        SvClass::CompressorThreshold => {
            if lower.contains("inf") || lower.contains('∞') {
                COMPRESSOR_THRESHOLD_INF
            } else {
                descriptor.from_engineering(value)
            }
        }
        SvClass::Ratio => {
            if lower.contains("inf") || lower.contains('∞') {
                RATIO_INF
            } else {
                descriptor.from_engineering(value)
            }
        }
        SvClass::Percentage => descriptor.from_engineering(value / 100.0),
        SvClass::Notch => {
            if lower.contains("notch") {
                NOTCH
            } else {
                descriptor.from_engineering(value)
            }
        }
        SvClass::Pan => pan(descriptor, text, value),
        SvClass::IPAddress => ip_address(text),
        SvClass::RealTimeClock => clock(text),
        SvClass::Seconds => seconds(text),
        SvClass::Byte
        | SvClass::SignedByte
        | SvClass::SignedWord
        | SvClass::Word
        | SvClass::Long
        | SvClass::FreeMemory => integer(text),
        SvClass::UnsignedLong | SvClass::Hex | SvClass::Hex8 => {
            if value >= 0.0 {
                integer(text)
            } else {
                0
            }
        }
        SvClass::LevelPerSec => descriptor.from_engineering(value * 100.0),
        _ => descriptor.from_engineering(value),
    }
}

impl ClassDescriptor {
    /// Parse display text into a raw value; see [`parse`].
    pub fn parse(&self, text: &str) -> Sv {
        parse(self, text)
    }
}

/// Words that stand for a sentinel rather than a number.
fn has_sentinel(lower: &str) -> bool {
    lower.contains('∞') || lower.contains("inf") || lower.contains("out") || lower.contains("notch")
}

/// Numeric content of the text: digits, signs, points and commas only.
fn number(text: &str) -> f64 {
    let kept: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '-' | '.' | ','))
        .collect();

    match float_prefix(&kept) {
        Some(value) => value,
        None => {
            log::debug!("No number in {:?}, reading as 0", text);
            0.0
        }
    }
}

fn integer(text: &str) -> Sv {
    fold_to_wire(int_prefix(text).unwrap_or(0))
}

fn pan(descriptor: &ClassDescriptor, text: &str, value: f64) -> Sv {
    let single = text.chars().count() == 1;
    if text.contains(['L', 'l']) {
        if single {
            0
        } else {
            descriptor.from_engineering(0.5 - value / 200.0)
        }
    } else if text.contains(['R', 'r']) {
        if single {
            PAN_RIGHT_TOKEN
        } else {
            descriptor.from_engineering(0.5 + value / 200.0)
        }
    } else {
        PAN_CENTRE
    }
}

/// Dotted quad, high byte first. A missing octet repeats the last one given.
fn ip_address(text: &str) -> Sv {
    let mut rest = text;
    let mut ip: i32 = 0;
    for _ in 0..4 {
        let segment = match rest.split_once('.') {
            Some((segment, tail)) => {
                rest = tail;
                segment
            }
            None => rest,
        };
        let octet = int_prefix(segment).unwrap_or(0).min(0xff) as i32;
        ip = ip.wrapping_shl(8).wrapping_add(octet);
    }
    Sv::from(ip)
}

/// Date-time text to whole seconds since the Unix epoch, or 0.
fn clock(text: &str) -> Sv {
    let text = text.trim();
    if let Ok(time) = DateTime::parse_from_rfc3339(text) {
        return time.timestamp();
    }
    for layout in CLOCK_LAYOUTS {
        if let Ok(time) = NaiveDateTime::parse_from_str(text, layout) {
            return time.and_utc().timestamp();
        }
    }
    if let Some(midnight) = NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return midnight.and_utc().timestamp();
    }
    log::debug!("Unrecognised date-time {:?}, reading as 0", text);
    0
}

/// `"<m>m <s>s"`, `"<m>:<s>"`, `"<m>min"` or plain seconds.
fn seconds(text: &str) -> Sv {
    let (minutes, rest) = match text.find(['M', 'm', ':']) {
        Some(at) => {
            let minutes = int_prefix(&text[..at]).unwrap_or(0);
            // The separator is a single ASCII byte.
            (minutes, &text[at + 1..])
        }
        None => (0, text),
    };
    let secs = int_prefix(rest).unwrap_or(0);
    fold_to_wire(minutes.saturating_mul(60).saturating_add(secs))
}
