//! Transfer functions between raw values and engineering values.
//!
//! Each [`Transfer`] variant is one hardware quantization scheme: linear
//! fixed-point scalars, logarithmic decades for frequency and time, sample
//! counts for delay, and so on. Forward conversion is exact IEEE double
//! arithmetic; rounding happens only when converting back to a raw value.
//!
//! | Variant | raw → engineering | engineering → raw |
//! |---|---|---|
//! | `Identity` | `sv` | `round(v)` |
//! | `Scalar` | `sv / 10000` | `round(v * 10000)` |
//! | `Gain` | linear above -10 dB, logarithmic below | inverse of the same split |
//! | `Log` | `10^(sv / 1e6)` | `round(log10(v) * 1e6)` |
//! | `Speed` | `10^(sv / 1e6) / 1000` | `round(log10(v * 1000) * 1e6)` |
//! | `Delay` | `sv / 96000` | `round(v * 96000)` |
//! | `InputGain` | `sv * 6` | `round(v / 6)` |
//! | `FreeCycles` | `(1000 + sv) / 10` | `round(v * 10 - 1000)` |
//! | `Temperature` | `sv / 100` | `round(v * 100)` |
//! | `Float` | `sv / 2^24` | `round(v * 2^24)` |

use crate::types::{Sv, WIRE_MIN};

/// Scale of the linear fixed-point classes.
pub const SCALAR_MULTIPLIER: f64 = 10_000.0;

/// Raw value where the gain law switches from linear to logarithmic (-10 dB).
pub const GAIN_KNEE: Sv = -100_000;

/// Raw units per decade on the logarithmic part of the gain law.
const GAIN_LOG_SCALE: f64 = 200_000.0;

/// Raw units per decade for the logarithmic classes.
const LOG_SCALE: f64 = 1_000_000.0;

/// Delay line sample rate; delay values are counted in samples at 96 kHz.
pub const DELAY_SAMPLE_RATE: f64 = 96_000.0;

/// Scale of the 24-bit fixed-point float class.
const FLOAT_SCALE: f64 = 16_777_216.0;

/// Round to the nearest raw value, ties away from zero.
///
/// Values outside the `i64` range saturate and NaN becomes 0.
#[inline]
pub fn round_nearest(value: f64) -> Sv {
    value.round() as Sv
}

/// A raw/engineering conversion pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Transfer {
    /// The raw value is the engineering value.
    #[default]
    Identity,
    /// Linear fixed point, 10000 raw units per engineering unit.
    Scalar,
    /// Gain in dB: linear down to -10 dB, logarithmic below.
    Gain,
    /// Logarithmic frequency in Hz.
    Log,
    /// Logarithmic time constant in seconds.
    Speed,
    /// Delay in seconds, counted in samples at 96 kHz.
    Delay,
    /// Input card gain in 6 dB steps.
    InputGain,
    /// DSP free cycles in percent.
    FreeCycles,
    /// Temperature in hundredths of a degree.
    Temperature,
    /// 24-bit fixed-point fraction.
    Float,
}

impl Transfer {
    /// Convert a raw value to its engineering value.
    pub fn to_engineering(self, sv: Sv) -> f64 {
        let raw = sv as f64;
        match self {
            Transfer::Identity => raw,
            Transfer::Scalar => raw / SCALAR_MULTIPLIER,
            Transfer::Gain => {
                if sv >= GAIN_KNEE {
                    raw / SCALAR_MULTIPLIER
                } else {
                    let below_knee = (raw - GAIN_KNEE as f64).abs();
                    -10.0 * 10.0_f64.powf(below_knee / GAIN_LOG_SCALE)
                }
            }
            Transfer::Log => 10.0_f64.powf(raw / LOG_SCALE),
            Transfer::Speed => 10.0_f64.powf(raw / LOG_SCALE) / 1000.0,
            Transfer::Delay => raw / DELAY_SAMPLE_RATE,
            Transfer::InputGain => raw * 6.0,
            Transfer::FreeCycles => (1000.0 + raw) / 10.0,
            Transfer::Temperature => raw / 100.0,
            Transfer::Float => raw / FLOAT_SCALE,
        }
    }

    /// Convert an engineering value back to the nearest raw value.
    ///
    /// The logarithmic variants have no raw value for `value <= 0`; they
    /// return [`WIRE_MIN`] instead.
    pub fn from_engineering(self, value: f64) -> Sv {
        match self {
            Transfer::Identity => round_nearest(value),
            Transfer::Scalar => round_nearest(value * SCALAR_MULTIPLIER),
            Transfer::Gain => {
                if value < -10.0 {
                    round_nearest(
                        -(value / 10.0).abs().log10() * GAIN_LOG_SCALE + GAIN_KNEE as f64,
                    )
                } else {
                    round_nearest(value * SCALAR_MULTIPLIER)
                }
            }
            Transfer::Log => {
                if value <= 0.0 {
                    WIRE_MIN
                } else {
                    round_nearest(value.log10() * LOG_SCALE)
                }
            }
            Transfer::Speed => {
                if value <= 0.0 {
                    WIRE_MIN
                } else {
                    round_nearest((value * 1000.0).log10() * LOG_SCALE)
                }
            }
            Transfer::Delay => round_nearest(value * DELAY_SAMPLE_RATE),
            Transfer::InputGain => round_nearest(value / 6.0),
            Transfer::FreeCycles => round_nearest(value * 10.0 - 1000.0),
            Transfer::Temperature => round_nearest(value * 100.0),
            Transfer::Float => round_nearest(value * FLOAT_SCALE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Transfer; 10] = [
        Transfer::Identity,
        Transfer::Scalar,
        Transfer::Gain,
        Transfer::Log,
        Transfer::Speed,
        Transfer::Delay,
        Transfer::InputGain,
        Transfer::FreeCycles,
        Transfer::Temperature,
        Transfer::Float,
    ];

    #[test]
    fn test_round_nearest_ties_away_from_zero() {
        assert_eq!(round_nearest(2.5), 3);
        assert_eq!(round_nearest(-2.5), -3);
        assert_eq!(round_nearest(2.4999), 2);
        assert_eq!(round_nearest(f64::NAN), 0);
        assert_eq!(round_nearest(f64::INFINITY), i64::MAX);
    }

    #[test]
    fn test_scalar() {
        assert_eq!(Transfer::Scalar.to_engineering(5000), 0.5);
        assert_eq!(Transfer::Scalar.to_engineering(-30000), -3.0);
        assert_eq!(Transfer::Scalar.from_engineering(0.5), 5000);
    }

    #[test]
    fn test_gain_linear_region() {
        assert_eq!(Transfer::Gain.to_engineering(0), 0.0);
        assert_eq!(Transfer::Gain.to_engineering(10000), 1.0);
        assert_eq!(Transfer::Gain.to_engineering(GAIN_KNEE), -10.0);
        assert_eq!(Transfer::Gain.from_engineering(-10.0), GAIN_KNEE);
    }

    #[test]
    fn test_gain_log_region() {
        // One decade below the knee: -100 dB is 200000 raw units further down.
        assert!((Transfer::Gain.to_engineering(-300_000) - -100.0).abs() < 1e-9);
        assert_eq!(Transfer::Gain.from_engineering(-100.0), -300_000);
        // -80 dB sits just above the gain floor.
        assert_eq!(Transfer::Gain.from_engineering(-80.0), -280_618);
    }

    #[test]
    fn test_log_frequency() {
        assert_eq!(Transfer::Log.to_engineering(0), 1.0);
        assert!((Transfer::Log.to_engineering(3_000_000) - 1000.0).abs() < 1e-9);
        assert_eq!(Transfer::Log.from_engineering(1000.0), 3_000_000);
    }

    #[test]
    fn test_log_rejects_non_positive() {
        assert_eq!(Transfer::Log.from_engineering(0.0), WIRE_MIN);
        assert_eq!(Transfer::Log.from_engineering(-5.0), WIRE_MIN);
        assert_eq!(Transfer::Speed.from_engineering(0.0), WIRE_MIN);
    }

    #[test]
    fn test_speed() {
        // 10^3 ms = 1 s
        assert!((Transfer::Speed.to_engineering(3_000_000) - 1.0).abs() < 1e-12);
        assert_eq!(Transfer::Speed.from_engineering(1.0), 3_000_000);
        assert_eq!(Transfer::Speed.from_engineering(0.001), 0);
    }

    #[test]
    fn test_delay() {
        assert_eq!(Transfer::Delay.to_engineering(96_000), 1.0);
        assert_eq!(Transfer::Delay.from_engineering(0.0125), 1200);
    }

    #[test]
    fn test_small_scales() {
        assert_eq!(Transfer::InputGain.to_engineering(4), 24.0);
        assert_eq!(Transfer::InputGain.from_engineering(24.0), 4);
        assert_eq!(Transfer::FreeCycles.to_engineering(0), 100.0);
        assert_eq!(Transfer::FreeCycles.from_engineering(42.5), -575);
        assert_eq!(Transfer::Temperature.to_engineering(2550), 25.5);
        assert_eq!(Transfer::Float.to_engineering(8_388_608), 0.5);
    }

    #[test]
    fn test_round_trip_samples() {
        let samples: [Sv; 9] = [-2_000_000, -280_617, -100_001, -1, 0, 1, 4_301_030, 96_000, 7];
        for transfer in ALL {
            for sv in samples {
                assert_eq!(
                    transfer.from_engineering(transfer.to_engineering(sv)),
                    sv,
                    "{:?} failed to round-trip {}",
                    transfer,
                    sv
                );
            }
        }
    }
}
