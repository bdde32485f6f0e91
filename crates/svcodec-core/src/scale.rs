//! Display windows for faders and meters.
//!
//! A [`Scale`] narrows a class to the part of its range a widget shows. The
//! window ends are raw values, either given directly or parsed from text
//! such as `"-40dB"`. Positions inside the window run from 0.0 to 1.0 and
//! are derived from the class percentage, so they follow the class's own
//! raw spacing.
//!
//! # Example
//!
//! ```ignore
//! use svcodec_core::{lookup, Scale};
//!
//! let fader = Scale::new(lookup(106)).with_text_bounds(Some("-40dB"), Some("+10dB"));
//! for tick in fader.ticks(6) {
//!     println!("{:.3} {}", tick.position, tick.label);
//! }
//! ```

use crate::config::FormatOptions;
use crate::range::RangeMapper;
use crate::registry::ClassDescriptor;
use crate::types::Sv;

/// Windows wider than this many raw units get a coarser slider step.
const FINE_STEP_SPAN: Sv = 2_000_000;

/// Decimal places used for tick labels.
const TICK_DECIMAL_PLACES: i32 = 2;

/// One labelled mark on a scale.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Position within the window (0.0 to 1.0).
    pub position: f64,
    /// Raw value at that position.
    pub value: Sv,
    /// Long-form label.
    pub label: String,
}

/// A class narrowed to a display window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale<'d> {
    descriptor: &'d ClassDescriptor,
    min: Sv,
    max: Sv,
}

impl<'d> Scale<'d> {
    /// A window spanning the full class bounds.
    pub const fn new(descriptor: &'d ClassDescriptor) -> Self {
        Self {
            descriptor,
            min: descriptor.min,
            max: descriptor.max,
        }
    }

    /// Set the window ends as raw values.
    pub const fn with_bounds(mut self, min: Sv, max: Sv) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Set the window ends from display text. A missing end keeps its
    /// current value.
    pub fn with_text_bounds(mut self, min: Option<&str>, max: Option<&str>) -> Self {
        if let Some(text) = min {
            self.min = self.descriptor.parse(text);
        }
        if let Some(text) = max {
            self.max = self.descriptor.parse(text);
        }
        self
    }

    /// The class being displayed.
    pub const fn descriptor(&self) -> &'d ClassDescriptor {
        self.descriptor
    }

    pub const fn min(&self) -> Sv {
        self.min
    }

    pub const fn max(&self) -> Sv {
        self.max
    }

    fn percentage_window(&self) -> (f64, f64) {
        (
            self.descriptor.to_percentage(self.min),
            self.descriptor.to_percentage(self.max),
        )
    }

    /// Position of a raw value in the window.
    ///
    /// Not clamped; a window with no width puts every value at 0.5.
    pub fn position(&self, sv: Sv) -> f64 {
        let (p_min, p_max) = self.percentage_window();
        let span = p_max - p_min;
        if span == 0.0 {
            return 0.5;
        }
        (self.descriptor.to_percentage(sv) - p_min) / span
    }

    /// Raw value at a position in the window.
    pub fn value_at(&self, position: f64) -> Sv {
        let (p_min, p_max) = self.percentage_window();
        self.descriptor
            .from_percentage(p_min + position * (p_max - p_min))
    }

    /// Whether a position falls inside the window (ends included).
    pub fn contains(&self, position: f64) -> bool {
        (0.0..=1.0).contains(&position)
    }

    /// Slider step in raw units.
    pub fn step(&self) -> Sv {
        let span = self.max.saturating_sub(self.min);
        if span > FINE_STEP_SPAN {
            span / FINE_STEP_SPAN
        } else {
            1
        }
    }

    /// `count` evenly spaced ticks from the bottom of the window to the top.
    pub fn ticks(&self, count: usize) -> Vec<Tick> {
        let options = FormatOptions::new().with_decimal_places(TICK_DECIMAL_PLACES);
        let last = count.saturating_sub(1).max(1) as f64;

        (0..count)
            .map(|i| {
                let position = i as f64 / last;
                let value = self.value_at(position);
                Tick {
                    position,
                    value,
                    label: self.descriptor.format_with(value, &options),
                }
            })
            .collect()
    }
}

impl RangeMapper for Scale<'_> {
    fn normalize(&self, sv: Sv) -> f64 {
        self.position(sv)
    }

    fn denormalize(&self, position: f64) -> Sv {
        self.value_at(position)
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

    #[test]
    fn test_default_window_is_class_bounds() {
        let scale = Scale::new(SvClass::Gain.descriptor());
        assert_eq!((scale.min(), scale.max()), (GAIN_FLOOR, GAIN_MAX));
        assert_eq!(scale.position(GAIN_FLOOR), 0.0);
        assert_eq!(scale.position(GAIN_MAX), 1.0);
    }

    #[test]
    fn test_text_bounds() {
        let scale = Scale::new(SvClass::Gain.descriptor())
            .with_text_bounds(Some("-10dB"), Some("+10dB"));
        assert_eq!((scale.min(), scale.max()), (-100_000, 100_000));
        assert!((scale.position(0) - 0.5).abs() < 1e-9);
        assert_eq!(scale.value_at(0.5), 0);

        let top_only = Scale::new(SvClass::Gain.descriptor()).with_text_bounds(None, Some("0dB"));
        assert_eq!((top_only.min(), top_only.max()), (GAIN_FLOOR, 0));
    }

    #[test]
    fn test_outside_window() {
        let scale = Scale::new(SvClass::Percentage.descriptor()).with_bounds(0, 10000);
        assert!(scale.position(-5000) < 0.0);
        assert!(scale.position(20000) > 1.0);
        assert!(!scale.contains(scale.position(-5000)));
        assert!(scale.contains(scale.position(10000)));
        assert!(scale.contains(0.0));
    }

    #[test]
    fn test_empty_window() {
        let scale = Scale::new(SvClass::Level.descriptor()).with_bounds(5, 5);
        assert_eq!(scale.position(5), 0.5);
        assert_eq!(scale.position(1_000_000), 0.5);
        assert_eq!(scale.step(), 1);
    }

    #[test]
    fn test_step() {
        assert_eq!(Scale::new(SvClass::Gain.descriptor()).step(), 1);
        assert_eq!(Scale::new(SvClass::Frequency.descriptor()).step(), 2147);
        let wide = Scale::new(SvClass::Level.descriptor()).with_bounds(0, 6_000_001);
        assert_eq!(wide.step(), 3);
    }

    #[test]
    fn test_ticks() {
        let scale = Scale::new(SvClass::Percentage.descriptor()).with_bounds(0, 10000);
        let ticks = scale.ticks(5);
        let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["0%", "25%", "50%", "75%", "100%"]);
        assert_eq!(ticks[1].value, 2500);
        assert_eq!(ticks[4].position, 1.0);
    }

    #[test]
    fn test_tick_labels_use_two_places() {
        let scale = Scale::new(SvClass::Level.descriptor()).with_bounds(0, 10000);
        let ticks = scale.ticks(4);
        assert_eq!(ticks[1].label, "+0.33dBu");
    }

    #[test]
    fn test_degenerate_tick_counts() {
        let scale = Scale::new(SvClass::Percentage.descriptor()).with_bounds(0, 10000);
        assert!(scale.ticks(0).is_empty());
        let single = scale.ticks(1);
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].value, 0);
    }

    #[test]
    fn test_range_mapper() {
        let scale = Scale::new(SvClass::Decibels.descriptor()).with_bounds(-200_000, 200_000);
        let mapper: &dyn RangeMapper = &scale;
        assert_eq!(mapper.range(), (-200_000, 200_000));
        assert_eq!(mapper.denormalize(1.0), 200_000);
        assert!((mapper.normalize(0) - 0.5).abs() < 1e-9);
    }
}
