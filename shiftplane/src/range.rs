// Copyright 2025 the Shiftplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis identifiers and stepped axis ranges.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::error::ConfigurationError;

/// Relative tolerance used when counting steps and checking divisibility.
pub const TICK_EPSILON: f64 = 1.0e-9;

/// Upper bound on the number of ticks a single range may enumerate.
///
/// [`AxisRange::validate`] rejects denser ranges, so a validated range never loses ticks.
pub const MAX_TICKS: usize = 1_000_000;

/// One of the two plane axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The horizontal axis. This is the only axis that is ever shifted.
    X,
    /// The vertical axis.
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X => "x",
            Self::Y => "y",
        })
    }
}

/// An inclusive `(min, max, step)` range along one axis.
///
/// The same type carries logical ranges (what the caller thinks in) and display ranges
/// (what the native grid is built with); [`AxisShift`](crate::AxisShift) converts between
/// them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
    /// Distance between consecutive ticks or samples.
    pub step: f64,
}

impl AxisRange {
    /// Creates a range. Call [`AxisRange::validate`] before relying on it.
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Same bounds, different step. Handy for sampling a plane's range more densely.
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Returns `max - min`.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Checks that the bounds are finite, ordered, the step is positive, and the range
    /// has at most [`MAX_TICKS`] ticks.
    pub fn validate(&self, axis: Axis) -> Result<(), ConfigurationError> {
        if !(self.min.is_finite() && self.max.is_finite() && self.step.is_finite()) {
            return Err(ConfigurationError::NonFinite { axis });
        }
        if self.min >= self.max {
            return Err(ConfigurationError::EmptyRange {
                axis,
                min: self.min,
                max: self.max,
            });
        }
        if self.step <= 0.0 {
            return Err(ConfigurationError::NonPositiveStep {
                axis,
                step: self.step,
            });
        }
        let steps = self.span() / self.step;
        let whole_steps = (steps + TICK_EPSILON).floor();
        if !whole_steps.is_finite() || whole_steps >= MAX_TICKS as f64 {
            return Err(ConfigurationError::TooManyTicks {
                axis,
                steps,
                limit: MAX_TICKS,
            });
        }
        Ok(())
    }

    /// Like [`AxisRange::validate`], and additionally requires `step` to divide the span.
    pub fn validate_even(&self, axis: Axis) -> Result<(), ConfigurationError> {
        self.validate(axis)?;
        if !self.is_evenly_divided() {
            return Err(ConfigurationError::UnevenStep {
                axis,
                span: self.span(),
                step: self.step,
            });
        }
        Ok(())
    }

    /// Returns `true` if the span is a whole number of steps (within tolerance).
    pub fn is_evenly_divided(&self) -> bool {
        let ratio = self.span() / self.step;
        if !ratio.is_finite() {
            return false;
        }
        (ratio - ratio.round()).abs() <= TICK_EPSILON * ratio.abs().max(1.0)
    }

    /// Returns `true` if `v` lies within the bounds (within tolerance).
    pub fn contains(&self, v: f64) -> bool {
        let eps = TICK_EPSILON * self.span().abs().max(1.0);
        v >= self.min - eps && v <= self.max + eps
    }

    /// Number of ticks `min, min + step, ...` that do not pass `max`.
    ///
    /// Invalid ranges have no ticks, and unvalidated ranges are cut off at [`MAX_TICKS`].
    pub fn tick_count(&self) -> usize {
        if self.step <= 0.0 || self.min > self.max {
            return 0;
        }
        let steps = (self.span() / self.step + TICK_EPSILON).floor();
        if !(steps.is_finite() && steps >= 0.0) {
            return 0;
        }
        let steps = steps.min((MAX_TICKS - 1) as f64);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "finite, non-negative, and capped at MAX_TICKS"
        )]
        let steps = steps as usize;
        steps + 1
    }

    /// Tick values, computed by index so every range with the same span and step yields
    /// the same count in the same order.
    pub fn ticks(self) -> impl ExactSizeIterator<Item = f64> {
        (0..self.tick_count()).map(move |i| self.min + self.step * i as f64)
    }

    /// Sample positions: the ticks, plus `max` itself when the span is not a whole number
    /// of steps.
    pub fn samples(self) -> Vec<f64> {
        let mut out: Vec<f64> = self.ticks().collect();
        let eps = TICK_EPSILON * self.step;
        if let Some(&last) = out.last()
            && last < self.max - eps
        {
            out.push(self.max);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn ticks_include_max_when_evenly_divided() {
        let ticks: Vec<f64> = AxisRange::new(-2.0, 6.0, 1.0).ticks().collect();
        assert_eq!(ticks, vec![-2.0, -1.0, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn tick_count_tolerates_accumulated_error() {
        // 0.1 * 10 is not exactly 1.0 in binary.
        let r = AxisRange::new(0.0, 1.0, 0.1);
        assert_eq!(r.tick_count(), 11);
        assert!(r.is_evenly_divided());
    }

    #[test]
    fn samples_append_max_for_uneven_span() {
        let r = AxisRange::new(0.0, 1.0, 0.3);
        assert!(!r.is_evenly_divided());
        let s = r.samples();
        assert_eq!(s.len(), 5);
        assert_eq!(*s.last().unwrap(), 1.0);
    }

    #[test]
    fn validate_rejects_bad_ranges() {
        assert_eq!(
            AxisRange::new(1.0, 1.0, 1.0).validate(Axis::X),
            Err(ConfigurationError::EmptyRange {
                axis: Axis::X,
                min: 1.0,
                max: 1.0
            })
        );
        assert_eq!(
            AxisRange::new(0.0, 1.0, 0.0).validate(Axis::Y),
            Err(ConfigurationError::NonPositiveStep {
                axis: Axis::Y,
                step: 0.0
            })
        );
        assert_eq!(
            AxisRange::new(0.0, f64::NAN, 1.0).validate(Axis::Y),
            Err(ConfigurationError::NonFinite { axis: Axis::Y })
        );
        assert!(matches!(
            AxisRange::new(0.0, 1.0, 0.3).validate_even(Axis::X),
            Err(ConfigurationError::UnevenStep { .. })
        ));
    }

    #[test]
    fn validate_rejects_ranges_denser_than_the_tick_limit() {
        // 999_999 steps is exactly MAX_TICKS ticks.
        let at_limit = AxisRange::new(0.0, 999_999.0, 1.0);
        assert_eq!(at_limit.validate(Axis::X), Ok(()));
        assert_eq!(at_limit.tick_count(), MAX_TICKS);

        let over = AxisRange::new(0.0, 1_000_000.0, 1.0);
        assert_eq!(
            over.validate(Axis::Y),
            Err(ConfigurationError::TooManyTicks {
                axis: Axis::Y,
                steps: 1_000_000.0,
                limit: MAX_TICKS,
            })
        );
        assert!(matches!(
            AxisRange::new(0.0, 1.0e300, 1.0e-300).validate(Axis::X),
            Err(ConfigurationError::TooManyTicks { .. })
        ));
    }

    #[test]
    fn invalid_ranges_have_no_ticks() {
        assert_eq!(AxisRange::new(3.0, 1.0, 1.0).tick_count(), 0);
        assert_eq!(AxisRange::new(0.0, 1.0, -1.0).tick_count(), 0);
    }
}
