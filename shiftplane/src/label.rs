// Copyright 2025 the Shiftplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis label maps.
//!
//! A [`LabelMap`] says which text to draw at which position along an axis. Positions are
//! values in the axis' own (display) coordinates; the text is free-form, which is what
//! lets a shifted axis show logical numbers at display positions.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::error::ShiftPlaneError;
use crate::format::format_tick_with_step;
use crate::range::AxisRange;

/// Key resolution of a map that was not built for a particular step.
const DEFAULT_RESOLUTION: f64 = 1.0e-6;

/// Fraction of the tick step within which two positions count as the same tick.
const STEP_FRACTION: f64 = 1.0e-6;

/// Ordered mapping from axis positions to label text, with unique keys.
///
/// Positions closer than the map's resolution share a key. Maps built for a step use a
/// resolution proportional to it, so ticks of any valid range stay distinct.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelMap {
    entries: Vec<(f64, String)>,
    index: HashMap<i64, usize>,
    resolution: f64,
}

impl Default for LabelMap {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            resolution: DEFAULT_RESOLUTION,
        }
    }
}

impl LabelMap {
    /// Creates an empty map with a resolution of `1e-6`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty map for ticks spaced `step` apart.
    pub fn for_step(step: f64) -> Self {
        let resolution = step * STEP_FRACTION;
        if !(resolution.is_finite() && resolution > 0.0) {
            return Self::new();
        }
        Self {
            resolution,
            ..Self::default()
        }
    }

    /// Positions closer than this share a label.
    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    /// Builds the label map for a shifted axis.
    ///
    /// Display ticks become the keys and the logical ticks at the same index become the
    /// text, formatted with the logical step. Both ranges are enumerated the same way, so
    /// equal spans and steps give sequences of equal length; anything else is a
    /// [`ShiftPlaneError::LabelMismatch`].
    pub fn zip_ticks(display: AxisRange, logical: AxisRange) -> Result<Self, ShiftPlaneError> {
        let display_ticks = display.ticks();
        let logical_ticks = logical.ticks();
        if display_ticks.len() != logical_ticks.len() {
            return Err(ShiftPlaneError::LabelMismatch {
                display: display_ticks.len(),
                logical: logical_ticks.len(),
            });
        }
        let mut out = Self::for_step(display.step);
        for (d, l) in display_ticks.zip(logical_ticks) {
            out.insert(d, format_tick_with_step(l, logical.step));
        }
        Ok(out)
    }

    /// Sets the label at `value`, returning the text it replaced.
    pub fn insert(&mut self, value: f64, text: impl Into<String>) -> Option<String> {
        let text = text.into();
        let k = key(value, self.resolution);
        if let Some(&i) = self.index.get(&k) {
            return Some(core::mem::replace(&mut self.entries[i].1, text));
        }
        self.index.insert(k, self.entries.len());
        self.entries.push((value, text));
        None
    }

    /// Copies every entry of `other` into `self`; equal keys take `other`'s text.
    ///
    /// The merged map keeps the finer of the two resolutions.
    pub fn merge(&mut self, other: Self) {
        if other.resolution < self.resolution {
            self.resolution = other.resolution;
            self.index.clear();
            for (i, (value, _)) in self.entries.iter().enumerate() {
                self.index.insert(key(*value, self.resolution), i);
            }
        }
        for (value, text) in other.entries {
            self.insert(value, text);
        }
    }

    /// Returns the label at `value`, if any.
    pub fn get(&self, value: f64) -> Option<&str> {
        let i = *self.index.get(&key(value, self.resolution))?;
        Some(self.entries[i].1.as_str())
    }

    /// Returns `true` if a label exists at `value`.
    pub fn contains(&self, value: f64) -> bool {
        self.index.contains_key(&key(value, self.resolution))
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no labels.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Labels in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &str)> {
        self.entries.iter().map(|(v, t)| (*v, t.as_str()))
    }
}

fn key(value: f64, resolution: f64) -> i64 {
    let q = (value / resolution)
        .round()
        .clamp(i64::MIN as f64, i64::MAX as f64);
    #[allow(
        clippy::cast_possible_truncation,
        reason = "rounded and clamped to the i64 range; NaN maps to 0"
    )]
    {
        q as i64
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn zip_pairs_display_positions_with_logical_text() {
        let labels =
            LabelMap::zip_ticks(AxisRange::new(0.0, 8.0, 1.0), AxisRange::new(-2.0, 6.0, 1.0))
                .unwrap();
        assert_eq!(labels.len(), 9);
        assert_eq!(labels.get(0.0), Some("-2"));
        assert_eq!(labels.get(2.0), Some("0"));
        assert_eq!(labels.get(8.0), Some("6"));
        assert_eq!(labels.get(9.0), None);
    }

    #[test]
    fn zip_rejects_sequences_of_different_length() {
        let err =
            LabelMap::zip_ticks(AxisRange::new(0.0, 9.0, 1.0), AxisRange::new(-2.0, 6.0, 1.0))
                .unwrap_err();
        assert_eq!(
            err,
            ShiftPlaneError::LabelMismatch {
                display: 10,
                logical: 9
            }
        );
    }

    #[test]
    fn keys_stay_unique() {
        let mut labels = LabelMap::new();
        assert_eq!(labels.insert(1.0, "a"), None);
        assert_eq!(labels.insert(1.0 + 1.0e-12, "b"), Some("a".into()));
        assert_eq!(labels.len(), 1);
        assert_eq!(labels.get(1.0), Some("b"));
    }

    #[test]
    fn merge_overrides_and_appends_in_order() {
        let mut a = LabelMap::new();
        a.insert(0.25, "0.25");
        a.insert(0.5, "0.50");
        let mut b = LabelMap::new();
        b.insert(0.5, "half");
        b.insert(0.0, "0");
        a.merge(b);
        let got: Vec<(f64, &str)> = a.iter().collect();
        assert_eq!(got, vec![(0.25, "0.25"), (0.5, "half"), (0.0, "0")]);
    }

    #[test]
    fn ticks_finer_than_a_millionth_keep_their_own_labels() {
        let logical = AxisRange::new(0.0, 1.0e-5, 1.0e-7);
        let display = AxisRange::new(3.0, 3.0 + 1.0e-5, 1.0e-7);
        let labels = LabelMap::zip_ticks(display, logical).unwrap();
        assert_eq!(labels.len(), 101);
        assert_eq!(labels.get(3.0), Some("0.0000000"));
        assert_eq!(labels.get(3.0 + 1.0e-7), Some("0.0000001"));
        assert_eq!(labels.get(3.0 + 1.0e-5), Some("0.0000100"));
    }

    #[test]
    fn merge_adopts_the_finer_resolution() {
        let mut coarse = LabelMap::new();
        coarse.insert(0.0, "origin");
        let mut fine = LabelMap::for_step(1.0e-7);
        fine.insert(1.0e-7, "a");
        fine.insert(2.0e-7, "b");
        coarse.merge(fine);
        assert!(coarse.resolution() < 1.0e-12);
        assert_eq!(coarse.len(), 3);
        assert_eq!(coarse.get(0.0), Some("origin"));
        assert_eq!(coarse.get(2.0e-7), Some("b"));
    }
}
