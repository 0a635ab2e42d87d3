// Copyright 2025 the Shiftplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The logical/display conversion for the shifted x-axis.
//!
//! A shifted plane is built in *display* coordinates, where the logical x-minimum sits at
//! display `x = 0` so the native y-axis lands on the plane's left border. Everything the
//! caller supplies stays in *logical* coordinates. [`AxisShift`] is the only place that
//! converts between the two; the grid builder, sampler, and point mapper all go through it.

use kurbo::Point;

use crate::range::AxisRange;

/// Returns the offset that moves `logical_x_min` to display zero.
pub fn compute_offset(logical_x_min: f64) -> f64 {
    -logical_x_min
}

/// A constant horizontal translation between logical and display x.
///
/// y is never shifted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisShift {
    offset: f64,
}

impl AxisShift {
    /// Creates the shift that anchors `logical_x_min` at display zero.
    pub fn from_logical_min(logical_x_min: f64) -> Self {
        Self {
            offset: compute_offset(logical_x_min),
        }
    }

    /// The value added to every logical x.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Logical x to display x.
    pub fn to_display(&self, logical_x: f64) -> f64 {
        logical_x + self.offset
    }

    /// Display x to logical x.
    pub fn to_logical(&self, display_x: f64) -> f64 {
        display_x - self.offset
    }

    /// Shifts both bounds of a logical range; the step is unchanged.
    pub fn to_display_range(&self, logical: AxisRange) -> AxisRange {
        AxisRange::new(
            self.to_display(logical.min),
            self.to_display(logical.max),
            logical.step,
        )
    }

    /// Shifts the x of a logical point, leaving y alone.
    pub fn to_display_point(&self, logical: Point) -> Point {
        Point::new(self.to_display(logical.x), logical.y)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn logical_min_maps_to_display_zero() {
        for min in [-2.0, 0.0, 3.5, -1.0e6, 1.0e-3] {
            let shift = AxisShift::from_logical_min(min);
            assert_eq!(shift.to_display(min), 0.0, "min = {min}");
        }
    }

    #[test]
    fn display_logical_round_trip() {
        let shift = AxisShift::from_logical_min(-2.0);
        for v in [-10.0, -2.0, 0.0, 0.25, 3.0, 8.0, 123.456] {
            assert!((shift.to_display(shift.to_logical(v)) - v).abs() < 1e-12);
            assert!((shift.to_logical(shift.to_display(v)) - v).abs() < 1e-12);
        }
    }

    #[test]
    fn display_range_keeps_step() {
        let shift = AxisShift::from_logical_min(-2.0);
        let display = shift.to_display_range(AxisRange::new(-2.0, 6.0, 0.5));
        assert_eq!(display, AxisRange::new(0.0, 8.0, 0.5));
    }

    #[test]
    fn points_shift_only_horizontally() {
        let shift = AxisShift::from_logical_min(-2.0);
        assert_eq!(
            shift.to_display_point(Point::new(1.0, 0.5)),
            Point::new(3.0, 0.5)
        );
    }
}
