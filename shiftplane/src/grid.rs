// Copyright 2025 the Shiftplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Building a number plane whose y-axis sits on the left border.
//!
//! A native grid puts its y-axis at its own `x = 0`. To move that axis to the left edge
//! without touching the grid's internals, the grid is built over a *display* x range
//! shifted so the logical minimum lands on zero, and the x labels are replaced with the
//! logical values. The y range is passed through unchanged.

extern crate alloc;

use kurbo::{Point, Size};

use crate::backend::{GridRequest, NativeGrid, PlaneBackend};
use crate::error::{ConfigurationError, ShiftPlaneError};
use crate::format::format_tick_with_step;
use crate::label::LabelMap;
use crate::range::{Axis, AxisRange};
use crate::scene::{Drawable, Primitive};
use crate::shift::AxisShift;
use crate::style::PlaneStyle;

/// Specification for a shifted plane (ranges, frame and style; no grid yet).
#[derive(Clone, Debug, PartialEq)]
pub struct ShiftedPlaneSpec {
    /// x range in logical units. Its step must evenly divide its span.
    pub logical_x: AxisRange,
    /// y range; never shifted.
    pub y_range: AxisRange,
    /// Size of the frame the plane is fitted into, before padding.
    pub frame: Size,
    /// Plane styling, including frame padding.
    pub style: PlaneStyle,
}

impl ShiftedPlaneSpec {
    /// Creates a spec with the default style.
    pub fn new(logical_x: AxisRange, y_range: AxisRange, frame: Size) -> Self {
        Self {
            logical_x,
            y_range,
            frame,
            style: PlaneStyle::default(),
        }
    }

    /// Sets the style.
    pub fn with_style(mut self, style: PlaneStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the frame size.
    pub fn with_frame(mut self, frame: Size) -> Self {
        self.frame = frame;
        self
    }

    /// Returns the plane's scene width and height: the frame minus padding on each side.
    pub fn plane_lengths(&self) -> Result<(f64, f64), ConfigurationError> {
        let x_length = self.frame.width - 2.0 * self.style.frame_padding_x;
        let y_length = self.frame.height - 2.0 * self.style.frame_padding_y;
        if !(x_length.is_finite() && x_length > 0.0) {
            return Err(ConfigurationError::FrameTooSmall {
                axis: Axis::X,
                extent: self.frame.width,
                padding: self.style.frame_padding_x,
            });
        }
        if !(y_length.is_finite() && y_length > 0.0) {
            return Err(ConfigurationError::FrameTooSmall {
                axis: Axis::Y,
                extent: self.frame.height,
                padding: self.style.frame_padding_y,
            });
        }
        Ok((x_length, y_length))
    }

    /// Validates the spec and builds the plane with `backend`.
    ///
    /// Nothing is created unless every parameter is valid. When the y range contains 0,
    /// the origin gets a y label printed with the y step's precision (`"0.00"` for a step
    /// of `0.25`).
    pub fn build<B: PlaneBackend>(
        &self,
        backend: &B,
    ) -> Result<ShiftedPlane<B::Grid>, ShiftPlaneError> {
        self.logical_x.validate_even(Axis::X)?;
        self.y_range.validate(Axis::Y)?;
        let (x_length, y_length) = self.plane_lengths()?;

        let shift = AxisShift::from_logical_min(self.logical_x.min);
        let display_x = shift.to_display_range(self.logical_x);
        let x_labels = LabelMap::zip_ticks(display_x, self.logical_x)?;

        // The zipped map is the whole x label set, so the native numbers stay off.
        let style = self.style.clone().with_x_numbers(false);
        let request = GridRequest {
            x_range: display_x,
            y_range: self.y_range,
            x_length,
            y_length,
            center: Point::new(0.5 * self.frame.width, 0.5 * self.frame.height),
        };
        let mut grid = backend.create_grid(&request, &style);
        grid.add_labels(Axis::X, x_labels.clone());

        // Native planes leave the origin unlabelled; here it marks the bottom-left corner.
        if self.y_range.contains(0.0) {
            let mut origin = LabelMap::for_step(self.y_range.step);
            origin.insert(0.0, format_tick_with_step(0.0, self.y_range.step));
            grid.add_labels(Axis::Y, origin);
        } else {
            tracing::debug!(
                y_min = self.y_range.min,
                y_max = self.y_range.max,
                "y range excludes the origin; no origin label"
            );
        }

        tracing::debug!(
            offset = shift.offset(),
            display_min = display_x.min,
            display_max = display_x.max,
            x_length,
            y_length,
            labels = x_labels.len(),
            "built shifted plane"
        );

        Ok(ShiftedPlane {
            shift,
            logical_x: self.logical_x,
            display_x,
            x_labels,
            grid,
        })
    }
}

/// A native grid built in display coordinates, plus the shift that produced it.
///
/// The plane is read-only once built; samplers and mappers borrow it.
#[derive(Clone, Debug)]
pub struct ShiftedPlane<G> {
    shift: AxisShift,
    logical_x: AxisRange,
    display_x: AxisRange,
    x_labels: LabelMap,
    grid: G,
}

impl<G: NativeGrid> ShiftedPlane<G> {
    /// The logical/display conversion for this plane.
    pub fn shift(&self) -> AxisShift {
        self.shift
    }

    /// Shorthand for `self.shift().offset()`.
    pub fn offset(&self) -> f64 {
        self.shift.offset()
    }

    /// The x range in logical units.
    pub fn logical_x_range(&self) -> AxisRange {
        self.logical_x
    }

    /// The x range the native grid was built with.
    pub fn display_x_range(&self) -> AxisRange {
        self.display_x
    }

    /// The (unshifted) y range.
    pub fn y_range(&self) -> AxisRange {
        self.grid.y_range()
    }

    /// The logical labels attached to the x-axis, keyed by display position.
    pub fn x_labels(&self) -> &LabelMap {
        &self.x_labels
    }

    /// The y-axis labels, including the re-added origin.
    pub fn y_labels(&self) -> &LabelMap {
        self.grid.labels(Axis::Y)
    }

    /// The native grid.
    pub fn grid(&self) -> &G {
        &self.grid
    }
}

impl<G: Drawable> Drawable for ShiftedPlane<G> {
    fn primitives(&self) -> alloc::vec::Vec<Primitive> {
        self.grid.primitives()
    }
}
