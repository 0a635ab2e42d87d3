// Copyright 2025 the Shiftplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capabilities the shift layer needs from a native grid primitive.
//!
//! The shift layer never draws anything itself. It asks a [`PlaneBackend`] for a grid built
//! in display coordinates and then only uses the operations of [`NativeGrid`]. The crate
//! ships [`NumberPlaneBackend`](crate::NumberPlaneBackend); other renderers plug in here.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Point;

use crate::label::LabelMap;
use crate::range::{Axis, AxisRange};
use crate::style::PlaneStyle;

/// Parameters for creating a native grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridRequest {
    /// x range in the grid's own (display) coordinates.
    pub x_range: AxisRange,
    /// y range; never shifted.
    pub y_range: AxisRange,
    /// Scene width the x range is stretched over.
    pub x_length: f64,
    /// Scene height the y range is stretched over.
    pub y_length: f64,
    /// Scene position of the grid's centre.
    pub center: Point,
}

/// Creates native grids.
pub trait PlaneBackend {
    /// The grid type this backend produces.
    type Grid: NativeGrid;

    /// Builds a grid covering `request` with the given style.
    fn create_grid(&self, request: &GridRequest, style: &PlaneStyle) -> Self::Grid;
}

/// A grid that maps its own coordinates to scene points.
///
/// All values passed in are in the grid's coordinates, which for a shifted plane means
/// display x. The axes cross at the grid's `(0, 0)`.
pub trait NativeGrid {
    /// The x range the grid was built with.
    fn x_range(&self) -> AxisRange;

    /// The y range the grid was built with.
    fn y_range(&self) -> AxisRange;

    /// Adds labels to an axis; entries at existing positions replace the old text.
    fn add_labels(&mut self, axis: Axis, labels: LabelMap);

    /// The labels currently attached to an axis.
    fn labels(&self, axis: Axis) -> &LabelMap;

    /// Maps grid coordinates to scene points.
    fn coords_to_point(&self, coords: &[Point]) -> Vec<Point>;

    /// Maps a value on one axis to the scene point on that axis' line.
    fn value_to_point(&self, axis: Axis, value: f64) -> Point;
}
