// Copyright 2025 the Shiftplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A number plane whose x axis starts at zero while its labels show logical values.
//!
//! Native grids only draw non-negative x ranges well when the y axis sits on the left
//! border. This crate keeps two coordinate systems apart:
//! - **Logical** coordinates are what users think in (`x` in `[-2, 6]`).
//! - **Display** coordinates are what the grid is built over (`x` in `[0, 8]`).
//!
//! An [`AxisShift`] converts between the two. [`ShiftedPlaneSpec::build`] produces a
//! [`ShiftedPlane`] whose tick labels show logical values at display positions, and
//! [`FunctionSampler`] and [`PointMapper`] accept logical inputs and place them on the
//! shifted grid. The shift is always passed explicitly; there is no global state.
//!
//! Rendering is backend-neutral: everything drawable lowers to [`Primitive`]s collected
//! in a [`Scene`].

#![no_std]

extern crate alloc;

mod backend;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod grid;
mod label;
#[cfg(test)]
mod pipeline_tests;
mod plane;
mod points;
mod range;
mod sampler;
mod scale;
mod scene;
mod shift;
mod style;
mod symbol;

pub use backend::{GridRequest, NativeGrid, PlaneBackend};
pub use error::{ConfigurationError, SampleUndefined, ShiftPlaneError};
pub use format::format_tick_with_step;
pub use grid::{ShiftedPlane, ShiftedPlaneSpec};
pub use label::LabelMap;
pub use plane::{NumberPlane, NumberPlaneBackend};
pub use points::{Marker, MarkerKind, PointMapper};
pub use range::{Axis, AxisRange, MAX_TICKS, TICK_EPSILON};
pub use sampler::{Curve, FunctionSampler};
pub use scale::ScaleLinear;
pub use scene::{
    Drawable, PathPrimitive, Primitive, Scene, TextAnchor, TextBaseline, TextPrimitive,
};
pub use shift::{AxisShift, compute_offset};
pub use style::{PlaneStyle, StrokeStyle, TipShape};
pub use symbol::Symbol;
