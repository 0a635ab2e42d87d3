// Copyright 2025 the Shiftplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sampling logical-space functions onto a shifted plane.
//!
//! Functions are written in logical x. The sampler walks the *display* domain (the
//! logical domain moved by the plane's shift), converts each display x back to logical x
//! for evaluation, and hands `(display x, y)` to the native grid, which treats it as its
//! own coordinate.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, Point};
use peniko::color::palette::css;
use smallvec::SmallVec;

use crate::backend::NativeGrid;
use crate::error::{ConfigurationError, SampleUndefined};
use crate::grid::ShiftedPlane;
use crate::range::{Axis, AxisRange};
use crate::scene::{Drawable, Primitive};
use crate::shift::AxisShift;
use crate::style::StrokeStyle;

/// A sampled function in scene coordinates.
///
/// Consecutive finite samples form a segment; an undefined sample ends the segment.
#[derive(Clone, Debug, PartialEq)]
pub struct Curve {
    segments: SmallVec<[Vec<Point>; 1]>,
    undefined: Vec<SampleUndefined>,
    stroke: StrokeStyle,
    smoothing: bool,
}

impl Curve {
    /// The curve's segments, each a run of scene points.
    pub fn segments(&self) -> &[Vec<Point>] {
        &self.segments
    }

    /// Every scene point of every segment, in sampling order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.segments.iter().flatten().copied()
    }

    /// Samples that were dropped because the function was not finite there.
    pub fn undefined_samples(&self) -> &[SampleUndefined] {
        &self.undefined
    }

    /// Returns `true` if the curve has at most one segment.
    pub fn is_continuous(&self) -> bool {
        self.segments.len() <= 1
    }

    /// The stroke the curve is drawn with.
    pub fn stroke(&self) -> &StrokeStyle {
        &self.stroke
    }

    /// The curve geometry: a polyline per segment, or Catmull-Rom cubics when smoothing
    /// is enabled.
    pub fn path(&self) -> BezPath {
        let mut p = BezPath::new();
        for segment in &self.segments {
            if self.smoothing && segment.len() >= 3 {
                push_smooth(&mut p, segment);
            } else {
                push_polyline(&mut p, segment);
            }
        }
        p
    }
}

impl Drawable for Curve {
    fn primitives(&self) -> Vec<Primitive> {
        alloc::vec![Primitive::stroked(self.path(), self.stroke.clone())]
    }
}

fn push_polyline(p: &mut BezPath, points: &[Point]) {
    let mut it = points.iter();
    let Some(first) = it.next() else {
        return;
    };
    p.move_to(*first);
    for pt in it {
        p.line_to(*pt);
    }
}

fn push_smooth(p: &mut BezPath, points: &[Point]) {
    let n = points.len();
    p.move_to(points[0]);
    for i in 0..n - 1 {
        let prev = points[i.saturating_sub(1)];
        let a = points[i];
        let b = points[i + 1];
        let next = points[(i + 2).min(n - 1)];
        let c1 = a + (b - prev) / 6.0;
        let c2 = b - (next - a) / 6.0;
        p.curve_to(c1, c2, b);
    }
}

/// Samples logical functions into [`Curve`]s.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionSampler {
    /// Stroke for produced curves. Default: red, width `4.0`.
    pub stroke: StrokeStyle,
    /// Whether produced curves are drawn smoothed. Default: `false` (raw polyline).
    pub smoothing: bool,
}

impl Default for FunctionSampler {
    fn default() -> Self {
        Self {
            stroke: StrokeStyle::solid(css::RED, 4.0),
            smoothing: false,
        }
    }
}

impl FunctionSampler {
    /// Creates a sampler with the default stroke and no smoothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the curve stroke.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }

    /// Enables or disables smoothing between samples.
    pub fn with_smoothing(mut self, smoothing: bool) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// Samples `f` over `logical_domain` onto `plane`.
    pub fn sample<G: NativeGrid>(
        &self,
        f: impl Fn(f64) -> f64,
        logical_domain: AxisRange,
        plane: &ShiftedPlane<G>,
    ) -> Result<Curve, ConfigurationError> {
        self.sample_with(f, logical_domain, plane.shift(), plane.grid())
    }

    /// Samples `f` over `logical_domain` with an explicit shift and grid.
    ///
    /// `grid` must have been built over `shift.to_display_range(..)` of its logical range.
    pub fn sample_with<G: NativeGrid>(
        &self,
        f: impl Fn(f64) -> f64,
        logical_domain: AxisRange,
        shift: AxisShift,
        grid: &G,
    ) -> Result<Curve, ConfigurationError> {
        logical_domain.validate(Axis::X)?;
        let display = shift.to_display_range(logical_domain);

        let mut segments: SmallVec<[Vec<Point>; 1]> = SmallVec::new();
        let mut undefined = Vec::new();
        let mut current: Vec<Point> = Vec::new();
        for d in display.samples() {
            let x = shift.to_logical(d);
            let y = f(x);
            if y.is_finite() {
                current.push(Point::new(d, y));
                continue;
            }
            tracing::trace!(logical_x = x, "dropping undefined sample");
            undefined.push(SampleUndefined {
                logical_x: x,
                value: y,
            });
            if !current.is_empty() {
                segments.push(grid.coords_to_point(&current));
                current.clear();
            }
        }
        if !current.is_empty() {
            segments.push(grid.coords_to_point(&current));
        }

        tracing::debug!(
            segments = segments.len(),
            dropped = undefined.len(),
            "sampled curve"
        );

        Ok(Curve {
            segments,
            undefined,
            stroke: self.stroke.clone(),
            smoothing: self.smoothing,
        })
    }
}
