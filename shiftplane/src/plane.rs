// Copyright 2025 the Shiftplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A native number plane drawn with kurbo paths.
//!
//! This is the grid primitive the shift layer builds on. It knows nothing about shifting:
//! its axes cross at its own `(0, 0)` and it numbers its ticks with its own values, except
//! for the origin, which is left unlabelled as is customary for number planes.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, Point, Rect, Vec2};

use crate::backend::{GridRequest, NativeGrid, PlaneBackend};
use crate::format::format_tick_with_step;
use crate::label::LabelMap;
use crate::range::{Axis, AxisRange, TICK_EPSILON};
use crate::scale::ScaleLinear;
use crate::scene::{Drawable, Primitive, TextAnchor, TextBaseline, TextPrimitive};
use crate::style::PlaneStyle;

/// Builds [`NumberPlane`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct NumberPlaneBackend;

impl PlaneBackend for NumberPlaneBackend {
    type Grid = NumberPlane;

    fn create_grid(&self, request: &GridRequest, style: &PlaneStyle) -> NumberPlane {
        NumberPlane::new(request, style.clone())
    }
}

/// An axis-aligned number plane with background lines, axes, ticks and labels.
#[derive(Clone, Debug)]
pub struct NumberPlane {
    x_range: AxisRange,
    y_range: AxisRange,
    bounds: Rect,
    x_scale: ScaleLinear,
    y_scale: ScaleLinear,
    x_labels: LabelMap,
    y_labels: LabelMap,
    style: PlaneStyle,
}

impl NumberPlane {
    /// Creates a plane stretched over `request.x_length` by `request.y_length`, centred on
    /// `request.center`. Scene y grows downward, so larger y values sit higher.
    pub fn new(request: &GridRequest, style: PlaneStyle) -> Self {
        let bounds = Rect::from_center_size(request.center, (request.x_length, request.y_length));
        let x_scale = ScaleLinear::new(
            (request.x_range.min, request.x_range.max),
            (bounds.x0, bounds.x1),
        );
        let y_scale = ScaleLinear::new(
            (request.y_range.min, request.y_range.max),
            (bounds.y1, bounds.y0),
        );
        let x_labels = if style.x_numbers {
            default_labels(request.x_range)
        } else {
            LabelMap::for_step(request.x_range.step)
        };
        let y_labels = if style.y_numbers {
            default_labels(request.y_range)
        } else {
            LabelMap::for_step(request.y_range.step)
        };
        Self {
            x_range: request.x_range,
            y_range: request.y_range,
            bounds,
            x_scale,
            y_scale,
            x_labels,
            y_labels,
            style,
        }
    }

    /// Scene rectangle covered by the plane's ranges.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Scene point where the axes cross.
    pub fn origin(&self) -> Point {
        self.coord_to_point(Point::ORIGIN)
    }

    /// The style the plane was built with.
    pub fn style(&self) -> &PlaneStyle {
        &self.style
    }

    fn coord_to_point(&self, coord: Point) -> Point {
        Point::new(self.x_scale.map(coord.x), self.y_scale.map(coord.y))
    }

    fn grid_lines(&self) -> BezPath {
        let mut p = BezPath::new();
        for x in self.x_range.ticks() {
            let sx = self.x_scale.map(x);
            p.move_to((sx, self.bounds.y0));
            p.line_to((sx, self.bounds.y1));
        }
        for y in self.y_range.ticks() {
            let sy = self.y_scale.map(y);
            p.move_to((self.bounds.x0, sy));
            p.line_to((self.bounds.x1, sy));
        }
        p
    }

    fn axis_lines(&self) -> BezPath {
        let o = self.origin();
        let mut p = BezPath::new();
        p.move_to((self.bounds.x0, o.y));
        p.line_to((self.bounds.x1, o.y));
        p.move_to((o.x, self.bounds.y1));
        p.line_to((o.x, self.bounds.y0));

        let half = 0.5 * self.style.tick_size;
        for x in self.x_range.ticks() {
            let sx = self.x_scale.map(x);
            p.move_to((sx, o.y - half));
            p.line_to((sx, o.y + half));
        }
        for y in self.y_range.ticks() {
            let sy = self.y_scale.map(y);
            p.move_to((o.x - half, sy));
            p.line_to((o.x + half, sy));
        }
        p
    }

    fn label_primitives(&self, out: &mut Vec<Primitive>) {
        let o = self.origin();
        let gap = 0.5 * self.style.tick_size + 0.5 * self.style.label_font_size;
        for (value, text) in self.x_labels.iter() {
            out.push(Primitive::Text(TextPrimitive {
                pos: Point::new(self.x_scale.map(value), o.y + gap),
                text: text.into(),
                font_size: self.style.label_font_size,
                anchor: TextAnchor::Middle,
                baseline: TextBaseline::Hanging,
                fill: self.style.label_fill.clone(),
            }));
        }
        for (value, text) in self.y_labels.iter() {
            out.push(Primitive::Text(TextPrimitive {
                pos: Point::new(o.x - gap, self.y_scale.map(value)),
                text: text.into(),
                font_size: self.style.label_font_size,
                anchor: TextAnchor::End,
                baseline: TextBaseline::Middle,
                fill: self.style.label_fill.clone(),
            }));
        }
    }
}

impl NativeGrid for NumberPlane {
    fn x_range(&self) -> AxisRange {
        self.x_range
    }

    fn y_range(&self) -> AxisRange {
        self.y_range
    }

    fn add_labels(&mut self, axis: Axis, labels: LabelMap) {
        match axis {
            Axis::X => self.x_labels.merge(labels),
            Axis::Y => self.y_labels.merge(labels),
        }
    }

    fn labels(&self, axis: Axis) -> &LabelMap {
        match axis {
            Axis::X => &self.x_labels,
            Axis::Y => &self.y_labels,
        }
    }

    fn coords_to_point(&self, coords: &[Point]) -> Vec<Point> {
        coords.iter().map(|c| self.coord_to_point(*c)).collect()
    }

    fn value_to_point(&self, axis: Axis, value: f64) -> Point {
        match axis {
            Axis::X => self.coord_to_point(Point::new(value, 0.0)),
            Axis::Y => self.coord_to_point(Point::new(0.0, value)),
        }
    }
}

impl Drawable for NumberPlane {
    fn primitives(&self) -> Vec<Primitive> {
        let mut out = Vec::new();
        out.push(Primitive::stroked(
            self.grid_lines(),
            self.style.background_stroke(),
        ));
        out.push(Primitive::stroked(self.axis_lines(), self.style.axis.clone()));
        if let Some(tip) = self.style.tip_shape {
            let o = self.origin();
            let h = self.style.tip_height;
            let x_tip = tip.path(Point::new(self.bounds.x1, o.y), Vec2::new(1.0, 0.0), h);
            let y_tip = tip.path(Point::new(o.x, self.bounds.y0), Vec2::new(0.0, -1.0), h);
            out.push(Primitive::filled(x_tip, self.style.axis.brush.clone()));
            out.push(Primitive::filled(y_tip, self.style.axis.brush.clone()));
        }
        self.label_primitives(&mut out);
        out
    }
}

/// Numbers every tick of `range` except the origin.
fn default_labels(range: AxisRange) -> LabelMap {
    let mut labels = LabelMap::for_step(range.step);
    for v in range.ticks() {
        if v.abs() <= TICK_EPSILON * range.step {
            continue;
        }
        labels.insert(v, format_tick_with_step(v, range.step));
    }
    labels
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::style::TipShape;

    fn request() -> GridRequest {
        GridRequest {
            x_range: AxisRange::new(0.0, 8.0, 1.0),
            y_range: AxisRange::new(0.0, 1.0, 0.25),
            x_length: 800.0,
            y_length: 400.0,
            center: Point::new(500.0, 300.0),
        }
    }

    fn close(a: Point, b: Point) -> bool {
        (a - b).hypot() < 1e-9
    }

    #[test]
    fn plane_is_centred_and_sized_from_the_request() {
        let plane = NumberPlane::new(&request(), PlaneStyle::default());
        assert_eq!(plane.bounds(), Rect::new(100.0, 100.0, 900.0, 500.0));
        // Range corners land on the bounds corners, with larger y higher up.
        let corners = plane.coords_to_point(&[Point::new(0.0, 0.0), Point::new(8.0, 1.0)]);
        assert!(close(corners[0], Point::new(100.0, 500.0)));
        assert!(close(corners[1], Point::new(900.0, 100.0)));
    }

    #[test]
    fn axis_lookups_agree_with_coordinate_lookup() {
        let plane = NumberPlane::new(&request(), PlaneStyle::default());
        let via_coords = plane.coords_to_point(&[Point::new(3.0, 0.0), Point::new(0.0, 0.6)]);
        assert!(close(plane.value_to_point(Axis::X, 3.0), via_coords[0]));
        assert!(close(plane.value_to_point(Axis::Y, 0.6), via_coords[1]));
    }

    #[test]
    fn default_numbers_skip_the_origin() {
        let plane = NumberPlane::new(&request(), PlaneStyle::default());
        let y = plane.labels(Axis::Y);
        assert!(!y.contains(0.0));
        assert_eq!(y.get(0.25), Some("0.25"));
        assert_eq!(y.get(1.0), Some("1.00"));
        assert_eq!(plane.labels(Axis::X).len(), 8);
    }

    #[test]
    fn numbers_can_be_disabled_per_axis() {
        let style = PlaneStyle::default().with_x_numbers(false);
        let plane = NumberPlane::new(&request(), style);
        assert!(plane.labels(Axis::X).is_empty());
        assert!(!plane.labels(Axis::Y).is_empty());
    }

    #[test]
    fn add_labels_merges_into_existing_labels() {
        let mut plane = NumberPlane::new(&request(), PlaneStyle::default());
        let before = plane.labels(Axis::Y).len();
        let mut extra = LabelMap::new();
        extra.insert(0.0, "0");
        plane.add_labels(Axis::Y, extra);
        assert_eq!(plane.labels(Axis::Y).len(), before + 1);
        assert_eq!(plane.labels(Axis::Y).get(0.0), Some("0"));
    }

    #[test]
    fn tips_follow_the_style() {
        let with_tips = NumberPlane::new(&request(), PlaneStyle::default());
        let without = NumberPlane::new(&request(), PlaneStyle::default().with_tip_shape(None));
        let filled = |plane: &NumberPlane| {
            plane
                .primitives()
                .iter()
                .filter(|p| matches!(p, Primitive::Path(path) if path.fill.is_some()))
                .count()
        };
        assert_eq!(filled(&with_tips), 2);
        assert_eq!(filled(&without), 0);

        let triangle = NumberPlane::new(
            &request(),
            PlaneStyle::default().with_tip_shape(Some(TipShape::Triangle)),
        );
        assert_eq!(filled(&triangle), 2);
    }

    #[test]
    fn one_text_primitive_per_label() {
        let plane = NumberPlane::new(&request(), PlaneStyle::default());
        let texts = plane
            .primitives()
            .into_iter()
            .filter(|p| matches!(p, Primitive::Text(_)))
            .count();
        assert_eq!(
            texts,
            plane.labels(Axis::X).len() + plane.labels(Axis::Y).len()
        );
    }
}
