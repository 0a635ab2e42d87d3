// Copyright 2025 the Shiftplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end checks across the shift, plane builder, sampler and point mapper.

extern crate std;

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

use crate::{
    Axis, AxisRange, AxisShift, Drawable, FunctionSampler, NativeGrid, NumberPlane,
    NumberPlaneBackend, PointMapper, Primitive, Scene, ShiftedPlane, ShiftedPlaneSpec,
};

const EPS: f64 = 1e-6;

fn logical_x() -> AxisRange {
    AxisRange::new(-2.0, 6.0, 1.0)
}

fn y_range() -> AxisRange {
    AxisRange::new(0.0, 1.0, 0.25)
}

fn build(frame: Size) -> ShiftedPlane<NumberPlane> {
    ShiftedPlaneSpec::new(logical_x(), y_range(), frame)
        .build(&NumberPlaneBackend)
        .unwrap()
}

fn assert_close(a: Point, b: Point) {
    assert!((a - b).hypot() < EPS, "{a:?} != {b:?}");
}

#[test]
fn shift_round_trips_for_any_range() {
    for (min, max, step) in [(-2.0, 6.0, 1.0), (0.0, 1.0, 0.1), (10.0, 50.0, 5.0)] {
        let r = AxisRange::new(min, max, step);
        let shift = AxisShift::from_logical_min(r.min);
        assert_eq!(shift.to_display(r.min), 0.0);
        for v in r.ticks() {
            assert!((shift.to_display(shift.to_logical(v)) - v).abs() < 1e-12);
        }
    }
}

#[test]
fn labels_show_logical_values_at_display_ticks() {
    let plane = build(Size::new(1422.0, 800.0));
    assert_eq!(plane.x_labels().get(0.0), Some("-2"));
    assert_eq!(plane.x_labels().get(8.0), Some("6"));
}

#[test]
fn y_axis_origin_matches_the_logical_minimum_point() {
    let plane = build(Size::new(1422.0, 800.0));
    let mapper = PointMapper::new();
    let on_axis = mapper.map_axis_value(Axis::Y, 0.0, &plane);
    let point = &mapper.map_points(&[Point::new(logical_x().min, 0.0)], &plane)[0];
    assert_close(on_axis.position(), point.position());
}

#[test]
fn sampled_identity_matches_mapped_points() {
    let plane = build(Size::new(1422.0, 800.0));
    let curve = FunctionSampler::new()
        .sample(|x| x, AxisRange::new(0.0, 4.0, 1.0), &plane)
        .unwrap();
    let logical: Vec<Point> = (0..=4).map(|i| Point::new(f64::from(i), f64::from(i))).collect();
    let markers = PointMapper::new().map_points(&logical, &plane);

    let sampled: Vec<Point> = curve.points().collect();
    assert_eq!(sampled.len(), markers.len());
    for (s, m) in sampled.iter().zip(&markers) {
        assert_close(*s, m.position());
    }
}

#[test]
fn frame_size_does_not_affect_shift_or_labels() {
    let small = build(Size::new(800.0, 450.0));
    let large = build(Size::new(1920.0, 1080.0));
    assert_eq!(small.offset(), large.offset());
    assert_eq!(small.x_labels(), large.x_labels());
    assert_eq!(small.y_labels(), large.y_labels());
    assert_ne!(small.grid().bounds(), large.grid().bounds());
}

#[test]
fn shifted_plane_end_to_end() {
    let plane = build(Size::new(1422.0, 800.0));
    assert_eq!(plane.offset(), 2.0);
    assert_eq!(plane.display_x_range(), AxisRange::new(0.0, 8.0, 1.0));
    assert_eq!(plane.grid().x_range(), plane.display_x_range());
    assert!(plane.y_labels().contains(0.0));
    assert_eq!(plane.y_labels().get(0.0), Some("0.00"));

    // Plane, curve, then markers: the scene keeps registration order.
    let frame = Rect::new(0.0, 0.0, 1422.0, 800.0);
    let mut scene = Scene::new(frame);
    scene.add(&plane);
    let plane_len = scene.len();

    let curve = FunctionSampler::new()
        .sample(
            |x| 1.0 / (1.0 + 4.0 * (x - 2.5) * (x - 2.5)),
            AxisRange::new(-2.0, 6.0, 0.01),
            &plane,
        )
        .unwrap();
    scene.add(curve);
    assert_eq!(scene.len(), plane_len + 1);

    let mapper = PointMapper::new();
    for m in mapper.map_points(&[Point::new(1.0, 0.5), Point::new(4.0, 0.75)], &plane) {
        scene.add(m);
    }
    scene.add(mapper.map_axis_value(Axis::Y, 0.6, &plane));
    assert_eq!(scene.len(), plane_len + 4);

    let texts: Vec<&str> = scene
        .primitives()
        .iter()
        .filter_map(|p| match p {
            Primitive::Text(t) => Some(t.text.as_str()),
            Primitive::Path(_) => None,
        })
        .collect();
    assert!(texts.contains(&"-2"));
    assert!(texts.contains(&"6"));
    assert!(texts.contains(&"0.00"));
    assert_eq!(plane.primitives().len(), plane_len);
}
