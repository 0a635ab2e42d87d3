// Copyright 2025 the Shiftplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draws a Gaussian on a number plane whose x axis reads `-2..6` but starts at zero,
//! then writes the scene as SVG.
//!
//! Usage: `shiftplane_demo [OUTPUT.svg]` (default `shifted_axis.svg`). Set `RUST_LOG`
//! to adjust log output, e.g. `RUST_LOG=shiftplane=debug`.

mod svg;

use std::error::Error;

use kurbo::{Point, Rect, Size};
use peniko::color::palette::css;
use shiftplane::{
    Axis, AxisRange, FunctionSampler, NumberPlaneBackend, PlaneStyle, PointMapper, Scene,
    ShiftedPlaneSpec, StrokeStyle,
};
use tracing_subscriber::EnvFilter;

const FRAME: Size = Size::new(1422.0, 800.0);
const DEFAULT_OUTPUT: &str = "shifted_axis.svg";

fn gaussian(x: f64, amplitude: f64, mu: f64, sigma: f64) -> f64 {
    let z = (x - mu) / sigma;
    amplitude * (-0.5 * z * z).exp()
}

/// The Gaussian scene: plane, unsmoothed curve, then the marked points.
fn build_scene() -> Result<Scene, Box<dyn Error>> {
    let logical_x = AxisRange::new(-2.0, 6.0, 1.0);
    let y_range = AxisRange::new(0.0, 1.0, 0.25);
    let plane = ShiftedPlaneSpec::new(logical_x, y_range, FRAME)
        .with_style(PlaneStyle::default())
        .build(&NumberPlaneBackend)?;
    tracing::info!(
        offset = plane.offset(),
        display_min = plane.display_x_range().min,
        display_max = plane.display_x_range().max,
        "built shifted plane"
    );

    let mut scene = Scene::new(Rect::from_origin_size(Point::ORIGIN, FRAME));
    scene.add(&plane);

    let curve = FunctionSampler::new()
        .with_stroke(StrokeStyle::solid(css::RED, 4.0))
        .sample(
            |x| gaussian(x, 1.0, 2.5, 0.5),
            logical_x.with_step(0.01),
            &plane,
        )?;
    scene.add(curve);

    let mapper = PointMapper::new();
    for x in [2.0, 4.0] {
        scene.add(mapper.map_axis_value(Axis::X, x, &plane));
    }
    scene.add(mapper.map_axis_value(Axis::Y, 0.6, &plane));
    for marker in mapper.map_points(&[Point::new(1.0, 0.5), Point::new(4.0, 0.75)], &plane) {
        scene.add(marker);
    }

    Ok(scene)
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

    let scene = build_scene()?;
    let svg = svg::render_scene(&scene, Some(css::WHITE));
    std::fs::write(&output, svg)?;
    tracing::info!(path = %output, primitives = scene.len(), "wrote scene");
    Ok(())
}
