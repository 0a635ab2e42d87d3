// Copyright 2025 the Shiftplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plane styling.
//!
//! [`PlaneStyle`] enumerates every recognised styling option, each with a fixed default.
//! Lengths are scene units.

use kurbo::{BezPath, Point, Vec2};
use peniko::color::palette::css;
use peniko::{Brush, Color};

/// A paint + width pair for stroked paths (grid lines, axes, ticks, curves).
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// Arrow tip drawn at the positive end of an axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TipShape {
    /// A filled isosceles triangle.
    Triangle,
    /// A triangle with a notched base, like a stealth-fighter silhouette.
    Stealth,
}

impl TipShape {
    /// Returns a closed path for a tip whose point is at `end`, pointing along `direction`.
    ///
    /// The tip occupies `height` along the axis and is as wide as it is long.
    pub fn path(self, end: Point, direction: Vec2, height: f64) -> BezPath {
        let dir = direction.normalize();
        let normal = Vec2::new(-dir.y, dir.x);
        let base = end - dir * height;
        let half = 0.5 * height;
        let mut p = BezPath::new();
        p.move_to(end);
        p.line_to(base + normal * half);
        if self == Self::Stealth {
            p.line_to(base + dir * (0.35 * height));
        }
        p.line_to(base - normal * half);
        p.close_path();
        p
    }
}

/// Every styling option a shifted plane recognises.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaneStyle {
    /// Background grid line colour. Default: teal.
    pub stroke_color: Color,
    /// Background grid line width. Default: `2.0`.
    pub stroke_width: f64,
    /// Alpha multiplied into [`PlaneStyle::stroke_color`]. Default: `0.4`.
    pub stroke_opacity: f32,
    /// Tip drawn at the positive end of both axes; `None` draws no tips.
    /// Default: [`TipShape::Stealth`].
    pub tip_shape: Option<TipShape>,
    /// Tip length along the axis. Default: `15.0`.
    pub tip_height: f64,
    /// Margin left and right of the plane inside the frame. Default: `70.0`.
    pub frame_padding_x: f64,
    /// Margin above and below the plane inside the frame. Default: `50.0`.
    pub frame_padding_y: f64,
    /// Stroke for axis lines and tick marks. Default: black, width `2.0`.
    pub axis: StrokeStyle,
    /// Tick label font size. Default: `20.0`.
    pub label_font_size: f64,
    /// Tick label paint. Default: black.
    pub label_fill: Brush,
    /// Tick mark length, centred on the axis. Default: `8.0`.
    pub tick_size: f64,
    /// Whether the native plane numbers the x-axis ticks itself. Default: `true`.
    pub x_numbers: bool,
    /// Whether the native plane numbers the y-axis ticks itself. Default: `true`.
    pub y_numbers: bool,
}

impl Default for PlaneStyle {
    fn default() -> Self {
        Self {
            stroke_color: css::TEAL,
            stroke_width: 2.0,
            stroke_opacity: 0.4,
            tip_shape: Some(TipShape::Stealth),
            tip_height: 15.0,
            frame_padding_x: 70.0,
            frame_padding_y: 50.0,
            axis: StrokeStyle::solid(css::BLACK, 2.0),
            label_font_size: 20.0,
            label_fill: Brush::Solid(css::BLACK),
            tick_size: 8.0,
            x_numbers: true,
            y_numbers: true,
        }
    }
}

impl PlaneStyle {
    /// The resolved stroke for background grid lines.
    pub fn background_stroke(&self) -> StrokeStyle {
        StrokeStyle::solid(
            self.stroke_color.multiply_alpha(self.stroke_opacity),
            self.stroke_width,
        )
    }

    /// Sets the background grid line colour.
    pub fn with_stroke_color(mut self, color: Color) -> Self {
        self.stroke_color = color;
        self
    }

    /// Sets the background grid line width.
    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    /// Sets the background grid line opacity (clamped to `0..=1`).
    pub fn with_stroke_opacity(mut self, opacity: f32) -> Self {
        self.stroke_opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Sets the axis tip shape, or disables tips with `None`.
    pub fn with_tip_shape(mut self, tip_shape: Option<TipShape>) -> Self {
        self.tip_shape = tip_shape;
        self
    }

    /// Sets the tip length.
    pub fn with_tip_height(mut self, tip_height: f64) -> Self {
        self.tip_height = tip_height;
        self
    }

    /// Sets the horizontal and vertical frame padding.
    pub fn with_frame_padding(mut self, x: f64, y: f64) -> Self {
        self.frame_padding_x = x;
        self.frame_padding_y = y;
        self
    }

    /// Sets the axis and tick stroke.
    pub fn with_axis_stroke(mut self, axis: StrokeStyle) -> Self {
        self.axis = axis;
        self
    }

    /// Sets the tick label font size.
    pub fn with_label_font_size(mut self, font_size: f64) -> Self {
        self.label_font_size = font_size;
        self
    }

    /// Sets the tick label paint.
    pub fn with_label_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.label_fill = fill.into();
        self
    }

    /// Sets the tick mark length.
    pub fn with_tick_size(mut self, tick_size: f64) -> Self {
        self.tick_size = tick_size;
        self
    }

    /// Enables or disables native x-axis numbers.
    pub fn with_x_numbers(mut self, numbers: bool) -> Self {
        self.x_numbers = numbers;
        self
    }

    /// Enables or disables native y-axis numbers.
    pub fn with_y_numbers(mut self, numbers: bool) -> Self {
        self.y_numbers = numbers;
        self
    }
}
