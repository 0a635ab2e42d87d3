// Copyright 2025 the Shiftplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A minimal append-only scene.
//!
//! The scene is the hand-off point to whatever actually paints pixels. Drawables are
//! flattened into [`Primitive`]s when they are added; registration order is paint order,
//! so later additions overlay earlier ones.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Point, Rect, Shape};
use peniko::Brush;

use crate::style::StrokeStyle;

/// Horizontal text anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// `pos.x` is the start of the text.
    Start,
    /// `pos.x` is the centre of the text.
    Middle,
    /// `pos.x` is the end of the text.
    End,
}

/// Vertical text baseline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// `pos.y` is the vertical middle of the text.
    Middle,
    /// `pos.y` is the top of the text.
    Hanging,
    /// `pos.y` is the alphabetic baseline.
    Alphabetic,
}

/// A filled and/or stroked path.
#[derive(Clone, Debug, PartialEq)]
pub struct PathPrimitive {
    /// Geometry in scene coordinates.
    pub path: BezPath,
    /// Fill paint, if the path is filled.
    pub fill: Option<Brush>,
    /// Stroke, if the path is stroked.
    pub stroke: Option<StrokeStyle>,
}

/// A run of unshaped text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextPrimitive {
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// Text content.
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
}

/// Something a renderer knows how to paint.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// A path.
    Path(PathPrimitive),
    /// Text.
    Text(TextPrimitive),
}

impl Primitive {
    /// A stroked, unfilled path.
    pub fn stroked(path: BezPath, stroke: StrokeStyle) -> Self {
        Self::Path(PathPrimitive {
            path,
            fill: None,
            stroke: Some(stroke),
        })
    }

    /// A filled, unstroked path.
    pub fn filled(path: BezPath, fill: impl Into<Brush>) -> Self {
        Self::Path(PathPrimitive {
            path,
            fill: Some(fill.into()),
            stroke: None,
        })
    }

    /// Geometric bounds of a path, or `None` for text (which has no metrics here).
    pub fn path_bounds(&self) -> Option<Rect> {
        match self {
            Self::Path(p) => Some(p.path.bounding_box()),
            Self::Text(_) => None,
        }
    }
}

/// A value that can be flattened into scene primitives.
pub trait Drawable {
    /// Returns the primitives for this value, in paint order.
    fn primitives(&self) -> Vec<Primitive>;
}

impl Drawable for Primitive {
    fn primitives(&self) -> Vec<Primitive> {
        alloc::vec![self.clone()]
    }
}

impl<T: Drawable + ?Sized> Drawable for &T {
    fn primitives(&self) -> Vec<Primitive> {
        (**self).primitives()
    }
}

/// An append-only list of primitives inside a fixed frame.
#[derive(Clone, Debug)]
pub struct Scene {
    frame: Rect,
    items: Vec<Primitive>,
}

impl Scene {
    /// Creates an empty scene covering `frame`.
    pub fn new(frame: Rect) -> Self {
        Self {
            frame,
            items: Vec::new(),
        }
    }

    /// The scene frame.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Registers a drawable on top of everything added so far.
    ///
    /// Owned values (curves, markers) are consumed; borrowed ones (a plane) are
    /// snapshotted.
    pub fn add(&mut self, drawable: impl Drawable) {
        let primitives = drawable.primitives();
        tracing::trace!(count = primitives.len(), "scene add");
        self.items.extend(primitives);
    }

    /// All primitives in paint order.
    pub fn primitives(&self) -> &[Primitive] {
        &self.items
    }

    /// Number of primitives.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing was added.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
