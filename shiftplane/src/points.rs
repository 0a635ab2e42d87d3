// Copyright 2025 the Shiftplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping logical points onto a shifted plane.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Point;
use peniko::color::palette::css;
use peniko::{Brush, Color};

use crate::backend::NativeGrid;
use crate::grid::ShiftedPlane;
use crate::range::Axis;
use crate::scene::{Drawable, Primitive};
use crate::symbol::Symbol;

/// What a marker stands for. Each kind has its own default colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    /// A point placed on one axis by a single value.
    AxisPoint(Axis),
    /// A point placed by an `(x, y)` pair.
    PlanePoint,
}

impl MarkerKind {
    /// Yellow for x-axis points, green for y-axis points, blue for plane points.
    pub fn default_fill(self) -> Color {
        match self {
            Self::AxisPoint(Axis::X) => css::YELLOW,
            Self::AxisPoint(Axis::Y) => css::GREEN,
            Self::PlanePoint => css::BLUE,
        }
    }
}

/// A single point in scene coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    position: Point,
    kind: MarkerKind,
    symbol: Symbol,
    size: f64,
    fill: Brush,
}

impl Marker {
    /// Scene position of the marker centre.
    pub fn position(&self) -> Point {
        self.position
    }

    /// The marker's style tag.
    pub fn kind(&self) -> MarkerKind {
        self.kind
    }

    /// Glyph size (diameter or side) in scene units.
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Glyph paint.
    pub fn fill(&self) -> &Brush {
        &self.fill
    }
}

impl Drawable for Marker {
    fn primitives(&self) -> Vec<Primitive> {
        alloc::vec![Primitive::filled(
            self.symbol.path(self.position, self.size),
            self.fill.clone(),
        )]
    }
}

/// Turns logical coordinates into [`Marker`]s on a shifted plane.
#[derive(Clone, Debug, PartialEq)]
pub struct PointMapper {
    /// Glyph size. Default: `16.0`.
    pub size: f64,
    /// Glyph shape. Default: [`Symbol::Circle`].
    pub symbol: Symbol,
    /// Fill override; `None` uses [`MarkerKind::default_fill`].
    pub fill: Option<Brush>,
}

impl Default for PointMapper {
    fn default() -> Self {
        Self {
            size: 16.0,
            symbol: Symbol::Circle,
            fill: None,
        }
    }
}

impl PointMapper {
    /// Creates a mapper with default glyphs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the glyph size.
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Sets the glyph shape.
    pub fn with_symbol(mut self, symbol: Symbol) -> Self {
        self.symbol = symbol;
        self
    }

    /// Overrides the per-kind fill.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    /// Maps logical `(x, y)` points. x is shifted, y is not.
    pub fn map_points<G: NativeGrid>(
        &self,
        points: &[Point],
        plane: &ShiftedPlane<G>,
    ) -> Vec<Marker> {
        let shift = plane.shift();
        let display: Vec<Point> = points.iter().map(|p| shift.to_display_point(*p)).collect();
        plane
            .grid()
            .coords_to_point(&display)
            .into_iter()
            .map(|pos| self.marker(pos, MarkerKind::PlanePoint))
            .collect()
    }

    /// Maps a single logical value on one axis.
    ///
    /// x values are shifted before the native lookup; y values pass straight through.
    pub fn map_axis_value<G: NativeGrid>(
        &self,
        axis: Axis,
        value: f64,
        plane: &ShiftedPlane<G>,
    ) -> Marker {
        let native = match axis {
            Axis::X => plane.shift().to_display(value),
            Axis::Y => value,
        };
        let pos = plane.grid().value_to_point(axis, native);
        self.marker(pos, MarkerKind::AxisPoint(axis))
    }

    fn marker(&self, position: Point, kind: MarkerKind) -> Marker {
        Marker {
            position,
            kind,
            symbol: self.symbol,
            size: self.size,
            fill: self
                .fill
                .clone()
                .unwrap_or_else(|| Brush::Solid(kind.default_fill())),
        }
    }
}
