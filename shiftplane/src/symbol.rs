// Copyright 2025 the Shiftplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marker glyphs.

use kurbo::{BezPath, Circle, Point, Rect, Shape};

/// Glyph tolerance used when flattening circles into path elements.
const CIRCLE_TOLERANCE: f64 = 0.1;

/// A small set of marker shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A filled circle.
    Circle,
    /// An axis-aligned square.
    Square,
}

impl Symbol {
    /// Returns a path for this symbol centred at `center`, with `size` as diameter/side.
    pub fn path(self, center: Point, size: f64) -> BezPath {
        match self {
            Self::Circle => Circle::new(center, 0.5 * size)
                .path_elements(CIRCLE_TOLERANCE)
                .collect(),
            Self::Square => Rect::from_center_size(center, (size, size)).to_path(CIRCLE_TOLERANCE),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn symbols_are_centred() {
        let c = Point::new(10.0, 20.0);
        for symbol in [Symbol::Circle, Symbol::Square] {
            let b = symbol.path(c, 6.0).bounding_box();
            assert!((b.center() - c).hypot() < 1e-6, "{symbol:?}: {b:?}");
            assert!((b.width() - 6.0).abs() < 1e-6, "{symbol:?}: {b:?}");
        }
    }
}
