// Copyright 2024 the Slugline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named edges, alignment anchors and edge-relative operations on [`Rect`].

use peniko::kurbo::{Point, Rect};

/// One side of a rectangle.
///
/// Coordinates follow kurbo's y-down convention, so `MinY` is the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Edge {
    /// The left side.
    MinX,
    /// The right side.
    MaxX,
    /// The top side.
    #[default]
    MinY,
    /// The bottom side.
    MaxY,
}

/// Horizontal alignment anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum XAnchor {
    /// Align left edges.
    Min,
    /// Align horizontal centers.
    #[default]
    Center,
    /// Align right edges.
    Max,
}

/// Vertical alignment anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YAnchor {
    /// Align top edges.
    Min,
    /// Align vertical centers.
    #[default]
    Center,
    /// Align bottom edges.
    Max,
}

impl XAnchor {
    /// The x coordinate of this anchor on `rect`.
    pub fn position(self, rect: Rect) -> f64 {
        match self {
            Self::Min => rect.x0,
            Self::Center => (rect.x0 + rect.x1) * 0.5,
            Self::Max => rect.x1,
        }
    }
}

impl YAnchor {
    /// The y coordinate of this anchor on `rect`.
    pub fn position(self, rect: Rect) -> f64 {
        match self {
            Self::Min => rect.y0,
            Self::Center => (rect.y0 + rect.y1) * 0.5,
            Self::Max => rect.y1,
        }
    }
}

/// Edge-relative operations on rectangles.
///
/// None of these clamp: asking for more than a rectangle holds produces a
/// remainder with negative extent, which callers are expected to tolerate.
pub trait Region {
    /// Splits off `amount` from `edge`, returning `(allocated, remainder)`.
    fn divide(&self, amount: f64, edge: Edge) -> (Rect, Rect);

    /// Moves `edge` outward by `amount`.
    fn grow(&self, amount: f64, edge: Edge) -> Rect;

    /// The baseline-left corner, where a line of text is anchored.
    fn baseline_origin(&self) -> Point;

    /// Whether the rectangle has a non-positive width or height.
    fn is_degenerate(&self) -> bool;
}

impl Region for Rect {
    fn divide(&self, amount: f64, edge: Edge) -> (Rect, Rect) {
        let Rect { x0, y0, x1, y1 } = *self;
        match edge {
            Edge::MinX => (
                Rect::new(x0, y0, x0 + amount, y1),
                Rect::new(x0 + amount, y0, x1, y1),
            ),
            Edge::MaxX => (
                Rect::new(x1 - amount, y0, x1, y1),
                Rect::new(x0, y0, x1 - amount, y1),
            ),
            Edge::MinY => (
                Rect::new(x0, y0, x1, y0 + amount),
                Rect::new(x0, y0 + amount, x1, y1),
            ),
            Edge::MaxY => (
                Rect::new(x0, y1 - amount, x1, y1),
                Rect::new(x0, y0, x1, y1 - amount),
            ),
        }
    }

    fn grow(&self, amount: f64, edge: Edge) -> Rect {
        let mut rect = *self;
        match edge {
            Edge::MinX => rect.x0 -= amount,
            Edge::MaxX => rect.x1 += amount,
            Edge::MinY => rect.y0 -= amount,
            Edge::MaxY => rect.y1 += amount,
        }
        rect
    }

    fn baseline_origin(&self) -> Point {
        Point::new(self.x0, self.y1)
    }

    fn is_degenerate(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECT: Rect = Rect::new(0.0, 0.0, 200.0, 300.0);

    #[test]
    fn divide_from_top() {
        let (taken, rest) = RECT.divide(100.0, Edge::MinY);
        assert_eq!(taken, Rect::new(0.0, 0.0, 200.0, 100.0));
        assert_eq!(rest, Rect::new(0.0, 100.0, 200.0, 300.0));
    }

    #[test]
    fn divide_from_bottom() {
        let (taken, rest) = RECT.divide(100.0, Edge::MaxY);
        assert_eq!(taken, Rect::new(0.0, 200.0, 200.0, 300.0));
        assert_eq!(rest, Rect::new(0.0, 0.0, 200.0, 200.0));
    }

    #[test]
    fn divide_horizontal_edges() {
        let (taken, rest) = RECT.divide(50.0, Edge::MinX);
        assert_eq!(taken.width(), 50.0);
        assert_eq!(rest, Rect::new(50.0, 0.0, 200.0, 300.0));

        let (taken, rest) = RECT.divide(50.0, Edge::MaxX);
        assert_eq!(taken, Rect::new(150.0, 0.0, 200.0, 300.0));
        assert_eq!(rest.width(), 150.0);
    }

    #[test]
    fn divide_past_the_end_goes_negative() {
        let (taken, rest) = RECT.divide(400.0, Edge::MinY);
        assert_eq!(taken.height(), 400.0);
        assert_eq!(rest.height(), -100.0);
        assert!(rest.is_degenerate());
        assert!(!taken.is_degenerate());
    }

    #[test]
    fn grow_moves_one_edge() {
        assert_eq!(RECT.grow(10.0, Edge::MinY), Rect::new(0.0, -10.0, 200.0, 300.0));
        assert_eq!(RECT.grow(10.0, Edge::MaxY), Rect::new(0.0, 0.0, 200.0, 310.0));
        assert_eq!(RECT.grow(5.0, Edge::MinX), Rect::new(-5.0, 0.0, 200.0, 300.0));
        assert_eq!(RECT.grow(5.0, Edge::MaxX), Rect::new(0.0, 0.0, 205.0, 300.0));
    }

    #[test]
    fn anchors() {
        assert_eq!(XAnchor::Min.position(RECT), 0.0);
        assert_eq!(XAnchor::Center.position(RECT), 100.0);
        assert_eq!(XAnchor::Max.position(RECT), 200.0);
        assert_eq!(YAnchor::Center.position(RECT), 150.0);
        assert_eq!(RECT.baseline_origin(), Point::new(0.0, 300.0));
    }
}
