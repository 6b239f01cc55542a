// Copyright 2024 the Slugline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Positioned geometry produced by composition.

use peniko::kurbo::{Affine, BezPath, Rect, Shape, Vec2};

use crate::region::{XAnchor, YAnchor};

/// A single drawable path with an optional reference frame.
///
/// The frame is usually the advance box of the glyph or run that produced
/// the path, which is what composition measures when placing it.
#[derive(Clone, Debug, Default)]
pub struct Pen {
    pub path: BezPath,
    pub frame: Option<Rect>,
}

impl Pen {
    pub fn new(path: BezPath, frame: Option<Rect>) -> Self {
        Self { path, frame }
    }

    /// The explicit frame, or the bounding box of the path.
    pub fn frame(&self) -> Rect {
        self.frame.unwrap_or_else(|| self.path.bounding_box())
    }

    pub fn translate(&mut self, offset: Vec2) {
        self.path.apply_affine(Affine::translate(offset));
        if let Some(frame) = &mut self.frame {
            *frame = *frame + offset;
        }
    }
}

/// An element of a [`PenGroup`].
#[derive(Clone, Debug)]
pub enum PenElement {
    Pen(Pen),
    Group(PenGroup),
}

impl PenElement {
    /// The element's frame. A pen with neither a frame nor any path
    /// elements has none, so it never stretches a union toward the origin.
    pub fn frame(&self) -> Option<Rect> {
        match self {
            Self::Pen(Pen { frame: None, path }) if path.elements().is_empty() => None,
            Self::Pen(pen) => Some(pen.frame()),
            Self::Group(group) => group.frame(),
        }
    }

    pub fn translate(&mut self, offset: Vec2) {
        match self {
            Self::Pen(pen) => pen.translate(offset),
            Self::Group(group) => group.translate(offset),
        }
    }
}

impl From<Pen> for PenElement {
    fn from(pen: Pen) -> Self {
        Self::Pen(pen)
    }
}

impl From<PenGroup> for PenElement {
    fn from(group: PenGroup) -> Self {
        Self::Group(group)
    }
}

/// An ordered, possibly nested collection of pens.
#[derive(Clone, Debug, Default)]
pub struct PenGroup {
    pub elements: Vec<PenElement>,
    /// Reference frame (the "container") of the group, if one was assigned.
    pub frame: Option<Rect>,
    /// Set when the group holds layered (multi-color) glyphs.
    pub layered: bool,
}

impl PenGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn push(&mut self, element: impl Into<PenElement>) {
        self.elements.push(element.into());
    }

    /// Moves the elements of `other` into this group, flattening one level.
    pub fn extend(&mut self, other: PenGroup) {
        self.layered |= other.layered;
        self.elements.extend(other.elements);
    }

    /// The union of the frames of all elements.
    pub fn content_frame(&self) -> Option<Rect> {
        self.elements
            .iter()
            .filter_map(PenElement::frame)
            .reduce(|a, b| a.union(b))
    }

    /// The assigned frame, or the content frame when none was assigned.
    pub fn frame(&self) -> Option<Rect> {
        self.frame.or_else(|| self.content_frame())
    }

    /// Width of [`frame`](Self::frame), zero for an empty group.
    pub fn frame_width(&self) -> f64 {
        self.frame().map_or(0.0, |frame| frame.width())
    }

    /// Translates every path and frame in the group, including its own frame.
    pub fn translate(&mut self, offset: Vec2) {
        for element in &mut self.elements {
            element.translate(offset);
        }
        if let Some(frame) = &mut self.frame {
            *frame = *frame + offset;
        }
    }

    /// Moves the content so that its anchors line up with those of `rect`.
    ///
    /// An axis with no anchor is left untouched.
    pub fn align(&mut self, rect: Rect, x: Option<XAnchor>, y: Option<YAnchor>) {
        let Some(content) = self.content_frame() else {
            return;
        };
        let dx = x.map_or(0.0, |x| x.position(rect) - x.position(content));
        let dy = y.map_or(0.0, |y| y.position(rect) - y.position(content));
        let offset = Vec2::new(dx, dy);
        for element in &mut self.elements {
            element.translate(offset);
        }
    }

    /// Visits every pen depth-first, bracketing nested groups.
    pub fn render(&self, sink: &mut impl PenSink) {
        for element in &self.elements {
            match element {
                PenElement::Pen(pen) => sink.draw(pen),
                PenElement::Group(group) => {
                    sink.push_group(group.frame, group.layered);
                    group.render(sink);
                    sink.pop_group();
                }
            }
        }
    }

    /// Collapses the group into a single pen framed by [`frame`](Self::frame).
    pub fn into_pen(self) -> Pen {
        let mut merged = Merge(BezPath::new());
        self.render(&mut merged);
        Pen::new(merged.0, self.frame())
    }
}

/// Receives the geometry of a [`PenGroup`].
pub trait PenSink {
    fn push_group(&mut self, frame: Option<Rect>, layered: bool) {
        let _ = (frame, layered);
    }

    fn pop_group(&mut self) {}

    fn draw(&mut self, pen: &Pen);
}

struct Merge(BezPath);

impl PenSink for Merge {
    fn draw(&mut self, pen: &Pen) {
        self.0.extend(pen.path.elements().iter().copied());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f64, size: f64) -> Pen {
        let rect = Rect::new(x, -size, x + size, 0.0);
        Pen::new(rect.to_path(0.1), Some(rect))
    }

    #[test]
    fn frame_falls_back_to_content() {
        let mut group = PenGroup::new();
        assert!(group.frame().is_none());
        assert_eq!(group.frame_width(), 0.0);
        group.push(square(0.0, 10.0));
        group.push(square(20.0, 10.0));
        assert_eq!(group.frame(), Some(Rect::new(0.0, -10.0, 30.0, 0.0)));

        group.frame = Some(Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(group.frame_width(), 100.0);
        assert_eq!(group.content_frame(), Some(Rect::new(0.0, -10.0, 30.0, 0.0)));
    }

    #[test]
    fn translate_moves_nested_frames() {
        let mut inner = PenGroup::new();
        inner.push(square(0.0, 10.0));
        let mut outer = PenGroup::new();
        outer.push(inner);
        outer.frame = Some(Rect::new(0.0, 0.0, 1.0, 1.0));
        outer.translate(Vec2::new(5.0, 7.0));
        assert_eq!(outer.frame, Some(Rect::new(5.0, 7.0, 6.0, 8.0)));
        assert_eq!(
            outer.content_frame(),
            Some(Rect::new(5.0, -3.0, 15.0, 7.0))
        );
    }

    #[test]
    fn align_centers_content_within_rect() {
        let mut group = PenGroup::new();
        group.push(square(0.0, 10.0));
        group.align(
            Rect::new(0.0, 0.0, 100.0, 50.0),
            Some(XAnchor::Center),
            None,
        );
        assert_eq!(group.frame(), Some(Rect::new(45.0, -10.0, 55.0, 0.0)));

        group.align(
            Rect::new(0.0, 0.0, 100.0, 50.0),
            Some(XAnchor::Max),
            Some(YAnchor::Max),
        );
        assert_eq!(group.frame(), Some(Rect::new(90.0, 40.0, 100.0, 50.0)));
    }

    #[test]
    fn empty_unframed_pens_have_no_frame() {
        let mut group = PenGroup::new();
        group.push(square(0.0, 10.0));
        group.push(Pen::default());
        assert!(group.elements[1].frame().is_none());
        group.translate(Vec2::new(500.0, 500.0));
        assert_eq!(
            group.content_frame(),
            Some(Rect::new(500.0, 490.0, 510.0, 500.0))
        );

        // An explicit frame is kept even without a path.
        let framed = Pen::new(BezPath::new(), Some(Rect::new(1.0, 2.0, 3.0, 4.0)));
        assert_eq!(
            PenElement::from(framed).frame(),
            Some(Rect::new(1.0, 2.0, 3.0, 4.0))
        );
    }

    #[test]
    fn extend_propagates_layered() {
        let mut a = PenGroup::new();
        let mut b = PenGroup::new();
        b.layered = true;
        b.push(square(0.0, 1.0));
        a.extend(b);
        assert!(a.layered);
        assert_eq!(a.len(), 1);
    }

    #[derive(Default)]
    struct Recorder {
        depth: usize,
        max_depth: usize,
        pens: usize,
    }

    impl PenSink for Recorder {
        fn push_group(&mut self, _: Option<Rect>, _: bool) {
            self.depth += 1;
            self.max_depth = self.max_depth.max(self.depth);
        }

        fn pop_group(&mut self) {
            self.depth -= 1;
        }

        fn draw(&mut self, _: &Pen) {
            self.pens += 1;
        }
    }

    #[test]
    fn render_visits_every_pen() {
        let mut inner = PenGroup::new();
        inner.push(square(0.0, 1.0));
        inner.push(square(1.0, 1.0));
        let mut outer = PenGroup::new();
        outer.push(inner);
        outer.push(square(2.0, 1.0));

        let mut recorder = Recorder::default();
        outer.render(&mut recorder);
        assert_eq!(recorder.pens, 3);
        assert_eq!(recorder.max_depth, 1);
        assert_eq!(recorder.depth, 0);

        let pen = outer.into_pen();
        assert_eq!(pen.frame, Some(Rect::new(0.0, -1.0, 3.0, 0.0)));
        assert!(!pen.path.elements().is_empty());
    }
}
