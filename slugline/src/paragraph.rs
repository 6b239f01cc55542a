// Copyright 2024 the Slugline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::kurbo::Rect;

use crate::fit::{FitOptions, Fittable};
use crate::line::Line;
use crate::pens::PenGroup;
use crate::region::{Edge, Region, XAnchor, YAnchor};
use crate::run::StyledRun;
use crate::{Error, Result};

/// Paragraph-level layout configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParagraphStyle {
    /// Space between consecutive line boxes. Negative values overlap them.
    pub leading: f64,
    /// How each line is aligned within its box.
    pub x: XAnchor,
    /// Horizontal padding subtracted from the box width when fitting.
    pub xp: f64,
    /// The edge of the container that lines are taken from.
    pub edge: Edge,
}

impl Default for ParagraphStyle {
    fn default() -> Self {
        Self {
            leading: 10.0,
            x: XAnchor::Center,
            xp: 0.0,
            edge: Edge::MinY,
        }
    }
}

impl ParagraphStyle {
    pub fn with_leading(mut self, leading: f64) -> Self {
        self.leading = leading;
        self
    }

    pub fn with_x(mut self, x: XAnchor) -> Self {
        self.x = x;
        self
    }

    pub fn with_xp(mut self, xp: f64) -> Self {
        self.xp = xp;
        self
    }

    pub fn with_edge(mut self, edge: Edge) -> Self {
        self.edge = edge;
        self
    }
}

/// What a paragraph is laid into.
#[derive(Clone, Debug)]
pub enum Container {
    /// A plain rectangle.
    Region(Rect),
    /// Previously composed geometry, whose frame is used.
    Group(PenGroup),
}

impl Container {
    /// The rectangle lines are divided from. An empty group has a zero frame.
    pub fn frame(&self) -> Rect {
        match self {
            Self::Region(rect) => *rect,
            Self::Group(group) => group.frame().unwrap_or(Rect::ZERO),
        }
    }
}

impl From<Rect> for Container {
    fn from(rect: Rect) -> Self {
        Self::Region(rect)
    }
}

impl From<PenGroup> for Container {
    fn from(group: PenGroup) -> Self {
        Self::Group(group)
    }
}

/// A block of lines laid into a container.
///
/// ```ignore
/// let lines = Line::<GlyphRun>::from_text("Hello\nWorld", style, None)?;
/// let pens = Paragraph::new(lines, Rect::new(0.0, 0.0, 1080.0, 1080.0), ParagraphStyle::default())
///     .fpa(None)?;
/// ```
#[derive(Clone, Debug)]
pub struct Paragraph<R: StyledRun> {
    lines: Vec<Line<R>>,
    container: Container,
    frame: Rect,
    style: ParagraphStyle,
    fit_options: FitOptions,
}

impl<R: StyledRun> Paragraph<R> {
    pub fn new(
        lines: Vec<Line<R>>,
        container: impl Into<Container>,
        style: ParagraphStyle,
    ) -> Self {
        let container = container.into();
        let frame = container.frame();
        Self {
            lines,
            container,
            frame,
            style,
            fit_options: FitOptions::default(),
        }
    }

    pub fn with_fit_options(mut self, fit_options: FitOptions) -> Self {
        self.fit_options = fit_options;
        self
    }

    pub fn lines(&self) -> &[Line<R>] {
        &self.lines
    }

    pub fn lines_mut(&mut self) -> &mut [Line<R>] {
        &mut self.lines
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    pub fn style(&self) -> &ParagraphStyle {
        &self.style
    }

    /// Line text contents joined with newlines.
    pub fn text_content(&self) -> String {
        self.lines
            .iter()
            .map(Line::text_content)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Divides the container into one box per line.
    ///
    /// Each box is as tall as its line and is taken from the style's edge of
    /// whatever is left. Positive leading discards that much after each box;
    /// negative leading gives that much back, so the next box overlaps.
    ///
    /// A container that is too small is not an error: the boxes that do not
    /// fit run past it and are reported with a warning.
    pub fn line_rects(&self) -> Result<Vec<Rect>> {
        let ParagraphStyle { leading, edge, .. } = self.style;
        let mut rects = Vec::with_capacity(self.lines.len());
        let mut leftover = self.frame;
        for (idx, line) in self.lines.iter().enumerate() {
            let (line_box, rest) = leftover.divide(line.height()?, edge);
            let overflow = match edge {
                Edge::MinY | Edge::MaxY => rest.height() < 0.0,
                Edge::MinX | Edge::MaxX => rest.width() < 0.0,
            };
            if overflow || line_box.is_degenerate() {
                log::warn!("Line {idx} does not fit its container: {line_box:?}");
            }
            leftover = if leading < 0.0 {
                rest.grow(-leading, edge)
            } else {
                rest.divide(leading, edge).1
            };
            rects.push(line_box);
        }
        Ok(rects)
    }

    /// Width of the widest line.
    pub fn width(&self) -> Result<f64> {
        let mut width: Option<f64> = None;
        for line in &self.lines {
            let w = line.width()?;
            width = Some(width.map_or(w, |max| max.max(w)));
        }
        width.ok_or(Error::EmptyContent("lines"))
    }

    /// Shrinks every line to the width of its box, less the horizontal padding.
    pub fn fit(&mut self) -> Result<&mut Self> {
        let rects = self.line_rects()?;
        for (line, rect) in self.lines.iter_mut().zip(&rects) {
            line.fit_with(rect.width() - self.style.xp, &self.fit_options)?;
        }
        Ok(self)
    }

    /// Places every line in its box.
    ///
    /// Each line becomes a group framed by its box, moved so its baseline
    /// sits on the bottom of the box and aligned horizontally per the style.
    pub fn pens(&self) -> Result<PenGroup> {
        let rects = self.line_rects()?;
        let mut pens = PenGroup::new();
        for (line, rect) in self.lines.iter().zip(rects) {
            let mut group = line.pens();
            group.translate(rect.baseline_origin().to_vec2());
            group.frame = Some(rect);
            group.align(rect, Some(self.style.x), None);
            pens.push(group);
        }
        Ok(pens)
    }

    /// Fits, places, and centers the result in `rect`, or in the container.
    pub fn fpa(&mut self, rect: Option<Rect>) -> Result<PenGroup> {
        self.fit()?;
        let mut pens = self.pens()?;
        pens.align(
            rect.unwrap_or(self.frame),
            Some(XAnchor::Center),
            Some(YAnchor::Center),
        );
        Ok(pens)
    }
}
