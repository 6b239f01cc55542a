// Copyright 2024 the Slugline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::kurbo::Vec2;
use smallvec::SmallVec;

use crate::fit::Fittable;
use crate::pens::{Pen, PenGroup};
use crate::run::StyledRun;
use crate::segment::{ScriptSegmenter, Segmenter};
use crate::{Error, Result};

/// A span of source text, split into runs by script.
///
/// With a fallback style, every segment not classified as Latin is set in
/// the fallback style and Latin segments use the primary style. Without
/// one, the whole text is a single run in the primary style.
#[derive(Clone, Debug)]
pub struct Slug<R: StyledRun> {
    text: String,
    primary: R::Style,
    fallback: Option<R::Style>,
    margin: (f64, f64),
    runs: SmallVec<[R; 1]>,
}

impl<R: StyledRun> Slug<R> {
    pub fn new(text: &str, primary: R::Style, fallback: Option<R::Style>) -> Result<Self> {
        Self::with_segmenter(text, primary, fallback, &ScriptSegmenter)
    }

    pub fn with_segmenter(
        text: &str,
        primary: R::Style,
        fallback: Option<R::Style>,
        segmenter: &impl Segmenter,
    ) -> Result<Self> {
        let runs = match &fallback {
            Some(fallback) => segmenter
                .segment(text)
                .into_iter()
                .map(|segment| {
                    let style = if segment.is_latin() {
                        &primary
                    } else {
                        fallback
                    };
                    R::new(segment.text, style)
                })
                .collect::<Result<_>>()?,
            None => smallvec::smallvec![R::new(text, &primary)?],
        };
        Ok(Self {
            text: text.to_owned(),
            primary,
            fallback,
            margin: (0.0, 0.0),
            runs,
        })
    }

    /// Sets the space before and after the slug when it is placed in a line.
    pub fn with_margin(mut self, before: f64, after: f64) -> Self {
        self.margin = (before, after);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn primary(&self) -> &R::Style {
        &self.primary
    }

    pub fn fallback(&self) -> Option<&R::Style> {
        self.fallback.as_ref()
    }

    pub fn margin(&self) -> (f64, f64) {
        self.margin
    }

    pub fn runs(&self) -> &[R] {
        &self.runs
    }

    /// Height of the tallest run at its current scale.
    pub fn height(&self) -> Result<f64> {
        self.runs
            .iter()
            .map(|run| run.cap_height() * run.scale())
            .reduce(f64::max)
            .ok_or(Error::EmptyContent("runs"))
    }

    /// Run texts joined with `-`.
    pub fn text_content(&self) -> String {
        self.runs
            .iter()
            .map(StyledRun::text_content)
            .collect::<Vec<_>>()
            .join("-")
    }

    /// Tracking of the final run, or zero without runs.
    pub fn last_tracking(&self) -> f64 {
        self.runs.last().map_or(0.0, StyledRun::tracking)
    }

    /// The runs placed side by side.
    ///
    /// When `atomized`, glyph pens are flattened into the returned group;
    /// otherwise each run contributes one merged pen.
    pub fn pens(&self, atomized: bool) -> PenGroup {
        let mut pens = PenGroup::new();
        let mut x_off = 0.0;
        for run in &self.runs {
            if atomized {
                let mut glyphs = run.pens();
                glyphs.translate(Vec2::new(x_off, 0.0));
                x_off += glyphs.frame_width();
                pens.extend(glyphs);
            } else {
                let mut pen = run.pen();
                pen.translate(Vec2::new(x_off, 0.0));
                x_off += pen.frame().width();
                pens.push(pen);
            }
        }
        pens
    }

    pub fn pen(&self) -> Pen {
        self.pens(false).into_pen()
    }
}

impl<R: StyledRun> Fittable for Slug<R> {
    fn width(&self) -> Result<f64> {
        if self.runs.is_empty() {
            return Err(Error::EmptyContent("runs"));
        }
        self.runs.iter().map(Fittable::width).sum()
    }

    fn shrink(&mut self) -> bool {
        let mut adjusted = false;
        for run in &mut self.runs {
            adjusted |= run.shrink();
        }
        adjusted
    }
}
