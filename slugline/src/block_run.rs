// Copyright 2024 the Slugline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A font-free run that draws every character as its advance box.
//!
//! Useful for previewing a layout before fonts are available, and for
//! deterministic tests of composition.

use peniko::kurbo::{BezPath, Rect, Shape};

use crate::fit::{Fittable, RunScale, ShrinkPolicy};
use crate::pens::{Pen, PenGroup};
use crate::run::StyledRun;
use crate::Result;

/// Metrics for a [`BlockRun`]. Every character has the same advance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlockStyle {
    pub advance: f64,
    pub cap_height: f64,
    pub tracking: f64,
    pub shrink: ShrinkPolicy,
}

impl Default for BlockStyle {
    fn default() -> Self {
        Self {
            advance: 50.0,
            cap_height: 70.0,
            tracking: 0.0,
            shrink: ShrinkPolicy::default(),
        }
    }
}

impl BlockStyle {
    pub fn new(advance: f64, cap_height: f64) -> Self {
        Self {
            advance,
            cap_height,
            ..Self::default()
        }
    }

    pub fn with_tracking(mut self, tracking: f64) -> Self {
        self.tracking = tracking;
        self
    }

    pub fn with_shrink(mut self, shrink: ShrinkPolicy) -> Self {
        self.shrink = shrink;
        self
    }
}

#[derive(Clone, Debug)]
pub struct BlockRun {
    text: String,
    style: BlockStyle,
    len: usize,
    state: RunScale,
}

impl BlockRun {
    fn scaled_advance(&self) -> f64 {
        self.style.advance * self.state.scale()
    }
}

impl Fittable for BlockRun {
    fn width(&self) -> Result<f64> {
        if self.len == 0 {
            return Ok(0.0);
        }
        let n = self.len as f64;
        Ok(self.scaled_advance() * n + self.state.tracking() * (n - 1.0))
    }

    fn shrink(&mut self) -> bool {
        self.state.shrink()
    }
}

impl StyledRun for BlockRun {
    type Style = BlockStyle;

    fn new(text: &str, style: &BlockStyle) -> Result<Self> {
        Ok(Self {
            text: text.to_owned(),
            style: *style,
            len: text.chars().count(),
            state: RunScale::new(style.tracking, style.shrink),
        })
    }

    fn style(&self) -> &BlockStyle {
        &self.style
    }

    fn text_content(&self) -> &str {
        &self.text
    }

    fn cap_height(&self) -> f64 {
        self.style.cap_height
    }

    fn scale(&self) -> f64 {
        self.state.scale()
    }

    fn tracking(&self) -> f64 {
        self.state.tracking()
    }

    fn pens(&self) -> PenGroup {
        let advance = self.scaled_advance();
        let top = -self.style.cap_height * self.state.scale();
        let mut group = PenGroup::new();
        let mut x = 0.0;
        for ch in self.text.chars() {
            let frame = Rect::new(x, top, x + advance, 0.0);
            let path = if ch.is_whitespace() {
                BezPath::new()
            } else {
                frame.to_path(0.1)
            };
            group.push(Pen::new(path, Some(frame)));
            x += advance + self.state.tracking();
        }
        let width = self.width().unwrap_or_default();
        group.frame = Some(Rect::new(0.0, top, width, 0.0));
        group
    }
}
