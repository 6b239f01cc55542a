// Copyright 2024 the Slugline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slugline tests.

// LINEBENDER LINT SET - lib.rs - v2
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
// The following lints are part of the Linebender standard set,
// but resolving them has been deferred for now.
// Feel free to send a PR that solves one or more of these.
#![allow(
    missing_debug_implementations,
    unreachable_pub,
    missing_docs,
    clippy::missing_assert_message,
    clippy::allow_attributes_without_reason
)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::Result;
use slugline::kurbo::{Rect, Shape};
use slugline::peniko::{Blob, Font};
use slugline::segment::Script;
use slugline::{
    BlockRun, BlockStyle, Container, Fittable, Line, Paragraph, ParagraphStyle, Pen, PenGroup,
    PenSink, Segment, Segmenter, Slug, StyledRun,
};

/// DejaVu Sans Mono: every glyph advances 1233 units on a 2048 unit em, and
/// its OS/2 table predates the cap height field.
pub const MONO_FONT: &[u8] = include_bytes!("../assets/dejavu/DejaVuSansMono.ttf");

pub fn mono_font() -> Font {
    Font::new(Blob::new(Arc::new(MONO_FONT)), 0)
}

/// Style of a [`ScriptedRun`]: a fixed-width box that can shrink a set
/// number of times, counting every shrink call it receives.
#[derive(Clone, Debug)]
pub struct ScriptedStyle {
    pub width: f64,
    pub cap_height: f64,
    pub tracking: f64,
    /// How many shrink calls succeed before the run saturates.
    pub shrinks: usize,
    /// Scale multiplier applied by each successful shrink.
    pub factor: f64,
    calls: Arc<AtomicUsize>,
}

impl ScriptedStyle {
    pub fn new(width: f64, cap_height: f64, shrinks: usize) -> Self {
        Self {
            width,
            cap_height,
            tracking: 0.0,
            shrinks,
            factor: 0.5,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_tracking(mut self, tracking: f64) -> Self {
        self.tracking = tracking;
        self
    }

    /// Number of shrink calls received by every run built from this style.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[derive(Clone, Debug)]
pub struct ScriptedRun {
    text: String,
    style: ScriptedStyle,
    remaining: usize,
    scale: f64,
}

impl Fittable for ScriptedRun {
    fn width(&self) -> slugline::Result<f64> {
        Ok(self.style.width * self.scale)
    }

    fn shrink(&mut self) -> bool {
        self.style.calls.fetch_add(1, Ordering::SeqCst);
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.scale *= self.style.factor;
        true
    }
}

impl StyledRun for ScriptedRun {
    type Style = ScriptedStyle;

    fn new(text: &str, style: &ScriptedStyle) -> slugline::Result<Self> {
        Ok(Self {
            text: text.to_owned(),
            style: style.clone(),
            remaining: style.shrinks,
            scale: 1.0,
        })
    }

    fn style(&self) -> &ScriptedStyle {
        &self.style
    }

    fn text_content(&self) -> &str {
        &self.text
    }

    fn cap_height(&self) -> f64 {
        self.style.cap_height
    }

    fn scale(&self) -> f64 {
        self.scale
    }

    fn tracking(&self) -> f64 {
        self.style.tracking
    }

    fn pens(&self) -> PenGroup {
        let frame = Rect::new(
            0.0,
            -self.style.cap_height * self.scale,
            self.style.width * self.scale,
            0.0,
        );
        let mut group = PenGroup::new();
        group.push(Pen::new(frame.to_path(0.1), Some(frame)));
        group.frame = Some(frame);
        group
    }
}

/// Tags ASCII as Latin and everything else as unknown, grouping runs of
/// equally tagged characters.
#[derive(Clone, Copy, Debug, Default)]
pub struct AsciiSegmenter;

impl Segmenter for AsciiSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<Segment<'a>> {
        let tag = |ch: char| {
            if ch.is_ascii() {
                Script::Latin
            } else {
                Script::Unknown
            }
        };
        let mut segments = Vec::new();
        let mut start = 0;
        let mut current = None;
        for (idx, ch) in text.char_indices() {
            let script = tag(ch);
            match current {
                Some(previous) if previous != script => {
                    segments.push(Segment::new(previous, &text[start..idx]));
                    start = idx;
                }
                _ => {}
            }
            current = Some(script);
        }
        if let Some(script) = current {
            segments.push(Segment::new(script, &text[start..]));
        }
        segments
    }
}

/// A paragraph of block-run lines, one per line of `text`, with every
/// character `advance` wide and `cap_height` tall.
pub fn block_paragraph(
    text: &str,
    advance: f64,
    cap_height: f64,
    container: impl Into<Container>,
    style: ParagraphStyle,
) -> Result<Paragraph<BlockRun>> {
    let lines = Line::from_text(text, BlockStyle::new(advance, cap_height), None)?;
    Ok(Paragraph::new(lines, container, style))
}

/// A single-slug line of scripted runs.
pub fn scripted_line(text: &str, style: ScriptedStyle) -> Result<Line<ScriptedRun>> {
    Ok(Line::new(vec![Slug::new(text, style, None)?]))
}

/// Every frame in `group`, depth-first: group frames as they are entered,
/// then each pen's frame followed by the bounds of its outline.
pub fn frames(group: &PenGroup) -> Vec<Option<Rect>> {
    let mut sink = Frames::default();
    group.render(&mut sink);
    sink.0
}

#[derive(Default)]
struct Frames(Vec<Option<Rect>>);

impl PenSink for Frames {
    fn push_group(&mut self, frame: Option<Rect>, _layered: bool) {
        self.0.push(frame);
    }

    fn draw(&mut self, pen: &Pen) {
        self.0.push(pen.frame);
        if !pen.path.elements().is_empty() {
            self.0.push(Some(pen.path.bounding_box()));
        }
    }
}
