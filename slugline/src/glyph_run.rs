// Copyright 2024 the Slugline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runs measured and drawn from font outlines.

use peniko::kurbo::{Affine, BezPath, Rect};
use peniko::Font;
use skrifa::instance::{LocationRef, Size};
use skrifa::outline::{DrawSettings, OutlinePen};
use skrifa::raw::TableProvider;
use skrifa::{FontRef, GlyphId, MetadataProvider};

use crate::fit::{Fittable, RunScale, ShrinkPolicy};
use crate::pens::{Pen, PenGroup};
use crate::run::StyledRun;
use crate::Result;

/// A font at a size, plus the tracking and shrink behavior of runs set in it.
#[derive(Clone, Debug)]
pub struct TextStyle {
    pub font: Font,
    /// Font size in pixels per em.
    pub size: f32,
    pub tracking: f64,
    pub shrink: ShrinkPolicy,
}

impl TextStyle {
    pub fn new(font: Font, size: f32) -> Self {
        Self {
            font,
            size,
            tracking: 0.0,
            shrink: ShrinkPolicy::default(),
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

/// A run of glyphs mapped through the font's character map.
///
/// Glyphs are placed at their nominal advances; no shaping is applied.
#[derive(Clone, Debug)]
pub struct GlyphRun {
    text: String,
    style: TextStyle,
    /// Glyph ids and their advances at `style.size`.
    glyphs: Vec<(GlyphId, f32)>,
    cap_height: f64,
    layered: bool,
    state: RunScale,
}

impl GlyphRun {
    fn advance_sum(&self) -> f64 {
        self.glyphs
            .iter()
            .map(|&(_, advance)| f64::from(advance))
            .sum()
    }
}

impl Fittable for GlyphRun {
    fn width(&self) -> Result<f64> {
        if self.glyphs.is_empty() {
            return Ok(0.0);
        }
        let gaps = (self.glyphs.len() - 1) as f64;
        Ok(self.advance_sum() * self.state.scale() + self.state.tracking() * gaps)
    }

    fn shrink(&mut self) -> bool {
        self.state.shrink()
    }
}

impl StyledRun for GlyphRun {
    type Style = TextStyle;

    fn new(text: &str, style: &TextStyle) -> Result<Self> {
        let font = FontRef::from_index(style.font.data.as_ref(), style.font.index)?;
        let size = Size::new(style.size);
        let location = LocationRef::default();
        let charmap = font.charmap();
        let glyph_metrics = font.glyph_metrics(size, location);
        let metrics = font.metrics(size, location);
        let glyphs = text
            .chars()
            .map(|ch| {
                let gid = charmap.map(ch).unwrap_or_default();
                (gid, glyph_metrics.advance_width(gid).unwrap_or_default())
            })
            .collect();
        Ok(Self {
            text: text.to_owned(),
            style: style.clone(),
            glyphs,
            cap_height: f64::from(metrics.cap_height.unwrap_or(metrics.ascent)),
            // Outlines drop the color layers, but callers still need to know.
            layered: font.colr().is_ok(),
            state: RunScale::new(style.tracking, style.shrink),
        })
    }

    fn style(&self) -> &TextStyle {
        &self.style
    }

    fn text_content(&self) -> &str {
        &self.text
    }

    fn cap_height(&self) -> f64 {
        self.cap_height
    }

    fn scale(&self) -> f64 {
        self.state.scale()
    }

    fn tracking(&self) -> f64 {
        self.state.tracking()
    }

    fn pens(&self) -> PenGroup {
        let scale = self.state.scale();
        let top = -self.cap_height * scale;
        let mut group = PenGroup::new();
        group.layered = self.layered;
        group.frame = Some(Rect::new(0.0, top, self.width().unwrap_or_default(), 0.0));
        let font = match FontRef::from_index(self.style.font.data.as_ref(), self.style.font.index)
        {
            Ok(font) => font,
            Err(e) => {
                log::warn!("Font became unreadable after measuring {:?}: {e}", self.text);
                return group;
            }
        };
        let outlines = font.outline_glyphs();
        let size = Size::new(self.style.size * scale as f32);
        let mut x = 0.0;
        for &(gid, advance) in &self.glyphs {
            let advance = f64::from(advance) * scale;
            let frame = Rect::new(x, top, x + advance, 0.0);
            let mut pen = BezPathPen(BezPath::new());
            if let Some(outline) = outlines.get(gid) {
                let settings = DrawSettings::unhinted(size, LocationRef::default());
                if outline.draw(settings, &mut pen).is_err() {
                    log::warn!("Failed to draw outline for glyph {}", gid.to_u32());
                }
            }
            let transform = Affine::translate((x, 0.0)) * Affine::FLIP_Y;
            group.push(Pen::new(transform * pen.0, Some(frame)));
            x += advance + self.state.tracking();
        }
        group
    }
}

struct BezPathPen(BezPath);

impl OutlinePen for BezPathPen {
    fn move_to(&mut self, x: f32, y: f32) {
        self.0.move_to((x as f64, y as f64));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.0.line_to((x as f64, y as f64));
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.0
            .quad_to((cx0 as f64, cy0 as f64), (x as f64, y as f64));
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.0.curve_to(
            (cx0 as f64, cy0 as f64),
            (cx1 as f64, cy1 as f64),
            (x as f64, y as f64),
        );
    }

    fn close(&mut self) {
        self.0.close_path();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use peniko::Blob;

    use super::*;
    use crate::Error;

    #[test]
    fn unreadable_font_is_an_error() {
        let font = Font::new(Blob::new(Arc::new(b"definitely not a font".to_vec())), 0);
        let style = TextStyle::new(font, 24.0);
        assert!(matches!(GlyphRun::new("abc", &style), Err(Error::Font(_))));
    }

    #[test]
    fn outline_pen_builds_path() {
        let mut pen = BezPathPen(BezPath::new());
        pen.move_to(0.0, 0.0);
        pen.line_to(10.0, 0.0);
        pen.quad_to(10.0, 5.0, 5.0, 10.0);
        pen.close();
        assert_eq!(pen.0.elements().len(), 4);
    }
}
