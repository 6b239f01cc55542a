// Copyright 2024 the Slugline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::kurbo::Vec2;

use crate::fit::Fittable;
use crate::pens::{Pen, PenElement, PenGroup};
use crate::run::StyledRun;
use crate::slug::Slug;
use crate::{Error, Result};

/// One visual line: slugs placed side by side.
#[derive(Clone, Debug)]
pub struct Line<R: StyledRun> {
    slugs: Vec<Slug<R>>,
    preserve_letters: bool,
    nest_slugs: bool,
}

impl<R: StyledRun> Line<R> {
    /// Creates a line that keeps per-glyph pens and nests each slug in its
    /// own group.
    pub fn new(slugs: Vec<Slug<R>>) -> Self {
        Self {
            slugs,
            preserve_letters: true,
            nest_slugs: true,
        }
    }

    /// Splits `text` on newlines into lines of a single slug each.
    pub fn from_text(
        text: &str,
        primary: R::Style,
        fallback: Option<R::Style>,
    ) -> Result<Vec<Self>> {
        text.split('\n')
            .map(|line| {
                let slug = Slug::new(line, primary.clone(), fallback.clone())?;
                Ok(Self::new(vec![slug]))
            })
            .collect()
    }

    /// One line per slug.
    pub fn from_slugs(slugs: impl IntoIterator<Item = Slug<R>>) -> Vec<Self> {
        slugs.into_iter().map(|slug| Self::new(vec![slug])).collect()
    }

    /// When false, each slug contributes one merged pen instead of glyph pens.
    pub fn with_preserve_letters(mut self, preserve_letters: bool) -> Self {
        self.preserve_letters = preserve_letters;
        self
    }

    /// When false, glyph pens of all slugs are flattened into the line's group.
    pub fn with_nest_slugs(mut self, nest_slugs: bool) -> Self {
        self.nest_slugs = nest_slugs;
        self
    }

    pub fn slugs(&self) -> &[Slug<R>] {
        &self.slugs
    }

    pub fn slugs_mut(&mut self) -> &mut [Slug<R>] {
        &mut self.slugs
    }

    pub fn height(&self) -> Result<f64> {
        let mut height: Option<f64> = None;
        for slug in &self.slugs {
            let h = slug.height()?;
            height = Some(height.map_or(h, |max| max.max(h)));
        }
        height.ok_or(Error::EmptyContent("slugs"))
    }

    /// Slug text contents joined with `/`.
    pub fn text_content(&self) -> String {
        self.slugs
            .iter()
            .map(Slug::text_content)
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Lays the slugs out left to right from the origin.
    ///
    /// Each slug is preceded by its leading margin and followed by its own
    /// width, its trailing margin, and the tracking of its last run.
    pub fn pens(&self) -> PenGroup {
        let mut pens = PenGroup::new();
        let mut x_off = 0.0;
        for slug in &self.slugs {
            let (before, after) = slug.margin();
            x_off += before;
            let offset = Vec2::new(x_off, 0.0);
            let width = if self.preserve_letters {
                let mut group = slug.pens(true);
                group.translate(offset);
                let width = group.frame_width();
                if self.nest_slugs {
                    pens.push(PenElement::Group(group));
                } else {
                    pens.extend(group);
                }
                width
            } else {
                let mut pen = slug.pen();
                pen.translate(offset);
                let width = pen.frame().width();
                pens.push(pen);
                width
            };
            x_off += width;
            x_off += after;
            x_off += slug.last_tracking();
        }
        pens
    }

    pub fn pen(&self) -> Pen {
        self.pens().into_pen()
    }
}

impl<R: StyledRun> Fittable for Line<R> {
    fn width(&self) -> Result<f64> {
        if self.slugs.is_empty() {
            return Err(Error::EmptyContent("slugs"));
        }
        self.slugs.iter().map(Fittable::width).sum()
    }

    fn shrink(&mut self) -> bool {
        let mut adjusted = false;
        for slug in &mut self.slugs {
            adjusted |= slug.shrink();
        }
        adjusted
    }
}
