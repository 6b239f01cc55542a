// Copyright 2024 the Slugline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::fit::Fittable;
use crate::pens::{Pen, PenGroup};
use crate::Result;

/// A span of text rendered in a single style.
///
/// Runs are the leaves of composition. Each owns its own scale, which
/// [`Fittable::shrink`] only ever reduces. Geometry is produced with the
/// baseline at `y = 0` and glyphs extending upward (toward negative `y`);
/// frames span `(0, -cap_height * scale)` to `(width, 0)`.
pub trait StyledRun: Fittable + Sized {
    type Style: Clone + std::fmt::Debug;

    /// Builds a run of `text` in `style`.
    fn new(text: &str, style: &Self::Style) -> Result<Self>;

    fn style(&self) -> &Self::Style;

    fn text_content(&self) -> &str;

    /// Cap height of the style at a scale of one.
    fn cap_height(&self) -> f64;

    /// Current scale factor, starting at one.
    fn scale(&self) -> f64;

    /// Space added after each glyph but the last.
    fn tracking(&self) -> f64;

    /// Glyph-level geometry, one pen per glyph, framed by the run's advance box.
    fn pens(&self) -> PenGroup;

    /// The run's geometry merged into a single pen.
    fn pen(&self) -> Pen {
        self.pens().into_pen()
    }
}
