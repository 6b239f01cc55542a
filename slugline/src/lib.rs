// Copyright 2024 the Slugline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slugline composes styled text into positioned geometry for still and
//! animated graphics.
//!
//! Text is organized in four levels:
//!
//! - a [`Paragraph`] lays [`Line`]s into a container, one box per line;
//! - a [`Line`] places [`Slug`]s side by side, with margins and tracking;
//! - a [`Slug`] splits its text into runs by script, so non-Latin text can
//!   fall back to another style;
//! - a run (anything implementing [`StyledRun`]) measures and draws text in
//!   a single style. [`GlyphRun`] draws font outlines with [`skrifa`];
//!   [`BlockRun`] draws every character as a box and needs no font.
//!
//! Every level can shrink to fit a target width (see [`Fittable`]). A
//! paragraph fits each of its lines to its box, and the result is drawn as
//! nested [`PenGroup`]s of [`kurbo::BezPath`]s:
//!
//! ```ignore
//! let style = TextStyle::new(font, 120.0);
//! let lines = Line::<GlyphRun>::from_text("Hello\nWorld", style, None)?;
//! let pens = Paragraph::new(lines, Rect::new(0.0, 0.0, 1080.0, 1080.0), ParagraphStyle::default())
//!     .fit()?
//!     .pens()?;
//! pens.render(&mut my_sink);
//! ```
//!
//! Composition is synchronous and deterministic. Nothing is shared between
//! trees, so independent paragraphs can be built and fit on separate threads.

// LINEBENDER LINT SET - lib.rs - v2
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// The following lints are part of the Linebender standard set,
// but resolving them has been deferred for now.
// Feel free to send a PR that solves one or more of these.
#![allow(
    missing_docs,
    unreachable_pub,
    clippy::missing_assert_message,
    clippy::cast_possible_truncation,
    clippy::allow_attributes_without_reason
)]

mod block_run;
mod error;
mod fit;
mod glyph_run;
mod line;
mod paragraph;
mod pens;
mod run;
mod slug;

pub mod region;
pub mod segment;

/// Styling and composition primitives.
pub use peniko;
/// 2D geometry, with a focus on curves.
pub use peniko::kurbo;
pub use skrifa;

pub use block_run::{BlockRun, BlockStyle};
pub use error::{Error, Result};
pub use fit::{FitOptions, FitOutcome, Fittable, RunScale, ShrinkPolicy};
pub use glyph_run::{GlyphRun, TextStyle};
pub use line::Line;
pub use paragraph::{Container, Paragraph, ParagraphStyle};
pub use pens::{Pen, PenElement, PenGroup, PenSink};
pub use region::{Edge, Region, XAnchor, YAnchor};
pub use run::StyledRun;
pub use segment::{ScriptSegmenter, Segment, Segmenter};
pub use slug::Slug;

static_assertions::assert_impl_all!(Paragraph<GlyphRun>: Send, Sync);
static_assertions::assert_impl_all!(Paragraph<BlockRun>: Send, Sync);
