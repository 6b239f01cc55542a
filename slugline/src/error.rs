// Copyright 2024 the Slugline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Errors that can occur while composing text.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A width or height was measured over an empty sequence.
    ///
    /// The payload names what was empty: `"lines"`, `"slugs"` or `"runs"`.
    #[error("Cannot measure a layout with no {0}")]
    EmptyContent(&'static str),
    /// Font data could not be parsed.
    /// See [`skrifa::raw::ReadError`] for more information.
    #[error("Couldn't read font data")]
    Font(#[from] skrifa::raw::ReadError),
}

/// A specialized `Result` type for composition operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
