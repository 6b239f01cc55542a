// Copyright 2024 the Slugline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Partitioning text into script-tagged segments.

pub use unicode_script::Script;
use unicode_script::UnicodeScript;

/// A contiguous piece of text tagged with the script it was classified as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment<'a> {
    pub script: Script,
    pub text: &'a str,
}

impl<'a> Segment<'a> {
    pub fn new(script: Script, text: &'a str) -> Self {
        Self { script, text }
    }

    pub fn is_latin(&self) -> bool {
        self.script == Script::Latin
    }
}

/// Splits text into script-tagged segments.
///
/// Implementations must return segments in text order whose concatenation
/// is exactly the input.
pub trait Segmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<Segment<'a>>;
}

/// Segments by the Unicode `Script` property.
///
/// Characters without a script of their own (Common, Inherited, Unknown)
/// join whichever segment they fall in, so punctuation and spaces never
/// start a segment. Text made only of such characters is tagged Latin.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScriptSegmenter;

impl Segmenter for ScriptSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<Segment<'a>> {
        let mut segments = Vec::new();
        let mut current = text
            .chars()
            .map(|ch| ch.script())
            .find(|&script| real_script(script))
            .unwrap_or(Script::Latin);
        let mut start = 0;
        for (idx, ch) in text.char_indices() {
            let script = ch.script();
            if real_script(script) && script != current {
                if idx > start {
                    segments.push(Segment::new(current, &text[start..idx]));
                }
                start = idx;
                current = script;
            }
        }
        if start < text.len() {
            segments.push(Segment::new(current, &text[start..]));
        }
        segments
    }
}

fn real_script(script: Script) -> bool {
    !matches!(script, Script::Common | Script::Inherited | Script::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scripts(text: &str) -> Vec<(Script, &str)> {
        ScriptSegmenter
            .segment(text)
            .into_iter()
            .map(|segment| (segment.script, segment.text))
            .collect()
    }

    #[test]
    fn single_script_is_one_segment() {
        assert_eq!(scripts("Hello, world!"), [(Script::Latin, "Hello, world!")]);
    }

    #[test]
    fn script_change_starts_a_segment() {
        assert_eq!(
            scripts("abc αβγ def"),
            [
                (Script::Latin, "abc "),
                (Script::Greek, "αβγ "),
                (Script::Latin, "def"),
            ]
        );
    }

    #[test]
    fn leading_neutral_characters_take_first_script() {
        assert_eq!(scripts("«Привет»"), [(Script::Cyrillic, "«Привет»")]);
        assert_eq!(scripts("123 ..."), [(Script::Latin, "123 ...")]);
    }

    #[test]
    fn empty_text_has_no_segments() {
        assert!(scripts("").is_empty());
    }

    #[test]
    fn segments_reassemble_the_text() {
        let text = "Tokyo 東京 — مرحبا, ok";
        let joined: String = ScriptSegmenter
            .segment(text)
            .iter()
            .map(|segment| segment.text)
            .collect();
        assert_eq!(joined, text);
    }
}
