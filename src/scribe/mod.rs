//! Text-to-cuneiform rendering engine.
//!
//! Turns arbitrary modern text into sequences of cuneiform signs by phonetic
//! approximation. This is explicitly not scholarly transliteration: words are
//! cut into 1-4 letter chunks by a greedy longest-match scan over the mapping
//! vocabulary, and each chunk resolves to its mapped sign or a placeholder.
//!
//! ## Components
//!
//! - [`syllabify`] — word segmentation and per-token sign resolution
//! - [`render`] — line/word/syllable structures, flattened sign strings,
//!   diagnostic breakdowns, and aggregate statistics
//!
//! Every function here is pure: output depends only on the input text, the
//! table, and the options. Nothing is cached and no state survives a call.

pub mod render;
pub mod syllabify;

use std::collections::BTreeMap;

pub use render::{
    breakdown, render, stats, to_script, RenderedLine, RenderedWord, ScribeStats,
    SyllableBreakdown, WordBreakdown,
};
pub use syllabify::{normalize, resolve, segment, RenderedSyllable};

/// Per-syllable sign overrides, keyed by normalized syllable.
///
/// An override wins over the table's primary mapping; callers build this from
/// user choices among a mapping's alternatives (or any sign string).
pub type SyllableOverrides = BTreeMap<String, String>;

/// Configuration for text rendering.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Insert a space between signs within a word.
    pub add_spacing: bool,
    /// Placeholder for syllables with no mapping.
    pub unknown_char: String,
    /// Separator between rendered words.
    pub word_separator: String,
    /// Keep line breaks as separate lines; when false, breaks fold into
    /// spaces and the whole text renders as one line.
    pub preserve_line_breaks: bool,
    /// Per-syllable overrides consulted before the table.
    pub overrides: SyllableOverrides,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            add_spacing: false,
            unknown_char: "?".to_string(),
            word_separator: " ".to_string(),
            preserve_line_breaks: true,
            overrides: SyllableOverrides::new(),
        }
    }
}
