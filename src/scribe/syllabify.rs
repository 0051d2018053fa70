//! Word segmentation and sign resolution.
//!
//! [`segment`] is a greedy longest-prefix-match tokenizer over the mapping
//! vocabulary, not a linguistic syllabifier: at each position it probes
//! 4-, 3-, 2-, then 1-letter chunks and takes the first that the table knows.

use serde::Serialize;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::mapping::{Confidence, SyllableTable};
use crate::scribe::RenderOptions;

/// A syllable token resolved to a sign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedSyllable {
    /// The syllable text as segmented.
    pub syllable: String,
    /// The resolved sign string, or the placeholder when unmapped.
    pub sign: String,
    /// True when the mapping exists but is below high confidence.
    pub is_approximation: bool,
    /// True when no mapping exists at all.
    pub unmapped: bool,
}

/// Normalize a word for segmentation: decompose, strip combining marks,
/// lowercase, and keep only `a-z`.
///
/// Accented Latin input degrades to its base letters ("café" → "cafe")
/// rather than losing the character entirely.
pub fn normalize(word: &str) -> String {
    word.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .filter(char::is_ascii_lowercase)
        .collect()
}

/// Break a word into syllable tokens by greedy longest match.
///
/// Returns an empty sequence for input with no letters. The scan always
/// covers the whole normalized word: if no table key matches at a position
/// (possible when a single letter has no mapping), the bare character is
/// emitted as a token and the scan moves on.
pub fn segment(word: &str, table: &SyllableTable) -> Vec<String> {
    let cleaned = normalize(word);
    if cleaned.is_empty() {
        return Vec::new();
    }

    let mut tokens = Vec::new();
    let mut i = 0;
    while i < cleaned.len() {
        let longest = 4.min(cleaned.len() - i);
        let mut matched = false;
        for len in (1..=longest).rev() {
            let chunk = &cleaned[i..i + len];
            if table.contains(chunk) {
                tokens.push(chunk.to_string());
                i += len;
                matched = true;
                break;
            }
        }
        if !matched {
            // No key of any length here; emit the bare letter so the scan
            // terminates and covers the full word.
            tokens.push(cleaned[i..i + 1].to_string());
            i += 1;
        }
    }
    tokens
}

/// Resolve a syllable token to its sign.
///
/// Precedence: caller override, then the table's primary mapping, then the
/// configured placeholder. An override is an explicit user choice and is
/// reported as mapped and non-approximate.
pub fn resolve(token: &str, table: &SyllableTable, options: &RenderOptions) -> RenderedSyllable {
    let key = token.to_lowercase();

    if let Some(sign) = options.overrides.get(&key) {
        return RenderedSyllable {
            syllable: token.to_string(),
            sign: sign.clone(),
            is_approximation: false,
            unmapped: false,
        };
    }

    match table.lookup(&key) {
        Some(mapping) => RenderedSyllable {
            syllable: token.to_string(),
            sign: mapping.primary_sign.clone(),
            is_approximation: mapping.confidence != Confidence::High,
            unmapped: false,
        },
        None => RenderedSyllable {
            syllable: token.to_string(),
            sign: options.unknown_char.clone(),
            is_approximation: false,
            unmapped: true,
        },
    }
}
