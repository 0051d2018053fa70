//! Line/word/syllable rendering, flattened output, and statistics.
//!
//! [`render`] produces structured view objects; [`to_script`] flattens the
//! same structures into a single sign string, so the two can never drift
//! apart. [`breakdown`] and [`stats`] are derived views for diagnostics.

use serde::Serialize;

use crate::mapping::{Confidence, SyllableTable};
use crate::scribe::syllabify::{resolve, segment, RenderedSyllable};
use crate::scribe::RenderOptions;

/// A word rendered to signs.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedWord {
    /// The word as it appeared in the input.
    pub original: String,
    pub syllables: Vec<RenderedSyllable>,
}

impl RenderedWord {
    /// The word's signs joined per the options.
    pub fn sign_string(&self, options: &RenderOptions) -> String {
        let signs: Vec<&str> = self.syllables.iter().map(|s| s.sign.as_str()).collect();
        if options.add_spacing {
            signs.join(" ")
        } else {
            signs.concat()
        }
    }
}

/// A line of rendered words.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedLine {
    pub original: String,
    pub words: Vec<RenderedWord>,
}

/// Render a single word.
pub fn render_word(word: &str, table: &SyllableTable, options: &RenderOptions) -> RenderedWord {
    RenderedWord {
        original: word.to_string(),
        syllables: segment(word, table)
            .iter()
            .map(|token| resolve(token, table, options))
            .collect(),
    }
}

/// Render a single line: whitespace-separated words, empties discarded.
pub fn render_line(line: &str, table: &SyllableTable, options: &RenderOptions) -> RenderedLine {
    RenderedLine {
        original: line.to_string(),
        words: line
            .split_whitespace()
            .map(|word| render_word(word, table, options))
            .collect(),
    }
}

/// Render complete text into lines.
///
/// With `preserve_line_breaks` unset, breaks fold into spaces and the whole
/// text comes back as a single line.
pub fn render(text: &str, table: &SyllableTable, options: &RenderOptions) -> Vec<RenderedLine> {
    if options.preserve_line_breaks {
        text.split('\n')
            .map(|line| render_line(line, table, options))
            .collect()
    } else {
        vec![render_line(&text.replace('\n', " "), table, options)]
    }
}

/// Flatten text straight to a sign string.
///
/// Signs join within a word per `add_spacing`, words join with the
/// configured separator, lines join with a line break. Built on [`render`],
/// so the flattened and structured outputs always agree.
pub fn to_script(text: &str, table: &SyllableTable, options: &RenderOptions) -> String {
    render(text, table, options)
        .iter()
        .map(|line| {
            line.words
                .iter()
                .map(|word| word.sign_string(options))
                .collect::<Vec<_>>()
                .join(&options.word_separator)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Per-syllable diagnostic annotation.
#[derive(Debug, Clone, Serialize)]
pub struct SyllableBreakdown {
    pub syllable: String,
    /// Effective sign after overrides.
    pub sign: String,
    /// Whether a sign was found (override or table).
    pub mapped: bool,
    /// The table's confidence tier for this syllable; `None` when the table
    /// has no entry.
    pub confidence: Option<Confidence>,
}

/// A word's diagnostic breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct WordBreakdown {
    pub word: String,
    pub syllables: Vec<SyllableBreakdown>,
}

/// Break text into per-word, per-syllable diagnostics.
///
/// Line structure is ignored here; the text is treated as one run of
/// whitespace-separated words.
pub fn breakdown(text: &str, table: &SyllableTable, options: &RenderOptions) -> Vec<WordBreakdown> {
    text.split_whitespace()
        .map(|word| WordBreakdown {
            word: word.to_string(),
            syllables: segment(word, table)
                .iter()
                .map(|token| {
                    let resolved = resolve(token, table, options);
                    SyllableBreakdown {
                        confidence: table.lookup(token).map(|m| m.confidence),
                        mapped: !resolved.unmapped,
                        syllable: resolved.syllable,
                        sign: resolved.sign,
                    }
                })
                .collect(),
        })
        .collect()
}

/// Aggregate statistics over a rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScribeStats {
    pub total_syllables: usize,
    /// Mapped at high confidence.
    pub mapped_syllables: usize,
    /// Mapped, but flagged as approximations.
    pub approximated_syllables: usize,
    pub unmapped_syllables: usize,
    /// `mapped / total`, 0 when the text has no syllables.
    pub mapping_rate: f64,
    /// `(mapped + approximated) / total`, 0 when the text has no syllables.
    pub confidence_rate: f64,
}

/// Compute statistics in one pass over the rendered structures.
pub fn stats(text: &str, table: &SyllableTable, options: &RenderOptions) -> ScribeStats {
    let mut total = 0usize;
    let mut mapped = 0usize;
    let mut approximated = 0usize;
    let mut unmapped = 0usize;

    for line in render(text, table, options) {
        for word in &line.words {
            for syllable in &word.syllables {
                total += 1;
                if syllable.unmapped {
                    unmapped += 1;
                } else if syllable.is_approximation {
                    approximated += 1;
                } else {
                    mapped += 1;
                }
            }
        }
    }

    let rate = |n: usize| {
        if total == 0 {
            0.0
        } else {
            n as f64 / total as f64
        }
    };

    ScribeStats {
        total_syllables: total,
        mapped_syllables: mapped,
        approximated_syllables: approximated,
        unmapped_syllables: unmapped,
        mapping_rate: rate(mapped),
        confidence_rate: rate(mapped + approximated),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::{SyllableMapping, SyllableTable};

    fn fixture() -> SyllableTable {
        SyllableTable::from_mappings(vec![
            SyllableMapping {
                syllable: "an".into(),
                primary_sign: "AN_GLYPH".into(),
                alternatives: Vec::new(),
                confidence: Confidence::High,
            },
            SyllableMapping {
                syllable: "na".into(),
                primary_sign: "NA_GLYPH".into(),
                alternatives: Vec::new(),
                confidence: Confidence::High,
            },
            SyllableMapping {
                syllable: "lo".into(),
                primary_sign: "LO_GLYPH".into(),
                alternatives: Vec::new(),
                confidence: Confidence::Medium,
            },
        ])
        .unwrap()
    }

    #[test]
    fn render_splits_lines_words_syllables() {
        let t = fixture();
        let options = RenderOptions::default();
        let lines = render("anna lo\nan", &t, &options);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].words.len(), 2);
        assert_eq!(lines[0].words[0].syllables.len(), 2);
        assert_eq!(lines[0].words[0].syllables[0].sign, "AN_GLYPH");
        assert_eq!(lines[1].words.len(), 1);
    }

    #[test]
    fn render_discards_empty_words() {
        let t = fixture();
        let options = RenderOptions::default();
        let lines = render("  an   na  ", &t, &options);
        assert_eq!(lines[0].words.len(), 2);
    }

    #[test]
    fn render_folds_lines_when_configured() {
        let t = fixture();
        let options = RenderOptions {
            preserve_line_breaks: false,
            ..Default::default()
        };
        let lines = render("an\nna", &t, &options);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].words.len(), 2);
    }

    #[test]
    fn to_script_joins_per_options() {
        let t = fixture();

        let plain = RenderOptions::default();
        assert_eq!(to_script("anna an", &t, &plain), "AN_GLYPHNA_GLYPH AN_GLYPH");

        let spaced = RenderOptions {
            add_spacing: true,
            word_separator: " | ".to_string(),
            ..Default::default()
        };
        assert_eq!(
            to_script("anna an", &t, &spaced),
            "AN_GLYPH NA_GLYPH | AN_GLYPH"
        );
    }

    #[test]
    fn to_script_preserves_line_breaks() {
        let t = fixture();
        let options = RenderOptions::default();
        assert_eq!(to_script("an\nna", &t, &options), "AN_GLYPH\nNA_GLYPH");
    }

    #[test]
    fn to_script_matches_hand_composition() {
        let t = SyllableTable::bundled();
        let options = RenderOptions::default();
        let text = "the king of sumer\nxylophone qqq";

        let by_hand: String = text
            .split('\n')
            .map(|line| {
                line.split_whitespace()
                    .map(|word| {
                        segment(word, t)
                            .iter()
                            .map(|token| resolve(token, t, &options).sign)
                            .collect::<String>()
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n");

        assert_eq!(to_script(text, t, &options), by_hand);
    }

    #[test]
    fn breakdown_reports_mapping_state() {
        let t = fixture();
        let options = RenderOptions::default();
        let words = breakdown("anna qx", &t, &options);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].word, "anna");
        assert!(words[0].syllables.iter().all(|s| s.mapped));
        assert_eq!(words[0].syllables[0].confidence, Some(Confidence::High));

        // "qx": neither letter is in the fixture table.
        assert!(words[1].syllables.iter().all(|s| !s.mapped));
        assert!(words[1].syllables.iter().all(|s| s.confidence.is_none()));
        assert!(words[1].syllables.iter().all(|s| s.sign == "?"));
    }

    #[test]
    fn stats_counts_all_tiers() {
        let t = fixture();
        let options = RenderOptions::default();
        // an (high), lo (medium), qx -> q, x (unmapped)
        let s = stats("an lo qx", &t, &options);
        assert_eq!(s.total_syllables, 4);
        assert_eq!(s.mapped_syllables, 1);
        assert_eq!(s.approximated_syllables, 1);
        assert_eq!(s.unmapped_syllables, 2);
        assert_eq!(s.mapping_rate, 0.25);
        assert_eq!(s.confidence_rate, 0.5);
    }

    #[test]
    fn stats_of_empty_text_are_zero() {
        let t = fixture();
        let options = RenderOptions::default();
        for text in ["", "   ", "!!! 123", "\n\n"] {
            let s = stats(text, &t, &options);
            assert_eq!(s.total_syllables, 0);
            assert_eq!(s.mapping_rate, 0.0);
            assert_eq!(s.confidence_rate, 0.0);
        }
    }

    #[test]
    fn stats_rates_stay_in_unit_interval() {
        let t = SyllableTable::bundled();
        let options = RenderOptions::default();
        for text in ["gilgamesh king of uruk", "qqq xxx", "a", "mixed xq an"] {
            let s = stats(text, t, &options);
            assert!((0.0..=1.0).contains(&s.mapping_rate));
            assert!((0.0..=1.0).contains(&s.confidence_rate));
            assert!(s.confidence_rate >= s.mapping_rate);
        }
    }

    #[test]
    fn overrides_flow_through_render_and_stats() {
        let t = fixture();
        let mut options = RenderOptions::default();
        options
            .overrides
            .insert("lo".to_string(), "LO_ALT".to_string());

        let lines = render("lo", &t, &options);
        assert_eq!(lines[0].words[0].syllables[0].sign, "LO_ALT");
        assert!(!lines[0].words[0].syllables[0].is_approximation);

        // The override lifts "lo" from approximated to mapped.
        let s = stats("lo", &t, &options);
        assert_eq!(s.mapped_syllables, 1);
        assert_eq!(s.approximated_syllables, 0);
    }
}
