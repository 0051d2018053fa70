//! Core sign types for the dubsar engine.
//!
//! A [`Sign`] is one entry of the cuneiform catalog: a Unicode codepoint with
//! its attested readings, English glosses, semantic category, and (for signs
//! where the stroke makeup is recorded) a wedge composition used by the
//! composition matcher.

use serde::{Deserialize, Serialize};

use crate::wedge::WedgeComposition;

/// How a reading value relates to the sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingType {
    /// Phonetic syllable value (e.g. "an" read as the sound /an/).
    Syllabic,
    /// Word value (e.g. AN read as "dingir", god).
    Logographic,
}

/// Language a reading is attested in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Sumerian,
    Akkadian,
}

/// A single attested reading of a sign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignReading {
    /// The reading value (e.g. "a", "dur5", "lugal").
    pub value: String,
    /// Syllabic or logographic.
    pub kind: ReadingType,
    /// Language association, when attested for one language specifically.
    pub language: Option<Language>,
}

/// Semantic category of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignCategory {
    Nature,
    Body,
    People,
    Actions,
    Objects,
    Numbers,
    Animals,
    Food,
    Buildings,
    Divine,
    Cosmos,
    Abstract,
    Containers,
    Textile,
    Tools,
}

impl SignCategory {
    /// All categories, in display order.
    pub const ALL: [SignCategory; 15] = [
        SignCategory::Nature,
        SignCategory::Body,
        SignCategory::People,
        SignCategory::Actions,
        SignCategory::Objects,
        SignCategory::Numbers,
        SignCategory::Animals,
        SignCategory::Food,
        SignCategory::Buildings,
        SignCategory::Divine,
        SignCategory::Cosmos,
        SignCategory::Abstract,
        SignCategory::Containers,
        SignCategory::Textile,
        SignCategory::Tools,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            SignCategory::Nature => "Nature",
            SignCategory::Body => "Body",
            SignCategory::People => "People",
            SignCategory::Actions => "Actions",
            SignCategory::Objects => "Objects",
            SignCategory::Numbers => "Numbers",
            SignCategory::Animals => "Animals",
            SignCategory::Food => "Food",
            SignCategory::Buildings => "Buildings",
            SignCategory::Divine => "Divine",
            SignCategory::Cosmos => "Cosmos",
            SignCategory::Abstract => "Abstract",
            SignCategory::Containers => "Containers",
            SignCategory::Textile => "Textile",
            SignCategory::Tools => "Tools",
        }
    }

    /// Short description of what the category covers.
    pub fn description(self) -> &'static str {
        match self {
            SignCategory::Nature => "Water, earth, sky, celestial bodies, weather phenomena",
            SignCategory::Body => "Parts of the human body, physical actions",
            SignCategory::People => "Humans, social roles, professions, titles",
            SignCategory::Actions => "Verbs, movements, processes",
            SignCategory::Objects => "Manufactured items, artifacts, tools",
            SignCategory::Numbers => "Numerals and counting signs",
            SignCategory::Animals => "Domestic and wild animals, mythical creatures",
            SignCategory::Food => "Grains, bread, beer, food production",
            SignCategory::Buildings => "Houses, temples, architectural elements",
            SignCategory::Divine => "Deities, religious concepts, sacred objects",
            SignCategory::Cosmos => "Sun, moon, stars, cosmological concepts",
            SignCategory::Abstract => "Qualities, states, grammatical elements",
            SignCategory::Containers => "Vessels, pots, storage items",
            SignCategory::Textile => "Cloth, garments, weaving",
            SignCategory::Tools => "Implements, weapons, equipment",
        }
    }
}

impl std::fmt::Display for SignCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for SignCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SignCategory::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown sign category: {s}"))
    }
}

/// One entry of the cuneiform sign catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sign {
    /// Unicode codepoint label (e.g. "U+12000").
    pub codepoint: String,
    /// The rendered character (e.g. "𒀀").
    pub character: String,
    /// Canonical sign name (e.g. "A", "LUGAL").
    pub name: String,
    /// All attested reading values.
    pub readings: Vec<SignReading>,
    /// English semantic glosses.
    pub meanings: Vec<String>,
    /// Semantic category.
    pub category: SignCategory,
    /// Wedge stroke composition; absent when the stroke makeup is unrecorded.
    pub composition: Option<WedgeComposition>,
    /// Borger MZL reference number.
    pub mzl_number: Option<u32>,
}

impl Sign {
    /// Whether any reading matches `value` exactly (case-insensitive).
    pub fn has_reading(&self, value: &str) -> bool {
        self.readings
            .iter()
            .any(|r| r.value.eq_ignore_ascii_case(value))
    }
}

impl std::fmt::Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({})", self.character, self.name, self.codepoint)
    }
}
