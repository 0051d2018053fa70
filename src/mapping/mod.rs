//! Syllable-to-sign mapping table.
//!
//! A [`SyllableTable`] is an immutable lookup from normalized syllable keys
//! (1-4 lowercase ASCII letters) to [`SyllableMapping`] records. The bundled
//! table carries 325 mappings covering CV/VC/CVC patterns, digraphs, and
//! single-letter fallbacks; custom tables can be built from any mapping list,
//! and [`pack`] merges TOML-defined mapping packs over a base table.

mod data;
pub mod pack;

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{MappingError, MappingResult};

/// How faithful a syllable-to-sign mapping is.
///
/// `Medium` and `Low` mappings are flagged as approximations when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Confidence::High => write!(f, "high"),
            Confidence::Medium => write!(f, "medium"),
            Confidence::Low => write!(f, "low"),
        }
    }
}

impl std::str::FromStr for Confidence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" => Ok(Confidence::High),
            "medium" => Ok(Confidence::Medium),
            "low" => Ok(Confidence::Low),
            other => Err(format!("unknown confidence tier: {other}")),
        }
    }
}

/// One syllable-to-sign mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyllableMapping {
    /// Normalized syllable key: 1-4 lowercase ASCII letters.
    pub syllable: String,
    /// Primary sign string; multi-character for compound approximations.
    pub primary_sign: String,
    /// Alternative signs a caller may offer as manual overrides.
    #[serde(default)]
    pub alternatives: Vec<String>,
    /// Mapping fidelity tier.
    pub confidence: Confidence,
}

/// Immutable syllable lookup table, built once and read-only thereafter.
#[derive(Debug, Clone)]
pub struct SyllableTable {
    entries: Vec<SyllableMapping>,
    index: HashMap<String, usize>,
}

static BUNDLED: OnceLock<SyllableTable> = OnceLock::new();

impl SyllableTable {
    /// Build a table, validating every key.
    ///
    /// Keys must be non-empty, at most 4 characters, lowercase ASCII letters
    /// only, and unique. Violations fail fast rather than being normalized
    /// away, since a bad key could never match the segmenter's output.
    pub fn from_mappings(mappings: Vec<SyllableMapping>) -> MappingResult<Self> {
        let mut index = HashMap::with_capacity(mappings.len());
        for (i, mapping) in mappings.iter().enumerate() {
            validate_key(&mapping.syllable)?;
            if index.insert(mapping.syllable.clone(), i).is_some() {
                return Err(MappingError::DuplicateKey {
                    syllable: mapping.syllable.clone(),
                });
            }
        }
        Ok(Self {
            entries: mappings,
            index,
        })
    }

    /// The built-in table, constructed on first use.
    pub fn bundled() -> &'static SyllableTable {
        BUNDLED.get_or_init(|| {
            let table = SyllableTable::from_mappings(data::bundled_mappings())
                .expect("bundled mapping data is valid");
            tracing::debug!(mappings = table.len(), "built bundled syllable table");
            table
        })
    }

    /// Look up a mapping; the query is lowercased before comparison.
    pub fn lookup(&self, syllable: &str) -> Option<&SyllableMapping> {
        let key = syllable.to_lowercase();
        self.index.get(&key).map(|&i| &self.entries[i])
    }

    /// Whether a mapping exists for this syllable.
    pub fn contains(&self, syllable: &str) -> bool {
        self.index.contains_key(&syllable.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All mappings, in table order.
    pub fn mappings(&self) -> &[SyllableMapping] {
        &self.entries
    }

    /// All syllable keys, sorted.
    pub fn syllables(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.iter().map(|m| m.syllable.as_str()).collect();
        keys.sort_unstable();
        keys
    }

    /// All mappings at a given confidence tier, in table order.
    pub fn by_confidence(&self, confidence: Confidence) -> Vec<&SyllableMapping> {
        self.entries
            .iter()
            .filter(|m| m.confidence == confidence)
            .collect()
    }

    /// Build a new table with `overlay` mappings merged in: an overlay entry
    /// replaces the base entry with the same key, otherwise extends the table.
    pub fn merged(&self, overlay: Vec<SyllableMapping>) -> MappingResult<SyllableTable> {
        let mut entries = self.entries.clone();
        let mut index = self.index.clone();
        for mapping in overlay {
            validate_key(&mapping.syllable)?;
            match index.get(&mapping.syllable) {
                Some(&i) => entries[i] = mapping,
                None => {
                    index.insert(mapping.syllable.clone(), entries.len());
                    entries.push(mapping);
                }
            }
        }
        Ok(Self { entries, index })
    }
}

fn validate_key(syllable: &str) -> MappingResult<()> {
    if syllable.is_empty() {
        return Err(MappingError::EmptyKey);
    }
    if syllable.len() > 4 {
        return Err(MappingError::KeyTooLong {
            syllable: syllable.to_string(),
            length: syllable.len(),
        });
    }
    if !syllable.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(MappingError::InvalidKey {
            syllable: syllable.to_string(),
        });
    }
    Ok(())
}
