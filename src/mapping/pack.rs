//! Mapping packs: TOML-defined syllable mapping bundles.
//!
//! A pack is a TOML file with a `[pack]` metadata table and `[[mappings]]`
//! entries. Applying a pack to a base table replaces entries with matching
//! keys and appends the rest, producing a new immutable table.
//!
//! ```toml
//! [pack]
//! id = "akkadian-extras"
//! name = "Akkadian extras"
//! description = "Emphatic consonant approximations"
//!
//! [[mappings]]
//! syllable = "qa"
//! primary_sign = "𒋡"
//! confidence = "medium"
//! ```

use std::path::Path;

use miette::Diagnostic;
use serde::Deserialize;
use thiserror::Error;

use crate::error::MappingError;
use crate::mapping::{SyllableMapping, SyllableTable};

// ── Errors ──────────────────────────────────────────────────────────────

#[derive(Debug, Error, Diagnostic)]
pub enum PackError {
    #[error("failed to read mapping pack: {path}")]
    #[diagnostic(
        code(dubsar::pack::io),
        help("Ensure the file exists and is readable.")
    )]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse mapping pack: {message}")]
    #[diagnostic(
        code(dubsar::pack::parse),
        help("Check the TOML syntax: a [pack] table plus [[mappings]] entries.")
    )]
    Parse { message: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Mapping(#[from] MappingError),
}

pub type PackResult<T> = std::result::Result<T, PackError>;

// ── Pack data model ─────────────────────────────────────────────────────

/// A parsed mapping pack.
#[derive(Debug, Clone)]
pub struct MappingPack {
    pub id: String,
    pub name: String,
    pub description: String,
    pub mappings: Vec<SyllableMapping>,
}

#[derive(Debug, Deserialize)]
struct PackToml {
    pack: PackMeta,
    #[serde(default)]
    mappings: Vec<SyllableMapping>,
}

#[derive(Debug, Deserialize)]
struct PackMeta {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
}

impl MappingPack {
    /// Parse a pack from TOML text.
    pub fn parse(toml_str: &str) -> PackResult<Self> {
        let parsed: PackToml = toml::from_str(toml_str).map_err(|e| PackError::Parse {
            message: e.to_string(),
        })?;
        Ok(Self {
            id: parsed.pack.id,
            name: parsed.pack.name,
            description: parsed.pack.description,
            mappings: parsed.mappings,
        })
    }

    /// Load a pack from a TOML file.
    pub fn load(path: &Path) -> PackResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| PackError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let pack = Self::parse(&text)?;
        tracing::info!(
            id = %pack.id,
            mappings = pack.mappings.len(),
            "loaded mapping pack"
        );
        Ok(pack)
    }

    /// Apply this pack over a base table (override-or-extend).
    pub fn apply(&self, base: &SyllableTable) -> PackResult<SyllableTable> {
        Ok(base.merged(self.mappings.clone())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::Confidence;

    const SAMPLE: &str = r#"
[pack]
id = "test-pack"
name = "Test pack"
description = "A couple of overrides"

[[mappings]]
syllable = "an"
primary_sign = "X"
confidence = "high"

[[mappings]]
syllable = "qu"
primary_sign = "Y"
alternatives = ["Z"]
confidence = "low"
"#;

    #[test]
    fn parse_reads_metadata_and_mappings() {
        let pack = MappingPack::parse(SAMPLE).unwrap();
        assert_eq!(pack.id, "test-pack");
        assert_eq!(pack.mappings.len(), 2);
        assert_eq!(pack.mappings[0].syllable, "an");
        assert_eq!(pack.mappings[1].alternatives, vec!["Z".to_string()]);
        assert_eq!(pack.mappings[1].confidence, Confidence::Low);
    }

    #[test]
    fn parse_rejects_malformed_toml() {
        let err = MappingPack::parse("[pack\nid = ").unwrap_err();
        assert!(matches!(err, PackError::Parse { .. }));
    }

    #[test]
    fn parse_rejects_missing_metadata() {
        let err = MappingPack::parse("[[mappings]]\nsyllable = \"an\"").unwrap_err();
        assert!(matches!(err, PackError::Parse { .. }));
    }

    #[test]
    fn apply_merges_over_base() {
        let pack = MappingPack::parse(SAMPLE).unwrap();
        let table = pack.apply(SyllableTable::bundled()).unwrap();
        assert_eq!(table.lookup("an").unwrap().primary_sign, "X");
        assert_eq!(table.lookup("qu").unwrap().primary_sign, "Y");
        assert_eq!(table.len(), SyllableTable::bundled().len() + 1);
    }

    #[test]
    fn apply_rejects_invalid_pack_keys() {
        let bad = r#"
[pack]
id = "bad"
name = "Bad"

[[mappings]]
syllable = "toolong"
primary_sign = "X"
confidence = "high"
"#;
        let pack = MappingPack::parse(bad).unwrap();
        let err = pack.apply(SyllableTable::bundled()).unwrap_err();
        assert!(matches!(err, PackError::Mapping(MappingError::KeyTooLong { .. })));
    }

    #[test]
    fn load_reads_from_disk() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("pack.toml");
        std::fs::write(&path, SAMPLE).unwrap();
        let pack = MappingPack::load(&path).unwrap();
        assert_eq!(pack.id, "test-pack");

        let missing = MappingPack::load(&dir.path().join("absent.toml"));
        assert!(matches!(missing, Err(PackError::Io { .. })));
    }
}
