//! # dubsar
//!
//! A cuneiform approximation engine: renders modern text as cuneiform sign
//! sequences by phonetic syllable mapping, and searches a sign catalog by
//! wedge-stroke composition.
//!
//! The mapping is an educational approximation, not scholarly
//! transliteration: words are segmented by greedy longest match over the
//! mapping vocabulary and each chunk resolves to its nearest sign.
//!
//! ## Architecture
//!
//! - **Catalog** (`catalog`, `sign`): 68 signs with readings, meanings, and
//!   wedge compositions, loaded once and immutable
//! - **Mapping** (`mapping`): 325 syllable-to-sign mappings with confidence
//!   tiers, extensible via TOML mapping packs
//! - **Scribe** (`scribe`): pure text → line/word/syllable rendering with
//!   flattened output, diagnostics, and statistics
//! - **Wedge matcher** (`wedge`): tolerant, similarity-ranked composition
//!   search over the catalog
//!
//! ## Library usage
//!
//! ```
//! use dubsar::catalog::SignCatalog;
//! use dubsar::mapping::SyllableTable;
//! use dubsar::scribe::{self, RenderOptions};
//! use dubsar::wedge::{self, Tolerance, WedgeComposition};
//!
//! let table = SyllableTable::bundled();
//! let options = RenderOptions::default();
//! let script = scribe::to_script("anna", table, &options);
//! assert!(!script.is_empty());
//!
//! let target = WedgeComposition::new(1, 1, 2, 1);
//! let results = wedge::search(SignCatalog::bundled(), &target, &Tolerance::ZERO);
//! assert!(results.iter().any(|r| r.sign.name == "AN"));
//! ```

pub mod catalog;
pub mod error;
pub mod mapping;
pub mod phrases;
pub mod scribe;
pub mod sign;
pub mod wedge;
