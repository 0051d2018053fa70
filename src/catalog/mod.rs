//! Immutable sign catalog with lookup and search queries.
//!
//! The catalog is an ordered list of [`Sign`] records built once and never
//! mutated; all access goes through read-only queries. [`SignCatalog::bundled`]
//! exposes the built-in sign list (68 signs from the ORACC Sign List and the
//! Unicode cuneiform blocks), and custom catalogs can be built from any sign
//! list for fixtures or alternative data sets.

mod data;

use std::sync::OnceLock;

use crate::sign::{Sign, SignCategory};

/// The immutable sign catalog. Sign order is preserved from construction and
/// is the tie-break order for ranked composition search.
#[derive(Debug, Clone)]
pub struct SignCatalog {
    signs: Vec<Sign>,
}

static BUNDLED: OnceLock<SignCatalog> = OnceLock::new();

impl SignCatalog {
    /// Build a catalog from an ordered sign list.
    pub fn new(signs: Vec<Sign>) -> Self {
        Self { signs }
    }

    /// The built-in catalog, constructed on first use.
    pub fn bundled() -> &'static SignCatalog {
        BUNDLED.get_or_init(|| {
            let catalog = SignCatalog::new(data::bundled_signs());
            tracing::debug!(signs = catalog.len(), "built bundled sign catalog");
            catalog
        })
    }

    /// All signs, in catalog order.
    pub fn signs(&self) -> &[Sign] {
        &self.signs
    }

    pub fn len(&self) -> usize {
        self.signs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signs.is_empty()
    }

    /// Look up a sign by its Unicode codepoint label (e.g. "U+12000").
    pub fn by_codepoint(&self, codepoint: &str) -> Option<&Sign> {
        self.signs.iter().find(|s| s.codepoint == codepoint)
    }

    /// Look up a sign by its rendered character.
    pub fn by_character(&self, character: &str) -> Option<&Sign> {
        self.signs.iter().find(|s| s.character == character)
    }

    /// Look up a sign by canonical name (case-insensitive).
    pub fn by_name(&self, name: &str) -> Option<&Sign> {
        self.signs.iter().find(|s| s.name.eq_ignore_ascii_case(name))
    }

    /// All signs in a category.
    pub fn by_category(&self, category: SignCategory) -> Vec<&Sign> {
        self.signs.iter().filter(|s| s.category == category).collect()
    }

    /// All signs with an exact reading value (case-insensitive).
    pub fn by_reading(&self, reading: &str) -> Vec<&Sign> {
        self.signs.iter().filter(|s| s.has_reading(reading)).collect()
    }

    /// All signs whose meaning glosses contain `query` (case-insensitive
    /// substring).
    pub fn search_meanings(&self, query: &str) -> Vec<&Sign> {
        let query = query.to_lowercase();
        self.signs
            .iter()
            .filter(|s| s.meanings.iter().any(|m| m.to_lowercase().contains(&query)))
            .collect()
    }

    /// Free-text search across name, readings, meanings, and the character
    /// itself. Whitespace around the query is ignored; an effectively empty
    /// query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Sign> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.signs.iter().collect();
        }

        self.signs
            .iter()
            .filter(|s| {
                s.name.to_lowercase().contains(&query)
                    || s.readings.iter().any(|r| r.value.to_lowercase().contains(&query))
                    || s.meanings.iter().any(|m| m.to_lowercase().contains(&query))
                    || s.character == query
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_loads_once() {
        let catalog = SignCatalog::bundled();
        assert_eq!(catalog.len(), 68);
        // Same allocation on repeated access.
        assert!(std::ptr::eq(catalog, SignCatalog::bundled()));
    }

    #[test]
    fn bundled_codepoints_are_unique() {
        let catalog = SignCatalog::bundled();
        let mut seen = std::collections::HashSet::new();
        for sign in catalog.signs() {
            assert!(seen.insert(&sign.codepoint), "duplicate {}", sign.codepoint);
        }
    }

    #[test]
    fn bundled_signs_all_carry_compositions() {
        for sign in SignCatalog::bundled().signs() {
            let composition = sign.composition.as_ref().expect("bundled sign composition");
            assert!(composition.total() >= 1, "{} has no strokes", sign.name);
        }
    }

    #[test]
    fn lookup_by_codepoint_and_character() {
        let catalog = SignCatalog::bundled();
        let a = catalog.by_codepoint("U+12000").expect("sign A");
        assert_eq!(a.name, "A");
        assert_eq!(catalog.by_character("𒀀").expect("sign A").codepoint, "U+12000");
        assert!(catalog.by_codepoint("U+99999").is_none());
    }

    #[test]
    fn lookup_by_name_is_case_insensitive() {
        let catalog = SignCatalog::bundled();
        assert_eq!(catalog.by_name("lugal").expect("LUGAL").name, "LUGAL");
        assert_eq!(catalog.by_name("LUGAL").expect("LUGAL").name, "LUGAL");
    }

    #[test]
    fn by_reading_matches_exact_values_only() {
        let catalog = SignCatalog::bundled();
        let hits = catalog.by_reading("an");
        assert!(hits.iter().any(|s| s.name == "AN"));
        // "a" is a different reading, not a substring hit.
        assert!(hits.iter().all(|s| s.has_reading("an")));
    }

    #[test]
    fn meaning_search_is_substring() {
        let catalog = SignCatalog::bundled();
        let hits = catalog.search_meanings("water");
        assert!(hits.iter().any(|s| s.name == "A"));
    }

    #[test]
    fn free_text_search_spans_fields() {
        let catalog = SignCatalog::bundled();
        assert!(!catalog.search("king").is_empty()); // meaning
        assert!(!catalog.search("dingir").is_empty()); // reading
        assert!(!catalog.search("LUGAL").is_empty()); // name
        assert_eq!(catalog.search("   ").len(), catalog.len()); // blank query
    }

    #[test]
    fn empty_catalog_queries_return_nothing() {
        let catalog = SignCatalog::new(Vec::new());
        assert!(catalog.is_empty());
        assert!(catalog.by_name("A").is_none());
        assert!(catalog.search("anything").is_empty());
    }
}
