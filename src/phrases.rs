//! Attested ancient phrases for demonstration and learning.
//!
//! Real Sumerian and Akkadian expressions with transliteration, cuneiform,
//! translation, and historical context. Unlike the scribe engine's phonetic
//! approximations, these render genuine sign sequences.

use rand::Rng;

use crate::sign::Language;

/// An attested phrase with translation and context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phrase {
    /// Stable identifier (e.g. "royal-title-1").
    pub id: &'static str,
    /// Sumerian form, when the phrase is Sumerian.
    pub sumerian: Option<&'static str>,
    /// Akkadian form, when the phrase is Akkadian.
    pub akkadian: Option<&'static str>,
    /// Scholarly transliteration.
    pub transliteration: &'static str,
    /// The cuneiform sign sequence.
    pub cuneiform: &'static str,
    /// English translation.
    pub translation: &'static str,
    /// Historical context note.
    pub context: &'static str,
    /// Where the phrase is attested.
    pub source: &'static str,
}

static PHRASES: &[Phrase] = &[
    Phrase {
        id: "royal-title-1",
        sumerian: Some("lugal kiengi kiuri"),
        akkadian: None,
        transliteration: "lugal ki-en-gi ki-uri",
        cuneiform: "𒈗 𒆠𒂗𒄀 𒆠𒌵",
        translation: "King of Sumer and Akkad",
        context: "This was the most prestigious royal title in Mesopotamia, claimed by rulers who controlled both the Sumerian south and Akkadian north.",
        source: "Common royal inscription formula",
    },
    Phrase {
        id: "divine-blessing",
        sumerian: Some("an ki"),
        akkadian: None,
        transliteration: "an-ki",
        cuneiform: "𒀭𒆠",
        translation: "Heaven and Earth / The Universe",
        context: "Represents the cosmic totality in Sumerian thought. An (sky) and Ki (earth) were primordial deities whose union created the world.",
        source: "Sumerian cosmological texts",
    },
    Phrase {
        id: "temple-dedication",
        sumerian: Some("e dingir"),
        akkadian: None,
        transliteration: "e₂ dingir",
        cuneiform: "𒂍 𒀭",
        translation: "House of God / Temple",
        context: "Temples were the center of Mesopotamian city life, serving as religious, economic, and administrative hubs.",
        source: "Temple inscriptions",
    },
    Phrase {
        id: "scribe-colophon",
        sumerian: Some("dub sar"),
        akkadian: None,
        transliteration: "dub-sar",
        cuneiform: "𒁾𒊬",
        translation: "Tablet-writer / Scribe",
        context: "Scribes were highly trained professionals who underwent years of education in the edubba (tablet house). This title appears in countless colophons.",
        source: "Scribal colophons",
    },
    Phrase {
        id: "greeting-1",
        sumerian: None,
        akkadian: Some("lū šalmu"),
        transliteration: "lu₂ šalmu",
        cuneiform: "𒇻 𒊩𒈬",
        translation: "May you be well",
        context: "A common Akkadian greeting found in letters. Mesopotamian correspondence often began with wishes for the recipient's health and prosperity.",
        source: "Old Babylonian letters",
    },
    Phrase {
        id: "royal-inscription-1",
        sumerian: None,
        akkadian: Some("šarrum dannum"),
        transliteration: "šarrum dannum",
        cuneiform: "𒈗 𒁕𒀭𒉡𒌝",
        translation: "Mighty King",
        context: "An epithet used by Akkadian kings to emphasize their power and divine mandate to rule.",
        source: "Royal inscriptions",
    },
    Phrase {
        id: "wisdom-saying-1",
        sumerian: Some("nam lugal"),
        akkadian: None,
        transliteration: "nam-lugal",
        cuneiform: "𒉆𒈗",
        translation: "Kingship",
        context: "The concept of nam-lugal (kingship) was believed to descend from heaven. The Sumerian King List records how kingship was transferred between cities.",
        source: "Sumerian King List",
    },
    Phrase {
        id: "date-formula",
        sumerian: Some("mu an"),
        akkadian: None,
        transliteration: "mu an",
        cuneiform: "𒈬 𒀭",
        translation: "Year of An / Year-name",
        context: "Years in ancient Mesopotamia were named after significant events. This formula begins many date notations.",
        source: "Administrative texts",
    },
    Phrase {
        id: "prayer-opening",
        sumerian: None,
        akkadian: Some("ana ili"),
        transliteration: "ana ili",
        cuneiform: "𒀀𒈾 𒀭",
        translation: "To the god",
        context: "Prayers and offerings were addressed to specific deities. This phrase opens many devotional texts.",
        source: "Prayer texts",
    },
    Phrase {
        id: "law-formula",
        sumerian: None,
        akkadian: Some("šumma awilum"),
        transliteration: "šum-ma a-wi-lum",
        cuneiform: "𒋗𒈠 𒀀𒉿𒈝",
        translation: "If a man...",
        context: "This phrase begins most laws in Mesopotamian legal codes, including the famous Code of Hammurabi.",
        source: "Law codes",
    },
    Phrase {
        id: "creation-myth",
        sumerian: None,
        akkadian: Some("enuma elish"),
        transliteration: "e-nu-ma e-liš",
        cuneiform: "𒂊𒉡𒈠 𒂊𒇷𒅖",
        translation: "When on high...",
        context: "The opening words of the Babylonian creation epic, describing the primordial state before heaven and earth were named.",
        source: "Enuma Elish tablet I",
    },
    Phrase {
        id: "gilgamesh-1",
        sumerian: None,
        akkadian: Some("sha naqba imuru"),
        transliteration: "ša naq-ba i-mu-ru",
        cuneiform: "𒊭 𒈾𒀝𒁀 𒄿𒈬𒊒",
        translation: "He who saw the deep",
        context: "The opening line of the Epic of Gilgamesh, referring to the hero's journey to gain wisdom and knowledge of all things.",
        source: "Epic of Gilgamesh, Tablet I",
    },
];

/// All bundled phrases.
pub fn all() -> &'static [Phrase] {
    PHRASES
}

/// Look up a phrase by identifier.
pub fn by_id(id: &str) -> Option<&'static Phrase> {
    PHRASES.iter().find(|p| p.id == id)
}

/// All phrases attested in the given language.
pub fn by_language(language: Language) -> Vec<&'static Phrase> {
    PHRASES
        .iter()
        .filter(|p| match language {
            Language::Sumerian => p.sumerian.is_some(),
            Language::Akkadian => p.akkadian.is_some(),
        })
        .collect()
}

/// Pick a random phrase.
pub fn random() -> &'static Phrase {
    let i = rand::thread_rng().gen_range(0..PHRASES.len());
    &PHRASES[i]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_phrase_is_complete() {
        assert!(!PHRASES.is_empty());
        for p in all() {
            assert!(!p.id.is_empty());
            assert!(!p.transliteration.is_empty());
            assert!(!p.cuneiform.is_empty());
            assert!(!p.translation.is_empty());
            assert!(
                p.sumerian.is_some() || p.akkadian.is_some(),
                "{} has no language form",
                p.id
            );
        }
    }

    #[test]
    fn ids_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for p in all() {
            assert!(seen.insert(p.id), "duplicate id {}", p.id);
        }
    }

    #[test]
    fn cuneiform_stays_in_the_cuneiform_blocks() {
        for p in all() {
            for c in p.cuneiform.chars() {
                assert!(
                    c == ' ' || (0x12000..=0x1247F).contains(&(c as u32)),
                    "{} has non-cuneiform char {c:?}",
                    p.id
                );
            }
        }
    }

    #[test]
    fn by_id_finds_known_phrases() {
        let p = by_id("scribe-colophon").expect("scribe-colophon");
        assert_eq!(p.translation, "Tablet-writer / Scribe");
        assert!(by_id("nonexistent").is_none());
    }

    #[test]
    fn by_language_partitions_sensibly() {
        let sumerian = by_language(Language::Sumerian);
        let akkadian = by_language(Language::Akkadian);
        assert!(!sumerian.is_empty());
        assert!(!akkadian.is_empty());
        assert!(sumerian.iter().all(|p| p.sumerian.is_some()));
        assert!(akkadian.iter().all(|p| p.akkadian.is_some()));
    }

    #[test]
    fn random_returns_a_bundled_phrase() {
        for _ in 0..10 {
            let p = random();
            assert!(by_id(p.id).is_some());
        }
    }
}
