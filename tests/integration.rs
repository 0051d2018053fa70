//! End-to-end integration tests for the dubsar engines.
//!
//! These exercise the scribe pipeline (segment → resolve → render → stats)
//! and the wedge matcher together, against both purpose-built fixtures and
//! the bundled tables.

use dubsar::catalog::SignCatalog;
use dubsar::mapping::pack::MappingPack;
use dubsar::mapping::{Confidence, SyllableMapping, SyllableTable};
use dubsar::scribe::{self, RenderOptions};
use dubsar::sign::{ReadingType, Sign, SignCategory, SignReading};
use dubsar::wedge::{self, Tolerance, WedgeComposition};

fn fixture_table() -> SyllableTable {
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
    ])
    .unwrap()
}

fn an_sign() -> Sign {
    Sign {
        codepoint: "U+1202D".into(),
        character: "𒀭".into(),
        name: "AN".into(),
        readings: vec![SignReading {
            value: "an".into(),
            kind: ReadingType::Syllabic,
            language: None,
        }],
        meanings: vec!["sky".into(), "god".into()],
        category: SignCategory::Divine,
        composition: Some(WedgeComposition::new(1, 1, 2, 1)),
        mzl_number: Some(13),
    }
}

fn fixture_catalog() -> SignCatalog {
    SignCatalog::new(vec![an_sign()])
}

// -- Scribe engine ----------------------------------------------------------

#[test]
fn greedy_segmentation_takes_two_letter_matches() {
    let table = fixture_table();
    assert_eq!(scribe::segment("anna", &table), ["an", "na"]);
}

#[test]
fn unmapped_token_resolves_to_placeholder() {
    let table = fixture_table();
    let resolved = scribe::resolve("xyz", &table, &RenderOptions::default());
    assert_eq!(resolved.sign, "?");
    assert!(resolved.unmapped);
    assert!(!resolved.is_approximation);
}

#[test]
fn render_anna_yields_one_line_one_word_two_syllables() {
    let table = fixture_table();
    let lines = scribe::render("anna", &table, &RenderOptions::default());
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].words.len(), 1);
    assert_eq!(lines[0].words[0].syllables.len(), 2);

    let stats = scribe::stats("anna", &table, &RenderOptions::default());
    assert_eq!(stats.mapping_rate, 1.0);
}

#[test]
fn flattened_output_never_drifts_from_structured_output() {
    let table = SyllableTable::bundled();
    let options = RenderOptions::default();
    let texts = [
        "gilgamesh king of uruk",
        "multi\nline\ninput here",
        "punctuation, everywhere!  and   gaps",
        "xqxq zzz",
        "",
    ];
    for text in texts {
        let flattened = scribe::to_script(text, table, &options);
        let by_structure: String = scribe::render(text, table, &options)
            .iter()
            .map(|line| {
                line.words
                    .iter()
                    .map(|w| w.sign_string(&options))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(flattened, by_structure, "drift for {text:?}");
    }
}

#[test]
fn segmentation_is_total_over_arbitrary_text() {
    let table = SyllableTable::bundled();
    for word in ["ubaid", "lugalzagesi", "qwrtpsdfg", "ox", "straw"] {
        let tokens = scribe::segment(word, table);
        let rebuilt: String = tokens.concat();
        assert_eq!(rebuilt, scribe::syllabify::normalize(word));
    }
}

#[test]
fn rates_are_zero_for_nonalphabetic_text() {
    let table = SyllableTable::bundled();
    let stats = scribe::stats("12345 !!! \n\n", table, &RenderOptions::default());
    assert_eq!(stats.total_syllables, 0);
    assert_eq!(stats.mapping_rate, 0.0);
    assert_eq!(stats.confidence_rate, 0.0);
}

#[test]
fn overrides_thread_through_the_full_pipeline() {
    let table = fixture_table();
    let mut options = RenderOptions::default();
    options
        .overrides
        .insert("na".to_string(), "NA_OVERRIDE".to_string());

    assert_eq!(
        scribe::to_script("anna", &table, &options),
        "AN_GLYPHNA_OVERRIDE"
    );

    let words = scribe::breakdown("anna", &table, &options);
    assert_eq!(words[0].syllables[1].sign, "NA_OVERRIDE");
    assert!(words[0].syllables[1].mapped);
}

#[test]
fn mapping_pack_changes_rendered_output() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("extra.toml");
    std::fs::write(
        &path,
        r#"
[pack]
id = "extra"
name = "Extra"

[[mappings]]
syllable = "anna"
primary_sign = "WHOLE_WORD"
confidence = "high"
"#,
    )
    .unwrap();

    let pack = MappingPack::load(&path).unwrap();
    let table = pack.apply(&fixture_table()).unwrap();

    // The 4-letter key now wins the longest-match scan.
    assert_eq!(
        scribe::to_script("anna", &table, &RenderOptions::default()),
        "WHOLE_WORD"
    );
}

// -- Wedge matcher ----------------------------------------------------------

#[test]
fn search_with_own_vector_is_reflexive() {
    let catalog = fixture_catalog();
    let target = WedgeComposition::new(1, 1, 2, 1);
    let results = wedge::search(&catalog, &target, &Tolerance::ZERO);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].sign.name, "AN");
    assert_eq!(results[0].match_score, 1.0);
}

#[test]
fn zero_target_returns_nothing_even_with_tolerance() {
    let results = wedge::search(
        SignCatalog::bundled(),
        &WedgeComposition::EMPTY,
        &Tolerance::uniform(1),
    );
    assert!(results.is_empty());
}

#[test]
fn widening_tolerance_only_grows_the_result_set() {
    let catalog = SignCatalog::bundled();
    let target = WedgeComposition::new(2, 1, 0, 0);
    let mut previous: Vec<String> = Vec::new();
    for t in 0..4 {
        let names: Vec<String> = wedge::search(catalog, &target, &Tolerance::uniform(t))
            .iter()
            .map(|r| r.sign.name.clone())
            .collect();
        for name in &previous {
            assert!(names.contains(name), "lost {name} at tolerance {t}");
        }
        assert!(names.len() >= previous.len());
        previous = names;
    }
}

#[test]
fn bundled_catalog_search_finds_an_by_composition() {
    let results = wedge::search(
        SignCatalog::bundled(),
        &WedgeComposition::new(1, 1, 2, 1),
        &Tolerance::ZERO,
    );
    assert!(!results.is_empty());
    assert_eq!(results[0].sign.name, "AN");
    assert_eq!(results[0].match_score, 1.0);
}

#[test]
fn exact_match_and_search_agree_at_zero_tolerance() {
    let catalog = SignCatalog::bundled();
    for sign in catalog.signs().iter().take(10) {
        let target = sign.composition.unwrap();
        let exact: Vec<&str> = wedge::exact_match(catalog, &target)
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        let searched: Vec<&str> = wedge::search(catalog, &target, &Tolerance::ZERO)
            .iter()
            .map(|r| r.sign.name.as_str())
            .collect();
        for name in &exact {
            assert!(searched.contains(name));
        }
        assert_eq!(exact.len(), searched.len());
    }
}

#[test]
fn stroke_count_grouping_matches_range_queries() {
    let catalog = SignCatalog::bundled();
    let groups = wedge::group_by_stroke_count(catalog);
    for (&total, signs) in &groups {
        let ranged = wedge::by_stroke_count(catalog, total, total);
        assert_eq!(signs.len(), ranged.len(), "count {total}");
    }
    let all: usize = groups.values().map(Vec::len).sum();
    assert_eq!(all, catalog.len());
}

// -- Catalog and phrases ----------------------------------------------------

#[test]
fn catalog_lookups_cross_reference() {
    let catalog = SignCatalog::bundled();
    let an = catalog.by_name("AN").expect("AN");
    assert_eq!(
        catalog.by_codepoint(&an.codepoint).expect("by codepoint").name,
        "AN"
    );
    assert!(catalog.by_reading("an").iter().any(|s| s.name == "AN"));
    assert!(catalog
        .by_category(SignCategory::Divine)
        .iter()
        .any(|s| s.name == "AN"));
}

#[test]
fn phrase_cuneiform_resolves_against_the_catalog() {
    // Not every phrase sign is in the 68-sign catalog, but the anchors are.
    let catalog = SignCatalog::bundled();
    let phrase = dubsar::phrases::by_id("divine-blessing").expect("an-ki");
    let chars: Vec<String> = phrase
        .cuneiform
        .chars()
        .filter(|c| *c != ' ')
        .map(|c| c.to_string())
        .collect();
    assert!(chars.iter().any(|c| catalog.by_character(c).is_some()));
}
