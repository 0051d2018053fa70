//! Bundled sign catalog data.
//!
//! Sourced from the ORACC Sign List (OSL 2.0, CC0 Public Domain, maintained
//! by Steve Tinney & Niek Veldhuis, University of Pennsylvania) and the
//! Unicode Standard cuneiform blocks. Rows are ordered by codepoint within
//! their original groupings.

use crate::sign::{Language, ReadingType, Sign, SignCategory, SignReading};
use crate::wedge::WedgeComposition;

/// One catalog row: codepoint, character, name, readings (value, kind,
/// language), meanings, category, composition (h, v, o, w), MZL number.
type SignRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static [(&'static str, ReadingType, Option<Language>)],
    &'static [&'static str],
    SignCategory,
    (u32, u32, u32, u32),
    Option<u32>,
);

const SIGN_ROWS: &[SignRow] = &[
    (
        "U+12000", "𒀀", "A",
        &[("a", ReadingType::Syllabic, None), ("dur5", ReadingType::Logographic, Some(Language::Sumerian)), ("e4", ReadingType::Syllabic, None)],
        &["water", "seed", "father", "offspring"],
        SignCategory::Nature, (4, 0, 0, 1), Some(839),
    ),
    (
        "U+1202D", "𒀭", "AN",
        &[("an", ReadingType::Syllabic, None), ("dingir", ReadingType::Logographic, Some(Language::Sumerian)), ("ilu", ReadingType::Logographic, Some(Language::Akkadian))],
        &["sky", "heaven", "god", "divine determinative"],
        SignCategory::Divine, (1, 1, 2, 1), Some(13),
    ),
    (
        "U+12040", "𒁀", "BA",
        &[("ba", ReadingType::Syllabic, None), ("pa4", ReadingType::Syllabic, None)],
        &["to give", "to allot", "portion"],
        SignCategory::Actions, (2, 1, 0, 0), Some(14),
    ),
    (
        "U+12042", "𒁂", "BAD",
        &[("bad", ReadingType::Syllabic, None), ("bat", ReadingType::Syllabic, None), ("be", ReadingType::Syllabic, None), ("til", ReadingType::Logographic, Some(Language::Sumerian))],
        &["to open", "distant", "to die"],
        SignCategory::Actions, (1, 0, 0, 0), Some(113),
    ),
    (
        "U+12049", "𒁉", "BI",
        &[("bi", ReadingType::Syllabic, None), ("pi", ReadingType::Syllabic, None), ("pe", ReadingType::Syllabic, None), ("kas", ReadingType::Logographic, Some(Language::Sumerian))],
        &["beer", "wine", "to speak"],
        SignCategory::Food, (3, 2, 0, 0), Some(358),
    ),
    (
        "U+12051", "𒁑", "BU",
        &[("bu", ReadingType::Syllabic, None), ("pu", ReadingType::Syllabic, None), ("gid2", ReadingType::Logographic, Some(Language::Sumerian))],
        &["long", "to pull", "to tear out"],
        SignCategory::Actions, (2, 1, 1, 0), Some(580),
    ),
    (
        "U+1207A", "𒁺", "DU",
        &[("du", ReadingType::Syllabic, None), ("tu", ReadingType::Syllabic, None), ("gin", ReadingType::Logographic, Some(Language::Sumerian)), ("gub", ReadingType::Logographic, Some(Language::Sumerian))],
        &["to go", "to walk", "to stand", "to bring"],
        SignCategory::Actions, (2, 2, 1, 0), Some(350),
    ),
    (
        "U+1208A", "𒂊", "E",
        &[("e", ReadingType::Syllabic, None), ("i", ReadingType::Syllabic, None)],
        &["house", "temple", "to speak"],
        SignCategory::Buildings, (3, 0, 0, 0), Some(308),
    ),
    (
        "U+1208D", "𒂍", "E2",
        &[("e2", ReadingType::Syllabic, None), ("bitu", ReadingType::Logographic, Some(Language::Akkadian))],
        &["house", "temple", "household"],
        SignCategory::Buildings, (4, 3, 2, 0), Some(324),
    ),
    (
        "U+12095", "𒂕", "EN",
        &[("en", ReadingType::Syllabic, None), ("in", ReadingType::Syllabic, None), ("bel", ReadingType::Logographic, Some(Language::Akkadian))],
        &["lord", "master", "high priest"],
        SignCategory::People, (3, 2, 0, 1), Some(164),
    ),
    (
        "U+120A0", "𒂠", "ESH",
        &[("esh", ReadingType::Syllabic, None), ("es", ReadingType::Syllabic, None)],
        &["three", "shrine"],
        SignCategory::Numbers, (0, 3, 0, 0), Some(1),
    ),
    (
        "U+120B7", "𒂷", "GA",
        &[("ga", ReadingType::Syllabic, None), ("qa", ReadingType::Syllabic, None), ("ka", ReadingType::Syllabic, None)],
        &["milk", "to bring"],
        SignCategory::Food, (3, 1, 0, 1), Some(491),
    ),
    (
        "U+120D5", "𒃕", "GI",
        &[("gi", ReadingType::Syllabic, None), ("ge", ReadingType::Syllabic, None), ("ke", ReadingType::Syllabic, None)],
        &["reed", "to return", "faithful"],
        SignCategory::Nature, (2, 2, 0, 0), Some(85),
    ),
    (
        "U+12100", "𒄀", "GU",
        &[("gu", ReadingType::Syllabic, None), ("qu", ReadingType::Syllabic, None)],
        &["cord", "string", "thread"],
        SignCategory::Objects, (3, 0, 0, 0), Some(891),
    ),
    (
        "U+1212C", "𒄬", "HA",
        &[("ha", ReadingType::Syllabic, None), ("ku6", ReadingType::Logographic, Some(Language::Sumerian))],
        &["fish", "may (optative)"],
        SignCategory::Animals, (4, 1, 0, 0), Some(589),
    ),
    (
        "U+12148", "𒅈", "I",
        &[("i", ReadingType::Syllabic, None)],
        &["oil", "fat", "five"],
        SignCategory::Food, (0, 5, 0, 0), Some(252),
    ),
    (
        "U+12157", "𒅗", "KA",
        &[("ka", ReadingType::Syllabic, None), ("ga", ReadingType::Syllabic, None), ("zu2", ReadingType::Logographic, Some(Language::Sumerian)), ("dug4", ReadingType::Logographic, Some(Language::Sumerian))],
        &["mouth", "word", "to speak", "tooth"],
        SignCategory::Body, (5, 3, 0, 1), Some(24),
    ),
    (
        "U+12197", "𒆗", "KI",
        &[("ki", ReadingType::Syllabic, None), ("ke4", ReadingType::Syllabic, None), ("gi7", ReadingType::Syllabic, None)],
        &["earth", "place", "land", "ground"],
        SignCategory::Nature, (3, 1, 0, 1), Some(737),
    ),
    (
        "U+121A0", "𒆠", "KU",
        &[("ku", ReadingType::Syllabic, None), ("qu", ReadingType::Syllabic, None), ("tush", ReadingType::Logographic, Some(Language::Sumerian))],
        &["to eat", "to place", "to lie down"],
        SignCategory::Actions, (4, 2, 0, 0), Some(808),
    ),
    (
        "U+121BE", "𒆾", "LA",
        &[("la", ReadingType::Syllabic, None), ("la2", ReadingType::Syllabic, None)],
        &["to hang", "to weigh", "to stretch", "plenty"],
        SignCategory::Actions, (2, 2, 1, 0), Some(89),
    ),
    (
        "U+121F4", "𒇴", "LI",
        &[("li", ReadingType::Syllabic, None), ("le", ReadingType::Syllabic, None)],
        &["oil", "juniper"],
        SignCategory::Nature, (3, 2, 0, 0), Some(59),
    ),
    (
        "U+12217", "𒈗", "LUGAL",
        &[("lugal", ReadingType::Logographic, Some(Language::Sumerian)), ("sharru", ReadingType::Logographic, Some(Language::Akkadian))],
        &["king", "ruler"],
        SignCategory::People, (4, 3, 1, 0), Some(266),
    ),
    (
        "U+12222", "𒈢", "MA",
        &[("ma", ReadingType::Syllabic, None)],
        &["ship", "to go"],
        SignCategory::Objects, (2, 2, 0, 0), Some(342),
    ),
    (
        "U+1222B", "𒈫", "ME",
        &[("me", ReadingType::Syllabic, None), ("mi", ReadingType::Syllabic, None)],
        &["divine powers", "being", "I (pronoun)"],
        SignCategory::Abstract, (3, 1, 0, 0), Some(532),
    ),
    (
        "U+1222C", "𒈬", "MIN",
        &[("min", ReadingType::Syllabic, None)],
        &["two"],
        SignCategory::Numbers, (0, 2, 0, 0), Some(826),
    ),
    (
        "U+1222F", "𒈯", "MU",
        &[("mu", ReadingType::Syllabic, None), ("shu", ReadingType::Logographic, Some(Language::Sumerian))],
        &["year", "name", "to grow"],
        SignCategory::Abstract, (2, 4, 0, 0), Some(98),
    ),
    (
        "U+12240", "𒉀", "NA",
        &[("na", ReadingType::Syllabic, None)],
        &["person", "stone", "man"],
        SignCategory::People, (3, 1, 0, 0), Some(70),
    ),
    (
        "U+12248", "𒉈", "NE",
        &[("ne", ReadingType::Syllabic, None), ("ni", ReadingType::Syllabic, None), ("izi", ReadingType::Logographic, Some(Language::Sumerian))],
        &["fire", "this", "self"],
        SignCategory::Nature, (4, 2, 2, 0), Some(313),
    ),
    (
        "U+12261", "𒉡", "NU",
        &[("nu", ReadingType::Syllabic, None)],
        &["not", "image", "likeness"],
        SignCategory::Abstract, (2, 1, 0, 0), Some(75),
    ),
    (
        "U+1228F", "𒊏", "RA",
        &[("ra", ReadingType::Syllabic, None)],
        &["to strike", "to go"],
        SignCategory::Actions, (2, 1, 0, 1), Some(511),
    ),
    (
        "U+12292", "𒊒", "RI",
        &[("ri", ReadingType::Syllabic, None), ("re", ReadingType::Syllabic, None)],
        &["to impose", "to direct"],
        SignCategory::Actions, (2, 1, 1, 0), Some(142),
    ),
    (
        "U+122A0", "𒊠", "SA",
        &[("sa", ReadingType::Syllabic, None), ("za", ReadingType::Syllabic, None)],
        &["sinew", "net", "to roast"],
        SignCategory::Body, (4, 1, 0, 0), Some(172),
    ),
    (
        "U+122AB", "𒊫", "SHA",
        &[("sha", ReadingType::Syllabic, None), ("sa4", ReadingType::Syllabic, None)],
        &["heart", "middle", "half"],
        SignCategory::Body, (3, 3, 0, 1), Some(566),
    ),
    (
        "U+122AC", "𒊬", "SHAR2",
        &[("shar", ReadingType::Syllabic, None), ("sar", ReadingType::Syllabic, None)],
        &["garden", "to write", "3600"],
        SignCategory::Buildings, (5, 4, 0, 1), Some(630),
    ),
    (
        "U+122C0", "𒋀", "SHU",
        &[("shu", ReadingType::Syllabic, None), ("su", ReadingType::Syllabic, None)],
        &["hand", "to pour", "portion"],
        SignCategory::Body, (2, 2, 0, 1), Some(354),
    ),
    (
        "U+122D9", "𒋙", "TA",
        &[("ta", ReadingType::Syllabic, None), ("da", ReadingType::Syllabic, None)],
        &["from", "with", "side"],
        SignCategory::Abstract, (3, 1, 0, 0), Some(248),
    ),
    (
        "U+122EB", "𒋫", "TI",
        &[("ti", ReadingType::Syllabic, None), ("te", ReadingType::Syllabic, None), ("til", ReadingType::Logographic, Some(Language::Sumerian))],
        &["arrow", "rib", "life", "to live"],
        SignCategory::Objects, (2, 2, 1, 0), Some(73),
    ),
    (
        "U+12306", "𒌆", "TU",
        &[("tu", ReadingType::Syllabic, None), ("du", ReadingType::Syllabic, None), ("tur", ReadingType::Logographic, Some(Language::Sumerian))],
        &["small", "child", "young"],
        SignCategory::People, (2, 3, 0, 0), Some(58),
    ),
    (
        "U+1230B", "𒌋", "U",
        &[("u", ReadingType::Syllabic, None), ("u2", ReadingType::Syllabic, None)],
        &["ten", "plant", "and"],
        SignCategory::Numbers, (1, 0, 0, 1), Some(411),
    ),
    (
        "U+1230D", "𒌍", "U2",
        &[("u2", ReadingType::Syllabic, None)],
        &["grass", "plant", "herb"],
        SignCategory::Nature, (2, 1, 0, 0), Some(490),
    ),
    (
        "U+12326", "𒌦", "UM",
        &[("um", ReadingType::Syllabic, None)],
        &["reed rope", "old woman"],
        SignCategory::Objects, (3, 2, 0, 0), Some(238),
    ),
    (
        "U+12328", "𒌨", "UR",
        &[("ur", ReadingType::Syllabic, None), ("lik", ReadingType::Syllabic, None)],
        &["dog", "lion", "servant"],
        SignCategory::Animals, (4, 1, 0, 0), Some(575),
    ),
    (
        "U+12351", "𒍑", "USH",
        &[("ush", ReadingType::Syllabic, None), ("us", ReadingType::Syllabic, None)],
        &["blood", "to die", "foundation"],
        SignCategory::Body, (3, 1, 1, 0), Some(381),
    ),
    (
        "U+12360", "𒍠", "ZA",
        &[("za", ReadingType::Syllabic, None), ("sa", ReadingType::Syllabic, None)],
        &["stone", "you"],
        SignCategory::Objects, (3, 3, 0, 0), Some(851),
    ),
    (
        "U+12365", "𒍥", "ZI",
        &[("zi", ReadingType::Syllabic, None), ("ze", ReadingType::Syllabic, None), ("si", ReadingType::Syllabic, None)],
        &["life", "breath", "soul", "throat"],
        SignCategory::Body, (2, 2, 1, 0), Some(140),
    ),
    (
        "U+1236A", "𒍪", "ZU",
        &[("zu", ReadingType::Syllabic, None), ("su", ReadingType::Syllabic, None)],
        &["to know", "tooth", "your"],
        SignCategory::Abstract, (2, 2, 0, 1), Some(15),
    ),
    (
        "U+12415", "𒐕", "DISH",
        &[("dish", ReadingType::Syllabic, None), ("1", ReadingType::Logographic, None)],
        &["one", "1"],
        SignCategory::Numbers, (0, 1, 0, 0), Some(748),
    ),
    (
        "U+1241E", "𒐞", "ASH",
        &[("ash", ReadingType::Syllabic, None), ("1", ReadingType::Logographic, None)],
        &["one", "single"],
        SignCategory::Numbers, (0, 1, 0, 0), Some(1),
    ),
    (
        "U+1214E", "𒅎", "IM",
        &[("im", ReadingType::Syllabic, None), ("em", ReadingType::Syllabic, None), ("tum", ReadingType::Syllabic, None)],
        &["wind", "clay", "tablet", "storm"],
        SignCategory::Nature, (4, 2, 1, 0), Some(641),
    ),
    (
        "U+12308", "𒌈", "TUM",
        &[("tum", ReadingType::Syllabic, None), ("dum", ReadingType::Syllabic, None)],
        &["to bring", "to carry"],
        SignCategory::Actions, (3, 2, 1, 0), Some(350),
    ),
    (
        "U+12229", "𒈩", "MASH",
        &[("mash", ReadingType::Syllabic, None), ("mas", ReadingType::Syllabic, None)],
        &["twin", "goat", "interest"],
        SignCategory::Animals, (2, 2, 0, 1), Some(120),
    ),
    (
        "U+1202B", "𒀫", "AL",
        &[("al", ReadingType::Syllabic, None)],
        &["hoe", "desire"],
        SignCategory::Tools, (3, 2, 0, 0), Some(474),
    ),
    (
        "U+12034", "𒀴", "AR",
        &[("ar", ReadingType::Syllabic, None)],
        &["praise", "glory"],
        SignCategory::Abstract, (4, 2, 0, 1), Some(851),
    ),
    (
        "U+12038", "𒀸", "ASH2",
        &[("ash2", ReadingType::Syllabic, None)],
        &["one"],
        SignCategory::Numbers, (1, 0, 0, 0), Some(1),
    ),
    (
        "U+12080", "𒂀", "DUB",
        &[("dub", ReadingType::Syllabic, None), ("tup", ReadingType::Syllabic, None)],
        &["tablet", "to heap up"],
        SignCategory::Objects, (4, 3, 0, 0), Some(138),
    ),
    (
        "U+1210C", "𒄌", "GUR",
        &[("gur", ReadingType::Syllabic, None), ("kur", ReadingType::Syllabic, None)],
        &["basket", "to turn"],
        SignCategory::Containers, (5, 2, 0, 0), Some(111),
    ),
    (
        "U+121AD", "𒆭", "KUR",
        &[("kur", ReadingType::Syllabic, None), ("gur", ReadingType::Syllabic, None), ("mat", ReadingType::Logographic, Some(Language::Akkadian))],
        &["mountain", "land", "underworld", "foreign land"],
        SignCategory::Nature, (3, 0, 3, 0), Some(578),
    ),
    (
        "U+12312", "𒌒", "UD",
        &[("ud", ReadingType::Syllabic, None), ("ut", ReadingType::Syllabic, None), ("tam", ReadingType::Syllabic, None), ("par", ReadingType::Syllabic, None)],
        &["sun", "day", "light", "time", "storm"],
        SignCategory::Cosmos, (4, 0, 4, 1), Some(596),
    ),
    (
        "U+12311", "𒌑", "UDU",
        &[("udu", ReadingType::Syllabic, None), ("lu", ReadingType::Syllabic, None)],
        &["sheep"],
        SignCategory::Animals, (3, 2, 1, 0), Some(537),
    ),
    (
        "U+120FB", "𒃻", "GU4",
        &[("gu4", ReadingType::Syllabic, None), ("gud", ReadingType::Syllabic, None)],
        &["ox", "bull", "cattle"],
        SignCategory::Animals, (5, 3, 1, 0), Some(472),
    ),
    (
        "U+1219F", "𒆟", "LAM",
        &[("lam", ReadingType::Syllabic, None)],
        &["abundance", "growth"],
        SignCategory::Abstract, (4, 3, 0, 0), Some(693),
    ),
    (
        "U+12246", "𒉆", "NAM",
        &[("nam", ReadingType::Syllabic, None)],
        &["destiny", "fate", "status"],
        SignCategory::Abstract, (3, 2, 0, 0), Some(79),
    ),
    (
        "U+12263", "𒉣", "NUN",
        &[("nun", ReadingType::Syllabic, None)],
        &["prince", "noble"],
        SignCategory::People, (2, 3, 0, 0), Some(143),
    ),
    (
        "U+12297", "𒊗", "RU",
        &[("ru", ReadingType::Syllabic, None)],
        &["to send", "to build"],
        SignCategory::Actions, (3, 2, 0, 0), Some(68),
    ),
    (
        "U+122BB", "𒊻", "SHE",
        &[("she", ReadingType::Syllabic, None), ("se", ReadingType::Syllabic, None)],
        &["barley", "grain"],
        SignCategory::Food, (1, 1, 1, 1), Some(579),
    ),
    (
        "U+122F0", "𒋰", "TAB",
        &[("tab", ReadingType::Syllabic, None), ("dab", ReadingType::Syllabic, None)],
        &["to double", "companion", "pair"],
        SignCategory::Numbers, (2, 2, 0, 0), Some(209),
    ),
    (
        "U+12134", "𒄴", "HASH",
        &[("hash", ReadingType::Syllabic, None), ("hish", ReadingType::Syllabic, None)],
        &["eight"],
        SignCategory::Numbers, (0, 4, 4, 0), Some(636),
    ),
    (
        "U+12399", "𒎙", "DISH2",
        &[("1", ReadingType::Logographic, None)],
        &["one", "single"],
        SignCategory::Numbers, (0, 1, 0, 0), Some(748),
    ),
];

pub(crate) fn bundled_signs() -> Vec<Sign> {
    SIGN_ROWS
        .iter()
        .map(
            |&(codepoint, character, name, readings, meanings, category, (h, v, o, w), mzl)| {
                Sign {
                    codepoint: codepoint.into(),
                    character: character.into(),
                    name: name.into(),
                    readings: readings
                        .iter()
                        .map(|&(value, kind, language)| SignReading {
                            value: value.into(),
                            kind,
                            language,
                        })
                        .collect(),
                    meanings: meanings.iter().map(|&m| m.into()).collect(),
                    category,
                    composition: Some(WedgeComposition::new(h, v, o, w)),
                    mzl_number: mzl,
                }
            },
        )
        .collect()
}
