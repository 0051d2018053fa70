//! Bundled syllable-to-sign mappings.
//!
//! Sourced from ORACC Sign List (OSL) syllabic readings, CC0 Public Domain.
//! Phonetic approximations for sounds cuneiform never wrote (f, o, v, w
//! columns, consonant clusters) use the nearest attested sign and carry a
//! medium or low confidence tier.

use crate::mapping::{Confidence, SyllableMapping};

/// One mapping row: syllable, primary sign, alternatives, confidence.
type MappingRow = (
    &'static str,
    &'static str,
    &'static [&'static str],
    Confidence,
);

const MAPPING_ROWS: &[MappingRow] = &[
    // Plain vowels.
    ("a", "𒀀", &[], Confidence::High),
    ("e", "𒂊", &[], Confidence::High),
    ("i", "𒅈", &[], Confidence::High),
    ("u", "𒌋", &[], Confidence::High),

    // CV syllables.
    ("ba", "𒁀", &[], Confidence::High),
    ("be", "𒁁", &["𒁀"], Confidence::High),
    ("bi", "𒁉", &[], Confidence::High),
    ("bu", "𒁑", &[], Confidence::High),
    ("da", "𒁕", &[], Confidence::High),
    ("de", "𒁲", &[], Confidence::Medium),
    ("di", "𒁳", &[], Confidence::High),
    ("du", "𒁺", &[], Confidence::High),
    ("ga", "𒂵", &[], Confidence::High),
    ("ge", "𒄀", &["𒄄"], Confidence::Medium),
    ("gi", "𒄀", &[], Confidence::High),
    ("gu", "𒄖", &[], Confidence::High),
    ("ha", "𒄩", &[], Confidence::High),
    ("he", "𒄭", &[], Confidence::Medium),
    ("hi", "𒄭", &[], Confidence::High),
    ("hu", "𒄷", &[], Confidence::High),
    ("ka", "𒅗", &[], Confidence::High),
    ("ke", "𒆠", &["𒅗"], Confidence::Medium),
    ("ki", "𒆠", &[], Confidence::High),
    ("ku", "𒆪", &[], Confidence::High),
    ("la", "𒆷", &[], Confidence::High),
    ("le", "𒇷", &["𒆷"], Confidence::Medium),
    ("li", "𒇷", &[], Confidence::High),
    ("lu", "𒇻", &[], Confidence::High),
    ("ma", "𒈠", &[], Confidence::High),
    ("me", "𒈨", &[], Confidence::High),
    ("mi", "𒈪", &[], Confidence::High),
    ("mu", "𒈬", &[], Confidence::High),
    ("na", "𒈾", &[], Confidence::High),
    ("ne", "𒉈", &[], Confidence::High),
    ("ni", "𒉌", &[], Confidence::High),
    ("nu", "𒉡", &[], Confidence::High),
    ("pa", "𒉺", &[], Confidence::High),
    ("pe", "𒁉", &[], Confidence::Medium),
    ("pi", "𒁉", &[], Confidence::High),
    ("pu", "𒁑", &[], Confidence::Medium),
    ("ra", "𒊏", &[], Confidence::High),
    ("re", "𒊑", &["𒊏"], Confidence::Medium),
    ("ri", "𒊑", &[], Confidence::High),
    ("ru", "𒊒", &[], Confidence::High),
    ("sa", "𒊓", &[], Confidence::High),
    ("se", "𒊓", &[], Confidence::Medium),
    ("si", "𒋛", &[], Confidence::High),
    ("su", "𒋢", &[], Confidence::High),
    ("sha", "𒊭", &[], Confidence::High),
    ("she", "𒊺", &[], Confidence::High),
    ("shi", "𒅆", &["𒊭"], Confidence::Medium),
    ("shu", "𒋗", &[], Confidence::High),
    ("ta", "𒋫", &[], Confidence::High),
    ("te", "𒋼", &[], Confidence::High),
    ("ti", "𒋾", &[], Confidence::High),
    ("tu", "𒌅", &[], Confidence::High),
    ("wa", "𒉿", &["𒌋𒀀"], Confidence::Medium),
    ("we", "𒌌", &["𒌋𒂊"], Confidence::Low),
    ("wi", "𒌍", &["𒌋𒅈"], Confidence::Low),
    ("wu", "𒌋", &[], Confidence::Low),
    ("za", "𒍝", &[], Confidence::High),
    ("ze", "𒍢", &["𒍝"], Confidence::Medium),
    ("zi", "𒍣", &[], Confidence::High),
    ("zu", "𒍪", &[], Confidence::High),

    // VC patterns.
    ("ab", "𒀊", &[], Confidence::High),
    ("ad", "𒀜", &[], Confidence::High),
    ("ag", "𒀝", &[], Confidence::High),
    ("ak", "𒀝", &[], Confidence::High),
    ("al", "𒀠", &[], Confidence::High),
    ("am", "𒄠", &[], Confidence::High),
    ("an", "𒀭", &[], Confidence::High),
    ("ap", "𒀊", &[], Confidence::Medium),
    ("ar", "𒅈", &[], Confidence::High),
    ("as", "𒊍", &[], Confidence::High),
    ("ash", "𒀸", &[], Confidence::High),
    ("at", "𒀜", &[], Confidence::Medium),
    ("az", "𒊍", &[], Confidence::Medium),
    ("eb", "𒅁", &[], Confidence::High),
    ("ed", "𒀉", &[], Confidence::Medium),
    ("eg", "𒅅", &[], Confidence::High),
    ("ek", "𒅅", &[], Confidence::Medium),
    ("el", "𒂖", &[], Confidence::High),
    ("em", "𒅎", &[], Confidence::High),
    ("en", "𒂗", &[], Confidence::High),
    ("er", "𒅕", &[], Confidence::High),
    ("esh", "𒌍", &[], Confidence::High),
    ("et", "𒀉", &[], Confidence::Low),
    ("ib", "𒅁", &[], Confidence::High),
    ("id", "𒀉", &[], Confidence::High),
    ("ig", "𒅅", &[], Confidence::High),
    ("ik", "𒅅", &[], Confidence::Medium),
    ("il", "𒅋", &[], Confidence::High),
    ("im", "𒅎", &[], Confidence::High),
    ("in", "𒅔", &[], Confidence::High),
    ("ip", "𒅁", &[], Confidence::Medium),
    ("ir", "𒅕", &[], Confidence::High),
    ("is", "𒅖", &[], Confidence::High),
    ("ish", "𒅖", &[], Confidence::High),
    ("it", "𒀉", &[], Confidence::Medium),
    ("iz", "𒅖", &[], Confidence::Medium),
    ("ub", "𒌒", &[], Confidence::High),
    ("ud", "𒌓", &[], Confidence::High),
    ("ug", "𒌑", &[], Confidence::High),
    ("uk", "𒌑", &[], Confidence::Medium),
    ("ul", "𒌌", &[], Confidence::High),
    ("um", "𒌝", &[], Confidence::High),
    ("un", "𒌦", &[], Confidence::High),
    ("up", "𒌒", &[], Confidence::Medium),
    ("ur", "𒌨", &[], Confidence::High),
    ("us", "𒍑", &[], Confidence::High),
    ("ush", "𒍑", &[], Confidence::High),
    ("ut", "𒌓", &[], Confidence::Medium),
    ("uz", "𒍑", &[], Confidence::Medium),

    // CVC patterns.
    ("bad", "𒁁", &[], Confidence::High),
    ("bal", "𒁄", &[], Confidence::High),
    ("ban", "𒁈", &[], Confidence::High),
    ("bar", "𒁇", &[], Confidence::High),
    ("bur", "𒁔", &[], Confidence::High),
    ("dag", "𒁖", &[], Confidence::High),
    ("dal", "𒁳", &[], Confidence::High),
    ("dam", "𒁮", &[], Confidence::High),
    ("dar", "𒁯", &[], Confidence::High),
    ("dim", "𒁴", &[], Confidence::High),
    ("din", "𒁷", &[], Confidence::High),
    ("dub", "𒁾", &[], Confidence::High),
    ("dug", "𒂁", &[], Confidence::High),
    ("dul", "𒂃", &[], Confidence::High),
    ("dur", "𒂄", &[], Confidence::High),
    ("gal", "𒃲", &[], Confidence::High),
    ("gam", "𒃵", &[], Confidence::High),
    ("gan", "𒃶", &[], Confidence::High),
    ("gar", "𒃻", &[], Confidence::High),
    ("gig", "𒈪𒈪", &[], Confidence::Medium),
    ("gir", "𒄊", &[], Confidence::High),
    ("gish", "𒄑", &[], Confidence::High),
    ("gul", "𒄢", &[], Confidence::High),
    ("gur", "𒄥", &[], Confidence::High),
    ("hal", "𒄬", &[], Confidence::High),
    ("har", "𒄯", &[], Confidence::High),
    ("hul", "𒄾", &[], Confidence::High),
    ("hur", "𒄯", &[], Confidence::Medium),
    ("kal", "𒆗", &[], Confidence::High),
    ("kam", "𒄰", &[], Confidence::High),
    ("kar", "𒃸", &[], Confidence::High),
    ("kesh", "𒆍", &[], Confidence::High),
    ("kir", "𒆥", &[], Confidence::High),
    ("kur", "𒆳", &[], Confidence::High),
    ("lal", "𒇲", &[], Confidence::High),
    ("lam", "𒇴", &[], Confidence::High),
    ("lil", "𒇸", &[], Confidence::High),
    ("lum", "𒈝", &[], Confidence::High),
    ("mal", "𒈤", &[], Confidence::High),
    ("man", "𒈥", &[], Confidence::High),
    ("mar", "𒈥", &[], Confidence::Medium),
    ("mas", "𒈦", &[], Confidence::High),
    ("mash", "𒈦", &[], Confidence::High),
    ("mul", "𒀯", &[], Confidence::High),
    ("mur", "𒈬𒌨", &[], Confidence::Low),
    ("mush", "𒈲", &[], Confidence::High),
    ("nal", "𒈾𒀠", &[], Confidence::Low),
    ("nam", "𒉆", &[], Confidence::High),
    ("nar", "𒈾𒅈", &[], Confidence::Low),
    ("nig", "𒃻", &[], Confidence::High),
    ("nim", "𒉏", &[], Confidence::High),
    ("nin", "𒊩𒌆", &[], Confidence::High),
    ("nir", "𒉢", &[], Confidence::High),
    ("nun", "𒉣", &[], Confidence::High),
    ("pir", "𒉽", &[], Confidence::High),
    ("sar", "𒊬", &[], Confidence::High),
    ("shar", "𒊬", &[], Confidence::High),
    ("shir", "𒋓", &[], Confidence::High),
    ("shum", "𒋧", &[], Confidence::High),
    ("shur", "𒋩", &[], Confidence::High),
    ("sig", "𒋝", &[], Confidence::High),
    ("sim", "𒋝", &[], Confidence::High),
    ("sir", "𒋟", &[], Confidence::High),
    ("sur", "𒋢", &[], Confidence::Medium),
    ("tab", "𒋰", &[], Confidence::High),
    ("tag", "𒋳", &[], Confidence::High),
    ("tak", "𒋳", &[], Confidence::Medium),
    ("tal", "𒌇", &[], Confidence::High),
    ("tam", "𒌓", &[], Confidence::Medium),
    ("tar", "𒋻", &[], Confidence::High),
    ("tesh", "𒌍", &[], Confidence::Medium),
    ("til", "𒌀", &[], Confidence::High),
    ("tir", "𒌁", &[], Confidence::High),
    ("tum", "𒌈", &[], Confidence::High),
    ("tur", "𒌉", &[], Confidence::High),
    ("zal", "𒍠𒀠", &[], Confidence::Low),
    ("zig", "𒍣𒄀", &[], Confidence::Low),

    // Long vowels and diphthongs.
    ("aa", "𒀀𒀀", &[], Confidence::Low),
    ("ee", "𒂊𒂊", &[], Confidence::Low),
    ("oo", "𒌋𒌋", &[], Confidence::Low),
    ("ai", "𒀀𒅈", &[], Confidence::Low),
    ("ay", "𒀀𒅈", &[], Confidence::Low),
    ("au", "𒀀𒌋", &[], Confidence::Low),
    ("aw", "𒀀𒌋", &[], Confidence::Low),
    ("ea", "𒂊𒀀", &[], Confidence::Low),
    ("ia", "𒅈𒀀", &[], Confidence::Low),
    ("ie", "𒅈𒂊", &[], Confidence::Low),
    ("io", "𒅈𒌋", &[], Confidence::Low),
    ("iu", "𒅈𒌋", &[], Confidence::Low),
    ("oi", "𒌋𒅈", &[], Confidence::Low),
    ("ou", "𒌋𒌋", &[], Confidence::Low),
    ("ow", "𒌋𒌋", &[], Confidence::Low),
    ("ua", "𒌋𒀀", &[], Confidence::Low),
    ("ue", "𒌋𒂊", &[], Confidence::Low),
    ("ui", "𒌋𒅈", &[], Confidence::Low),

    // o-column approximations.
    ("bo", "𒁍", &[], Confidence::Medium),
    ("co", "𒆪", &[], Confidence::Low),
    ("do", "𒁺", &[], Confidence::Medium),
    ("fo", "𒁑", &[], Confidence::Low),
    ("go", "𒄖", &[], Confidence::Medium),
    ("ho", "𒄷", &[], Confidence::Medium),
    ("jo", "𒁺", &[], Confidence::Low),
    ("ko", "𒆪", &[], Confidence::Medium),
    ("lo", "𒇻", &[], Confidence::Medium),
    ("mo", "𒈬", &[], Confidence::Medium),
    ("no", "𒉡", &[], Confidence::Medium),
    ("po", "𒁑", &[], Confidence::Medium),
    ("ro", "𒊒", &[], Confidence::Medium),
    ("so", "𒋢", &[], Confidence::Medium),
    ("to", "𒌅", &[], Confidence::Medium),
    ("wo", "𒌋", &[], Confidence::Low),
    ("yo", "𒅈𒌋", &[], Confidence::Low),

    // Further VC coverage.
    ("ob", "𒌒", &[], Confidence::Medium),
    ("od", "𒌓", &[], Confidence::Medium),
    ("og", "𒌑", &[], Confidence::Medium),
    ("ok", "𒌑", &[], Confidence::Medium),
    ("ol", "𒌌", &[], Confidence::Medium),
    ("om", "𒌝", &[], Confidence::Medium),
    ("on", "𒌦", &[], Confidence::Medium),
    ("op", "𒌒", &[], Confidence::Medium),
    ("or", "𒌨", &[], Confidence::Medium),
    ("os", "𒍑", &[], Confidence::Medium),
    ("ot", "𒌓", &[], Confidence::Medium),

    // y as glide or vowel.
    ("ya", "𒅀", &[], Confidence::High),
    ("ye", "𒅀𒂊", &[], Confidence::Low),
    ("yi", "𒅀𒅈", &[], Confidence::Low),
    ("yu", "𒅀𒌋", &[], Confidence::Low),

    // Trailing -y endings.
    ("ly", "𒇷", &[], Confidence::Low),
    ("ry", "𒊑", &[], Confidence::Low),
    ("ny", "𒉌", &[], Confidence::Low),
    ("ty", "𒋾", &[], Confidence::Low),
    ("dy", "𒁳", &[], Confidence::Low),
    ("ey", "𒂊", &[], Confidence::Low),
    ("gy", "𒄀", &[], Confidence::Low),
    ("ky", "𒆠", &[], Confidence::Low),
    ("my", "𒈪", &[], Confidence::Low),
    ("py", "𒁉", &[], Confidence::Low),
    ("sy", "𒋛", &[], Confidence::Low),
    ("vy", "𒁉", &[], Confidence::Low),
    ("zy", "𒍣", &[], Confidence::Low),

    // Single-letter fallbacks.
    ("b", "𒁀", &[], Confidence::Low),
    ("c", "𒆪", &[], Confidence::Low),
    ("d", "𒁕", &[], Confidence::Low),
    ("f", "𒁑", &[], Confidence::Low),
    ("g", "𒂵", &[], Confidence::Low),
    ("h", "𒄩", &[], Confidence::Low),
    ("j", "𒁕", &[], Confidence::Low),
    ("k", "𒅗", &[], Confidence::Low),
    ("l", "𒆷", &[], Confidence::Low),
    ("m", "𒈠", &[], Confidence::Low),
    ("n", "𒈾", &[], Confidence::Low),
    ("p", "𒉺", &[], Confidence::Low),
    ("q", "𒆪", &[], Confidence::Low),
    ("r", "𒊏", &[], Confidence::Low),
    ("s", "𒊓", &[], Confidence::Low),
    ("t", "𒋫", &[], Confidence::Low),
    ("v", "𒁀", &[], Confidence::Low),
    ("w", "𒌋", &[], Confidence::Low),
    ("x", "𒆪𒊓", &[], Confidence::Low),
    ("y", "𒅈", &[], Confidence::Low),
    ("z", "𒍝", &[], Confidence::Low),

    // Consonant clusters.
    ("ch", "𒋗", &[], Confidence::Low),
    ("ck", "𒆪", &[], Confidence::Low),
    ("gh", "𒄩", &[], Confidence::Low),
    ("ng", "𒂵", &[], Confidence::Low),
    ("nk", "𒅗", &[], Confidence::Low),
    ("ph", "𒁑", &[], Confidence::Low),
    ("sc", "𒊓𒆪", &[], Confidence::Low),
    ("sh", "𒊭", &[], Confidence::Medium),
    ("sk", "𒊓𒆪", &[], Confidence::Low),
    ("sp", "𒊓𒉺", &[], Confidence::Low),
    ("st", "𒊓𒋫", &[], Confidence::Low),
    ("th", "𒋫", &[], Confidence::Low),
    ("wh", "𒌋", &[], Confidence::Low),

    // -er compounds.
    ("ber", "𒁁𒅕", &[], Confidence::Low),
    ("der", "𒁲𒅕", &[], Confidence::Low),
    ("fer", "𒁑𒅕", &[], Confidence::Low),
    ("ger", "𒄀𒅕", &[], Confidence::Low),
    ("her", "𒄭𒅕", &[], Confidence::Low),
    ("ker", "𒆠𒅕", &[], Confidence::Low),
    ("ler", "𒇷𒅕", &[], Confidence::Low),
    ("mer", "𒈨𒅕", &[], Confidence::Low),
    ("ner", "𒉈𒅕", &[], Confidence::Low),
    ("per", "𒁉𒅕", &[], Confidence::Low),
    ("ser", "𒊓𒅕", &[], Confidence::Low),
    ("ter", "𒋼𒅕", &[], Confidence::Low),
    ("ver", "𒁉𒅕", &[], Confidence::Low),

    // -le compounds.
    ("ble", "𒁀𒇷", &[], Confidence::Low),
    ("cle", "𒆪𒇷", &[], Confidence::Low),
    ("dle", "𒁕𒇷", &[], Confidence::Low),
    ("fle", "𒁑𒇷", &[], Confidence::Low),
    ("gle", "𒂵𒇷", &[], Confidence::Low),
    ("ple", "𒉺𒇷", &[], Confidence::Low),
    ("tle", "𒋫𒇷", &[], Confidence::Low),
    ("zle", "𒍝𒇷", &[], Confidence::Low),

    // Common word endings.
    ("ing", "𒅔", &[], Confidence::Medium),
    ("ung", "𒌦", &[], Confidence::Medium),
    ("ang", "𒀀𒂵", &[], Confidence::Low),
    ("ong", "𒌋𒂵", &[], Confidence::Low),
    ("ant", "𒀭𒋫", &[], Confidence::Low),
    ("ent", "𒂗𒋫", &[], Confidence::Low),
    ("int", "𒅔𒋫", &[], Confidence::Low),
    ("unt", "𒌦𒋫", &[], Confidence::Low),
    ("ard", "𒅈𒁕", &[], Confidence::Low),
    ("ord", "𒌨𒁕", &[], Confidence::Low),
    ("ess", "𒂊𒊓", &[], Confidence::Low),
    ("ness", "𒉈𒊓", &[], Confidence::Low),
    ("less", "𒇷𒊓", &[], Confidence::Low),
    ("ful", "𒁑𒌌", &[], Confidence::Low),
    ("ous", "𒌋𒊓", &[], Confidence::Low),
    ("tion", "𒋫𒅔", &[], Confidence::Low),
    ("sion", "𒊓𒅔", &[], Confidence::Low),
];

pub(crate) fn bundled_mappings() -> Vec<SyllableMapping> {
    MAPPING_ROWS
        .iter()
        .map(|&(syllable, primary_sign, alternatives, confidence)| SyllableMapping {
            syllable: syllable.into(),
            primary_sign: primary_sign.into(),
            alternatives: alternatives.iter().map(|&a| a.into()).collect(),
            confidence,
        })
        .collect()
}
