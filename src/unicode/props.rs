//! Unicode character properties backed by the embedded range tables.

use super::table::PropertyTable;
use crate::error::Result;
use std::fmt;
use std::sync::OnceLock;

/// Unicode version of the embedded property data.
pub const UNICODE_VERSION: (u8, u8, u8) = (17, 0, 0);

macro_rules! property_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident = $value:literal => $label:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        #[repr(u8)]
        pub enum $name {
            #[default]
            $($variant = $value,)+
        }

        impl $name {
            /// Every value, in numeric order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Convert a raw table value.
            #[must_use]
            pub const fn from_u8(value: u8) -> Option<Self> {
                match value {
                    $($value => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// Unicode property value name.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }

            /// Look up a value by its Unicode property value name.
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|v| v.name() == name)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

property_enum! {
    /// Grapheme_Cluster_Break property, with Extended_Pictographic folded in.
    GraphemeBreak {
        Other = 0 => "Other",
        Sot = 1 => "SOT",
        Eot = 2 => "EOT",
        Prepend = 3 => "Prepend",
        Cr = 4 => "CR",
        Lf = 5 => "LF",
        Control = 6 => "Control",
        Extend = 7 => "Extend",
        RegionalIndicator = 8 => "Regional_Indicator",
        SpacingMark = 9 => "SpacingMark",
        L = 10 => "L",
        V = 11 => "V",
        T = 12 => "T",
        Lv = 13 => "LV",
        Lvt = 14 => "LVT",
        Zwj = 15 => "ZWJ",
        ExtendedPictographic = 16 => "Extended_Pictographic",
    }
}

property_enum! {
    /// Word_Break property. Hiragana and Extended_Pictographic are split out
    /// of Other for reporting; the boundary rules treat both as Other.
    ///
    /// Values are the ones reported as segment kinds, so they stay fixed:
    /// 22 is unassigned and Extended_Pictographic is 23.
    WordBreak {
        Other = 0 => "Other",
        Sot = 1 => "SOT",
        Eot = 2 => "EOT",
        DoubleQuote = 3 => "Double_Quote",
        SingleQuote = 4 => "Single_Quote",
        HebrewLetter = 5 => "Hebrew_Letter",
        Cr = 6 => "CR",
        Lf = 7 => "LF",
        Newline = 8 => "Newline",
        Extend = 9 => "Extend",
        RegionalIndicator = 10 => "Regional_Indicator",
        Format = 11 => "Format",
        ALetter = 12 => "ALetter",
        MidLetter = 13 => "MidLetter",
        MidNum = 14 => "MidNum",
        MidNumLet = 15 => "MidNumLet",
        Numeric = 16 => "Numeric",
        ExtendNumLet = 17 => "ExtendNumLet",
        Zwj = 18 => "ZWJ",
        WSegSpace = 19 => "WSegSpace",
        Katakana = 20 => "Katakana",
        Hiragana = 21 => "Hiragana",
        ExtendedPictographic = 23 => "Extended_Pictographic",
    }
}

property_enum! {
    /// Sentence_Break property.
    SentenceBreak {
        Other = 0 => "Other",
        Sot = 1 => "SOT",
        Eot = 2 => "EOT",
        Cr = 3 => "CR",
        Lf = 4 => "LF",
        Extend = 5 => "Extend",
        Sep = 6 => "Sep",
        Format = 7 => "Format",
        Sp = 8 => "Sp",
        Lower = 9 => "Lower",
        Upper = 10 => "Upper",
        OLetter = 11 => "OLetter",
        Numeric = 12 => "Numeric",
        ATerm = 13 => "ATerm",
        STerm = 14 => "STerm",
        Close = 15 => "Close",
        SContinue = 16 => "SContinue",
    }
}

property_enum! {
    /// East_Asian_Width property.
    EastAsianWidth {
        Neutral = 0 => "N",
        Ambiguous = 1 => "A",
        Halfwidth = 2 => "H",
        Wide = 3 => "W",
        Fullwidth = 4 => "F",
        Narrow = 5 => "Na",
    }
}

property_enum! {
    /// Indic_Conjunct_Break property.
    IndicConjunctBreak {
        None = 0 => "None",
        Linker = 1 => "Linker",
        Consonant = 2 => "Consonant",
        Extend = 3 => "Extend",
    }
}

property_enum! {
    /// Line_Break property. Unlisted code points are XX.
    #[allow(clippy::upper_case_acronyms)]
    LineBreak {
        XX = 0 => "XX",
        BK = 1 => "BK",
        CR = 2 => "CR",
        LF = 3 => "LF",
        CM = 4 => "CM",
        NL = 5 => "NL",
        SG = 6 => "SG",
        WJ = 7 => "WJ",
        ZW = 8 => "ZW",
        GL = 9 => "GL",
        SP = 10 => "SP",
        ZWJ = 11 => "ZWJ",
        B2 = 12 => "B2",
        BA = 13 => "BA",
        BB = 14 => "BB",
        HY = 15 => "HY",
        CB = 16 => "CB",
        CL = 17 => "CL",
        CP = 18 => "CP",
        EX = 19 => "EX",
        IN = 20 => "IN",
        NS = 21 => "NS",
        OP = 22 => "OP",
        QU = 23 => "QU",
        IS = 24 => "IS",
        NU = 25 => "NU",
        PO = 26 => "PO",
        PR = 27 => "PR",
        SY = 28 => "SY",
        AI = 29 => "AI",
        AK = 30 => "AK",
        AL = 31 => "AL",
        AP = 32 => "AP",
        AS = 33 => "AS",
        CJ = 34 => "CJ",
        EB = 35 => "EB",
        EM = 36 => "EM",
        H2 = 37 => "H2",
        H3 = 38 => "H3",
        HL = 39 => "HL",
        ID = 40 => "ID",
        JL = 41 => "JL",
        JV = 42 => "JV",
        JT = 43 => "JT",
        RI = 44 => "RI",
        SA = 45 => "SA",
        VF = 46 => "VF",
        VI = 47 => "VI",
    }
}

const SCRIPT_NAMES: &[&str] = &[
    "Unknown", "Common", "Latin", "Bopomofo", "Inherited", "Greek", "Coptic", "Cyrillic",
    "Armenian", "Hebrew", "Arabic", "Syriac", "Thaana", "Nko", "Samaritan", "Mandaic",
    "Devanagari", "Bengali", "Gurmukhi", "Gujarati", "Oriya", "Tamil", "Telugu", "Kannada",
    "Malayalam", "Sinhala", "Thai", "Lao", "Tibetan", "Myanmar", "Georgian", "Hangul",
    "Ethiopic", "Cherokee", "Canadian_Aboriginal", "Ogham", "Runic", "Tagalog", "Hanunoo",
    "Buhid", "Tagbanwa", "Khmer", "Mongolian", "Limbu", "Tai_Le", "New_Tai_Lue", "Buginese",
    "Tai_Tham", "Balinese", "Sundanese", "Batak", "Lepcha", "Ol_Chiki", "Braille", "Glagolitic",
    "Tifinagh", "Han", "Hiragana", "Katakana", "Yi", "Lisu", "Vai", "Bamum", "Syloti_Nagri",
    "Phags_Pa", "Saurashtra", "Kayah_Li", "Rejang", "Javanese", "Cham", "Tai_Viet",
    "Meetei_Mayek", "Linear_B", "Lycian", "Carian", "Old_Italic", "Gothic", "Old_Permic",
    "Ugaritic", "Old_Persian", "Deseret", "Shavian", "Osmanya", "Osage", "Elbasan",
    "Caucasian_Albanian", "Vithkuqi", "Todhri", "Linear_A", "Cypriot", "Imperial_Aramaic",
    "Palmyrene", "Nabataean", "Hatran", "Phoenician", "Lydian", "Sidetic",
    "Meroitic_Hieroglyphs", "Meroitic_Cursive", "Kharoshthi", "Old_South_Arabian",
    "Old_North_Arabian", "Manichaean", "Avestan", "Inscriptional_Parthian",
    "Inscriptional_Pahlavi", "Psalter_Pahlavi", "Old_Turkic", "Old_Hungarian",
    "Hanifi_Rohingya", "Garay", "Yezidi", "Old_Sogdian", "Sogdian", "Old_Uyghur", "Chorasmian",
    "Elymaic", "Brahmi", "Kaithi", "Sora_Sompeng", "Chakma", "Mahajani", "Sharada", "Khojki",
    "Multani", "Khudawadi", "Grantha", "Tulu_Tigalari", "Newa", "Tirhuta", "Siddham", "Modi",
    "Takri", "Ahom", "Dogra", "Warang_Citi", "Dives_Akuru", "Nandinagari", "Zanabazar_Square",
    "Soyombo", "Pau_Cin_Hau", "Sunuwar", "Bhaiksuki", "Marchen", "Masaram_Gondi",
    "Gunjala_Gondi", "Tolong_Siki", "Makasar", "Kawi", "Cuneiform", "Cypro_Minoan",
    "Egyptian_Hieroglyphs", "Anatolian_Hieroglyphs", "Gurung_Khema", "Mro", "Tangsa",
    "Bassa_Vah", "Pahawh_Hmong", "Kirat_Rai", "Medefaidrin", "Beria_Erfe", "Miao", "Tangut",
    "Nushu", "Khitan_Small_Script", "Duployan", "SignWriting", "Nyiakeng_Puachue_Hmong", "Toto",
    "Wancho", "Nag_Mundari", "Ol_Onal", "Tai_Yo", "Mende_Kikakui", "Adlam",
];

/// Script property, numbered by first appearance in code point order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Script(pub u8);

impl Script {
    pub const UNKNOWN: Self = Self(0);
    pub const COMMON: Self = Self(1);
    pub const LATIN: Self = Self(2);
    pub const INHERITED: Self = Self(4);
    pub const GREEK: Self = Self(5);
    pub const CYRILLIC: Self = Self(7);
    pub const ARABIC: Self = Self(10);
    pub const DEVANAGARI: Self = Self(16);
    pub const THAI: Self = Self(26);
    pub const HANGUL: Self = Self(31);
    pub const HAN: Self = Self(56);
    pub const HIRAGANA: Self = Self(57);
    pub const KATAKANA: Self = Self(58);

    /// Number of known scripts, including Unknown.
    pub const COUNT: usize = SCRIPT_NAMES.len();

    /// Unicode script name (long form).
    #[must_use]
    pub fn name(self) -> &'static str {
        SCRIPT_NAMES.get(usize::from(self.0)).copied().unwrap_or("Unknown")
    }

    /// Look up a script by its long name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        SCRIPT_NAMES
            .iter()
            .position(|&n| n == name)
            .and_then(|i| u8::try_from(i).ok())
            .map(Self)
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Embedded tables
// ============================================================================

macro_rules! embedded_table {
    ($fn_name:ident, $label:literal, $file:literal) => {
        fn $fn_name() -> &'static PropertyTable {
            static TABLE: OnceLock<PropertyTable> = OnceLock::new();
            TABLE.get_or_init(|| {
                let table =
                    PropertyTable::decode($label, include_bytes!(concat!("data/", $file)))
                        .expect(concat!("embedded ", $label, " table is well-formed"));
                tracing::debug!(table = $label, ranges = table.len(), "decoded property table");
                table
            })
        }
    };
}

embedded_table!(grapheme_table, "grapheme break", "grapheme_break.bin");
embedded_table!(word_table, "word break", "word_break.bin");
embedded_table!(sentence_table, "sentence break", "sentence_break.bin");
embedded_table!(east_asian_width_table, "east asian width", "east_asian_width.bin");
embedded_table!(incb_table, "indic conjunct break", "indic_conjunct_break.bin");
embedded_table!(line_break_table, "line break", "line_break.bin");
embedded_table!(script_table, "script", "script.bin");

/// Selector for one of the embedded tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Table {
    GraphemeBreak,
    WordBreak,
    SentenceBreak,
    EastAsianWidth,
    IndicConjunctBreak,
    LineBreak,
    Script,
}

impl Table {
    /// Every embedded table.
    pub const ALL: [Self; 7] = [
        Self::GraphemeBreak,
        Self::WordBreak,
        Self::SentenceBreak,
        Self::EastAsianWidth,
        Self::IndicConjunctBreak,
        Self::LineBreak,
        Self::Script,
    ];

    /// The decoded table, initializing it on first use.
    #[must_use]
    pub fn get(self) -> &'static PropertyTable {
        match self {
            Self::GraphemeBreak => grapheme_table(),
            Self::WordBreak => word_table(),
            Self::SentenceBreak => sentence_table(),
            Self::EastAsianWidth => east_asian_width_table(),
            Self::IndicConjunctBreak => incb_table(),
            Self::LineBreak => line_break_table(),
            Self::Script => script_table(),
        }
    }
}

/// Classify a code point against one of the embedded tables.
///
/// Fails with [`Error::InvalidCodePoint`](crate::Error::InvalidCodePoint)
/// for values past U+10FFFF. Unlisted code points yield 0.
pub fn classify(table: Table, cp: u32) -> Result<u8> {
    table.get().lookup(cp)
}

/// Grapheme cluster break property of a code point.
#[inline]
#[must_use]
pub fn grapheme_break_prop(cp: u32) -> GraphemeBreak {
    GraphemeBreak::from_u8(grapheme_table().get(cp)).unwrap_or_default()
}

/// Word break property of a code point.
#[inline]
#[must_use]
pub fn word_break_prop(cp: u32) -> WordBreak {
    WordBreak::from_u8(word_table().get(cp)).unwrap_or_default()
}

/// Sentence break property of a code point.
#[inline]
#[must_use]
pub fn sentence_break_prop(cp: u32) -> SentenceBreak {
    SentenceBreak::from_u8(sentence_table().get(cp)).unwrap_or_default()
}

/// East Asian Width property of a code point.
#[inline]
#[must_use]
pub fn east_asian_width_prop(cp: u32) -> EastAsianWidth {
    EastAsianWidth::from_u8(east_asian_width_table().get(cp)).unwrap_or_default()
}

/// Indic conjunct break property of a code point.
#[inline]
#[must_use]
pub fn indic_conjunct_break_prop(cp: u32) -> IndicConjunctBreak {
    IndicConjunctBreak::from_u8(incb_table().get(cp)).unwrap_or_default()
}

/// Line break property of a code point.
#[inline]
#[must_use]
pub fn line_break_prop(cp: u32) -> LineBreak {
    LineBreak::from_u8(line_break_table().get(cp)).unwrap_or_default()
}

/// Script property of a code point.
#[inline]
#[must_use]
pub fn script_prop(cp: u32) -> Script {
    Script(script_table().get(cp))
}

/// Check whether a code point is Extended_Pictographic.
///
/// Only code points whose grapheme break property is Other carry this flag
/// in the grapheme table, which covers every Extended_Pictographic character.
#[inline]
#[must_use]
pub fn is_extended_pictographic(cp: u32) -> bool {
    grapheme_break_prop(cp) == GraphemeBreak::ExtendedPictographic
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_embedded_tables_decode() {
        for table in Table::ALL {
            assert!(!table.get().is_empty(), "{table:?} should have ranges");
        }
    }

    #[test]
    fn test_grapheme_props() {
        assert_eq!(grapheme_break_prop(0x0D), GraphemeBreak::Cr);
        assert_eq!(grapheme_break_prop(0x0A), GraphemeBreak::Lf);
        assert_eq!(grapheme_break_prop(0x00), GraphemeBreak::Control);
        assert_eq!(grapheme_break_prop(0x41), GraphemeBreak::Other);
        assert_eq!(grapheme_break_prop(0x0301), GraphemeBreak::Extend);
        assert_eq!(grapheme_break_prop(0x3099), GraphemeBreak::Extend);
        assert_eq!(grapheme_break_prop(0x200D), GraphemeBreak::Zwj);
        assert_eq!(grapheme_break_prop(0x1F1E6), GraphemeBreak::RegionalIndicator);
        assert_eq!(grapheme_break_prop(0x1100), GraphemeBreak::L);
        assert_eq!(grapheme_break_prop(0xAC00), GraphemeBreak::Lv);
        assert_eq!(grapheme_break_prop(0xAC01), GraphemeBreak::Lvt);
        assert_eq!(grapheme_break_prop(0x0600), GraphemeBreak::Prepend);
        assert_eq!(grapheme_break_prop(0x0903), GraphemeBreak::SpacingMark);
        assert_eq!(grapheme_break_prop(0x1F600), GraphemeBreak::ExtendedPictographic);
        assert!(is_extended_pictographic(0x00A9));
    }

    #[test]
    fn test_word_props() {
        assert_eq!(word_break_prop(u32::from('a')), WordBreak::ALetter);
        assert_eq!(word_break_prop(u32::from('5')), WordBreak::Numeric);
        assert_eq!(word_break_prop(u32::from('\'')), WordBreak::SingleQuote);
        assert_eq!(word_break_prop(u32::from('"')), WordBreak::DoubleQuote);
        assert_eq!(word_break_prop(u32::from('.')), WordBreak::MidNumLet);
        assert_eq!(word_break_prop(u32::from(':')), WordBreak::MidLetter);
        assert_eq!(word_break_prop(u32::from(',')), WordBreak::MidNum);
        assert_eq!(word_break_prop(u32::from('_')), WordBreak::ExtendNumLet);
        assert_eq!(word_break_prop(u32::from(' ')), WordBreak::WSegSpace);
        assert_eq!(word_break_prop(0x05D0), WordBreak::HebrewLetter);
        assert_eq!(word_break_prop(u32::from('カ')), WordBreak::Katakana);
        assert_eq!(word_break_prop(u32::from('か')), WordBreak::Hiragana);
        assert_eq!(word_break_prop(u32::from('漢')), WordBreak::Other);
        assert_eq!(word_break_prop(0x1F369), WordBreak::ExtendedPictographic);
        assert_eq!(word_break_prop(0x2028), WordBreak::Newline);
    }

    #[test]
    fn test_sentence_props() {
        assert_eq!(sentence_break_prop(u32::from('.')), SentenceBreak::ATerm);
        assert_eq!(sentence_break_prop(u32::from('?')), SentenceBreak::STerm);
        assert_eq!(sentence_break_prop(u32::from('。')), SentenceBreak::STerm);
        assert_eq!(sentence_break_prop(u32::from('a')), SentenceBreak::Lower);
        assert_eq!(sentence_break_prop(u32::from('A')), SentenceBreak::Upper);
        assert_eq!(sentence_break_prop(u32::from(' ')), SentenceBreak::Sp);
        assert_eq!(sentence_break_prop(u32::from(')')), SentenceBreak::Close);
        assert_eq!(sentence_break_prop(u32::from(',')), SentenceBreak::SContinue);
        assert_eq!(sentence_break_prop(u32::from('漢')), SentenceBreak::OLetter);
        assert_eq!(sentence_break_prop(0x2029), SentenceBreak::Sep);
    }

    #[test]
    fn test_east_asian_width_props() {
        assert_eq!(east_asian_width_prop(u32::from('A')), EastAsianWidth::Narrow);
        assert_eq!(east_asian_width_prop(u32::from('あ')), EastAsianWidth::Wide);
        assert_eq!(east_asian_width_prop(0xFF21), EastAsianWidth::Fullwidth);
        assert_eq!(east_asian_width_prop(0xFF71), EastAsianWidth::Halfwidth);
        assert_eq!(east_asian_width_prop(0x2460), EastAsianWidth::Ambiguous);
        assert_eq!(east_asian_width_prop(0x0100), EastAsianWidth::Neutral);
    }

    #[test]
    fn test_script_props() {
        assert_eq!(script_prop(u32::from('a')), Script::LATIN);
        assert_eq!(script_prop(u32::from('!')), Script::COMMON);
        assert_eq!(script_prop(u32::from('漢')), Script::HAN);
        assert_eq!(script_prop(u32::from('か')), Script::HIRAGANA);
        assert_eq!(script_prop(u32::from('カ')), Script::KATAKANA);
        assert_eq!(script_prop(u32::from('한')), Script::HANGUL);
        assert_eq!(script_prop(0x0301), Script::INHERITED);
        assert_eq!(script_prop(0x0378), Script::UNKNOWN);
        assert_eq!(Script::HAN.name(), "Han");
        assert_eq!(Script::from_name("Hiragana"), Some(Script::HIRAGANA));
        assert_eq!(Script::COUNT, 175);
    }

    #[test]
    fn test_incb_and_line_break_props() {
        assert_eq!(indic_conjunct_break_prop(0x0915), IndicConjunctBreak::Consonant);
        assert_eq!(indic_conjunct_break_prop(0x094D), IndicConjunctBreak::Linker);
        assert_eq!(indic_conjunct_break_prop(u32::from('a')), IndicConjunctBreak::None);
        assert_eq!(line_break_prop(u32::from(' ')), LineBreak::SP);
        assert_eq!(line_break_prop(u32::from('a')), LineBreak::AL);
        assert_eq!(line_break_prop(u32::from('(')), LineBreak::OP);
        assert_eq!(line_break_prop(u32::from('あ')), LineBreak::ID);
        assert_eq!(line_break_prop(0x0A), LineBreak::LF);
    }

    #[test]
    fn test_names_round_trip() {
        assert_eq!(
            GraphemeBreak::from_name("Regional_Indicator"),
            Some(GraphemeBreak::RegionalIndicator)
        );
        assert_eq!(WordBreak::from_name("WSegSpace"), Some(WordBreak::WSegSpace));
        assert_eq!(SentenceBreak::from_name("bogus"), None);
        assert_eq!(WordBreak::Hiragana as u8, 21);
        assert_eq!(WordBreak::from_u8(22), None);
        assert_eq!(WordBreak::from_u8(23), Some(WordBreak::ExtendedPictographic));
        assert_eq!(WordBreak::from_u8(24), None);
        assert_eq!(LineBreak::default(), LineBreak::XX);
    }

    #[test]
    fn test_classify_rejects_invalid_code_point() {
        assert_eq!(classify(Table::WordBreak, u32::from('a')), Ok(WordBreak::ALetter as u8));
        assert_eq!(
            classify(Table::Script, 0x11_0000),
            Err(Error::InvalidCodePoint(0x11_0000))
        );
    }
}
