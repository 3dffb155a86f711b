//! Unicode property tables, boundary engines and display width.

pub mod grapheme;
pub mod linebreak;
pub mod props;
pub mod rules;
pub mod sentence;
pub mod table;
pub mod utf16;
pub mod width;
pub mod word;

pub use grapheme::{GraphemeBreaker, grapheme_boundaries};
pub use linebreak::{BreakOpportunity, break_opportunities, cluster_line_break_class};
pub use props::{
    EastAsianWidth, GraphemeBreak, IndicConjunctBreak, LineBreak, Script, SentenceBreak, Table,
    UNICODE_VERSION, WordBreak, classify, east_asian_width_prop, grapheme_break_prop,
    indic_conjunct_break_prop, is_extended_pictographic, line_break_prop, script_prop,
    sentence_break_prop, word_break_prop,
};
pub use sentence::{SentenceDecision, sentence_boundaries, sentence_decisions};
pub use table::{PropertyRange, PropertyTable};
pub use utf16::{CodePointFormat, code_point_string, parse_code_point_ranges};
pub use width::{
    AmbiguousWidth, ambiguous_width, cluster_width, code_point_width, display_width,
    display_width_with, set_ambiguous_width,
};
pub use word::{WordDecision, word_boundaries, word_decisions};
