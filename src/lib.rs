//! `unistring` - Unicode segmentation and display width over UTF-16 text
//!
//! Grapheme, word and sentence boundaries (UAX #29), East Asian Width
//! (UAX #11) and line break opportunities (UAX #14) driven by compact
//! embedded property tables, plus a cluster-indexed string type and
//! column-aware folding that understands ANSI escapes, OSC 8 hyperlinks and
//! numeric character references.

// Crate-level lint configuration
#![warn(unsafe_code)]
#![allow(clippy::cast_possible_truncation)] // Table fields are range checked
#![allow(clippy::cast_possible_wrap)] // Index conversions
#![allow(clippy::module_name_repetitions)] // Allow fold::FoldOptions etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::format_push_string)] // format! with push_str is fine
#![allow(clippy::should_implement_trait)] // from_str naming is intentional
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::cast_lossless)] // as casts are fine for primitive widening
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_pub_crate)] // pub(crate) marks crate-internal seams

pub mod ansi;
pub mod error;
pub mod event;
pub mod fold;
pub mod link;
pub mod text;
pub mod unicode;

// Re-export core types at crate root
pub use error::{Error, Result};
pub use event::{LogLevel, clear_log_callback, emit_log, set_log_callback};
pub use link::Hyperlink;

// Re-export text types
pub use text::{Cluster, Segment, Unistring, get_graphemes, get_sentences, get_words};

// Re-export folding
pub use fold::{
    FoldFlags, FoldOptions, columns_for, divide_by_columns, folded_lines, line_breakable_clusters,
};

// Re-export commonly used unicode items
pub use unicode::{AmbiguousWidth, UNICODE_VERSION, display_width, set_ambiguous_width};
