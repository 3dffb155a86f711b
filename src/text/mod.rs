//! Cluster-indexed text and its segments.
//!
//! Key types:
//!
//! - [`Unistring`]: UTF-16 text indexed by extended grapheme clusters
//! - [`Cluster`]: one grapheme cluster with its raw offset
//! - [`Segment`]: a grapheme, word or sentence run
//!
//! # Examples
//!
//! ```
//! use unistring::Unistring;
//!
//! let mut s = Unistring::new("de\u{301}licieux");
//! assert_eq!(s.len(), 9);
//! assert_eq!(s.raw_index_at(2), 3);
//!
//! s.insert("!", -1);
//! assert_eq!(s.to_string(), "de\u{301}licieu!x");
//! ```
//!
//! ```
//! use unistring::text::get_words;
//!
//! let words: Vec<String> = get_words("日本語だよ", true)
//!     .into_iter()
//!     .map(|w| w.text)
//!     .collect();
//! assert_eq!(words, ["日本語", "だよ"]);
//! ```

mod cluster;
mod segment;
mod unistring;

pub use cluster::{Cluster, scan_clusters};
pub use segment::{
    GraphemeSegment, Segment, SentenceSegment, WordSegment, get_graphemes, get_sentences,
    get_words, get_words_utf16, word_index_of,
};
pub use unistring::Unistring;
