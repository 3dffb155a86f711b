//! OSC 8 hyperlinks.
//!
//! An opener is `ESC ] 8 ; params ; uri ST` and a closer is the same with an
//! empty URI. The terminator (BEL, `ESC \` or C1 ST) is remembered so a
//! closer written later matches the opener.

use crate::ansi::sequences::{HYPERLINK_PREFIX, ST};

/// An active hyperlink.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hyperlink {
    pub params: String,
    pub uri: String,
    pub terminator: String,
}

/// Effect of one OSC 8 sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkChange {
    Open(Hyperlink),
    Close,
}

impl Hyperlink {
    /// Create a link using the seven-bit string terminator.
    #[must_use]
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            params: String::new(),
            uri: uri.into(),
            terminator: ST.to_string(),
        }
    }

    /// Set the `key=value:key=value` parameter string.
    #[must_use]
    pub fn with_params(mut self, params: impl Into<String>) -> Self {
        self.params = params.into();
        self
    }

    /// Sequence that opens this link.
    #[must_use]
    pub fn open_sequence(&self) -> String {
        format!(
            "{HYPERLINK_PREFIX}{};{}{}",
            self.params, self.uri, self.terminator
        )
    }

    /// Sequence that closes this link, with the opener's terminator.
    #[must_use]
    pub fn close_sequence(&self) -> String {
        format!("{HYPERLINK_PREFIX};{}", self.terminator)
    }
}

/// Parse a complete OSC sequence as an OSC 8 hyperlink change.
///
/// Returns `None` for any other OSC. An unterminated sequence is taken to end
/// at the end of `seq` and gets the seven-bit terminator.
#[must_use]
pub fn parse_osc8(seq: &str) -> Option<LinkChange> {
    let body = seq.strip_prefix(HYPERLINK_PREFIX)?;
    let (body, terminator) = split_terminator(body);
    let (params, uri) = body.split_once(';')?;
    if uri.is_empty() {
        return Some(LinkChange::Close);
    }
    Some(LinkChange::Open(Hyperlink {
        params: params.to_string(),
        uri: uri.to_string(),
        terminator: terminator.to_string(),
    }))
}

fn split_terminator(body: &str) -> (&str, &str) {
    for term in [ST, "\x07", "\u{9c}"] {
        if let Some(stripped) = body.strip_suffix(term) {
            return (stripped, term);
        }
    }
    (body, ST)
}
