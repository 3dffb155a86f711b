//! ANSI escape sequence recognition.
//!
//! Folding treats escape sequences as zero-width tokens. This module finds
//! where one ends and tracks the SGR and hyperlink state they leave behind.

pub mod sequences;
mod state;

pub use sequences::*;
pub use state::{EscapeState, is_sgr_reset};

use crate::error::Error;
use crate::event::{LogLevel, emit_log};

/// Kind of escape sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EscapeKind {
    /// `ESC [` params, intermediates, final byte.
    Csi,
    /// `ESC ]` string terminated by BEL or ST.
    Osc,
    /// Any other `ESC x` pair.
    Other,
}

/// An escape sequence found at the start of some text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Escape {
    pub kind: EscapeKind,
    /// Length in bytes.
    pub len: usize,
    /// False when the input ended before the sequence was complete.
    pub terminated: bool,
}

impl Escape {
    fn unterminated(kind: EscapeKind, len: usize) -> Self {
        Self {
            kind,
            len,
            terminated: false,
        }
    }

    fn complete(kind: EscapeKind, len: usize) -> Self {
        Self {
            kind,
            len,
            terminated: true,
        }
    }
}

/// Scan the escape sequence at the start of `s`.
///
/// Returns `None` if `s` does not start with ESC. An unterminated sequence
/// runs to the end of `s`.
#[must_use]
pub fn scan_escape(s: &str) -> Option<Escape> {
    let mut chars = s.char_indices();
    match chars.next() {
        Some((_, ESC)) => {}
        _ => return None,
    }

    let Some((_, intro)) = chars.next() else {
        return Some(Escape::unterminated(EscapeKind::Other, s.len()));
    };

    match intro {
        '[' => Some(scan_csi(s)),
        ']' => Some(scan_osc(s)),
        c => Some(Escape::complete(EscapeKind::Other, 1 + c.len_utf8())),
    }
}

fn scan_csi(s: &str) -> Escape {
    // Params and intermediates are ASCII; the final byte is 0x40..=0x7E
    let bytes = s.as_bytes();
    for (i, &b) in bytes.iter().enumerate().skip(2) {
        if (0x40..=0x7E).contains(&b) {
            return Escape::complete(EscapeKind::Csi, i + 1);
        }
        if !(0x20..=0x3F).contains(&b) {
            // Malformed: end before the offending byte
            return Escape::complete(EscapeKind::Csi, i);
        }
    }
    Escape::unterminated(EscapeKind::Csi, s.len())
}

fn scan_osc(s: &str) -> Escape {
    let mut chars = s.char_indices().skip(2).peekable();
    while let Some((i, c)) = chars.next() {
        match c {
            BEL | ST_C1 => return Escape::complete(EscapeKind::Osc, i + c.len_utf8()),
            ESC => {
                if let Some(&(j, '\\')) = chars.peek() {
                    return Escape::complete(EscapeKind::Osc, j + 1);
                }
            }
            _ => {}
        }
    }
    Escape::unterminated(EscapeKind::Osc, s.len())
}

/// Report an escape that ran to the end of input.
pub(crate) fn report_unterminated(byte_index: usize) {
    let err = Error::UnmatchedEscapeSequence {
        raw_index: byte_index,
    };
    emit_log(LogLevel::Warn, &format!("{err}; closed at end of input"));
}

/// Remove escape sequences, keeping everything else.
#[must_use]
pub fn strip(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(at) = rest.find(ESC) {
        out.push_str(&rest[..at]);
        let len = scan_escape(&rest[at..]).map_or(1, |e| e.len);
        rest = &rest[at + len..];
    }
    out.push_str(rest);
    out
}
