//! Error types for unistring.

use std::fmt;

/// Result type alias for unistring operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for unistring operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Code point outside `0..=0x10FFFF` passed to a property lookup.
    InvalidCodePoint(u32),
    /// Packed property data could not be decoded.
    MalformedTable {
        table: &'static str,
        reason: String,
    },
    /// Cluster or raw index outside the valid bounds of a strict accessor.
    IndexOutOfRange { index: isize, len: usize },
    /// An escape sequence was opened but never terminated.
    UnmatchedEscapeSequence { raw_index: usize },
    /// Malformed argument (e.g. a bad `U+HHHH` range list).
    InvalidArgument(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCodePoint(cp) => write!(f, "invalid code point: 0x{cp:X}"),
            Self::MalformedTable { table, reason } => {
                write!(f, "malformed {table} table: {reason}")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::UnmatchedEscapeSequence { raw_index } => {
                write!(f, "unterminated escape sequence at offset {raw_index}")
            }
            Self::InvalidArgument(s) => write!(f, "invalid argument: {s}"),
        }
    }
}

impl std::error::Error for Error {}
