//! Constant ANSI escape sequences.

/// Escape character.
pub const ESC: char = '\x1b';

/// Bell, one of the OSC terminators.
pub const BEL: char = '\x07';

/// Single-byte string terminator (C1).
pub const ST_C1: char = '\u{9c}';

/// Seven-bit string terminator.
pub const ST: &str = "\x1b\\";

/// Control sequence introducer.
pub const CSI: &str = "\x1b[";

/// Operating system command introducer.
pub const OSC: &str = "\x1b]";

/// Reset all attributes to default.
pub const RESET: &str = "\x1b[0m";

/// OSC 8 hyperlink prefix (`ESC ] 8 ;`).
pub const HYPERLINK_PREFIX: &str = "\x1b]8;";

/// OSC 8 hyperlink end sequence with the seven-bit terminator.
pub const HYPERLINK_END: &str = "\x1b]8;;\x1b\\";
