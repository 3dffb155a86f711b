//! Escape state carried across line cuts.

use super::EscapeKind;
use super::sequences::{CSI, RESET};
use crate::link::{Hyperlink, LinkChange, parse_osc8};

/// SGR sequences and hyperlink in effect at some point of the text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EscapeState {
    /// SGR sequences seen since the last reset, in order.
    sgr: Vec<String>,
    link: Option<Hyperlink>,
}

/// Check whether the SGR parameter string resets every attribute.
#[must_use]
pub fn is_sgr_reset(params: &str) -> bool {
    params.split(';').all(|p| p.bytes().all(|b| b == b'0'))
}

/// Parameter string of an SGR sequence, or `None` if `seq` is another CSI.
fn sgr_params(seq: &str) -> Option<&str> {
    let params = seq.strip_prefix(CSI)?.strip_suffix('m')?;
    params
        .bytes()
        .all(|b| b.is_ascii_digit() || b == b';' || b == b':')
        .then_some(params)
}

impl EscapeState {
    /// Update the state with one escape sequence.
    pub fn apply(&mut self, kind: EscapeKind, seq: &str) {
        match kind {
            EscapeKind::Csi => {
                let Some(params) = sgr_params(seq) else {
                    return;
                };
                if is_sgr_reset(params) {
                    self.sgr.clear();
                    return;
                }
                if params.split(';').next().is_some_and(is_sgr_reset) {
                    self.sgr.clear();
                }
                self.sgr.push(seq.to_string());
            }
            EscapeKind::Osc => match parse_osc8(seq) {
                Some(LinkChange::Open(link)) => self.link = Some(link),
                Some(LinkChange::Close) => self.link = None,
                None => {}
            },
            EscapeKind::Other => {}
        }
    }

    /// Check if no attribute or link is active.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.sgr.is_empty() && self.link.is_none()
    }

    /// Check if any SGR attribute is active.
    #[must_use]
    pub fn has_sgr(&self) -> bool {
        !self.sgr.is_empty()
    }

    /// Active hyperlink.
    #[must_use]
    pub fn link(&self) -> Option<&Hyperlink> {
        self.link.as_ref()
    }

    /// Sequences that restore the SGR attributes.
    #[must_use]
    pub fn sgr_sequence(&self) -> String {
        self.sgr.concat()
    }

    /// Sequences that restore the SGR attributes and, if `with_link`, the link.
    #[must_use]
    pub fn reopen_sequence(&self, with_link: bool) -> String {
        let mut out = self.sgr_sequence();
        if with_link {
            if let Some(link) = &self.link {
                out.push_str(&link.open_sequence());
            }
        }
        out
    }

    /// Sequences that end the SGR attributes and, if `with_link`, the link.
    #[must_use]
    pub fn close_sequence(&self, with_link: bool) -> String {
        let mut out = String::new();
        if self.has_sgr() {
            out.push_str(RESET);
        }
        if with_link {
            if let Some(link) = &self.link {
                out.push_str(&link.close_sequence());
            }
        }
        out
    }
}
