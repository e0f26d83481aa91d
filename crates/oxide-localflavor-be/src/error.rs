//! Error types for the Belgian choice tables.

use thiserror::Error;

/// A code is not an entry of a choice table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} code: {code:?}")]
pub struct UnknownCode {
    /// Which table was searched (`region` or `province`).
    pub kind: &'static str,
    /// The code that was looked up.
    pub code: String,
}

impl UnknownCode {
    pub(crate) fn new(kind: &'static str, code: &str) -> Self {
        Self {
            kind,
            code: code.to_string(),
        }
    }
}
