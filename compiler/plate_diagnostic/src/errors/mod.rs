//! Embedded error documentation for `plate explain`.
//!
//! Each documented code has a markdown file in this directory, embedded at
//! compile time. To document a new code, add `EXXXX.md` here and an entry to
//! `DOCS`.

use crate::ErrorCode;

/// Registry of embedded error documentation.
pub struct ErrorDocs;

impl ErrorDocs {
    /// Get the documentation for an error code, if any.
    pub fn get(code: ErrorCode) -> Option<&'static str> {
        DOCS.iter().find(|(c, _)| *c == code).map(|(_, doc)| *doc)
    }

    /// Get all documented error codes.
    pub fn all_codes() -> impl Iterator<Item = ErrorCode> {
        DOCS.iter().map(|(code, _)| *code)
    }

    /// Check if an error code has documentation.
    pub fn has_docs(code: ErrorCode) -> bool {
        DOCS.iter().any(|(c, _)| *c == code)
    }
}

static DOCS: &[(ErrorCode, &str)] = &[
    // Syntax errors (E1xxx)
    (ErrorCode::E1001, include_str!("E1001.md")),
    (ErrorCode::E1002, include_str!("E1002.md")),
    (ErrorCode::E1003, include_str!("E1003.md")),
    (ErrorCode::E1004, include_str!("E1004.md")),
    (ErrorCode::E1005, include_str!("E1005.md")),
    (ErrorCode::E1006, include_str!("E1006.md")),
    (ErrorCode::E1007, include_str!("E1007.md")),
    // World errors (E5xxx)
    (ErrorCode::E5001, include_str!("E5001.md")),
    (ErrorCode::E5002, include_str!("E5002.md")),
    (ErrorCode::E5003, include_str!("E5003.md")),
    (ErrorCode::E5004, include_str!("E5004.md")),
    (ErrorCode::E5005, include_str!("E5005.md")),
    // Runtime errors (E6xxx)
    (ErrorCode::E6001, include_str!("E6001.md")),
];
