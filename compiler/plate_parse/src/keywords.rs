//! Keyword vocabulary recognized by the parser.
//!
//! Tokens arrive uppercased, so these are compared verbatim.

pub const PICK: &str = "PICK";
pub const DROP: &str = "DROP";
pub const MOVE: &str = "MOVE";
pub const WHILE: &str = "WHILE";
pub const DO: &str = "DO";

/// Commands that may start a statement, for "did you mean" suggestions.
pub const COMMANDS: [&str; 5] = [PICK, DROP, MOVE, WHILE, DO];
