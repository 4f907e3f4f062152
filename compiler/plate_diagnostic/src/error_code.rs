use std::fmt;
use std::str::FromStr;

/// Error codes for all plate diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E1xxx: Syntax errors (AST builder)
/// - E5xxx: World / level errors
/// - E6xxx: Runtime invariant errors (stepper)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Syntax Errors (E1xxx)
    /// Unknown token
    E1001,
    /// `MOVE` without a direction
    E1002,
    /// Unknown direction literal
    E1003,
    /// Missing opening clause delimiter
    E1004,
    /// Clause not closed before end of input
    E1005,
    /// Loop condition is not a single primitive
    E1006,
    /// `DO` body not followed by `WHILE`
    E1007,

    // World Errors (E5xxx)
    /// Grid has no rows
    E5001,
    /// Grid is not square
    E5002,
    /// Invalid grid cell
    E5003,
    /// Agent position outside the grid
    E5004,
    /// Malformed level directive
    E5005,

    // Runtime Errors (E6xxx)
    /// Loop condition reached the stepper without being a primitive
    E6001,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: [ErrorCode; 13] = [
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E1007,
        ErrorCode::E5001,
        ErrorCode::E5002,
        ErrorCode::E5003,
        ErrorCode::E5004,
        ErrorCode::E5005,
        ErrorCode::E6001,
    ];

    /// Get the numeric code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Syntax
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            // World
            ErrorCode::E5001 => "E5001",
            ErrorCode::E5002 => "E5002",
            ErrorCode::E5003 => "E5003",
            ErrorCode::E5004 => "E5004",
            ErrorCode::E5005 => "E5005",
            // Runtime
            ErrorCode::E6001 => "E6001",
        }
    }

    /// Check if this is a syntax error (E1xxx range).
    pub fn is_syntax_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returned when a string is not a known error code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseErrorCodeError(pub String);

impl fmt::Display for ParseErrorCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown error code '{}'", self.0)
    }
}

impl std::error::Error for ParseErrorCodeError {}

impl FromStr for ErrorCode {
    type Err = ParseErrorCodeError;

    /// Case-insensitive: `e1002` parses as [`ErrorCode::E1002`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        ErrorCode::ALL
            .into_iter()
            .find(|code| code.as_str() == upper)
            .ok_or_else(|| ParseErrorCodeError(s.to_string()))
    }
}
