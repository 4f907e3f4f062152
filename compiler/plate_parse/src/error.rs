//! Parse error types.
//!
//! Each variant maps to one [`ErrorCode`] and carries the span of the token
//! that triggered it (or a zero-width span at the end of input).

use plate_diagnostic::{Diagnostic, ErrorCode};
use plate_ir::{Direction, Span};

use crate::keywords::COMMANDS;
use crate::suggest::suggest_similar;

/// Why a loop condition was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConditionProblem {
    /// `()` with nothing inside.
    Empty,
    /// More than one command, e.g. `(MOVE LEFT PICK)`.
    Sequence(usize),
    /// A loop used as a condition.
    Loop,
}

impl ConditionProblem {
    fn describe(self) -> String {
        match self {
            ConditionProblem::Empty => "the condition is empty".to_string(),
            ConditionProblem::Sequence(n) => format!("the condition holds {n} commands"),
            ConditionProblem::Loop => "the condition is a loop".to_string(),
        }
    }
}

/// A syntax error. Building stops at the first one; no partial tree is kept.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ParseError {
    #[error("unknown token: {found}")]
    UnknownToken { found: String, span: Span },

    #[error("missing direction")]
    MissingDirection { span: Span },

    #[error("unknown direction: {found}")]
    UnknownDirection { found: String, span: Span },

    #[error("missing {open}")]
    MissingOpen {
        open: &'static str,
        found: Option<String>,
        span: Span,
    },

    #[error("clause incomplete, missing {close}")]
    UnclosedClause { close: &'static str, span: Span },

    #[error("invalid condition")]
    InvalidCondition {
        problem: ConditionProblem,
        span: Span,
    },

    #[error("missing WHILE after DO body")]
    MissingDoWhile { found: Option<String>, span: Span },
}

impl ParseError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::UnknownToken { .. } => ErrorCode::E1001,
            ParseError::MissingDirection { .. } => ErrorCode::E1002,
            ParseError::UnknownDirection { .. } => ErrorCode::E1003,
            ParseError::MissingOpen { .. } => ErrorCode::E1004,
            ParseError::UnclosedClause { .. } => ErrorCode::E1005,
            ParseError::InvalidCondition { .. } => ErrorCode::E1006,
            ParseError::MissingDoWhile { .. } => ErrorCode::E1007,
        }
    }

    /// Span of the offending token.
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnknownToken { span, .. }
            | ParseError::MissingDirection { span }
            | ParseError::UnknownDirection { span, .. }
            | ParseError::MissingOpen { span, .. }
            | ParseError::UnclosedClause { span, .. }
            | ParseError::InvalidCondition { span, .. }
            | ParseError::MissingDoWhile { span, .. } => *span,
        }
    }

    /// Convert to a diagnostic for rendering.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_label(self.span(), self.label());

        match self {
            ParseError::UnknownToken { found, .. } => match suggest_similar(found, COMMANDS) {
                Some(keyword) => diag.with_suggestion(format!("did you mean `{keyword}`?")),
                None => diag.with_note("commands are PICK, DROP, MOVE, WHILE and DO"),
            },
            ParseError::MissingDirection { .. } => {
                diag.with_suggestion("follow MOVE with UP, DOWN, LEFT or RIGHT")
            }
            ParseError::UnknownDirection { found, .. } => {
                match suggest_similar(found, Direction::ALL.map(Direction::as_str)) {
                    Some(direction) => {
                        diag.with_suggestion(format!("did you mean `{direction}`?"))
                    }
                    None => diag.with_note("directions are UP, DOWN, LEFT and RIGHT"),
                }
            }
            ParseError::InvalidCondition { problem, .. } => diag
                .with_note(problem.describe())
                .with_note("a condition is exactly one PICK, DROP or MOVE"),
            ParseError::MissingOpen { .. }
            | ParseError::UnclosedClause { .. }
            | ParseError::MissingDoWhile { .. } => diag,
        }
    }

    fn label(&self) -> String {
        match self {
            ParseError::UnknownToken { .. } => "not a command".to_string(),
            ParseError::MissingDirection { .. } => "expected a direction here".to_string(),
            ParseError::UnknownDirection { .. } => "not a direction".to_string(),
            ParseError::MissingOpen { open, found, .. } => match found {
                Some(found) => format!("expected `{open}`, found `{found}`"),
                None => format!("expected `{open}`, found end of input"),
            },
            ParseError::UnclosedClause { close, .. } => format!("this clause needs a `{close}`"),
            ParseError::InvalidCondition { .. } => "in this condition".to_string(),
            ParseError::MissingDoWhile { found, .. } => match found {
                Some(found) => format!("expected `WHILE`, found `{found}`"),
                None => "expected `WHILE`, found end of input".to_string(),
            },
        }
    }
}
