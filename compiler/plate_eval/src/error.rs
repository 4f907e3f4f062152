//! Errors raised while building a world or stepping a program.

use plate_diagnostic::{Diagnostic, ErrorCode};
use plate_ir::Node;

use crate::world::Position;

/// An initial world that breaks the grid invariants.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    #[error("grid has no rows")]
    EmptyGrid,

    #[error("grid must be square: row {row} has {found} cells, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid cell `{text}` at row {row}, column {column}: expected `_` or a positive plate id")]
    InvalidCell {
        row: usize,
        column: usize,
        text: String,
    },

    #[error("position {position} is outside the {size}x{size} grid")]
    PositionOutOfBounds { position: Position, size: usize },
}

impl WorldError {
    pub fn code(&self) -> ErrorCode {
        match self {
            WorldError::EmptyGrid => ErrorCode::E5001,
            WorldError::NotSquare { .. } => ErrorCode::E5002,
            WorldError::InvalidCell { .. } => ErrorCode::E5003,
            WorldError::PositionOutOfBounds { .. } => ErrorCode::E5004,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code()).with_message(self.to_string())
    }
}

/// A level file that could not be turned into a world.
///
/// Line numbers are 1-based.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LevelError {
    #[error("line {line}: {message}")]
    Directive { line: usize, message: String },

    #[error("line {line}: {source}")]
    Grid { line: usize, source: WorldError },

    #[error(transparent)]
    World(#[from] WorldError),
}

impl LevelError {
    pub fn code(&self) -> ErrorCode {
        match self {
            LevelError::Directive { .. } => ErrorCode::E5005,
            LevelError::Grid { source, .. } | LevelError::World(source) => source.code(),
        }
    }

    /// The 1-based line the error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            LevelError::Directive { line, .. } | LevelError::Grid { line, .. } => Some(*line),
            LevelError::World(_) => None,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            LevelError::Directive { .. } => diag
                .with_note("directives are `position <column> <row>` and `plates <id> ...`"),
            LevelError::Grid { .. } | LevelError::World(_) => diag,
        }
    }
}

/// A run aborted by a tree the stepper cannot execute.
///
/// The world keeps every mutation made before the failing step.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("invalid condition: `{condition}` is not a primitive command")]
    InvalidCondition { condition: String },
}

impl EvalError {
    pub(crate) fn invalid_condition(condition: &Node) -> Self {
        EvalError::InvalidCondition {
            condition: condition.to_string(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            EvalError::InvalidCondition { .. } => ErrorCode::E6001,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_note("loop conditions must be PICK, DROP or MOVE")
    }
}
