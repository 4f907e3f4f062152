//! The plate language pipeline.
//!
//! `text -> tokens -> AST -> steps`, glued together from the phase crates:
//! [`plate_lexer::tokenize`], [`plate_parse::build_ast`] and
//! [`plate_eval::Stepper`]. The `plate` binary is a thin layer over
//! [`commands`].

pub mod commands;
mod tracing_setup;

pub use tracing_setup::init_tracing;

use plate_diagnostic::{Diagnostic, ErrorCode};
use plate_eval::{EvalError, LevelError, RunSummary, World};
use plate_ir::Node;
use plate_parse::ParseError;

/// Any failure between program text and a finished run.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Level(#[from] LevelError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl CompileError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CompileError::Parse(e) => e.code(),
            CompileError::Level(e) => e.code(),
            CompileError::Eval(e) => e.code(),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            CompileError::Parse(e) => e.to_diagnostic(),
            CompileError::Level(e) => e.to_diagnostic(),
            CompileError::Eval(e) => e.to_diagnostic(),
        }
    }
}

/// Tokenize and build a program.
pub fn compile(source: &str) -> Result<Vec<Node>, CompileError> {
    let tokens = plate_lexer::tokenize(source);
    Ok(plate_parse::build_ast(&tokens)?)
}

/// Parse a `.level` file into its initial world.
pub fn load_level(text: &str) -> Result<World, CompileError> {
    Ok(plate_eval::parse_level(text)?)
}

/// A finished (or budget-stopped) run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunResult {
    pub world: World,
    pub summary: RunSummary,
}

/// Compile `source`, load `level` and run the program against it.
///
/// The program is built completely before the level is touched, so a
/// syntax error never executes anything.
pub fn run(source: &str, level: &str, limit: Option<u64>) -> Result<RunResult, CompileError> {
    let program = compile(source)?;
    let mut world = load_level(level)?;
    let summary = plate_eval::run_to_end(&mut world, &program, limit)?;
    tracing::debug!(steps = summary.steps, outcome = ?summary.outcome, "run complete");
    Ok(RunResult { world, summary })
}
