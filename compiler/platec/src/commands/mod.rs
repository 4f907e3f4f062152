//! Command handlers for the `plate` CLI.
//!
//! Each submodule implements one command. Shared helpers for reading files
//! and reporting diagnostics live here.

use plate_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use plate_diagnostic::Diagnostic;

mod check;
mod debug;
mod explain;
pub mod run;

pub use check::check_file;
pub use debug::{lex_file, parse_file};
pub use explain::explain_error;
pub use run::{parse_run_options, run_file, step_file, RunOptions, DEFAULT_MAX_STEPS};

/// Exit code for syntax, level and runtime errors.
pub const EXIT_ERROR: i32 = 1;
/// Exit code when a run stops at its step budget.
pub const EXIT_STEP_LIMIT: i32 = 2;

/// Read a file, exiting with a message on failure.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(EXIT_ERROR);
        }
    }
}

/// Print `diagnostic` to stderr, with a source snippet when `source` is
/// the file its spans point into.
pub(crate) fn report(diagnostic: &Diagnostic, path: &str, source: Option<&str>, color: ColorMode) {
    let mut emitter = TerminalEmitter::stderr(color).with_file_path(path);
    if let Some(source) = source {
        emitter = emitter.with_source(source);
    }
    emitter.emit(diagnostic);
    emitter.flush();
}

/// Compile `source`, reporting and exiting on a syntax error.
pub(crate) fn compile_or_exit(path: &str, source: &str, color: ColorMode) -> Vec<plate_ir::Node> {
    match crate::compile(source) {
        Ok(program) => program,
        Err(e) => {
            report(&e.to_diagnostic(), path, Some(source), color);
            std::process::exit(EXIT_ERROR);
        }
    }
}
