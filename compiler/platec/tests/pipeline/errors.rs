use plate_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use plate_diagnostic::ErrorCode;
use platec::{compile, run, CompileError};
use pretty_assertions::assert_eq;

fn render(source: &str, error: &CompileError) -> String {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
        .with_source(source)
        .with_file_path("prog.plate");
    emitter.emit(&error.to_diagnostic());
    String::from_utf8(emitter.into_inner()).unwrap()
}

#[test]
fn test_syntax_error_code() {
    let err = compile("while (move left pick) { drop }").unwrap_err();
    assert!(matches!(err, CompileError::Parse(_)));
    assert_eq!(err.code(), ErrorCode::E1006);
    assert_eq!(err.to_string(), "invalid condition");
}

#[test]
fn test_syntax_error_runs_nothing() {
    let err = run("pick move", "1", None).unwrap_err();
    assert_eq!(err.code(), ErrorCode::E1002);
}

#[test]
fn test_level_error() {
    let err = run("pick", "_ _\n_", None).unwrap_err();
    assert!(matches!(err, CompileError::Level(_)));
    assert_eq!(err.code(), ErrorCode::E5002);
}

#[test]
fn test_rendered_unknown_direction() {
    let source = "pick\nmove lefty\n";
    let err = compile(source).unwrap_err();
    assert_eq!(
        render(source, &err),
        "error[E1003]: unknown direction: LEFTY
  --> prog.plate:2:6
    |
  2 | move lefty
    |      ^^^^^ not a direction
  = help: did you mean `LEFT`?

"
    );
}

#[test]
fn test_step_limit_is_not_an_error() {
    let result = run("while (pick) { drop }", "1", Some(5)).unwrap();
    assert_eq!(result.summary.outcome, plate_eval::RunOutcome::StepLimit);
    assert_eq!(result.summary.steps, 5);
}
