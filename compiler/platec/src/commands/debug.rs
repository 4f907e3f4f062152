//! Debug commands: `lex` and `parse` for inspecting the front end.

use plate_diagnostic::emitter::ColorMode;

use super::{compile_or_exit, read_file};

/// Tokenize a file and display the token stream.
pub fn lex_file(path: &str) {
    let source = read_file(path);
    let tokens = plate_lexer::tokenize(&source);

    println!("Tokens for '{}' ({} tokens):", path, tokens.len());
    for token in &tokens {
        println!("  {:<8} @ {}", token.text, token.span);
    }
}

/// Build a file and display its syntax tree.
pub fn parse_file(path: &str, color: ColorMode) {
    let source = read_file(path);
    let program = compile_or_exit(path, &source, color);

    println!("AST for '{}' ({} top-level commands):", path, program.len());
    for node in &program {
        println!("{node:#?}");
    }
}
