//! The `check` command: build a program without running it.

use plate_diagnostic::emitter::ColorMode;

use super::{compile_or_exit, read_file};

/// Check that a program parses, printing its size.
pub fn check_file(path: &str, color: ColorMode) {
    let source = read_file(path);
    let program = compile_or_exit(path, &source, color);
    let nodes: usize = program.iter().map(plate_ir::Node::size).sum();
    println!("{path}: ok ({} top-level commands, {nodes} nodes)", program.len());
}
