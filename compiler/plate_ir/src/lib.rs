//! Plate IR - shared data types for the plate language.
//!
//! The pipeline is text in, steps out:
//!
//! ```text
//! source ──► tokenize() ──► TokenList
//!                              │
//!                              ▼
//!                         build_ast() ──► Vec<Node>
//!                                           │
//!                                           ▼
//!                                    Stepper (one Step per primitive)
//! ```
//!
//! This crate owns the values that flow between the stages so that the
//! lexer, parser and evaluator do not depend on each other.

mod node;
mod span;
mod token;

pub use node::{Command, Direction, Node};
pub use span::Span;
pub use token::{Token, TokenList, DELIMITERS};
