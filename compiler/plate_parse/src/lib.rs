//! AST builder for the plate language.
//!
//! Consumes a [`TokenList`] front to back with an index [`Cursor`] and
//! produces a `Vec<Node>`. Grammar:
//!
//! ```text
//! program   = command*
//! command   = "PICK" | "DROP" | "MOVE" direction
//!           | "WHILE" "(" program ")" "{" program "}"
//!           | "DO" "{" program "}" "WHILE" "(" program ")"
//! direction = "UP" | "DOWN" | "LEFT" | "RIGHT"
//! ```
//!
//! Clauses are extracted by delimiter matching first and then built by an
//! independent recursive invocation, so a loop's condition must come out as
//! exactly one primitive command. The first error aborts the whole build.

mod clause;
mod cursor;
mod error;
pub mod keywords;
mod suggest;

pub use clause::{extract_clause, Clause, ClauseKind};
pub use cursor::Cursor;
pub use error::{ConditionProblem, ParseError};
pub use suggest::{edit_distance, suggest_similar};

use plate_ir::{Direction, Node, Span, Token, TokenList};
use plate_stack::ensure_sufficient_stack;

/// Build the AST for a token sequence.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn build_ast(tokens: &TokenList) -> Result<Vec<Node>, ParseError> {
    let program = Parser::new(tokens.as_slice()).parse_program()?;
    tracing::debug!(nodes = program.len(), "built program");
    Ok(program)
}

/// Recursive-descent parser over one token slice.
///
/// Each clause gets its own `Parser`, so nested bodies never see the tokens
/// that follow them.
pub struct Parser<'t> {
    cursor: Cursor<'t>,
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    /// Parse commands until the slice is exhausted.
    pub fn parse_program(&mut self) -> Result<Vec<Node>, ParseError> {
        let mut nodes = Vec::new();
        while let Some(token) = self.cursor.advance() {
            tracing::trace!(token = %token.text, position = self.cursor.position(), "command");
            nodes.push(self.parse_command(token)?);
        }
        Ok(nodes)
    }

    /// Parse the command introduced by `keyword`, already consumed.
    fn parse_command(&mut self, keyword: &'t Token) -> Result<Node, ParseError> {
        match keyword.as_str() {
            keywords::PICK => Ok(Node::Pick),
            keywords::DROP => Ok(Node::Drop),
            keywords::MOVE => self.parse_move(keyword),
            keywords::WHILE => self.parse_while(),
            keywords::DO => self.parse_do_while(),
            other => Err(ParseError::UnknownToken {
                found: other.to_string(),
                span: keyword.span,
            }),
        }
    }

    /// `MOVE <direction>`
    fn parse_move(&mut self, keyword: &Token) -> Result<Node, ParseError> {
        let Some(token) = self.cursor.advance() else {
            return Err(ParseError::MissingDirection {
                span: Span::point(keyword.span.end),
            });
        };
        match Direction::from_keyword(token.as_str()) {
            Some(direction) => Ok(Node::moving(direction)),
            None => Err(ParseError::UnknownDirection {
                found: token.text.clone(),
                span: token.span,
            }),
        }
    }

    /// `WHILE ( condition ) { body }`
    fn parse_while(&mut self) -> Result<Node, ParseError> {
        let condition = extract_clause(&mut self.cursor, ClauseKind::Condition)?;
        let body = extract_clause(&mut self.cursor, ClauseKind::Body)?;
        let condition = build_condition(&condition)?;
        let body = build_clause(&body)?;
        Ok(Node::while_loop(condition, body))
    }

    /// `DO { body } WHILE ( condition )`
    fn parse_do_while(&mut self) -> Result<Node, ParseError> {
        let body = extract_clause(&mut self.cursor, ClauseKind::Body)?;
        match self.cursor.peek() {
            Some(token) if token.is(keywords::WHILE) => {
                self.cursor.advance();
            }
            Some(token) => {
                return Err(ParseError::MissingDoWhile {
                    found: Some(token.text.clone()),
                    span: token.span,
                })
            }
            None => {
                return Err(ParseError::MissingDoWhile {
                    found: None,
                    span: self.cursor.end_span(),
                })
            }
        }
        let condition = extract_clause(&mut self.cursor, ClauseKind::Condition)?;
        let condition = build_condition(&condition)?;
        let body = build_clause(&body)?;
        Ok(Node::do_while(condition, body))
    }
}

/// Build a clause's tokens as an independent program.
fn build_clause(clause: &Clause<'_>) -> Result<Vec<Node>, ParseError> {
    ensure_sufficient_stack(|| Parser::new(clause.tokens).parse_program())
}

/// Build a condition clause, which must hold exactly one primitive.
fn build_condition(clause: &Clause<'_>) -> Result<Node, ParseError> {
    let mut nodes = build_clause(clause)?;
    let problem = match nodes.len() {
        0 => ConditionProblem::Empty,
        1 => match nodes.pop() {
            Some(node) if node.is_primitive() => return Ok(node),
            _ => ConditionProblem::Loop,
        },
        n => ConditionProblem::Sequence(n),
    };
    Err(ParseError::InvalidCondition {
        problem,
        span: clause.span(),
    })
}

#[cfg(test)]
mod tests;
