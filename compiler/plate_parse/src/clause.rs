//! Balanced-delimiter clause extraction.

use plate_ir::{Span, Token};

use crate::cursor::Cursor;
use crate::error::ParseError;

/// Which delimiter pair encloses a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClauseKind {
    /// `( ... )`, a loop condition.
    Condition,
    /// `{ ... }`, a loop body.
    Body,
}

impl ClauseKind {
    pub fn open(self) -> &'static str {
        match self {
            ClauseKind::Condition => "(",
            ClauseKind::Body => "{",
        }
    }

    pub fn close(self) -> &'static str {
        match self {
            ClauseKind::Condition => ")",
            ClauseKind::Body => "}",
        }
    }
}

/// Tokens strictly between a matched pair of delimiters.
#[derive(Clone, Copy, Debug)]
pub struct Clause<'t> {
    pub tokens: &'t [Token],
    /// Span of the opening delimiter.
    pub open: Span,
    /// Span of the matching closing delimiter.
    pub close: Span,
}

impl Clause<'_> {
    /// Span from the opening through the closing delimiter.
    pub fn span(&self) -> Span {
        self.open.merge(self.close)
    }
}

/// Extract the next clause of `kind` from `cursor`.
///
/// The next token must be the opening delimiter. Nested delimiters of the
/// same kind are kept in the clause; only the matching closer ends it, and
/// the closer itself is consumed but not included. The other delimiter kind
/// is not counted.
pub fn extract_clause<'t>(
    cursor: &mut Cursor<'t>,
    kind: ClauseKind,
) -> Result<Clause<'t>, ParseError> {
    let (open, close) = (kind.open(), kind.close());

    let open_span = match cursor.peek() {
        Some(token) if token.is(open) => {
            cursor.advance();
            token.span
        }
        Some(token) => {
            return Err(ParseError::MissingOpen {
                open,
                found: Some(token.text.clone()),
                span: token.span,
            })
        }
        None => {
            return Err(ParseError::MissingOpen {
                open,
                found: None,
                span: cursor.end_span(),
            })
        }
    };

    let start = cursor.position();
    let mut depth: usize = 1;
    while let Some(token) = cursor.advance() {
        if token.is(open) {
            depth += 1;
        } else if token.is(close) {
            depth -= 1;
            if depth == 0 {
                let end = cursor.position() - 1;
                let clause = Clause {
                    tokens: cursor.slice(start, end),
                    open: open_span,
                    close: token.span,
                };
                tracing::trace!(?kind, tokens = clause.tokens.len(), "extracted clause");
                return Ok(clause);
            }
        }
    }

    Err(ParseError::UnclosedClause {
        close,
        span: open_span,
    })
}
