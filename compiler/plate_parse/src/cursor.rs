//! Token cursor for navigating a token slice.

use plate_ir::{Span, Token};

/// Index cursor over a token slice.
///
/// Every access is bounds-checked and returns `None` past the end, so
/// running out of input is an ordinary value the parser turns into a
/// syntax error.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> Cursor<'t> {
    /// Create a new cursor at the start of `tokens`.
    pub fn new(tokens: &'t [Token]) -> Self {
        Cursor { tokens, pos: 0 }
    }

    /// Current position (index of the next token to consume).
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Check if every token has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// The next token, without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    /// Consume and return the next token.
    #[inline]
    pub fn advance(&mut self) -> Option<&'t Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// The most recently consumed token.
    #[inline]
    pub fn previous(&self) -> Option<&'t Token> {
        self.pos.checked_sub(1).and_then(|i| self.tokens.get(i))
    }

    /// Tokens in `start..end`, or an empty slice if the range is invalid.
    pub fn slice(&self, start: usize, end: usize) -> &'t [Token] {
        self.tokens.get(start..end).unwrap_or(&[])
    }

    /// Zero-width span just past the last consumed token.
    ///
    /// Used to point at "end of input" errors.
    pub fn end_span(&self) -> Span {
        match self.previous().or_else(|| self.tokens.last()) {
            Some(token) => Span::point(token.span.end),
            None => Span::DUMMY,
        }
    }
}
