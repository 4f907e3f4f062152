//! Lexical tokens.
//!
//! A token is an uppercase string from the program text plus the span it was
//! read from. The vocabulary is closed (keywords, directions, brackets) but
//! the tokenizer does not enforce it; the parser rejects anything it does not
//! recognize.

use std::fmt;

use crate::Span;

/// The four single-character clause delimiters. Each one is always its own
/// token, never part of a word.
pub const DELIMITERS: [char; 4] = ['(', ')', '{', '}'];

/// A single lexical token.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    /// Uppercase-normalized token text.
    pub text: String,
    /// Location of the original slice in source.
    pub span: Span,
}

impl Token {
    /// Create a new token.
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Token {
            text: text.into(),
            span,
        }
    }

    /// Token text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Check if this token is exactly `text`.
    #[inline]
    pub fn is(&self, text: &str) -> bool {
        self.text == text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Ordered token sequence in source order.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    /// Create an empty token list.
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    /// Build a token list from bare strings, with dummy spans.
    ///
    /// Used to drive the parser directly from token vectors, e.g.
    /// `TokenList::from_texts(["MOVE", "LEFT"])`.
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TokenList {
            tokens: texts
                .into_iter()
                .map(|text| Token::new(text, Span::DUMMY))
                .collect(),
        }
    }

    /// Append a token.
    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Number of tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Get a token by index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Iterate over tokens.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Borrow the tokens as a slice.
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Token texts in order, without spans.
    pub fn texts(&self) -> Vec<&str> {
        self.tokens.iter().map(Token::as_str).collect()
    }

    /// Join token texts with single spaces.
    pub fn joined(&self) -> String {
        self.texts().join(" ")
    }

    /// Span covering every token, or [`Span::DUMMY`] when empty.
    pub fn span(&self) -> Span {
        match (self.tokens.first(), self.tokens.last()) {
            (Some(first), Some(last)) => first.span.merge(last.span),
            _ => Span::DUMMY,
        }
    }
}

impl From<Vec<Token>> for TokenList {
    fn from(tokens: Vec<Token>) -> Self {
        TokenList { tokens }
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl FromIterator<Token> for TokenList {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        TokenList {
            tokens: iter.into_iter().collect(),
        }
    }
}
