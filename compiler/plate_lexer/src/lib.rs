//! Tokenizer for the plate language.
//!
//! The lexical grammar has two rules:
//! - `(`, `)`, `{` and `}` are always single-character tokens
//! - any other run of characters between whitespace (space, tab, CR, LF)
//!   or delimiters is one word
//!
//! Words are uppercased, so `move left` and `MOVE LEFT` tokenize the same.
//! The tokenizer never fails and does not check words against the keyword
//! list: `MOVE XYZ` is two tokens, and it is the parser that rejects `XYZ`.

use logos::Logos;
use plate_ir::{Span, Token, TokenList};

/// Raw token classes recognized by the scanner.
#[derive(Logos, Copy, Clone, Debug, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
enum RawToken {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[regex(r"[^ \t\r\n(){}]+")]
    Word,
}

/// Tokenize program text.
///
/// Returns tokens in source order; empty input (or whitespace only) yields
/// an empty list. Each token's span points at the original, un-normalized
/// slice.
pub fn tokenize(source: &str) -> TokenList {
    let mut tokens = TokenList::new();
    let mut lexer = RawToken::lexer(source);

    while let Some(raw) = lexer.next() {
        let span = Span::from_range(lexer.span());
        let slice = lexer.slice();
        let text = match raw {
            Ok(RawToken::LParen) => "(".to_string(),
            Ok(RawToken::RParen) => ")".to_string(),
            Ok(RawToken::LBrace) => "{".to_string(),
            Ok(RawToken::RBrace) => "}".to_string(),
            // The rules cover every character; an error slice is still a word.
            Ok(RawToken::Word) | Err(()) => slice.to_uppercase(),
        };
        if text.is_empty() {
            continue;
        }
        tokens.push(Token::new(text, span));
    }

    tracing::trace!(count = tokens.len(), "tokenized program");
    tokens
}
