//! Character validation, preprocessing and tokenization.
//!
//! The source string is first validated and normalized into a list of
//! [`Scanned`] characters: whitespace is dropped, every unary minus (at the
//! start of the formula or right after `(`) is rewritten into a subtraction
//! from an implicit `0`, and the end marker `#` is appended. Each character
//! remembers its byte offset in the original source so tokens can carry
//! spans.
//!
//! The [`Lexer`] then yields tokens from that list on demand; the compiler
//! pulls them one at a time.

use std::collections::BTreeSet;

use crate::api::{Error, ErrorKind};

use super::syntax::Span;
use super::token::{Operator, Token, TokenKind};

/// Character appended to mark the end of the input.
pub const END_MARKER: char = '#';

/// True for every character a formula may contain.
pub fn is_supported(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
        || is_whitespace(ch)
        || matches!(ch, '.' | '+' | '-' | '*' | '/' | '^' | '(' | ')')
}

fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r' | '\n')
}

fn is_numeral(ch: char) -> bool {
    ch.is_ascii_digit() || ch == '.'
}

fn is_operator(ch: char) -> bool {
    Operator::from_char(ch).is_some()
}

/// A character of the preprocessed formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scanned {
    pub ch: char,
    /// Byte offset in the original source.
    pub offset: usize,
    /// Inserted by preprocessing rather than written by the user.
    pub synthetic: bool,
}

impl Scanned {
    fn span(&self) -> Span {
        if self.synthetic {
            Span::empty(self.offset)
        } else {
            Span::new(self.offset, self.offset + self.ch.len_utf8())
        }
    }
}

/// Validates `source` and rewrites it into the form the lexer expects.
///
/// Fails with [`ErrorKind::NotSupportedCharacter`] on the first character
/// outside the supported alphabet; nothing else is looked at before that.
pub fn preprocess(source: &str) -> Result<Vec<Scanned>, Error> {
    if let Some((offset, ch)) = source.char_indices().find(|(_, ch)| !is_supported(*ch)) {
        tracing::debug!(%ch, offset, "Rejected unsupported character");
        return Err(Error::new(ErrorKind::NotSupportedCharacter(ch))
            .with_span(Span::new(offset, offset + ch.len_utf8()))
            .with_input(source));
    }

    let mut scanned: Vec<Scanned> = Vec::with_capacity(source.len() + 1);
    for (offset, ch) in source.char_indices() {
        if is_whitespace(ch) {
            continue;
        }
        // "-x" => "0-x", "(-x" => "(0-x"
        let unary_minus = ch == '-' && scanned.last().is_none_or(|prev| prev.ch == '(');
        if unary_minus {
            scanned.push(Scanned {
                ch: '0',
                offset,
                synthetic: true,
            });
        }
        scanned.push(Scanned {
            ch,
            offset,
            synthetic: false,
        });
    }
    scanned.push(Scanned {
        ch: END_MARKER,
        offset: source.len(),
        synthetic: true,
    });

    Ok(scanned)
}

/// Pull-based tokenizer over a preprocessed formula.
///
/// Records the name of every variable it produces.
pub struct Lexer<'a> {
    chars: &'a [Scanned],
    pos: usize,
    variables: BTreeSet<String>,
}

impl<'a> Lexer<'a> {
    pub fn new(chars: &'a [Scanned]) -> Self {
        Self {
            chars,
            pos: 0,
            variables: BTreeSet::new(),
        }
    }

    /// The distinct variable names seen so far, in ascending order.
    pub fn variables(&self) -> &BTreeSet<String> {
        &self.variables
    }

    pub fn into_variables(self) -> BTreeSet<String> {
        self.variables
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).map(|scanned| scanned.ch)
    }

    /// Advances while `accept` holds and returns the consumed text and span.
    fn take_while(&mut self, accept: impl Fn(char) -> bool) -> (String, Span) {
        let start = self.pos;
        while self.peek().is_some_and(&accept) {
            self.pos += 1;
        }
        let consumed = &self.chars[start..self.pos];
        let text = consumed.iter().map(|scanned| scanned.ch).collect();
        let span = match (consumed.first(), consumed.last()) {
            (Some(first), Some(last)) => first.span().join(&last.span()),
            _ => Span::empty(self.chars.get(start).map_or(0, |scanned| scanned.offset)),
        };
        (text, span)
    }

    fn number(&mut self) -> Token {
        let (text, span) = self.take_while(is_numeral);
        // "5." reads as "5.0"; an error token keeps the text as written.
        let parsed = if text.ends_with('.') {
            format!("{text}0").parse::<f64>()
        } else {
            text.parse::<f64>()
        };
        match parsed {
            Ok(value) => Token::new(TokenKind::Number(value), span),
            Err(_) => Token::new(TokenKind::Error(text), span),
        }
    }

    fn word(&mut self) -> Token {
        let (name, span) = self.take_while(|ch| !is_operator(ch));
        if name.is_empty() {
            return Token::new(TokenKind::Error(name), span);
        }
        if self.peek() == Some('(') {
            Token::new(TokenKind::Function(name), span)
        } else {
            self.variables.insert(name.clone());
            Token::new(TokenKind::Variable(name), span)
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let scanned = *self.chars.get(self.pos)?;
        if is_numeral(scanned.ch) {
            return Some(self.number());
        }
        if let Some(op) = Operator::from_char(scanned.ch) {
            self.pos += 1;
            return Some(Token::new(TokenKind::Operator(op), scanned.span()));
        }
        Some(self.word())
    }
}

#[cfg(test)]
#[path = "lexer_test.rs"]
mod lexer_test;
