//! Turns formula source text into tokens.

pub mod lexer;
pub mod syntax;
pub mod token;

pub use lexer::{Lexer, Scanned, preprocess};
pub use syntax::Span;
pub use token::{Operator, Token, TokenKind};
