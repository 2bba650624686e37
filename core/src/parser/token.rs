//! Tokens produced by the lexer and stored in compiled programs.

use core::fmt;

use super::syntax::Span;

/// The single-character operators, including grouping and the end marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    LeftParen,
    RightParen,
    /// `#`: end of input, and the floor of the operator stack.
    End,
}

impl Operator {
    pub fn from_char(ch: char) -> Option<Self> {
        Some(match ch {
            '+' => Operator::Add,
            '-' => Operator::Sub,
            '*' => Operator::Mul,
            '/' => Operator::Div,
            '^' => Operator::Pow,
            '(' => Operator::LeftParen,
            ')' => Operator::RightParen,
            '#' => Operator::End,
            _ => return None,
        })
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Pow => '^',
            Operator::LeftParen => '(',
            Operator::RightParen => ')',
            Operator::End => '#',
        }
    }

    /// True for the five binary arithmetic operators.
    pub fn is_arithmetic(self) -> bool {
        matches!(
            self,
            Operator::Add | Operator::Sub | Operator::Mul | Operator::Div | Operator::Pow
        )
    }

    fn inner_priority(self) -> u8 {
        match self {
            Operator::End => 0,
            Operator::Add | Operator::Sub => 3,
            Operator::Mul | Operator::Div => 5,
            Operator::Pow => 7,
            Operator::LeftParen => 1,
            Operator::RightParen => 10,
        }
    }

    fn outer_priority(self) -> u8 {
        match self {
            Operator::End => 0,
            Operator::Add | Operator::Sub => 2,
            Operator::Mul | Operator::Div => 4,
            Operator::Pow => 6,
            Operator::LeftParen => 10,
            Operator::RightParen => 1,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

const FUNCTION_INNER_PRIORITY: u8 = 9;
const FUNCTION_OUTER_PRIORITY: u8 = 8;

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Number(f64),
    Operator(Operator),
    /// A word directly followed by `(`.
    Function(String),
    Variable(String),
    /// Text the lexer could not classify.
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// The synthetic end marker used to seed the operator stack.
    pub fn end_marker(offset: usize) -> Self {
        Self::new(TokenKind::Operator(Operator::End), Span::empty(offset))
    }

    pub fn operator(&self) -> Option<Operator> {
        match self.kind {
            TokenKind::Operator(op) => Some(op),
            _ => None,
        }
    }

    /// Priority of the token while it sits on the operator stack.
    pub fn inner_priority(&self) -> u8 {
        match &self.kind {
            TokenKind::Operator(op) => op.inner_priority(),
            TokenKind::Function(_) => FUNCTION_INNER_PRIORITY,
            TokenKind::Number(_) | TokenKind::Variable(_) | TokenKind::Error(_) => 0,
        }
    }

    /// Priority of the token while it arrives from the input.
    pub fn outer_priority(&self) -> u8 {
        match &self.kind {
            TokenKind::Operator(op) => op.outer_priority(),
            TokenKind::Function(_) => FUNCTION_OUTER_PRIORITY,
            TokenKind::Number(_) | TokenKind::Variable(_) | TokenKind::Error(_) => 0,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TokenKind::Number(value) => write!(f, "{}", value),
            TokenKind::Operator(op) => write!(f, "{}", op),
            TokenKind::Function(name) | TokenKind::Variable(name) | TokenKind::Error(name) => {
                write!(f, "{}", name)
            }
        }
    }
}
