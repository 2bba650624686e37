//! Public error types for compiling and evaluating formulas.
//!
//! Failures are classified by [`ErrorKind`]. [`Error`] wraps a kind together
//! with the source text it was raised for and, when one exists, the span of
//! the offending character or token. Rendering is kept apart from
//! classification: callers match on `error.kind`, and the `Display` impls
//! (or the facade's `render_error_to`) only format.

use std::io;

use thiserror::Error as ThisError;

use crate::parser::Span;

/// What went wrong.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum ErrorKind {
    /// The lexer produced text it could not classify.
    #[error("Not supported token: {0}")]
    NotSupportedToken(String),

    /// An operator or function had fewer operands than its arity.
    #[error("Not enough operands for {owner} {0}", owner = operand_owner(.0))]
    NotEnoughOperands(String),

    /// An invariant of the compiler or evaluator was violated.
    #[error("A programming error occurred")]
    InternalError,

    #[error("Not defined function: {0}")]
    NotDefinedFunction(String),

    /// Wrong final stack depth, or a non-arithmetic operator in a program.
    #[error("Formula format is wrong")]
    WrongFormat,

    #[error("Not defined variable: {0}")]
    NotDefinedVariable(String),

    #[error("Divided by zero")]
    DividedByZero,

    /// A built-in function was applied outside its domain.
    #[error("Operand x = {value} is out of function {function}'s domain: {domain}")]
    OutOfRange {
        function: &'static str,
        value: f64,
        domain: &'static str,
    },

    /// Evaluation of a formula with no compiled content.
    #[error("Empty string")]
    EmptyString,

    #[error("Not supported character: {0}")]
    NotSupportedCharacter(char),
}

fn operand_owner(name: &str) -> &'static str {
    match name.chars().next() {
        Some(ch) if crate::parser::Operator::from_char(ch).is_some() => "operator",
        _ => "function",
    }
}

impl ErrorKind {
    /// Stable code for documentation lookup.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::NotSupportedToken(_) => "F001",
            ErrorKind::NotEnoughOperands(_) => "F002",
            ErrorKind::InternalError => "F003",
            ErrorKind::NotDefinedFunction(_) => "F004",
            ErrorKind::WrongFormat => "F005",
            ErrorKind::NotDefinedVariable(_) => "F006",
            ErrorKind::DividedByZero => "F007",
            ErrorKind::OutOfRange { .. } => "F008",
            ErrorKind::EmptyString => "F009",
            ErrorKind::NotSupportedCharacter(_) => "F010",
        }
    }

    /// A suggestion on how to fix the formula or the call, if there is one.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ErrorKind::NotSupportedCharacter(_) => Some(
                "Formulas may only contain letters, digits, '.', whitespace and + - * / ^ ( )",
            ),
            ErrorKind::NotDefinedVariable(_) => {
                Some("Bind the variable when evaluating, or define it as a constant")
            }
            ErrorKind::NotDefinedFunction(_) => {
                Some("Define the function before evaluating the formula")
            }
            ErrorKind::WrongFormat => Some("Check that parentheses are balanced"),
            _ => None,
        }
    }
}

/// A classified failure, with the source it was raised for.
#[derive(Debug, Clone, PartialEq, ThisError)]
#[error("{kind}")]
pub struct Error {
    pub kind: ErrorKind,

    /// Location of the offending character or token, if any.
    pub span: Option<Span>,

    /// The formula source the error was raised for.
    pub input: String,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            span: None,
            input: String::new(),
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = input.into();
        self
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error::new(kind)
    }
}

/// Failure of [`Formula::prompt`](super::Formula::prompt).
#[derive(Debug, ThisError)]
pub enum PromptError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Formula(#[from] Error),
}
