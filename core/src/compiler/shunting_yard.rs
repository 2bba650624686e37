//! Operator-precedence conversion of a token stream into postfix form.
//!
//! Every operator token carries two priorities (see [`Token::inner_priority`]
//! and [`Token::outer_priority`]). An arriving token is compared by its outer
//! priority against the inner priority of the token on top of the operator
//! stack:
//!
//! - greater: the arriving token is pushed;
//! - less: the stack top is emitted;
//! - equal: the stack top is discarded. This matches `(` with `)`, and the
//!   end marker with the stack floor, which finishes compilation.
//!
//! Operators of the same class always pop each other, so every binary
//! operator is left-associative, `^` included: `2^3^2` is `(2^3)^2`.

use core::cmp::Ordering;
use core::fmt;
use std::collections::BTreeSet;

use smallvec::SmallVec;

use crate::api::{Error, ErrorKind};
use crate::parser::{Lexer, Operator, Token, TokenKind, preprocess};

/// A compiled formula: its postfix tokens and the variables it mentions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub postfix: Vec<Token>,
    /// Distinct variable names, ascending.
    pub variables: BTreeSet<String>,
}

impl Program {
    pub fn is_empty(&self) -> bool {
        self.postfix.is_empty()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.postfix.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

/// Compiles `source` into a postfix [`Program`].
///
/// Fails with `NotSupportedCharacter` or `NotSupportedToken`. Structural
/// problems such as unbalanced parentheses or missing operands are not
/// detected here; they surface when the program is checked or evaluated.
pub fn compile(source: &str) -> Result<Program, Error> {
    let chars = preprocess(source)?;
    let mut lexer = Lexer::new(&chars);
    let postfix = to_postfix(&mut lexer).map_err(|e| e.with_input(source))?;
    let program = Program {
        postfix,
        variables: lexer.into_variables(),
    };
    tracing::debug!(source, postfix = %program, "Compiled formula");
    Ok(program)
}

fn to_postfix(lexer: &mut Lexer<'_>) -> Result<Vec<Token>, Error> {
    let mut output = Vec::new();
    let mut operators: SmallVec<[Token; 16]> = SmallVec::new();
    operators.push(Token::end_marker(0));

    let mut input = lexer.next();
    loop {
        // The end marker always meets the stack floor before the input runs out.
        let token = input.take().ok_or(ErrorKind::InternalError)?;

        match &token.kind {
            TokenKind::Error(text) => {
                tracing::debug!(token = %text, "Rejected unclassifiable token");
                return Err(Error::new(ErrorKind::NotSupportedToken(text.clone()))
                    .with_span(token.span));
            }
            TokenKind::Number(_) | TokenKind::Variable(_) => {
                output.push(token);
                input = lexer.next();
            }
            TokenKind::Operator(_) | TokenKind::Function(_) => {
                let top = operators.last().ok_or(ErrorKind::InternalError)?;
                match token.outer_priority().cmp(&top.inner_priority()) {
                    Ordering::Greater => {
                        operators.push(token);
                        input = lexer.next();
                    }
                    Ordering::Less => {
                        output.extend(operators.pop());
                        input = Some(token);
                    }
                    Ordering::Equal => {
                        let discarded = operators.pop().ok_or(ErrorKind::InternalError)?;
                        match discarded.operator() {
                            Some(Operator::End) => break,
                            // `(` matched by the arriving `)`.
                            Some(Operator::LeftParen) => input = lexer.next(),
                            // A stray `)` met by an arriving `(`.
                            _ => input = Some(token),
                        }
                    }
                }
            }
        }
    }

    Ok(output)
}

#[cfg(test)]
#[path = "shunting_yard_test.rs"]
mod shunting_yard_test;
