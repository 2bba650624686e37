//! Structural validation of a postfix program without evaluating it.

use crate::api::{Error, ErrorKind};
use crate::parser::{Token, TokenKind};

/// Simulates the evaluation stack depth of `postfix`.
///
/// Reports the first token that would fail for structural reasons:
/// unclassified text, a missing operand, a stray parenthesis, or a call to a
/// function for which `is_defined` returns false. A program that leaves
/// anything but a single value fails with `WrongFormat`. An empty program
/// passes, since there is nothing to reject.
pub fn check(postfix: &[Token], is_defined: impl Fn(&str) -> bool) -> Result<(), Error> {
    if postfix.is_empty() {
        return Ok(());
    }

    let mut depth = 0usize;
    for token in postfix {
        let fail = |kind: ErrorKind| Err(Error::new(kind).with_span(token.span.clone()));

        match &token.kind {
            TokenKind::Error(text) => return fail(ErrorKind::NotSupportedToken(text.clone())),
            TokenKind::Number(_) | TokenKind::Variable(_) => depth += 1,
            TokenKind::Operator(op) => {
                if !op.is_arithmetic() {
                    return fail(ErrorKind::WrongFormat);
                }
                if depth < 2 {
                    return fail(ErrorKind::NotEnoughOperands(op.to_string()));
                }
                depth -= 1;
            }
            TokenKind::Function(name) => {
                if depth == 0 {
                    return fail(ErrorKind::NotEnoughOperands(name.clone()));
                }
                if !is_defined(name) {
                    return fail(ErrorKind::NotDefinedFunction(name.clone()));
                }
            }
        }
    }

    if depth != 1 {
        return Err(ErrorKind::WrongFormat.into());
    }
    Ok(())
}
