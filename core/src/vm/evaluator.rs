//! Stack machine that reduces a postfix program to a single value.

use std::sync::Arc;

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::api::{Error, ErrorKind, EvalOptions, Variables};
use crate::parser::{Operator, Token, TokenKind};
use crate::stdlib;

/// A unary function registered by the host.
pub type UserFunction = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// Everything a program may refer to during one evaluation.
///
/// Variables resolve through the call-site bindings, then the user-defined
/// constants, then the built-in constants. Functions resolve through the
/// user-defined functions, then the built-ins.
pub struct Evaluator<'a, V: ?Sized> {
    options: &'a EvalOptions,
    variables: &'a V,
    constants: &'a HashMap<String, f64>,
    functions: &'a HashMap<String, UserFunction>,
}

impl<'a, V: Variables + ?Sized> Evaluator<'a, V> {
    pub fn new(
        options: &'a EvalOptions,
        variables: &'a V,
        constants: &'a HashMap<String, f64>,
        functions: &'a HashMap<String, UserFunction>,
    ) -> Self {
        Self {
            options,
            variables,
            constants,
            functions,
        }
    }

    /// Runs `postfix` and returns the single value left on the stack.
    ///
    /// Errors raised by a token carry that token's span.
    pub fn eval(&self, postfix: &[Token]) -> Result<f64, Error> {
        if postfix.is_empty() {
            return Err(ErrorKind::EmptyString.into());
        }

        let mut stack: SmallVec<[f64; 16]> = SmallVec::new();
        for token in postfix {
            let fail = |kind: ErrorKind| Error::new(kind).with_span(token.span.clone());

            match &token.kind {
                TokenKind::Error(text) => {
                    return Err(fail(ErrorKind::NotSupportedToken(text.clone())));
                }
                TokenKind::Number(value) => stack.push(*value),
                TokenKind::Variable(name) => {
                    let value = self
                        .resolve_variable(name)
                        .ok_or_else(|| fail(ErrorKind::NotDefinedVariable(name.clone())))?;
                    stack.push(value);
                }
                TokenKind::Operator(op) => {
                    if !op.is_arithmetic() {
                        return Err(fail(ErrorKind::WrongFormat));
                    }
                    if stack.len() < 2 {
                        return Err(fail(ErrorKind::NotEnoughOperands(op.to_string())));
                    }
                    let (Some(y), Some(x)) = (stack.pop(), stack.pop()) else {
                        return Err(fail(ErrorKind::InternalError));
                    };
                    stack.push(self.apply(*op, x, y).map_err(fail)?);
                }
                TokenKind::Function(name) => {
                    let x = stack
                        .pop()
                        .ok_or_else(|| fail(ErrorKind::NotEnoughOperands(name.clone())))?;
                    stack.push(self.call(name, x).map_err(fail)?);
                }
            }
        }

        if stack.len() != 1 {
            return Err(ErrorKind::WrongFormat.into());
        }
        let result = stack[0];
        if self.options.snap_to_zero && result.abs() <= self.options.epsilon {
            Ok(0.0)
        } else {
            Ok(result)
        }
    }

    fn resolve_variable(&self, name: &str) -> Option<f64> {
        self.variables
            .lookup(name)
            .or_else(|| self.constants.get(name).copied())
            .or_else(|| stdlib::constant(name))
    }

    fn call(&self, name: &str, x: f64) -> Result<f64, ErrorKind> {
        if let Some(function) = self.functions.get(name) {
            return Ok(function(x));
        }
        match stdlib::function(name) {
            Some(builtin) => builtin(x),
            None => Err(ErrorKind::NotDefinedFunction(name.to_string())),
        }
    }

    fn apply(&self, op: Operator, x: f64, y: f64) -> Result<f64, ErrorKind> {
        let epsilon = self.options.epsilon;
        match op {
            Operator::Add => Ok(x + y),
            Operator::Sub => Ok(x - y),
            Operator::Mul => Ok(x * y),
            Operator::Div if y.abs() < epsilon => Err(ErrorKind::DividedByZero),
            Operator::Div => Ok(x / y),
            Operator::Pow if x.abs() < epsilon && y < 0.0 => Err(ErrorKind::DividedByZero),
            Operator::Pow => Ok(x.powf(y)),
            Operator::LeftParen | Operator::RightParen | Operator::End => {
                Err(ErrorKind::WrongFormat)
            }
        }
    }
}

#[cfg(test)]
#[path = "evaluator_test.rs"]
mod evaluator_test;
