//! Compiled formulas.

use core::fmt;
use core::str::FromStr;
use std::collections::BTreeSet;
use std::io::{BufRead, Write};
use std::sync::Arc;

use hashbrown::HashMap;

use super::{Error, EvalOptions, EvalOptionsOverride, PromptError, Variables};
use crate::compiler::{Program, compile};
use crate::parser::Token;
use crate::stdlib;
use crate::vm::{Evaluator, UserFunction, check};

/// A formula compiled into postfix form, ready to be evaluated many times.
///
/// Names are resolved at evaluation time. Variables look first at the
/// bindings passed to [`eval`](Formula::eval), then at constants defined
/// with [`define_constant`](Formula::define_constant), then at the built-in
/// constants. Functions look first at those defined with
/// [`define_function`](Formula::define_function), then at the built-ins.
///
/// # Example
///
/// ```
/// use formula_core::api::Formula;
///
/// let mut formula = Formula::new("k * sqrt(x) + 1").unwrap();
/// formula.define_constant("k", 2.0);
/// assert_eq!(formula.eval(&[("x", 9.0)]).unwrap(), 7.0);
/// ```
#[derive(Clone, Default)]
pub struct Formula {
    source: String,
    program: Program,
    constants: HashMap<String, f64>,
    functions: HashMap<String, UserFunction>,
    options: EvalOptions,
}

static_assertions::assert_impl_all!(Formula: Send, Sync, Clone);

impl Formula {
    /// Compiles `source` with the default options.
    pub fn new(source: &str) -> Result<Self, Error> {
        Self::with_options(EvalOptions::default(), source)
    }

    pub fn with_options(options: EvalOptions, source: &str) -> Result<Self, Error> {
        let program = compile(source)?;
        Ok(Self {
            source: source.to_string(),
            program,
            constants: HashMap::new(),
            functions: HashMap::new(),
            options,
        })
    }

    /// Replaces the formula with `source`.
    ///
    /// The new source is compiled before anything changes, so on failure the
    /// formula keeps its previous program. User-defined constants and
    /// functions are kept.
    pub fn assign(&mut self, source: &str) -> Result<(), Error> {
        let program = compile(source)?;
        tracing::trace!(from = %self.source, to = source, "Reassigned formula");
        self.source = source.to_string();
        self.program = program;
        Ok(())
    }

    /// Drops the program, the source and every user-defined name.
    pub fn clear(&mut self) {
        self.source.clear();
        self.program = Program::default();
        self.constants.clear();
        self.functions.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.program.is_empty()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn postfix(&self) -> &[Token] {
        &self.program.postfix
    }

    /// Distinct variable names in the formula, ascending.
    pub fn variables(&self) -> &BTreeSet<String> {
        &self.program.variables
    }

    pub fn options(&self) -> &EvalOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: EvalOptions) {
        self.options = options;
    }

    /// Defines (or redefines) a constant that shadows any built-in of the
    /// same name.
    pub fn define_constant(&mut self, name: &str, value: f64) {
        tracing::trace!(name, value, "Defined constant");
        self.constants.insert(name.to_string(), value);
    }

    /// Defines (or redefines) a unary function that shadows any built-in of
    /// the same name. User functions are not domain checked.
    pub fn define_function<F>(&mut self, name: &str, function: F)
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        tracing::trace!(name, "Defined function");
        self.functions.insert(name.to_string(), Arc::new(function));
    }

    /// Validates the structure of the program without evaluating it.
    ///
    /// Functions must be user-defined or built in; variables are not
    /// resolved. An empty formula passes.
    pub fn check(&self) -> Result<(), Error> {
        check(&self.program.postfix, |name| {
            self.functions.contains_key(name) || stdlib::function(name).is_some()
        })
        .map_err(|e| e.with_input(self.source.as_str()))
    }

    /// Evaluates the formula with the named `variables`.
    pub fn eval<V: Variables + ?Sized>(&self, variables: &V) -> Result<f64, Error> {
        self.eval_with(EvalOptionsOverride::default(), variables)
    }

    /// Evaluates the formula with some options overridden for this call only.
    pub fn eval_with<V: Variables + ?Sized>(
        &self,
        options: EvalOptionsOverride,
        variables: &V,
    ) -> Result<f64, Error> {
        let mut effective = self.options.clone();
        effective.override_with(&options);

        let result = Evaluator::new(&effective, variables, &self.constants, &self.functions)
            .eval(&self.program.postfix)
            .map_err(|e| e.with_input(self.source.as_str()));
        tracing::debug!(source = %self.source, ?result, "Evaluated formula");
        result
    }

    /// Evaluates the formula binding `values` to its variables by position.
    ///
    /// See [`positional_bindings`](Formula::positional_bindings).
    pub fn eval_positional(&self, values: &[f64]) -> Result<f64, Error> {
        let bindings = self.positional_bindings(values);
        self.eval(bindings.as_slice())
    }

    /// Pairs `values` with the variable names in ascending order, skipping
    /// names that are user-defined constants.
    ///
    /// Extra values are ignored. Names left without a value stay unbound.
    pub fn positional_bindings(&self, values: &[f64]) -> Vec<(&str, f64)> {
        self.program
            .variables
            .iter()
            .filter(|name| !self.constants.contains_key(name.as_str()))
            .zip(values.iter().copied())
            .map(|(name, value)| (name.as_str(), value))
            .collect()
    }

    /// Writes `prompt`, reads one line from `reader`, and compiles and
    /// checks it.
    pub fn prompt<R, W>(prompt: &str, reader: &mut R, writer: &mut W) -> Result<Self, PromptError>
    where
        R: BufRead,
        W: Write,
    {
        write!(writer, "{}", prompt)?;
        writer.flush()?;

        let mut line = String::new();
        reader.read_line(&mut line)?;
        let source = line.trim_end_matches(['\r', '\n']);
        Ok(source.parse::<Formula>()?)
    }
}

impl fmt::Debug for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut functions: Vec<_> = self.functions.keys().collect();
        functions.sort();
        f.debug_struct("Formula")
            .field("source", &self.source)
            .field("postfix", &self.program.to_string())
            .field("constants", &self.constants)
            .field("functions", &functions)
            .field("options", &self.options)
            .finish()
    }
}

/// Renders the source the formula was compiled from.
impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Compiles and checks `source`.
impl FromStr for Formula {
    type Err = Error;

    fn from_str(source: &str) -> Result<Self, Error> {
        let formula = Formula::new(source)?;
        formula.check()?;
        Ok(formula)
    }
}

#[cfg(test)]
#[path = "formula_test.rs"]
mod formula_test;
