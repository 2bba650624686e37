//! Compiler and evaluator for single-expression arithmetic formulas.
//!
//! Source text is validated, tokenized, and converted to postfix form once
//! ([`compiler::compile`]); the resulting program can then be evaluated any
//! number of times against different variable bindings
//! ([`vm::Evaluator`]). Most callers only need [`api::Formula`].

pub mod api;
pub mod compiler;
pub mod parser;
pub mod stdlib;
pub mod vm;
