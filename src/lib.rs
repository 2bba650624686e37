//! Formula - compile once, evaluate many times
//!
//! # Overview
//!
//! A formula is a single arithmetic expression over numbers, named
//! variables, and unary functions, such as
//! `sin(pi/12)^2 + 0.65*(-8.32 + 9) + 3 / tan(pi/4)`. It is compiled once
//! into postfix form and can then be evaluated repeatedly with different
//! variable bindings, host-defined constants, and host-defined functions.
//!
//! # Quick Start
//!
//! ```
//! use formula::Formula;
//!
//! let mut formula = Formula::new("a * x^2 + b").unwrap();
//! formula.define_constant("a", 2.0);
//! formula.define_function("half", |x| x / 2.0);
//!
//! assert_eq!(formula.eval(&[("x", 3.0), ("b", 1.0)]).unwrap(), 19.0);
//!
//! // Positional values fill the variables that are not constants, in
//! // ascending name order: here `b`, then `x`.
//! assert_eq!(formula.eval_positional(&[1.0, 3.0]).unwrap(), 19.0);
//!
//! formula.assign("half(a) + b").unwrap();
//! assert_eq!(formula.eval(&[("b", 1.0)]).unwrap(), 2.0);
//! ```
//!
//! # Errors
//!
//! Every failure is an [`Error`] classified by an [`ErrorKind`]. Errors keep
//! the source they were raised for and, when possible, the location of the
//! offending character or token, so they can be rendered with
//! [`render_error_to`]:
//!
//! ```
//! use formula::{ErrorKind, Formula};
//!
//! let err = Formula::new("2+$3").unwrap_err();
//! assert_eq!(err.kind, ErrorKind::NotSupportedCharacter('$'));
//! ```

// Error rendering utilities
pub mod error_renderer;
pub use error_renderer::{CharSet, RenderConfig, render_error, render_error_to};

// Re-export public API from formula_core
pub use formula_core::api::{
    Error, ErrorKind, EvalOptions, EvalOptionsOverride, Formula, PromptError, Variables,
};

// Lower layers, for callers that drive compilation and evaluation directly.
pub use formula_core::{compiler, parser, stdlib, vm};
