//! Public API for compiling and evaluating formulas.
//!
//! # Example
//!
//! ```
//! use formula_core::api::{ErrorKind, EvalOptionsOverride, Formula};
//!
//! let formula = Formula::new("sin(pi/12)^2 + 0.65*(-8.32 + 9) + 3 / tan(pi/4)").unwrap();
//! let value = formula.eval(&()).unwrap();
//! assert!((value - 3.5089873).abs() < 1e-6);
//!
//! // Named bindings, in any container implementing `Variables`.
//! let formula = Formula::new("1/x").unwrap();
//! assert_eq!(formula.eval(&[("x", 4.0)]).unwrap(), 0.25);
//! assert_eq!(
//!     formula.eval(&[("x", 0.0)]).unwrap_err().kind,
//!     ErrorKind::DividedByZero
//! );
//!
//! // Per-call option overrides.
//! let tiny = formula
//!     .eval_with(EvalOptionsOverride { epsilon: Some(1e-12), ..Default::default() }, &[("x", 1e-9)])
//!     .unwrap();
//! assert!(tiny > 1e8);
//! ```

pub mod error;
pub mod formula;
pub mod options;
pub mod variables;

pub use error::{Error, ErrorKind, PromptError};
pub use formula::Formula;
pub use options::{EvalOptions, EvalOptionsOverride};
pub use variables::Variables;
