//! Execution of compiled programs.
//!
//! The [`Evaluator`] reduces a postfix program to a value; [`check`] walks
//! the same program and reports structural problems without computing
//! anything.

mod checker;
mod evaluator;

pub use checker::check;
pub use evaluator::{Evaluator, UserFunction};
