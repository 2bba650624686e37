//! Built-in registry.
//!
//! Two read-only tables shared by every formula in the process: unary
//! functions and named constants. Both are built once on first use and never
//! change afterwards, so lookups need no synchronization. User-defined
//! functions and constants registered on a formula shadow these entries.

use hashbrown::HashMap;
use lazy_static::lazy_static;

pub mod math;

pub use math::{BuiltinFn, ZERO_EPSILON, is_zero};

lazy_static! {
    static ref BUILTIN_FUNCTIONS: HashMap<&'static str, BuiltinFn> =
        math::FUNCTIONS.iter().copied().collect();

    static ref BUILTIN_CONSTANTS: HashMap<&'static str, f64> = math::CONSTANTS
        .iter()
        .map(|(name, value)| (*name, value()))
        .collect();
}

/// Looks up a built-in function by name.
pub fn function(name: &str) -> Option<BuiltinFn> {
    BUILTIN_FUNCTIONS.get(name).copied()
}

/// Looks up a built-in constant by name.
pub fn constant(name: &str) -> Option<f64> {
    BUILTIN_CONSTANTS.get(name).copied()
}

/// Names of all built-in functions, in no particular order.
pub fn function_names() -> impl Iterator<Item = &'static str> {
    BUILTIN_FUNCTIONS.keys().copied()
}

/// Names of all built-in constants, in no particular order.
pub fn constant_names() -> impl Iterator<Item = &'static str> {
    BUILTIN_CONSTANTS.keys().copied()
}
