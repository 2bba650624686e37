//! Math Package
//!
//! Unary functions and constants available to every formula.
//!
//! Constants: pi, PI, e
//! Functions: sin, cos, tan, csc, sec, cot and their inverses, the
//!            hyperbolic family and its inverses, exp, log, log10, log2,
//!            sqrt, abs, sign (plus aliases, see [`FUNCTIONS`]).
//!
//! Functions with a restricted domain check their operand first and fail
//! with [`ErrorKind::OutOfRange`] naming the function, the operand and the
//! domain.

use crate::api::ErrorKind;

/// Threshold below which a magnitude counts as zero.
pub const ZERO_EPSILON: f64 = 1e-6;

/// A domain-checked unary built-in.
pub type BuiltinFn = fn(f64) -> Result<f64, ErrorKind>;

pub fn is_zero(x: f64) -> bool {
    x.abs() < ZERO_EPSILON
}

#[inline]
fn require(
    holds: bool,
    function: &'static str,
    value: f64,
    domain: &'static str,
) -> Result<(), ErrorKind> {
    if holds {
        Ok(())
    } else {
        Err(ErrorKind::OutOfRange {
            function,
            value,
            domain,
        })
    }
}

// ============================================================================
// Constants
// ============================================================================

/// π computed as 4·atan(1).
pub fn pi() -> f64 {
    4.0 * 1f64.atan()
}

/// Euler's number computed as exp(1).
pub fn e() -> f64 {
    1f64.exp()
}

pub const CONSTANTS: &[(&str, fn() -> f64)] = &[("pi", pi), ("PI", pi), ("e", e)];

// ============================================================================
// Trigonometry
// ============================================================================

fn sin(x: f64) -> Result<f64, ErrorKind> {
    Ok(x.sin())
}

fn cos(x: f64) -> Result<f64, ErrorKind> {
    Ok(x.cos())
}

fn tan(x: f64) -> Result<f64, ErrorKind> {
    require(!is_zero(x.cos()), "tan", x, "cos(x) != 0")?;
    Ok(x.tan())
}

fn csc(x: f64) -> Result<f64, ErrorKind> {
    require(!is_zero(x.sin()), "csc", x, "sin(x) != 0")?;
    Ok(1.0 / x.sin())
}

fn sec(x: f64) -> Result<f64, ErrorKind> {
    require(!is_zero(x.cos()), "sec", x, "cos(x) != 0")?;
    Ok(1.0 / x.cos())
}

fn cot(x: f64) -> Result<f64, ErrorKind> {
    require(!is_zero(x.sin()), "cot", x, "sin(x) != 0")?;
    Ok(x.cos() / x.sin())
}

fn asin(x: f64) -> Result<f64, ErrorKind> {
    require((-1.0..=1.0).contains(&x), "asin", x, "x >= -1 && x <= 1")?;
    Ok(x.asin())
}

fn acos(x: f64) -> Result<f64, ErrorKind> {
    require((-1.0..=1.0).contains(&x), "acos", x, "x >= -1 && x <= 1")?;
    Ok(x.acos())
}

fn atan(x: f64) -> Result<f64, ErrorKind> {
    Ok(x.atan())
}

fn acsc(x: f64) -> Result<f64, ErrorKind> {
    require(x <= -1.0 || x >= 1.0, "acsc", x, "x <= -1 || x >= 1")?;
    Ok((1.0 / x).asin())
}

fn asec(x: f64) -> Result<f64, ErrorKind> {
    require(x <= -1.0 || x >= 1.0, "asec", x, "x <= -1 || x >= 1")?;
    Ok((1.0 / x).acos())
}

/// Inverse cotangent with range (0, π).
fn acot(x: f64) -> Result<f64, ErrorKind> {
    Ok(if x < 0.0 {
        pi() + (1.0 / x).atan()
    } else if x > 0.0 {
        (1.0 / x).atan()
    } else {
        pi() / 2.0
    })
}

// ============================================================================
// Hyperbolic functions
// ============================================================================

fn sinh(x: f64) -> Result<f64, ErrorKind> {
    Ok(x.sinh())
}

fn cosh(x: f64) -> Result<f64, ErrorKind> {
    Ok(x.cosh())
}

fn tanh(x: f64) -> Result<f64, ErrorKind> {
    Ok(x.tanh())
}

fn csch(x: f64) -> Result<f64, ErrorKind> {
    require(!is_zero(x), "csch", x, "x != 0")?;
    Ok(1.0 / x.sinh())
}

fn sech(x: f64) -> Result<f64, ErrorKind> {
    Ok(1.0 / x.cosh())
}

fn coth(x: f64) -> Result<f64, ErrorKind> {
    require(!is_zero(x), "coth", x, "x != 0")?;
    Ok(1.0 / x.tanh())
}

fn asinh(x: f64) -> Result<f64, ErrorKind> {
    Ok(x.asinh())
}

fn acosh(x: f64) -> Result<f64, ErrorKind> {
    require(x >= 1.0, "acosh", x, "x >= 1")?;
    Ok(x.acosh())
}

fn atanh(x: f64) -> Result<f64, ErrorKind> {
    require(x > -1.0 && x < 1.0, "atanh", x, "x > -1 && x < 1")?;
    Ok(x.atanh())
}

fn acsch(x: f64) -> Result<f64, ErrorKind> {
    require(!is_zero(x), "acsch", x, "x != 0")?;
    Ok((1.0 / x).asinh())
}

fn asech(x: f64) -> Result<f64, ErrorKind> {
    require(x > 0.0 && x <= 1.0, "asech", x, "x > 0 && x <= 1")?;
    Ok(((1.0 + (1.0 - x * x).sqrt()) / x).ln())
}

fn acoth(x: f64) -> Result<f64, ErrorKind> {
    require(x < -1.0 || x > 1.0, "acoth", x, "x < -1 || x > 1")?;
    Ok(0.5 * ((x + 1.0) / (x - 1.0)).ln())
}

// ============================================================================
// Exponentials and logarithms
// ============================================================================

fn exp(x: f64) -> Result<f64, ErrorKind> {
    Ok(x.exp())
}

fn log(x: f64) -> Result<f64, ErrorKind> {
    require(x > 0.0, "log", x, "x > 0")?;
    Ok(x.ln())
}

fn log10(x: f64) -> Result<f64, ErrorKind> {
    require(x > 0.0, "log10", x, "x > 0")?;
    Ok(x.log10())
}

fn log2(x: f64) -> Result<f64, ErrorKind> {
    require(x > 0.0, "log2", x, "x > 0")?;
    Ok(x.log2())
}

// ============================================================================
// Miscellaneous
// ============================================================================

fn sqrt(x: f64) -> Result<f64, ErrorKind> {
    require(x >= 0.0, "sqrt", x, "x >= 0")?;
    Ok(x.sqrt())
}

fn abs(x: f64) -> Result<f64, ErrorKind> {
    Ok(x.abs())
}

/// -1, 0 or 1. Unlike `f64::signum`, zero maps to zero.
fn sign(x: f64) -> Result<f64, ErrorKind> {
    Ok(if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    })
}

/// Every built-in function under every name it answers to.
pub const FUNCTIONS: &[(&str, BuiltinFn)] = &[
    ("sin", sin),
    ("cos", cos),
    ("tan", tan),
    ("csc", csc),
    ("sec", sec),
    ("cot", cot),
    ("asin", asin),
    ("acos", acos),
    ("atan", atan),
    ("acsc", acsc),
    ("asec", asec),
    ("acot", acot),
    ("arcsin", asin),
    ("arccos", acos),
    ("arctan", atan),
    ("arccsc", acsc),
    ("arcsec", asec),
    ("arccot", acot),
    ("sinh", sinh),
    ("cosh", cosh),
    ("tanh", tanh),
    ("csch", csch),
    ("sech", sech),
    ("coth", coth),
    ("asinh", asinh),
    ("acosh", acosh),
    ("atanh", atanh),
    ("acsch", acsch),
    ("asech", asech),
    ("acoth", acoth),
    ("arcsinh", asinh),
    ("arccosh", acosh),
    ("arctanh", atanh),
    ("arccsch", acsch),
    ("arcsech", asech),
    ("arccoth", acoth),
    ("exp", exp),
    ("log", log),
    ("ln", log),
    ("log10", log10),
    ("lg", log10),
    ("log2", log2),
    ("sqrt", sqrt),
    ("abs", abs),
    ("fabs", abs),
    ("sign", sign),
    ("sgn", sign),
];

#[cfg(test)]
#[path = "math_test.rs"]
mod math_test;
