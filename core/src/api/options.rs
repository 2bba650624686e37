//! Evaluation options.
//!
//! A [`Formula`](super::Formula) carries default [`EvalOptions`]; a single
//! evaluation can override any subset of them with an
//! [`EvalOptionsOverride`].

use crate::stdlib::ZERO_EPSILON;

#[derive(Debug, Clone, PartialEq)]
pub struct EvalOptions {
    /// Divisors (and bases raised to a negative power) whose magnitude is
    /// below this value are treated as zero.
    pub epsilon: f64,

    /// Return exactly `0.0` when the magnitude of the result is at most
    /// `epsilon`.
    pub snap_to_zero: bool,
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self {
            epsilon: ZERO_EPSILON,
            snap_to_zero: true,
        }
    }
}

impl EvalOptions {
    /// Replaces every field that is set in `other`.
    pub fn override_with(&mut self, other: &EvalOptionsOverride) {
        if let Some(epsilon) = other.epsilon {
            self.epsilon = epsilon;
        }
        if let Some(snap_to_zero) = other.snap_to_zero {
            self.snap_to_zero = snap_to_zero;
        }
    }
}

/// Per-evaluation changes to [`EvalOptions`]. Unset fields keep the
/// formula's defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EvalOptionsOverride {
    pub epsilon: Option<f64>,
    pub snap_to_zero: Option<bool>,
}
