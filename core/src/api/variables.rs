//! Call-site variable bindings.

use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use std::collections::BTreeMap;

/// A source of named values for one evaluation.
///
/// Bindings passed at the call site take precedence over constants defined
/// on the formula and over built-in constants.
pub trait Variables {
    fn lookup(&self, name: &str) -> Option<f64>;
}

/// No bindings.
impl Variables for () {
    fn lookup(&self, _name: &str) -> Option<f64> {
        None
    }
}

impl<K: AsRef<str>> Variables for [(K, f64)] {
    fn lookup(&self, name: &str) -> Option<f64> {
        self.iter()
            .find(|(key, _)| key.as_ref() == name)
            .map(|(_, value)| *value)
    }
}

impl<K: AsRef<str>, const N: usize> Variables for [(K, f64); N] {
    fn lookup(&self, name: &str) -> Option<f64> {
        self.as_slice().lookup(name)
    }
}

impl<K: AsRef<str>> Variables for Vec<(K, f64)> {
    fn lookup(&self, name: &str) -> Option<f64> {
        self.as_slice().lookup(name)
    }
}

impl<K, S> Variables for std::collections::HashMap<K, f64, S>
where
    K: Borrow<str> + Hash + Eq,
    S: BuildHasher,
{
    fn lookup(&self, name: &str) -> Option<f64> {
        self.get(name).copied()
    }
}

impl<K, S> Variables for hashbrown::HashMap<K, f64, S>
where
    K: Borrow<str> + Hash + Eq,
    S: BuildHasher,
{
    fn lookup(&self, name: &str) -> Option<f64> {
        self.get(name).copied()
    }
}

impl<K: Borrow<str> + Ord> Variables for BTreeMap<K, f64> {
    fn lookup(&self, name: &str) -> Option<f64> {
        self.get(name).copied()
    }
}

impl<V: Variables + ?Sized> Variables for &V {
    fn lookup(&self, name: &str) -> Option<f64> {
        (**self).lookup(name)
    }
}
