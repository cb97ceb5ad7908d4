use std::fmt;
use std::ops::Index;

use super::rule::Rule;

/// An ordered, fixed-size group of rules.
///
/// A rule set has no evaluation semantics of its own: there is no priority,
/// no conflict resolution and no shared state. Callers iterate and decide
/// what a match means for them.
///
/// # Example
///
/// ```
/// use gwt::{any_int, rule, RuleSet, Value};
///
/// let rules: RuleSet<i32, &str> = [
///     rule("negative", |r| {
///         r.given(any_int()).expect(|n| *n < 0).then(|_| "neg").otherwise(|_| "")
///     }),
///     rule("zero", |r| {
///         r.given(any_int()).expect(|n| *n == 0).then(|_| "zero").otherwise(|_| "")
///     }),
/// ]
/// .into_iter()
/// .collect();
///
/// let input = Value::Int(0);
/// let first = rules
///     .iter()
///     .find(|r| r.matches(&input).unwrap_or(false))
///     .map(|r| r.description());
/// assert_eq!(first, Some("zero"));
/// ```
pub struct RuleSet<E, T> {
    rules: Box<[Rule<E, T>]>,
}

impl<E, T> RuleSet<E, T> {
    #[must_use]
    pub fn new(rules: Vec<Rule<E, T>>) -> Self {
        Self {
            rules: rules.into_boxed_slice(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Rule<E, T>> {
        self.rules.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule<E, T>> {
        self.rules.iter()
    }

    /// Rule descriptions in order.
    #[must_use]
    pub fn descriptions(&self) -> Vec<&str> {
        self.rules.iter().map(Rule::description).collect()
    }
}

impl<E, T> Clone for RuleSet<E, T> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
        }
    }
}

impl<E, T> Index<usize> for RuleSet<E, T> {
    type Output = Rule<E, T>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.rules[index]
    }
}

impl<E, T> FromIterator<Rule<E, T>> for RuleSet<E, T> {
    fn from_iter<I: IntoIterator<Item = Rule<E, T>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<E, T> IntoIterator for RuleSet<E, T> {
    type Item = Rule<E, T>;
    type IntoIter = std::vec::IntoIter<Rule<E, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.into_vec().into_iter()
    }
}

impl<'a, E, T> IntoIterator for &'a RuleSet<E, T> {
    type Item = &'a Rule<E, T>;
    type IntoIter = std::slice::Iter<'a, Rule<E, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl<E, T> fmt::Debug for RuleSet<E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rules.iter()).finish()
    }
}

impl<E, T> fmt::Display for RuleSet<E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RuleSet({} rules)", self.rules.len())
    }
}
