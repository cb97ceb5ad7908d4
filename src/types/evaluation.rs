use std::fmt;
use std::time::Duration;

/// Detailed result of [`Rule::evaluate_detailed()`](super::rule::Rule::evaluate_detailed).
///
/// Carries the produced value, which branch produced it, and the wall-clock
/// duration of the evaluation.
#[derive(Debug, Clone)]
#[must_use]
pub struct Evaluation<T> {
    description: String,
    matched: bool,
    value: T,
    duration: Duration,
}

impl<T> Evaluation<T> {
    pub(crate) fn new(description: String, matched: bool, value: T, duration: Duration) -> Self {
        Self {
            description,
            matched,
            value,
            duration,
        }
    }

    /// Description of the evaluated rule.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// `true` if the predicate held and the match branch produced the value.
    #[must_use]
    pub fn matched(&self) -> bool {
        self.matched
    }

    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }

    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }

    /// Wall-clock duration of the evaluation.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl<T: fmt::Display> fmt::Display for Evaluation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let branch = if self.matched { "then" } else { "otherwise" };
        write!(
            f,
            "{} -> {} ({branch}, {:?})",
            self.description, self.value, self.duration
        )
    }
}
