use std::fmt;

use super::definition::RuleDefinition;
use super::evaluation::Evaluation;
use crate::builder::Entry;
use crate::{RuleError, Value};

/// A named, immutable given/when/then/otherwise rule.
///
/// Created with [`rule()`]. Invoking it runs the extractor once, then the
/// predicate, then exactly one of the two branches. Rules hold no mutable
/// state and can be shared between threads (wrap in `Arc` or clone; clones
/// share the underlying closures).
///
/// # Example
///
/// ```
/// use gwt::{any_string, rule, Value};
///
/// let greet = rule("greet test users", |r| {
///     r.given(any_string())
///         .expect(|s| s == "test")
///         .then(|_| "Hello")
///         .otherwise(|_| "Good bye")
/// });
///
/// assert_eq!(greet.invoke(&Value::from("test")), Ok("Hello"));
/// assert_eq!(greet.invoke(&Value::from("nothing")), Ok("Good bye"));
/// ```
pub struct Rule<E, T> {
    description: String,
    definition: RuleDefinition<E, T>,
}

/// Build a rule. `build` receives the start of the chain and must return a
/// complete [`RuleDefinition`].
pub fn rule<E, T>(
    description: &str,
    build: impl FnOnce(Entry) -> RuleDefinition<E, T>,
) -> Rule<E, T> {
    Rule {
        description: description.to_owned(),
        definition: build(Entry::new()),
    }
}

impl<E, T> Rule<E, T> {
    /// Human-readable description. Never consulted during evaluation.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn definition(&self) -> &RuleDefinition<E, T> {
        &self.definition
    }

    /// Evaluate the rule against `input`.
    ///
    /// # Errors
    ///
    /// Returns the [`RuleError`] raised by the extractor. The predicate and
    /// the branches do not run in that case.
    pub fn invoke(&self, input: &Value) -> Result<T, RuleError> {
        crate::evaluate::invoke(&self.description, &self.definition, input)
    }

    /// Run the extractor and predicate only, without producing a result.
    ///
    /// # Errors
    ///
    /// Returns the [`RuleError`] raised by the extractor.
    pub fn matches(&self, input: &Value) -> Result<bool, RuleError> {
        crate::evaluate::matches(&self.description, &self.definition, input)
    }

    /// Evaluate with diagnostics: which branch ran and how long it took.
    ///
    /// # Errors
    ///
    /// Returns the [`RuleError`] raised by the extractor.
    pub fn evaluate_detailed(&self, input: &Value) -> Result<Evaluation<T>, RuleError> {
        crate::evaluate::evaluate_detailed(&self.description, &self.definition, input)
    }
}

impl<E, T> Clone for Rule<E, T> {
    fn clone(&self) -> Self {
        Self {
            description: self.description.clone(),
            definition: self.definition.clone(),
        }
    }
}

impl<E, T> fmt::Debug for Rule<E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("description", &self.description)
            .field("definition", &self.definition)
            .finish()
    }
}

impl<E, T> fmt::Display for Rule<E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rule({}: {})", self.description, self.definition.predicate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{any_int, any_string};

    #[test]
    fn description_is_kept() {
        let r = rule("positive", |r| {
            r.given(any_int()).expect(|n| *n > 0).then(|_| 1).otherwise(|_| -1)
        });
        assert_eq!(r.description(), "positive");
        assert_eq!(r.to_string(), "Rule(positive: p1)");
    }

    #[test]
    fn clones_share_behavior() {
        let r = rule("len", |r| r.given(any_string()).always_return(|s| s.len()));
        let c = r.clone();
        assert_eq!(c.invoke(&Value::from("abcd")), Ok(4));
        assert_eq!(r.invoke(&Value::from("abcd")), Ok(4));
    }

    #[test]
    fn matches_does_not_run_branches() {
        let r = rule("never produce", |r| {
            r.given(any_int())
                .expect(|n| *n % 2 == 0)
                .then(|_| -> i32 { panic!("branch ran") })
                .otherwise(|_| panic!("branch ran"))
        });
        assert_eq!(r.matches(&Value::Int(4)), Ok(true));
        assert_eq!(r.matches(&Value::Int(3)), Ok(false));
    }

    #[test]
    fn rule_is_send_and_sync() {
        fn assert_send_sync<S: Send + Sync>(_: &S) {}
        let r = rule("s", |r| r.given(any_string()).always_return(|s| s.clone()));
        assert_send_sync(&r);
    }
}
