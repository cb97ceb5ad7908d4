//! Typestate builder chain: `given` -> `expect`/`and`/`or` -> `then` -> `otherwise`.
//!
//! Each stage is its own type, so a chain that skips a stage (for example
//! calling `otherwise` before `then`) does not compile. Only
//! [`RuleDefinition`] is accepted by [`rule`](crate::rule), which means a chain
//! ending at [`Then`] without an `otherwise` is rejected too. The
//! `always_return`, `always_do` and `then_do` shortcuts synthesize the missing
//! branch.

use std::sync::Arc;

use crate::types::{ExtractFn, ProduceFn};
use crate::{Predicate, RuleDefinition, RuleError, Value};

/// Start of the chain, handed to the closure passed to [`rule`](crate::rule).
#[derive(Debug)]
pub struct Entry {
    _private: (),
}

/// The input has been narrowed to `E`; a condition or shortcut comes next.
pub struct Given<E> {
    extract: Arc<ExtractFn<E>>,
}

/// A condition has been set; more conditions or the match branch come next.
pub struct When<E> {
    extract: Arc<ExtractFn<E>>,
    test: Predicate<E>,
}

/// The match branch has been set; the no-match branch comes next.
pub struct Then<E, T> {
    extract: Arc<ExtractFn<E>>,
    test: Predicate<E>,
    on_match: Arc<ProduceFn<E, T>>,
}

impl Entry {
    pub(crate) fn new() -> Self {
        Self { _private: () }
    }

    /// Narrow the raw input into the working value `E`.
    ///
    /// `extract` runs exactly once per invocation, before any test.
    /// Ready-made extractors live in [`crate::extract`].
    pub fn given<E, F>(self, extract: F) -> Given<E>
    where
        F: Fn(&Value) -> Result<E, RuleError> + Send + Sync + 'static,
    {
        Given {
            extract: Arc::new(extract),
        }
    }
}

impl<E: 'static> Given<E> {
    /// Set the matching predicate.
    pub fn expect<F>(self, test: F) -> When<E>
    where
        F: Fn(&E) -> bool + Send + Sync + 'static,
    {
        When {
            extract: self.extract,
            test: Predicate::leaf(test),
        }
    }

    /// Alias of [`expect`](Self::expect).
    pub fn and<F>(self, test: F) -> When<E>
    where
        F: Fn(&E) -> bool + Send + Sync + 'static,
    {
        self.expect(test)
    }

    /// Same as [`expect`](Self::expect), reads better with a method path:
    /// `.whose(Order::is_paid)`.
    pub fn whose<F>(self, test: F) -> When<E>
    where
        F: Fn(&E) -> bool + Send + Sync + 'static,
    {
        self.expect(test)
    }

    /// Always match and return `produce(e)`.
    pub fn always_return<T, F>(self, produce: F) -> RuleDefinition<E, T>
    where
        F: Fn(&E) -> T + Send + Sync + 'static,
    {
        let produce: Arc<ProduceFn<E, T>> = Arc::new(produce);
        RuleDefinition::new(
            self.extract,
            Predicate::always(),
            Arc::clone(&produce),
            produce,
        )
    }

    /// Always run `action` and return `true`.
    pub fn always_do<F>(self, action: F) -> RuleDefinition<E, bool>
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        self.always_return(move |e: &E| {
            action(e);
            true
        })
    }
}

impl<E: 'static> When<E> {
    /// `previous && test`. `test` only runs when the previous predicate held.
    pub fn and<F>(self, test: F) -> When<E>
    where
        F: Fn(&E) -> bool + Send + Sync + 'static,
    {
        When {
            extract: self.extract,
            test: self.test.and(Predicate::leaf(test)),
        }
    }

    /// `previous || test`. `test` only runs when the previous predicate failed.
    pub fn or<F>(self, test: F) -> When<E>
    where
        F: Fn(&E) -> bool + Send + Sync + 'static,
    {
        When {
            extract: self.extract,
            test: self.test.or(Predicate::leaf(test)),
        }
    }

    /// The predicate accumulated so far.
    #[must_use]
    pub fn predicate(&self) -> &Predicate<E> {
        &self.test
    }

    /// Set the value produced when the predicate holds.
    pub fn then_return<T, F>(self, produce: F) -> Then<E, T>
    where
        F: Fn(&E) -> T + Send + Sync + 'static,
    {
        Then {
            extract: self.extract,
            test: self.test,
            on_match: Arc::new(produce),
        }
    }

    /// Alias of [`then_return`](Self::then_return).
    pub fn then<T, F>(self, produce: F) -> Then<E, T>
    where
        F: Fn(&E) -> T + Send + Sync + 'static,
    {
        self.then_return(produce)
    }

    /// Run `action` and return `true` when the predicate holds; return
    /// `false` otherwise. Extend the no-match side with
    /// [`RuleDefinition::otherwise_do`].
    pub fn then_do<F>(self, action: F) -> RuleDefinition<E, bool>
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        RuleDefinition::new(
            self.extract,
            self.test,
            Arc::new(move |e: &E| {
                action(e);
                true
            }),
            Arc::new(|_: &E| false),
        )
    }
}

impl<E: 'static, T: 'static> Then<E, T> {
    /// Set the value produced when the predicate does not hold.
    pub fn otherwise_return<F>(self, produce: F) -> RuleDefinition<E, T>
    where
        F: Fn(&E) -> T + Send + Sync + 'static,
    {
        RuleDefinition::new(self.extract, self.test, self.on_match, Arc::new(produce))
    }

    /// Alias of [`otherwise_return`](Self::otherwise_return).
    pub fn otherwise<F>(self, produce: F) -> RuleDefinition<E, T>
    where
        F: Fn(&E) -> T + Send + Sync + 'static,
    {
        self.otherwise_return(produce)
    }
}
