use std::fmt;
use std::sync::Arc;

use super::predicate::Predicate;
use crate::{RuleError, Value};

pub(crate) type ExtractFn<E> = dyn Fn(&Value) -> Result<E, RuleError> + Send + Sync;
pub(crate) type ProduceFn<E, T> = dyn Fn(&E) -> T + Send + Sync;

/// The four closures of a rule: extract, test, produce on match, produce on
/// no match.
///
/// Obtained only as the terminal state of the builder chain, so every
/// definition has both branches.
pub struct RuleDefinition<E, T> {
    pub(crate) extract: Arc<ExtractFn<E>>,
    pub(crate) test: Predicate<E>,
    pub(crate) on_match: Arc<ProduceFn<E, T>>,
    pub(crate) on_no_match: Arc<ProduceFn<E, T>>,
}

impl<E, T> RuleDefinition<E, T> {
    pub(crate) fn new(
        extract: Arc<ExtractFn<E>>,
        test: Predicate<E>,
        on_match: Arc<ProduceFn<E, T>>,
        on_no_match: Arc<ProduceFn<E, T>>,
    ) -> Self {
        Self {
            extract,
            test,
            on_match,
            on_no_match,
        }
    }

    /// The matching predicate.
    #[must_use]
    pub fn predicate(&self) -> &Predicate<E> {
        &self.test
    }
}

impl<E: 'static> RuleDefinition<E, bool> {
    /// Run `action` whenever the predicate does not hold.
    ///
    /// The action runs before the previous no-match behavior, whose return
    /// value is kept. Repeated calls layer: the latest action runs first.
    #[must_use]
    pub fn otherwise_do<F>(self, action: F) -> Self
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        let RuleDefinition {
            extract,
            test,
            on_match,
            on_no_match: previous,
        } = self;
        Self::new(
            extract,
            test,
            on_match,
            Arc::new(move |e: &E| {
                action(e);
                previous(e)
            }),
        )
    }
}

impl<E, T> Clone for RuleDefinition<E, T> {
    fn clone(&self) -> Self {
        Self {
            extract: Arc::clone(&self.extract),
            test: self.test.clone(),
            on_match: Arc::clone(&self.on_match),
            on_no_match: Arc::clone(&self.on_no_match),
        }
    }
}

impl<E, T> fmt::Debug for RuleDefinition<E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleDefinition")
            .field("test", &self.test)
            .finish_non_exhaustive()
    }
}
