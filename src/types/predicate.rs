use std::fmt;
use std::sync::Arc;

type TestFn<E> = dyn Fn(&E) -> bool + Send + Sync;

/// Boolean condition over a rule's working value.
///
/// Built by the `expect`/`and`/`or` stages of the builder chain. Composition
/// is left-associative in the order stages were appended, and both `And` and
/// `Or` short-circuit.
pub enum Predicate<E> {
    Leaf(Arc<TestFn<E>>),
    And(Box<Predicate<E>>, Box<Predicate<E>>),
    Or(Box<Predicate<E>>, Box<Predicate<E>>),
}

impl<E> Predicate<E> {
    pub fn leaf<F>(test: F) -> Self
    where
        F: Fn(&E) -> bool + Send + Sync + 'static,
    {
        Predicate::Leaf(Arc::new(test))
    }

    /// A predicate that holds for every value.
    #[must_use]
    pub fn always() -> Self
    where
        E: 'static,
    {
        Predicate::leaf(|_| true)
    }

    #[must_use]
    pub fn and(self, other: Predicate<E>) -> Predicate<E> {
        Predicate::And(Box::new(self), Box::new(other))
    }

    #[must_use]
    pub fn or(self, other: Predicate<E>) -> Predicate<E> {
        Predicate::Or(Box::new(self), Box::new(other))
    }

    pub fn test(&self, value: &E) -> bool {
        match self {
            Predicate::Leaf(f) => f(value),
            Predicate::And(a, b) => a.test(value) && b.test(value),
            Predicate::Or(a, b) => a.test(value) || b.test(value),
        }
    }

    /// Number of leaf tests in the tree.
    #[must_use]
    pub fn leaves(&self) -> usize {
        match self {
            Predicate::Leaf(_) => 1,
            Predicate::And(a, b) | Predicate::Or(a, b) => a.leaves() + b.leaves(),
        }
    }

    fn fmt_numbered(&self, f: &mut fmt::Formatter<'_>, next: &mut usize) -> fmt::Result {
        match self {
            Predicate::Leaf(_) => {
                *next += 1;
                write!(f, "p{next}")
            }
            Predicate::And(a, b) => {
                write!(f, "(")?;
                a.fmt_numbered(f, next)?;
                write!(f, " AND ")?;
                b.fmt_numbered(f, next)?;
                write!(f, ")")
            }
            Predicate::Or(a, b) => {
                write!(f, "(")?;
                a.fmt_numbered(f, next)?;
                write!(f, " OR ")?;
                b.fmt_numbered(f, next)?;
                write!(f, ")")
            }
        }
    }
}

impl<E> Clone for Predicate<E> {
    fn clone(&self) -> Self {
        match self {
            Predicate::Leaf(f) => Predicate::Leaf(Arc::clone(f)),
            Predicate::And(a, b) => Predicate::And(a.clone(), b.clone()),
            Predicate::Or(a, b) => Predicate::Or(a.clone(), b.clone()),
        }
    }
}

/// Leaves are numbered `p1`, `p2`, ... in the order they were appended.
impl<E> fmt::Display for Predicate<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut next = 0;
        self.fmt_numbered(f, &mut next)
    }
}

impl<E> fmt::Debug for Predicate<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Predicate({self})")
    }
}
