//! Source trait + common interfaces.
//!
//! A `Sequence` is anything that can start a traversal. Container-backed
//! sequences restart from the first element on every call; one-shot sources
//! (generators) may hand out a single live traversal only. Operator nodes are
//! sequences too: each holds its upstream and wraps the upstream traversal in
//! an adapter from this crate.

/// One forward pass over a sequence.
pub type Traversal<T> = Box<dyn Iterator<Item = T> + Send>;

/// Trait that every source and operator node implements.
///
/// Invariants:
/// - `traverse` must not pull any element; work starts on the first `next()`.
/// - Two traversals never share per-pass state (seen-key sets, counters).
pub trait Sequence<T>: Send + Sync {
    fn traverse(&self) -> Traversal<T>;
}

/// Operator node built from a traversal factory.
pub struct FnSequence<F>(F);

impl<F> FnSequence<F> {
    pub fn new(factory: F) -> Self {
        Self(factory)
    }
}

impl<T, F> Sequence<T> for FnSequence<F>
where
    F: Fn() -> Traversal<T> + Send + Sync,
{
    fn traverse(&self) -> Traversal<T> {
        (self.0)()
    }
}

/// Erase an adapter chain into a [`Traversal`].
pub fn boxed<I>(iter: I) -> Traversal<I::Item>
where
    I: Iterator + Send + 'static,
{
    Box::new(iter)
}
