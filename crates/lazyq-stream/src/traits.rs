//! Async source trait.
//!
//! Mirrors `lazyq_operators::Sequence`: `traverse` hands out a fresh stream
//! and must not poll anything itself.

use futures::stream::BoxStream;

/// One forward pass over an async sequence.
pub type SequenceStream<T> = BoxStream<'static, T>;

pub trait AsyncSequence<T>: Send + Sync {
    fn traverse(&self) -> SequenceStream<T>;
}
