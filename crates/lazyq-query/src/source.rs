//! Source adapters: how containers, generators and streams become sequences.
//!
//! Container-backed sources ([`VecSource`]) restart on every traversal.
//! Generator- and stream-backed sources ([`OnceSource`], [`OnceStreamSource`])
//! hand out their single traversal once; any later traversal yields nothing
//! and emits a warning through the tracing hooks. Re-traversing a one-shot
//! source is the caller's responsibility.

use std::sync::{Arc, Mutex, PoisonError};

use futures::stream::{self, Stream, StreamExt};

use lazyq_core::metrics;
use lazyq_operators::traits::{boxed, Sequence, Traversal};
use lazyq_stream::traits::{AsyncSequence, SequenceStream};

/// Shared, immutable element buffer; each traversal clones elements out.
pub struct VecSource<T> {
    items: Arc<[T]>,
}

impl<T> VecSource<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: items.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn cursor(&self) -> impl Iterator<Item = T> + Send + 'static
    where
        T: Clone + Send + Sync + 'static,
    {
        let items = Arc::clone(&self.items);
        (0..items.len()).map(move |i| items[i].clone())
    }
}

impl<T: Clone + Send + Sync + 'static> Sequence<T> for VecSource<T> {
    fn traverse(&self) -> Traversal<T> {
        boxed(self.cursor())
    }
}

impl<T: Clone + Send + Sync + 'static> AsyncSequence<T> for VecSource<T> {
    fn traverse(&self) -> SequenceStream<T> {
        stream::iter(self.cursor()).boxed()
    }
}

/// Single-use iterator (a generator). See the module docs for re-traversal.
pub struct OnceSource<I> {
    inner: Mutex<Option<I>>,
}

impl<I> OnceSource<I> {
    pub fn new(iter: I) -> Self {
        Self {
            inner: Mutex::new(Some(iter)),
        }
    }
}

impl<T, I> Sequence<T> for OnceSource<I>
where
    T: Send + 'static,
    I: Iterator<Item = T> + Send + 'static,
{
    fn traverse(&self) -> Traversal<T> {
        let taken = self.inner.lock().unwrap_or_else(PoisonError::into_inner).take();
        match taken {
            Some(iter) => Box::new(iter),
            None => {
                metrics::emit_exhausted_source("iterator");
                Box::new(std::iter::empty())
            }
        }
    }
}

/// Single-use async stream.
pub struct OnceStreamSource<S> {
    inner: Mutex<Option<S>>,
}

impl<S> OnceStreamSource<S> {
    pub fn new(stream: S) -> Self {
        Self {
            inner: Mutex::new(Some(stream)),
        }
    }
}

impl<T, S> AsyncSequence<T> for OnceStreamSource<S>
where
    T: Send + 'static,
    S: Stream<Item = T> + Send + 'static,
{
    fn traverse(&self) -> SequenceStream<T> {
        let taken = self.inner.lock().unwrap_or_else(PoisonError::into_inner).take();
        match taken {
            Some(stream) => stream.boxed(),
            None => {
                metrics::emit_exhausted_source("stream");
                stream::empty().boxed()
            }
        }
    }
}

/// Sync sequence seen through the async interface: a pass-through stream
/// that never actually suspends.
pub struct BridgeSource<T> {
    inner: Arc<dyn Sequence<T>>,
}

impl<T> BridgeSource<T> {
    pub fn new(inner: Arc<dyn Sequence<T>>) -> Self {
        Self { inner }
    }
}

impl<T: Send + 'static> AsyncSequence<T> for BridgeSource<T> {
    fn traverse(&self) -> SequenceStream<T> {
        stream::iter(self.inner.traverse()).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_source_restarts() {
        let src = VecSource::new(vec![1, 2, 3]);
        let a: Vec<_> = Sequence::traverse(&src).collect();
        let b: Vec<_> = Sequence::traverse(&src).collect();
        assert_eq!(a, b);
        assert_eq!(src.len(), 3);
    }

    #[test]
    fn test_once_source_second_traversal_is_empty() {
        let src = OnceSource::new(vec![1, 2].into_iter());
        assert_eq!(src.traverse().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(src.traverse().count(), 0);
    }

    #[tokio::test]
    async fn test_once_stream_source() {
        let src = OnceStreamSource::new(stream::iter([7, 8]));
        assert_eq!(src.traverse().collect::<Vec<_>>().await, vec![7, 8]);
        assert!(src.traverse().collect::<Vec<i32>>().await.is_empty());
    }
}
