//! Async `order_by`.
//!
//! Buffers the whole upstream on the first poll, resolves every key with up to
//! `concurrency` key futures in flight (`buffered` keeps each key paired with
//! its element), then stable-sorts by `comparer` and yields.

use std::cmp::Ordering;
use std::future::IntoFuture;

use futures::stream::{self, Stream, StreamExt};
use lazyq_core::metrics;

pub fn order_by<S, F, Fut, K, C>(
    source: S,
    key: F,
    mut comparer: C,
    concurrency: usize,
) -> impl Stream<Item = S::Item>
where
    S: Stream,
    F: Fn(&S::Item) -> Fut,
    Fut: IntoFuture<Output = K>,
    C: FnMut(&K, &K) -> Ordering,
{
    let concurrency = concurrency.max(1);
    stream::once(async move {
        let buffer: Vec<S::Item> = source.collect().await;
        metrics::emit_sort_buffered(buffer.len(), concurrency);

        let key = &key;
        let mut keyed: Vec<(K, S::Item)> = stream::iter(buffer)
            .map(|item| {
                let pending = key(&item).into_future();
                async move { (pending.await, item) }
            })
            .buffered(concurrency)
            .collect()
            .await;

        keyed.sort_by(|a, b| comparer(&a.0, &b.0));
        stream::iter(keyed.into_iter().map(|(_, item)| item))
    })
    .flatten()
}
