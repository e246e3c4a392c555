//! Async `select`.

use std::future::IntoFuture;

use futures::stream::{Stream, StreamExt};

/// One-to-one projection through an awaited selector. Elements are projected
/// one at a time, so output order is upstream order.
pub fn select<S, F, Fut>(source: S, mut selector: F) -> impl Stream<Item = Fut::Output>
where
    S: Stream,
    F: FnMut(&S::Item, usize) -> Fut,
    Fut: IntoFuture,
{
    let mut index = 0usize;
    source.then(move |item| {
        let at = index;
        index += 1;
        selector(&item, at).into_future()
    })
}
