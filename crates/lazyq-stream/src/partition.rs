//! Async `skip` / `take`.

use futures::stream::{self, Stream, StreamExt};

pub fn skip<S>(source: S, count: usize) -> impl Stream<Item = S::Item>
where
    S: Stream + Unpin,
{
    stream::unfold((source, count), |(mut source, mut remaining)| async move {
        while remaining > 0 {
            remaining -= 1;
            source.next().await?;
        }
        let item = source.next().await?;
        Some((item, (source, 0)))
    })
}

/// At most `count` elements; the upstream is not polled once the budget is
/// spent.
pub fn take<S>(source: S, count: usize) -> impl Stream<Item = S::Item>
where
    S: Stream + Unpin,
{
    stream::unfold((source, count), |(mut source, remaining)| async move {
        if remaining == 0 {
            return None;
        }
        let item = source.next().await?;
        Some((item, (source, remaining - 1)))
    })
}
