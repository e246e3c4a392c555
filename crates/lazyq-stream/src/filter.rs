//! Async `where`.

use std::future::IntoFuture;

use futures::stream::{self, Stream, StreamExt};

/// Keep elements whose awaited predicate is true. `index` counts upstream
/// elements, rejected ones included.
#[doc(alias = "where")]
pub fn filter<S, P, Fut>(source: S, predicate: P) -> impl Stream<Item = S::Item>
where
    S: Stream + Unpin,
    P: FnMut(&S::Item, usize) -> Fut,
    Fut: IntoFuture<Output = bool>,
{
    stream::unfold(
        (source, predicate, 0usize),
        |(mut source, mut predicate, mut index)| async move {
            while let Some(item) = source.next().await {
                let at = index;
                index += 1;
                if predicate(&item, at).await {
                    return Some((item, (source, predicate, index)));
                }
            }
            None
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::ready;

    #[tokio::test]
    async fn test_filter_async_predicate() {
        let out: Vec<_> = filter(stream::iter([1, 2, 3]), |&x, _| async move { x % 2 != 0 })
            .collect()
            .await;
        assert_eq!(out, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_filter_ready_predicate_with_index() {
        let out: Vec<_> = filter(stream::iter(["a", "b", "c"]), |_, i| ready(i % 2 == 0))
            .collect()
            .await;
        assert_eq!(out, vec!["a", "c"]);
    }
}
