//! Async `append`, `prepend`, `concat`.

use futures::stream::{self, Stream, StreamExt};

pub fn append<S: Stream>(source: S, element: S::Item) -> impl Stream<Item = S::Item> {
    source.chain(stream::iter(Some(element)))
}

pub fn prepend<S: Stream>(source: S, element: S::Item) -> impl Stream<Item = S::Item> {
    stream::iter(Some(element)).chain(source)
}

/// `other` is first polled only after `source` reports exhaustion.
pub fn concat<S, O>(source: S, other: O) -> impl Stream<Item = S::Item>
where
    S: Stream,
    O: Stream<Item = S::Item>,
{
    source.chain(other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_edges() {
        let out: Vec<_> = append(stream::iter([1, 2]), 3).collect().await;
        assert_eq!(out, vec![1, 2, 3]);
        let out: Vec<_> = prepend(stream::iter([2, 3]), 1).collect().await;
        assert_eq!(out, vec![1, 2, 3]);
        let out: Vec<_> = concat(stream::iter([1, 2]), stream::iter([3, 4])).collect().await;
        assert_eq!(out, vec![1, 2, 3, 4]);
    }
}
