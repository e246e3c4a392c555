//! Async set algebra with awaited key selectors.
//!
//! Same contract as the synchronous adapters: first occurrence per key, upstream
//! order, per-traversal seen sets. `intersect`/`except` drain `other` on the
//! first poll before judging any element of `source`.

use std::collections::HashSet;
use std::future::IntoFuture;
use std::hash::Hash;

use futures::stream::{self, Stream, StreamExt};

pub fn distinct_by<S, F, Fut, K>(source: S, key: F) -> impl Stream<Item = S::Item>
where
    S: Stream + Unpin,
    F: FnMut(&S::Item) -> Fut,
    Fut: IntoFuture<Output = K>,
    K: Eq + Hash,
{
    stream::unfold(
        (source, key, HashSet::new()),
        |(mut source, mut key, mut seen)| async move {
            while let Some(item) = source.next().await {
                if seen.insert(key(&item).await) {
                    return Some((item, (source, key, seen)));
                }
            }
            None
        },
    )
}

pub fn union_by<S, O, F, Fut, K>(source: S, other: O, key: F) -> impl Stream<Item = S::Item>
where
    S: Stream + Unpin,
    O: Stream<Item = S::Item> + Unpin,
    F: FnMut(&S::Item) -> Fut,
    Fut: IntoFuture<Output = K>,
    K: Eq + Hash,
{
    distinct_by(source.chain(other), key)
}

struct MembershipFilter<S, O, F, K> {
    source: S,
    other: Option<O>,
    key: F,
    other_keys: HashSet<K>,
    seen: HashSet<K>,
    keep_present: bool,
}

fn membership_filter<S, O, F, Fut, K>(
    source: S,
    other: O,
    key: F,
    keep_present: bool,
) -> impl Stream<Item = S::Item>
where
    S: Stream + Unpin,
    O: Stream<Item = S::Item> + Unpin,
    F: FnMut(&S::Item) -> Fut,
    Fut: IntoFuture<Output = K>,
    K: Eq + Hash,
{
    let state = MembershipFilter {
        source,
        other: Some(other),
        key,
        other_keys: HashSet::new(),
        seen: HashSet::new(),
        keep_present,
    };
    stream::unfold(state, |mut st| async move {
        if let Some(mut other) = st.other.take() {
            while let Some(item) = other.next().await {
                let k = (st.key)(&item).await;
                st.other_keys.insert(k);
            }
        }
        while let Some(item) = st.source.next().await {
            let k = (st.key)(&item).await;
            if st.other_keys.contains(&k) == st.keep_present && st.seen.insert(k) {
                return Some((item, st));
            }
        }
        None
    })
}

pub fn intersect_by<S, O, F, Fut, K>(source: S, other: O, key: F) -> impl Stream<Item = S::Item>
where
    S: Stream + Unpin,
    O: Stream<Item = S::Item> + Unpin,
    F: FnMut(&S::Item) -> Fut,
    Fut: IntoFuture<Output = K>,
    K: Eq + Hash,
{
    membership_filter(source, other, key, true)
}

pub fn except_by<S, O, F, Fut, K>(source: S, other: O, key: F) -> impl Stream<Item = S::Item>
where
    S: Stream + Unpin,
    O: Stream<Item = S::Item> + Unpin,
    F: FnMut(&S::Item) -> Fut,
    Fut: IntoFuture<Output = K>,
    K: Eq + Hash,
{
    membership_filter(source, other, key, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::ready;

    #[tokio::test]
    async fn test_distinct_async_key() {
        let out: Vec<_> = distinct_by(stream::iter([1, 2, 2, 3]), |&x| async move { x })
            .collect()
            .await;
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_union_intersect_except() {
        let key = |x: &i32| ready(*x);
        let u: Vec<_> = union_by(stream::iter([1, 2, 3]), stream::iter([3, 4, 5]), key)
            .collect()
            .await;
        let i: Vec<_> = intersect_by(stream::iter([1, 2, 3, 4]), stream::iter([3, 4, 5, 6]), key)
            .collect()
            .await;
        let e: Vec<_> = except_by(stream::iter([1, 2, 3, 4]), stream::iter([3, 4, 5, 6]), key)
            .collect()
            .await;
        assert_eq!(u, vec![1, 2, 3, 4, 5]);
        assert_eq!(i, vec![3, 4]);
        assert_eq!(e, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_key_selector_on_records() {
        let left = stream::iter([(1, 'a'), (2, 'b')]);
        let right = stream::iter([(2, 'c'), (3, 'd')]);
        let out: Vec<_> = union_by(left, right, |r: &(i32, char)| ready(r.0)).collect().await;
        assert_eq!(out, vec![(1, 'a'), (2, 'b'), (3, 'd')]);
    }
}
