//! `order_by`: stable sort by a derived key.
//!
//! This is the one operator that must see its whole upstream before the first
//! output. The buffer is filled on the first pull, each element's key is
//! computed exactly once, and `sort_by` (stable) orders the pairs.

use std::cmp::Ordering;

pub struct OrderBy<I: Iterator, F, C> {
    source: Option<I>,
    key: F,
    comparer: C,
    sorted: std::vec::IntoIter<I::Item>,
}

impl<I, F, C, K> Iterator for OrderBy<I, F, C>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    C: FnMut(&K, &K) -> Ordering,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if let Some(source) = self.source.take() {
            let key = &mut self.key;
            let mut keyed: Vec<(K, I::Item)> = source.map(|item| (key(&item), item)).collect();
            let comparer = &mut self.comparer;
            keyed.sort_by(|a, b| comparer(&a.0, &b.0));
            self.sorted = keyed
                .into_iter()
                .map(|(_, item)| item)
                .collect::<Vec<_>>()
                .into_iter();
        }
        self.sorted.next()
    }
}

pub fn order_by<I, F, C, K>(source: I, key: F, comparer: C) -> OrderBy<I::IntoIter, F, C>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    C: FnMut(&K, &K) -> Ordering,
{
    OrderBy {
        source: Some(source.into_iter()),
        key,
        comparer,
        sorted: Vec::new().into_iter(),
    }
}
