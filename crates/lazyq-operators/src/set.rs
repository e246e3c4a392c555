//! Set algebra: `distinct`, `union`, `intersect`, `except`.
//!
//! Keys are compared with `Eq + Hash`. Each adapter owns its seen-key set, so
//! two traversals of the same node never observe each other's state.

use std::collections::HashSet;
use std::hash::Hash;

use crate::concat::{concat, Concat};

/// First occurrence of every key, in upstream order.
pub struct Distinct<I, F, K> {
    source: I,
    key: F,
    seen: HashSet<K>,
}

impl<I, F, K> Iterator for Distinct<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: Eq + Hash,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        for item in self.source.by_ref() {
            if self.seen.insert((self.key)(&item)) {
                return Some(item);
            }
        }
        None
    }
}

pub fn distinct_by<I, F, K>(source: I, key: F) -> Distinct<I::IntoIter, F, K>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    K: Eq + Hash,
{
    Distinct {
        source: source.into_iter(),
        key,
        seen: HashSet::new(),
    }
}

/// `union` is `distinct` over `concat` with a single seen set spanning both
/// sides.
pub type Union<I, J, F, K> = Distinct<Concat<I, J>, F, K>;

pub fn union_by<I, J, F, K>(source: I, other: J, key: F) -> Union<I::IntoIter, J::IntoIter, F, K>
where
    I: IntoIterator,
    J: IntoIterator<Item = I::Item>,
    F: FnMut(&I::Item) -> K,
    K: Eq + Hash,
{
    distinct_by(concat(source, other), key)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Membership {
    /// Keep keys present in `other`.
    Present,
    /// Keep keys absent from `other`.
    Absent,
}

/// Shared engine for `intersect` and `except`.
///
/// On the first pull `other` is drained into a key set (an eager pre-pass);
/// only then is the primary source judged, one element at a time, emitting
/// each key at most once.
pub struct MembershipFilter<I, J, F, K> {
    source: I,
    other: Option<J>,
    key: F,
    other_keys: HashSet<K>,
    seen: HashSet<K>,
    membership: Membership,
}

pub type Intersect<I, J, F, K> = MembershipFilter<I, J, F, K>;
pub type Except<I, J, F, K> = MembershipFilter<I, J, F, K>;

impl<I, J, F, K> Iterator for MembershipFilter<I, J, F, K>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
    F: FnMut(&I::Item) -> K,
    K: Eq + Hash,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if let Some(other) = self.other.take() {
            for item in other {
                self.other_keys.insert((self.key)(&item));
            }
        }
        let want_present = self.membership == Membership::Present;
        for item in self.source.by_ref() {
            let key = (self.key)(&item);
            if self.other_keys.contains(&key) == want_present && self.seen.insert(key) {
                return Some(item);
            }
        }
        None
    }
}

fn membership_filter<I, J, F, K>(
    source: I,
    other: J,
    key: F,
    membership: Membership,
) -> MembershipFilter<I::IntoIter, J::IntoIter, F, K>
where
    I: IntoIterator,
    J: IntoIterator<Item = I::Item>,
{
    MembershipFilter {
        source: source.into_iter(),
        other: Some(other.into_iter()),
        key,
        other_keys: HashSet::new(),
        seen: HashSet::new(),
        membership,
    }
}

pub fn intersect_by<I, J, F, K>(source: I, other: J, key: F) -> Intersect<I::IntoIter, J::IntoIter, F, K>
where
    I: IntoIterator,
    J: IntoIterator<Item = I::Item>,
    F: FnMut(&I::Item) -> K,
    K: Eq + Hash,
{
    membership_filter(source, other, key, Membership::Present)
}

pub fn except_by<I, J, F, K>(source: I, other: J, key: F) -> Except<I::IntoIter, J::IntoIter, F, K>
where
    I: IntoIterator,
    J: IntoIterator<Item = I::Item>,
    F: FnMut(&I::Item) -> K,
    K: Eq + Hash,
{
    membership_filter(source, other, key, Membership::Absent)
}
