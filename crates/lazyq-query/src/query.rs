//! Synchronous query handle.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;
use std::sync::Arc;

use lazyq_core::compare::{default_compare, identity};
use lazyq_core::config::QueryConfig;
use lazyq_core::error::Result;
use lazyq_core::guards::{ensure_count, Count};
use lazyq_core::metrics;
use lazyq_core::numeric::Numeric;
use lazyq_operators as ops;
use lazyq_operators::traits::{boxed, FnSequence, Sequence, Traversal};

use crate::async_query::AsyncQuery;
use crate::counted::{self, Counted};
use crate::source::{BridgeSource, OnceSource, VecSource};

/// Immutable, re-chainable handle over a synchronous sequence.
///
/// Cloning is cheap (one `Arc`). Chaining never mutates `self`, so one handle
/// can seed any number of independent queries.
pub struct Query<T> {
    source: Arc<dyn Sequence<T>>,
    config: QueryConfig,
}

impl<T> Clone for Query<T> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            config: self.config,
        }
    }
}

impl<T: Send + 'static> Query<T> {
    /// Every constructor starts from [`QueryConfig::from_env`].
    pub fn from_sequence<S>(sequence: S) -> Self
    where
        S: Sequence<T> + 'static,
    {
        Self {
            source: Arc::new(sequence),
            config: QueryConfig::from_env(),
        }
    }

    /// Container-backed query; every traversal starts from the first element.
    pub fn from_vec(items: Vec<T>) -> Self
    where
        T: Clone + Sync,
    {
        Self::from_sequence(VecSource::new(items))
    }

    /// Query over a single-use iterator. Only the first traversal sees the
    /// elements; later ones are empty.
    pub fn from_generator<I>(source: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: Send + 'static,
    {
        Self::from_sequence(OnceSource::new(source.into_iter()))
    }

    pub fn with_config(mut self, config: QueryConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> QueryConfig {
        self.config
    }

    /// Start a traversal directly, without a terminal.
    pub fn iter(&self) -> Traversal<T> {
        self.source.traverse()
    }

    fn chain<U, F>(&self, factory: F) -> Query<U>
    where
        U: Send + 'static,
        F: Fn(Traversal<T>) -> Traversal<U> + Send + Sync + 'static,
    {
        let upstream = Arc::clone(&self.source);
        Query {
            source: Arc::new(FnSequence::new(move || factory(upstream.traverse()))),
            config: self.config,
        }
    }

    // ----- transformations -----

    #[doc(alias = "where")]
    pub fn filter<P>(&self, predicate: P) -> Query<T>
    where
        P: Fn(&T, usize) -> bool + Send + Sync + 'static,
    {
        let predicate = Arc::new(predicate);
        self.chain(move |upstream| {
            let predicate = Arc::clone(&predicate);
            boxed(ops::filter(upstream, move |item: &T, index| predicate(item, index)))
        })
    }

    pub fn select<U, F>(&self, selector: F) -> Query<U>
    where
        U: Send + 'static,
        F: Fn(&T, usize) -> U + Send + Sync + 'static,
    {
        let selector = Arc::new(selector);
        self.chain(move |upstream| {
            let selector = Arc::clone(&selector);
            boxed(ops::select(upstream, move |item: &T, index| selector(item, index)))
        })
    }

    pub fn skip<C: Count>(&self, count: C) -> Result<Query<T>> {
        let count = ensure_count(count, "count")?;
        Ok(self.chain(move |upstream| boxed(ops::skip(upstream, count))))
    }

    pub fn take<C: Count>(&self, count: C) -> Result<Query<T>> {
        let count = ensure_count(count, "count")?;
        Ok(self.chain(move |upstream| boxed(ops::take(upstream, count))))
    }

    pub fn distinct(&self) -> Query<T>
    where
        T: Clone + Eq + Hash,
    {
        self.distinct_by(identity::<T>)
    }

    pub fn distinct_by<K, F>(&self, key: F) -> Query<T>
    where
        K: Eq + Hash + Send + 'static,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        let key = Arc::new(key);
        self.chain(move |upstream| {
            let key = Arc::clone(&key);
            boxed(ops::distinct_by(upstream, move |item: &T| key(item)))
        })
    }

    pub fn append(&self, element: T) -> Query<T>
    where
        T: Clone + Sync,
    {
        self.chain(move |upstream| boxed(ops::append(upstream, element.clone())))
    }

    pub fn prepend(&self, element: T) -> Query<T>
    where
        T: Clone + Sync,
    {
        self.chain(move |upstream| boxed(ops::prepend(upstream, element.clone())))
    }

    pub fn concat(&self, other: impl Into<Query<T>>) -> Query<T> {
        let other = other.into();
        self.chain(move |upstream| boxed(ops::concat(upstream, other.iter())))
    }

    pub fn union(&self, other: impl Into<Query<T>>) -> Query<T>
    where
        T: Clone + Eq + Hash,
    {
        self.union_by(other, identity::<T>)
    }

    pub fn union_by<K, F>(&self, other: impl Into<Query<T>>, key: F) -> Query<T>
    where
        K: Eq + Hash + Send + 'static,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        let other = other.into();
        let key = Arc::new(key);
        self.chain(move |upstream| {
            let key = Arc::clone(&key);
            boxed(ops::union_by(upstream, other.iter(), move |item: &T| key(item)))
        })
    }

    /// Elements whose key also occurs in `other`, each key once.
    ///
    /// `other` is fully traversed on the first pull, before any element of
    /// this query is produced.
    pub fn intersect(&self, other: impl Into<Query<T>>) -> Query<T>
    where
        T: Clone + Eq + Hash,
    {
        self.intersect_by(other, identity::<T>)
    }

    pub fn intersect_by<K, F>(&self, other: impl Into<Query<T>>, key: F) -> Query<T>
    where
        K: Eq + Hash + Send + 'static,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        let other = other.into();
        let key = Arc::new(key);
        self.chain(move |upstream| {
            let key = Arc::clone(&key);
            boxed(ops::intersect_by(upstream, other.iter(), move |item: &T| key(item)))
        })
    }

    /// Elements whose key does not occur in `other`, each key once. Same
    /// up-front pass over `other` as [`Query::intersect`].
    pub fn except(&self, other: impl Into<Query<T>>) -> Query<T>
    where
        T: Clone + Eq + Hash,
    {
        self.except_by(other, identity::<T>)
    }

    pub fn except_by<K, F>(&self, other: impl Into<Query<T>>, key: F) -> Query<T>
    where
        K: Eq + Hash + Send + 'static,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        let other = other.into();
        let key = Arc::new(key);
        self.chain(move |upstream| {
            let key = Arc::clone(&key);
            boxed(ops::except_by(upstream, other.iter(), move |item: &T| key(item)))
        })
    }

    /// Ascending natural order of the elements themselves.
    pub fn order_by(&self) -> Query<T>
    where
        T: Clone + PartialOrd,
    {
        self.order_by_with(identity::<T>, default_compare::<T>)
    }

    pub fn order_by_key<K, F>(&self, key: F) -> Query<T>
    where
        K: PartialOrd + 'static,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        self.order_by_with(key, default_compare::<K>)
    }

    /// Stable sort by `key` under `comparer`. Buffers the whole upstream on
    /// the first pull.
    pub fn order_by_with<K, F, C>(&self, key: F, comparer: C) -> Query<T>
    where
        K: 'static,
        F: Fn(&T) -> K + Send + Sync + 'static,
        C: Fn(&K, &K) -> Ordering + Send + Sync + 'static,
    {
        let key = Arc::new(key);
        let comparer = Arc::new(comparer);
        self.chain(move |upstream| {
            let key = Arc::clone(&key);
            let comparer = Arc::clone(&comparer);
            boxed(ops::order_by(
                upstream,
                move |item: &T| key(item),
                move |a: &K, b: &K| comparer(a, b),
            ))
        })
    }

    // ----- terminals -----

    fn terminal<R>(&self, op: &'static str, eval: impl FnOnce(Counted<Traversal<T>>) -> R) -> R {
        let (traversal, pulled) = Counted::new(self.source.traverse());
        let out = eval(traversal);
        metrics::emit_terminal(&self.config, op, counted::pulled(&pulled));
        out
    }

    #[doc(alias = "toArray")]
    pub fn to_vec(&self) -> Vec<T> {
        self.terminal("to_vec", ops::to_vec)
    }

    pub fn first(&self) -> Result<T> {
        self.terminal("first", ops::first)
    }

    pub fn first_by(&self, predicate: impl FnMut(&T) -> bool) -> Result<T> {
        self.terminal("first", |t| ops::first_by(t, predicate))
    }

    pub fn any(&self) -> bool {
        self.terminal("any", ops::any)
    }

    pub fn any_by(&self, predicate: impl FnMut(&T) -> bool) -> bool {
        self.terminal("any", |t| ops::any_by(t, predicate))
    }

    pub fn all(&self, predicate: impl FnMut(&T) -> bool) -> bool {
        self.terminal("all", |t| ops::all(t, predicate))
    }

    pub fn count(&self) -> usize {
        self.terminal("count", ops::count)
    }

    pub fn count_by(&self, predicate: impl FnMut(&T) -> bool) -> usize {
        self.terminal("count", |t| ops::count_by(t, predicate))
    }

    pub fn sum(&self) -> Result<f64>
    where
        T: Numeric,
    {
        self.terminal("sum", ops::sum)
    }

    pub fn sum_by<N: Numeric>(&self, selector: impl FnMut(&T) -> N) -> Result<f64> {
        self.terminal("sum", |t| ops::sum_by(t, selector))
    }

    /// `Ok(None)` for an empty sequence.
    pub fn min(&self) -> Result<Option<f64>>
    where
        T: Numeric,
    {
        self.terminal("min", ops::min)
    }

    pub fn min_by<N: Numeric>(&self, selector: impl FnMut(&T) -> N) -> Result<Option<f64>> {
        self.terminal("min", |t| ops::min_by(t, selector))
    }

    /// `Ok(None)` for an empty sequence.
    pub fn max(&self) -> Result<Option<f64>>
    where
        T: Numeric,
    {
        self.terminal("max", ops::max)
    }

    pub fn max_by<N: Numeric>(&self, selector: impl FnMut(&T) -> N) -> Result<Option<f64>> {
        self.terminal("max", |t| ops::max_by(t, selector))
    }

    /// Same source, seen through the async pipeline.
    pub fn to_async(&self) -> AsyncQuery<T> {
        AsyncQuery::from_sequence(BridgeSource::new(Arc::clone(&self.source))).with_config(self.config)
    }
}

impl<K, V> Query<(K, V)>
where
    K: Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    /// Adapt a map-like container to its key/value entry pairs.
    pub fn from_map<M>(map: M) -> Self
    where
        M: IntoIterator<Item = (K, V)>,
    {
        Self::from_vec(map.into_iter().collect())
    }
}

/// Build a query from any supported container.
pub fn from<T, S>(source: S) -> Query<T>
where
    S: Into<Query<T>>,
{
    source.into()
}

impl<T: Clone + Send + Sync + 'static> From<Vec<T>> for Query<T> {
    fn from(items: Vec<T>) -> Self {
        Query::from_vec(items)
    }
}

impl<T: Clone + Send + Sync + 'static, const N: usize> From<[T; N]> for Query<T> {
    fn from(items: [T; N]) -> Self {
        Query::from_vec(items.into())
    }
}

impl<T: Clone + Send + Sync + 'static> From<&[T]> for Query<T> {
    fn from(items: &[T]) -> Self {
        Query::from_vec(items.to_vec())
    }
}

impl<K, V, S> From<HashMap<K, V, S>> for Query<(K, V)>
where
    K: Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn from(map: HashMap<K, V, S>) -> Self {
        Query::from_map(map)
    }
}

impl<K, V> From<BTreeMap<K, V>> for Query<(K, V)>
where
    K: Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn from(map: BTreeMap<K, V>) -> Self {
        Query::from_map(map)
    }
}

impl<T: Clone + Send + Sync + 'static> FromIterator<T> for Query<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Query::from_vec(iter.into_iter().collect())
    }
}

impl<'a, T: Send + 'static> IntoIterator for &'a Query<T> {
    type Item = T;
    type IntoIter = Traversal<T>;

    fn into_iter(self) -> Traversal<T> {
        self.iter()
    }
}
