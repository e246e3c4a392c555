//! Asynchronous query handle.
//!
//! Same shape as [`Query`](crate::Query); predicates, selectors and key
//! selectors return `impl IntoFuture`, and every terminal is an `async fn`.
//!
//! The handle's [`QueryConfig`] is read when a traversal starts, so
//! `with_config` governs every operator in the chain, including ones chained
//! before it.

use std::cmp::Ordering;
use std::future::{ready, Future, IntoFuture};
use std::hash::Hash;
use std::sync::Arc;

use futures::stream::{Stream, StreamExt};

use lazyq_core::compare::default_compare;
use lazyq_core::config::QueryConfig;
use lazyq_core::error::Result;
use lazyq_core::guards::{ensure_count, Count};
use lazyq_core::metrics;
use lazyq_core::numeric::Numeric;
use lazyq_stream as ops;
use lazyq_stream::traits::{AsyncSequence, SequenceStream};

use crate::counted::{self, Counted};
use crate::query::Query;
use crate::source::{OnceStreamSource, VecSource};

/// Builds a fresh traversal of the whole chain under the given config.
type Plan<T> = Arc<dyn Fn(&QueryConfig) -> SequenceStream<T> + Send + Sync>;

pub struct AsyncQuery<T> {
    plan: Plan<T>,
    config: QueryConfig,
}

impl<T> Clone for AsyncQuery<T> {
    fn clone(&self) -> Self {
        Self {
            plan: Arc::clone(&self.plan),
            config: self.config,
        }
    }
}

impl<T: Send + 'static> AsyncQuery<T> {
    pub fn from_sequence<S>(sequence: S) -> Self
    where
        S: AsyncSequence<T> + 'static,
    {
        Self {
            plan: Arc::new(move |_: &QueryConfig| sequence.traverse()),
            config: QueryConfig::from_env(),
        }
    }

    pub fn from_vec(items: Vec<T>) -> Self
    where
        T: Clone + Sync,
    {
        Self::from_sequence(VecSource::new(items))
    }

    /// Query over a single-use stream (an async generator).
    pub fn from_stream<S>(stream: S) -> Self
    where
        S: Stream<Item = T> + Send + 'static,
    {
        Self::from_sequence(OnceStreamSource::new(stream))
    }

    /// Query over a single-use synchronous iterator.
    pub fn from_generator<I>(source: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: Send + 'static,
    {
        Query::from_generator(source).to_async()
    }

    pub fn with_config(mut self, config: QueryConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> QueryConfig {
        self.config
    }

    /// Start a traversal directly, without a terminal.
    pub fn stream(&self) -> SequenceStream<T> {
        (self.plan)(&self.config)
    }

    fn chain<U, F>(&self, factory: F) -> AsyncQuery<U>
    where
        U: Send + 'static,
        F: Fn(SequenceStream<T>) -> SequenceStream<U> + Send + Sync + 'static,
    {
        self.chain_configured(move |upstream, _| factory(upstream))
    }

    fn chain_configured<U, F>(&self, factory: F) -> AsyncQuery<U>
    where
        U: Send + 'static,
        F: Fn(SequenceStream<T>, &QueryConfig) -> SequenceStream<U> + Send + Sync + 'static,
    {
        let upstream = Arc::clone(&self.plan);
        AsyncQuery {
            plan: Arc::new(move |config: &QueryConfig| factory(upstream(config), config)),
            config: self.config,
        }
    }

    // ----- transformations -----

    #[doc(alias = "where")]
    pub fn filter<P, Fut>(&self, predicate: P) -> AsyncQuery<T>
    where
        P: Fn(&T, usize) -> Fut + Send + Sync + 'static,
        Fut: IntoFuture<Output = bool> + Send + 'static,
        Fut::IntoFuture: Send,
    {
        let predicate = Arc::new(predicate);
        self.chain(move |upstream| {
            let predicate = Arc::clone(&predicate);
            ops::filter(upstream, move |item: &T, index| predicate(item, index)).boxed()
        })
    }

    pub fn select<U, F, Fut>(&self, selector: F) -> AsyncQuery<U>
    where
        U: Send + 'static,
        F: Fn(&T, usize) -> Fut + Send + Sync + 'static,
        Fut: IntoFuture<Output = U> + Send + 'static,
        Fut::IntoFuture: Send,
    {
        let selector = Arc::new(selector);
        self.chain(move |upstream| {
            let selector = Arc::clone(&selector);
            ops::select(upstream, move |item: &T, index| selector(item, index)).boxed()
        })
    }

    pub fn skip<C: Count>(&self, count: C) -> Result<AsyncQuery<T>> {
        let count = ensure_count(count, "count")?;
        Ok(self.chain(move |upstream| ops::skip(upstream, count).boxed()))
    }

    pub fn take<C: Count>(&self, count: C) -> Result<AsyncQuery<T>> {
        let count = ensure_count(count, "count")?;
        Ok(self.chain(move |upstream| ops::take(upstream, count).boxed()))
    }

    pub fn distinct(&self) -> AsyncQuery<T>
    where
        T: Clone + Eq + Hash,
    {
        self.distinct_by(|item: &T| ready(item.clone()))
    }

    pub fn distinct_by<K, F, Fut>(&self, key: F) -> AsyncQuery<T>
    where
        K: Eq + Hash + Send + 'static,
        F: Fn(&T) -> Fut + Send + Sync + 'static,
        Fut: IntoFuture<Output = K> + Send + 'static,
        Fut::IntoFuture: Send,
    {
        let key = Arc::new(key);
        self.chain(move |upstream| {
            let key = Arc::clone(&key);
            ops::distinct_by(upstream, move |item: &T| key(item)).boxed()
        })
    }

    pub fn append(&self, element: T) -> AsyncQuery<T>
    where
        T: Clone + Sync,
    {
        self.chain(move |upstream| ops::append(upstream, element.clone()).boxed())
    }

    pub fn prepend(&self, element: T) -> AsyncQuery<T>
    where
        T: Clone + Sync,
    {
        self.chain(move |upstream| ops::prepend(upstream, element.clone()).boxed())
    }

    pub fn concat(&self, other: impl Into<AsyncQuery<T>>) -> AsyncQuery<T> {
        let other = other.into();
        self.chain(move |upstream| ops::concat(upstream, other.stream()).boxed())
    }

    pub fn union(&self, other: impl Into<AsyncQuery<T>>) -> AsyncQuery<T>
    where
        T: Clone + Eq + Hash,
    {
        self.union_by(other, |item: &T| ready(item.clone()))
    }

    pub fn union_by<K, F, Fut>(&self, other: impl Into<AsyncQuery<T>>, key: F) -> AsyncQuery<T>
    where
        K: Eq + Hash + Send + 'static,
        F: Fn(&T) -> Fut + Send + Sync + 'static,
        Fut: IntoFuture<Output = K> + Send + 'static,
        Fut::IntoFuture: Send,
    {
        let other = other.into();
        let key = Arc::new(key);
        self.chain(move |upstream| {
            let key = Arc::clone(&key);
            ops::union_by(upstream, other.stream(), move |item: &T| key(item)).boxed()
        })
    }

    /// `other` is drained (keys awaited) on the first poll, before any element
    /// of this query is judged.
    pub fn intersect(&self, other: impl Into<AsyncQuery<T>>) -> AsyncQuery<T>
    where
        T: Clone + Eq + Hash,
    {
        self.intersect_by(other, |item: &T| ready(item.clone()))
    }

    pub fn intersect_by<K, F, Fut>(&self, other: impl Into<AsyncQuery<T>>, key: F) -> AsyncQuery<T>
    where
        K: Eq + Hash + Send + 'static,
        F: Fn(&T) -> Fut + Send + Sync + 'static,
        Fut: IntoFuture<Output = K> + Send + 'static,
        Fut::IntoFuture: Send,
    {
        let other = other.into();
        let key = Arc::new(key);
        self.chain(move |upstream| {
            let key = Arc::clone(&key);
            ops::intersect_by(upstream, other.stream(), move |item: &T| key(item)).boxed()
        })
    }

    pub fn except(&self, other: impl Into<AsyncQuery<T>>) -> AsyncQuery<T>
    where
        T: Clone + Eq + Hash,
    {
        self.except_by(other, |item: &T| ready(item.clone()))
    }

    pub fn except_by<K, F, Fut>(&self, other: impl Into<AsyncQuery<T>>, key: F) -> AsyncQuery<T>
    where
        K: Eq + Hash + Send + 'static,
        F: Fn(&T) -> Fut + Send + Sync + 'static,
        Fut: IntoFuture<Output = K> + Send + 'static,
        Fut::IntoFuture: Send,
    {
        let other = other.into();
        let key = Arc::new(key);
        self.chain(move |upstream| {
            let key = Arc::clone(&key);
            ops::except_by(upstream, other.stream(), move |item: &T| key(item)).boxed()
        })
    }

    pub fn order_by(&self) -> AsyncQuery<T>
    where
        T: Clone + PartialOrd,
    {
        self.order_by_with(|item: &T| ready(item.clone()), default_compare::<T>)
    }

    pub fn order_by_key<K, F, Fut>(&self, key: F) -> AsyncQuery<T>
    where
        K: PartialOrd + Send + 'static,
        F: Fn(&T) -> Fut + Send + Sync + 'static,
        Fut: IntoFuture<Output = K> + Send + 'static,
        Fut::IntoFuture: Send,
    {
        self.order_by_with(key, default_compare::<K>)
    }

    /// Buffers the upstream, resolves keys with at most
    /// `config().key_concurrency` in flight, then stable-sorts. The
    /// concurrency is taken from the handle that runs the terminal.
    pub fn order_by_with<K, F, Fut, C>(&self, key: F, comparer: C) -> AsyncQuery<T>
    where
        K: Send + 'static,
        F: Fn(&T) -> Fut + Send + Sync + 'static,
        Fut: IntoFuture<Output = K> + Send + 'static,
        Fut::IntoFuture: Send,
        C: Fn(&K, &K) -> Ordering + Send + Sync + 'static,
    {
        let key = Arc::new(key);
        let comparer = Arc::new(comparer);
        self.chain_configured(move |upstream, config| {
            let key = Arc::clone(&key);
            let comparer = Arc::clone(&comparer);
            ops::order_by(
                upstream,
                move |item: &T| key(item),
                move |a: &K, b: &K| comparer(a, b),
                config.key_concurrency,
            )
            .boxed()
        })
    }

    // ----- terminals -----

    async fn terminal<R, F, Fut>(&self, op: &'static str, eval: F) -> R
    where
        F: FnOnce(Counted<SequenceStream<T>>) -> Fut,
        Fut: Future<Output = R>,
    {
        let (stream, pulled) = Counted::new(self.stream());
        let out = eval(stream).await;
        metrics::emit_terminal(&self.config, op, counted::pulled(&pulled));
        out
    }

    #[doc(alias = "toArray")]
    pub async fn to_vec(&self) -> Vec<T> {
        self.terminal("to_vec", ops::to_vec).await
    }

    pub async fn first(&self) -> Result<T> {
        self.terminal("first", ops::first).await
    }

    pub async fn first_by<P, Fut>(&self, predicate: P) -> Result<T>
    where
        P: FnMut(&T) -> Fut,
        Fut: IntoFuture<Output = bool>,
    {
        self.terminal("first", |s| ops::first_by(s, predicate)).await
    }

    pub async fn any(&self) -> bool {
        self.terminal("any", ops::any).await
    }

    pub async fn any_by<P, Fut>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> Fut,
        Fut: IntoFuture<Output = bool>,
    {
        self.terminal("any", |s| ops::any_by(s, predicate)).await
    }

    pub async fn all<P, Fut>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> Fut,
        Fut: IntoFuture<Output = bool>,
    {
        self.terminal("all", |s| ops::all(s, predicate)).await
    }

    pub async fn count(&self) -> usize {
        self.terminal("count", ops::count).await
    }

    pub async fn count_by<P, Fut>(&self, predicate: P) -> usize
    where
        P: FnMut(&T) -> Fut,
        Fut: IntoFuture<Output = bool>,
    {
        self.terminal("count", |s| ops::count_by(s, predicate)).await
    }

    pub async fn sum(&self) -> Result<f64>
    where
        T: Numeric,
    {
        self.terminal("sum", ops::sum).await
    }

    pub async fn sum_by<F, Fut, N>(&self, selector: F) -> Result<f64>
    where
        F: FnMut(&T) -> Fut,
        Fut: IntoFuture<Output = N>,
        N: Numeric,
    {
        self.terminal("sum", |s| ops::sum_by(s, selector)).await
    }

    pub async fn min(&self) -> Result<Option<f64>>
    where
        T: Numeric,
    {
        self.terminal("min", ops::min).await
    }

    pub async fn min_by<F, Fut, N>(&self, selector: F) -> Result<Option<f64>>
    where
        F: FnMut(&T) -> Fut,
        Fut: IntoFuture<Output = N>,
        N: Numeric,
    {
        self.terminal("min", |s| ops::min_by(s, selector)).await
    }

    pub async fn max(&self) -> Result<Option<f64>>
    where
        T: Numeric,
    {
        self.terminal("max", ops::max).await
    }

    pub async fn max_by<F, Fut, N>(&self, selector: F) -> Result<Option<f64>>
    where
        F: FnMut(&T) -> Fut,
        Fut: IntoFuture<Output = N>,
        N: Numeric,
    {
        self.terminal("max", |s| ops::max_by(s, selector)).await
    }
}

/// Build an async query over a single-use stream.
pub fn from_async<S>(stream: S) -> AsyncQuery<S::Item>
where
    S: Stream + Send + 'static,
    S::Item: Send + 'static,
{
    AsyncQuery::from_stream(stream)
}

impl<T: Send + 'static> From<Query<T>> for AsyncQuery<T> {
    fn from(query: Query<T>) -> Self {
        query.to_async()
    }
}

impl<T: Clone + Send + Sync + 'static> From<Vec<T>> for AsyncQuery<T> {
    fn from(items: Vec<T>) -> Self {
        AsyncQuery::from_vec(items)
    }
}

impl<T: Clone + Send + Sync + 'static, const N: usize> From<[T; N]> for AsyncQuery<T> {
    fn from(items: [T; N]) -> Self {
        AsyncQuery::from_vec(items.into())
    }
}
