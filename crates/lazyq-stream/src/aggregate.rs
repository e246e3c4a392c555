//! Async counting and numeric aggregates; same numeric contract as the
//! synchronous versions.

use std::future::{ready, IntoFuture};
use std::pin::pin;

use futures::stream::{Stream, StreamExt};
use lazyq_core::error::Result;
use lazyq_core::numeric::{ensure_finite, Numeric};

pub async fn count<S: Stream>(source: S) -> usize {
    source.count().await
}

pub async fn count_by<S, P, Fut>(source: S, mut predicate: P) -> usize
where
    S: Stream,
    P: FnMut(&S::Item) -> Fut,
    Fut: IntoFuture<Output = bool>,
{
    let mut source = pin!(source);
    let mut n = 0;
    while let Some(item) = source.next().await {
        if predicate(&item).await {
            n += 1;
        }
    }
    n
}

pub async fn sum<S>(source: S) -> Result<f64>
where
    S: Stream,
    S::Item: Numeric,
{
    sum_by(source, |item| ready(item.to_number())).await
}

pub async fn sum_by<S, F, Fut, N>(source: S, mut selector: F) -> Result<f64>
where
    S: Stream,
    F: FnMut(&S::Item) -> Fut,
    Fut: IntoFuture<Output = N>,
    N: Numeric,
{
    let mut source = pin!(source);
    let mut total = 0.0;
    while let Some(item) = source.next().await {
        total += ensure_finite(&selector(&item).await, "sum")?;
    }
    Ok(total)
}

pub async fn min<S>(source: S) -> Result<Option<f64>>
where
    S: Stream,
    S::Item: Numeric,
{
    min_by(source, |item| ready(item.to_number())).await
}

pub async fn min_by<S, F, Fut, N>(source: S, selector: F) -> Result<Option<f64>>
where
    S: Stream,
    F: FnMut(&S::Item) -> Fut,
    Fut: IntoFuture<Output = N>,
    N: Numeric,
{
    extreme(source, selector, "min", |v, best| v < best).await
}

pub async fn max<S>(source: S) -> Result<Option<f64>>
where
    S: Stream,
    S::Item: Numeric,
{
    max_by(source, |item| ready(item.to_number())).await
}

pub async fn max_by<S, F, Fut, N>(source: S, selector: F) -> Result<Option<f64>>
where
    S: Stream,
    F: FnMut(&S::Item) -> Fut,
    Fut: IntoFuture<Output = N>,
    N: Numeric,
{
    extreme(source, selector, "max", |v, best| v > best).await
}

async fn extreme<S, F, Fut, N>(
    source: S,
    mut selector: F,
    op: &str,
    better: fn(f64, f64) -> bool,
) -> Result<Option<f64>>
where
    S: Stream,
    F: FnMut(&S::Item) -> Fut,
    Fut: IntoFuture<Output = N>,
    N: Numeric,
{
    let mut source = pin!(source);
    let mut best: Option<f64> = None;
    while let Some(item) = source.next().await {
        let v = ensure_finite(&selector(&item).await, op)?;
        best = match best {
            Some(b) if !better(v, b) => Some(b),
            _ => Some(v),
        };
    }
    Ok(best)
}
