//! Async terminal element and quantifier operators.

use std::future::IntoFuture;
use std::pin::pin;

use futures::stream::{Stream, StreamExt};
use lazyq_core::error::{Error, Result};

#[doc(alias = "toArray")]
pub async fn to_vec<S: Stream>(source: S) -> Vec<S::Item> {
    source.collect().await
}

/// Head of the stream; polls for exactly one element.
pub async fn first<S: Stream>(source: S) -> Result<S::Item> {
    let mut source = pin!(source);
    source.next().await.ok_or(Error::EmptySequence)
}

pub async fn first_by<S, P, Fut>(source: S, mut predicate: P) -> Result<S::Item>
where
    S: Stream,
    P: FnMut(&S::Item) -> Fut,
    Fut: IntoFuture<Output = bool>,
{
    let mut source = pin!(source);
    while let Some(item) = source.next().await {
        if predicate(&item).await {
            return Ok(item);
        }
    }
    Err(Error::EmptySequence)
}

pub async fn any<S: Stream>(source: S) -> bool {
    let mut source = pin!(source);
    source.next().await.is_some()
}

pub async fn any_by<S, P, Fut>(source: S, mut predicate: P) -> bool
where
    S: Stream,
    P: FnMut(&S::Item) -> Fut,
    Fut: IntoFuture<Output = bool>,
{
    let mut source = pin!(source);
    while let Some(item) = source.next().await {
        if predicate(&item).await {
            return true;
        }
    }
    false
}

pub async fn all<S, P, Fut>(source: S, mut predicate: P) -> bool
where
    S: Stream,
    P: FnMut(&S::Item) -> Fut,
    Fut: IntoFuture<Output = bool>,
{
    let mut source = pin!(source);
    while let Some(item) = source.next().await {
        if !predicate(&item).await {
            return false;
        }
    }
    true
}
