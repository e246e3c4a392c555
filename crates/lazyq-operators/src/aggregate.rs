//! Counting and numeric aggregates.
//!
//! `sum`/`min`/`max` reject any selected value that is not a finite number
//! with `Error::TypeConversion`, aborting the evaluation. `min`/`max` return
//! `None` for an empty sequence, which is distinct from `Some(0.0)`.

use lazyq_core::error::Result;
use lazyq_core::numeric::{ensure_finite, Numeric};

pub fn count<I: IntoIterator>(source: I) -> usize {
    source.into_iter().count()
}

pub fn count_by<I, P>(source: I, mut predicate: P) -> usize
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    source.into_iter().filter(|item| predicate(item)).count()
}

pub fn sum<I>(source: I) -> Result<f64>
where
    I: IntoIterator,
    I::Item: Numeric,
{
    sum_by(source, |item| item.to_number())
}

pub fn sum_by<I, N, F>(source: I, mut selector: F) -> Result<f64>
where
    I: IntoIterator,
    N: Numeric,
    F: FnMut(&I::Item) -> N,
{
    let mut total = 0.0;
    for item in source {
        total += ensure_finite(&selector(&item), "sum")?;
    }
    Ok(total)
}

pub fn min<I>(source: I) -> Result<Option<f64>>
where
    I: IntoIterator,
    I::Item: Numeric,
{
    min_by(source, |item| item.to_number())
}

pub fn min_by<I, N, F>(source: I, mut selector: F) -> Result<Option<f64>>
where
    I: IntoIterator,
    N: Numeric,
    F: FnMut(&I::Item) -> N,
{
    extreme(source, |item| ensure_finite(&selector(item), "min"), |v, best| v < best)
}

pub fn max<I>(source: I) -> Result<Option<f64>>
where
    I: IntoIterator,
    I::Item: Numeric,
{
    max_by(source, |item| item.to_number())
}

pub fn max_by<I, N, F>(source: I, mut selector: F) -> Result<Option<f64>>
where
    I: IntoIterator,
    N: Numeric,
    F: FnMut(&I::Item) -> N,
{
    extreme(source, |item| ensure_finite(&selector(item), "max"), |v, best| v > best)
}

/// Fold keeping the value that `better` prefers; `None` when nothing was seen.
fn extreme<I, V, B>(source: I, mut value: V, better: B) -> Result<Option<f64>>
where
    I: IntoIterator,
    V: FnMut(&I::Item) -> Result<f64>,
    B: Fn(f64, f64) -> bool,
{
    let mut best: Option<f64> = None;
    for item in source {
        let v = value(&item)?;
        best = match best {
            Some(b) if !better(v, b) => Some(b),
            _ => Some(v),
        };
    }
    Ok(best)
}
