//! Terminal element and quantifier operators.

use lazyq_core::error::{Error, Result};

#[doc(alias = "toArray")]
pub fn to_vec<I: IntoIterator>(source: I) -> Vec<I::Item> {
    source.into_iter().collect()
}

/// Head of the sequence. Pulls exactly one element.
pub fn first<I: IntoIterator>(source: I) -> Result<I::Item> {
    source.into_iter().next().ok_or(Error::EmptySequence)
}

/// First element satisfying `predicate`; stops pulling at the match.
pub fn first_by<I, P>(source: I, mut predicate: P) -> Result<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    source
        .into_iter()
        .find(|item| predicate(item))
        .ok_or(Error::EmptySequence)
}

/// Non-emptiness check: one production step, never a drain.
pub fn any<I: IntoIterator>(source: I) -> bool {
    source.into_iter().next().is_some()
}

pub fn any_by<I, P>(source: I, mut predicate: P) -> bool
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    for item in source {
        if predicate(&item) {
            return true;
        }
    }
    false
}

/// Vacuously true for an empty sequence; stops at the first failure.
pub fn all<I, P>(source: I, mut predicate: P) -> bool
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    for item in source {
        if !predicate(&item) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_variants() {
        assert_eq!(first([1, 2]).unwrap(), 1);
        assert_eq!(first_by([1, 2, 3], |x| *x > 1).unwrap(), 2);
        assert!(matches!(first(Vec::<i32>::new()), Err(Error::EmptySequence)));
        let err = first_by([1, 2], |x| *x > 5).unwrap_err();
        assert_eq!(err.to_string(), "Sequence contains no matching element.");
    }

    #[test]
    fn test_any_pulls_once() {
        let mut pulled = 0;
        assert!(any((0..).inspect(|_| pulled += 1)));
        assert_eq!(pulled, 1);
        assert!(!any(Vec::<i32>::new()));
    }

    #[test]
    fn test_quantifiers() {
        assert!(any_by([1, 2, 3], |x| *x > 2));
        assert!(!any_by([1, 2, 3], |x| *x > 5));
        assert!(all([1, 2, 3], |x| *x > 0));
        assert!(!all([1, 2, 3], |x| *x < 3));
        assert!(all(Vec::<i32>::new(), |x| *x > 0));
    }

    #[test]
    fn test_all_short_circuits() {
        let mut pulled = 0;
        assert!(!all((0..).inspect(|_| pulled += 1), |x| *x < 2));
        assert_eq!(pulled, 3);
    }
}
