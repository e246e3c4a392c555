//! `skip` / `take`.
//!
//! Counts are validated by the caller (see `lazyq_core::guards`); here they
//! are already `usize`.
//!
//! Both adapters stop pulling once the upstream has reported its end, even if
//! the upstream itself is not fused.

use std::iter::Fuse;

pub struct Skip<I> {
    source: Fuse<I>,
    remaining: usize,
}

impl<I: Iterator> Iterator for Skip<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        while self.remaining > 0 {
            self.remaining -= 1;
            self.source.next()?;
        }
        self.source.next()
    }
}

pub fn skip<I: IntoIterator>(source: I, count: usize) -> Skip<I::IntoIter> {
    Skip {
        source: source.into_iter().fuse(),
        remaining: count,
    }
}

/// Yields at most `count` elements. Once the budget is spent the upstream is
/// never pulled again, so infinite or side-effecting sources are safe.
pub struct Take<I> {
    source: I,
    remaining: usize,
}

impl<I: Iterator> Iterator for Take<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let item = self.source.next();
        if item.is_none() {
            self.remaining = 0;
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.source.size_hint();
        let hi = hi.map_or(self.remaining, |h| h.min(self.remaining));
        (lo.min(self.remaining), Some(hi))
    }
}

pub fn take<I: IntoIterator>(source: I, count: usize) -> Take<I::IntoIter> {
    Take {
        source: source.into_iter(),
        remaining: count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_past_end() {
        assert_eq!(skip([1, 2], 5).count(), 0);
        assert_eq!(skip([1, 2, 3, 4], 2).collect::<Vec<_>>(), vec![3, 4]);
    }

    #[test]
    fn test_take_stops_pulling() {
        let mut pulled = 0;
        let source = (1..).inspect(|_| pulled += 1);
        let out: Vec<_> = take(source, 3).collect();
        assert_eq!(out, vec![1, 2, 3]);
        assert_eq!(pulled, 3);
    }

    #[test]
    fn test_take_zero_pulls_nothing() {
        let mut pulled = 0;
        let out: Vec<i32> = take([1, 2].into_iter().inspect(|_| pulled += 1), 0).collect();
        assert!(out.is_empty());
        assert_eq!(pulled, 0);
    }

    /// Yields `Some`, then `None`, then `Some` again.
    struct Flicker(u32);

    impl Iterator for Flicker {
        type Item = u32;

        fn next(&mut self) -> Option<u32> {
            self.0 += 1;
            (self.0 % 2 == 1).then_some(self.0)
        }
    }

    #[test]
    fn test_end_is_final_for_unfused_upstream() {
        let mut taken = take(Flicker(0), 3);
        assert_eq!(taken.next(), Some(1));
        assert_eq!(taken.next(), None);
        assert_eq!(taken.next(), None);

        let mut skipped = skip(Flicker(0), 1);
        assert_eq!(skipped.next(), None);
        assert_eq!(skipped.next(), None);
    }

    #[test]
    fn test_take_and_skip_complement() {
        let data = [5, 6, 7, 8, 9];
        for n in 0..7 {
            let mut joined: Vec<_> = take(data, n).collect();
            joined.extend(skip(data, n));
            assert_eq!(joined, data.to_vec());
        }
    }
}
