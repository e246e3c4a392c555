//! Named defaults for optional key selectors and comparers.

use std::cmp::Ordering;

/// Identity key selector: the element is its own key.
pub fn identity<T: Clone>(item: &T) -> T {
    item.clone()
}

/// Natural-order comparer used when `order_by` is given no comparer.
///
/// Equal values compare `Equal`. Missing values rank first because
/// `Option<K>` keys order `None` before any `Some(_)`. Pairs that `PartialOrd`
/// cannot order (NaN) also compare `Equal`, which keeps the sort stable.
pub fn default_compare<K: PartialOrd + ?Sized>(a: &K, b: &K) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    if a < b {
        Ordering::Less
    } else if a > b {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_order() {
        assert_eq!(default_compare(&1, &2), Ordering::Less);
        assert_eq!(default_compare(&2, &1), Ordering::Greater);
        assert_eq!(default_compare(&"b", &"b"), Ordering::Equal);
    }

    #[test]
    fn test_missing_ranks_below_values() {
        assert_eq!(default_compare(&None, &Some(-100)), Ordering::Less);
        assert_eq!(default_compare(&Some(0), &None), Ordering::Greater);
        assert_eq!(default_compare::<Option<i32>>(&None, &None), Ordering::Equal);
    }

    #[test]
    fn test_nan_is_unordered() {
        assert_eq!(default_compare(&f64::NAN, &1.0), Ordering::Equal);
    }
}
