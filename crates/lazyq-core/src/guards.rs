//! Argument guards run at chain-construction time.
//!
//! Closures and sources are checked by the type system; counts are the only
//! arguments that still need a runtime check. Non-integer counts do not
//! type-check, so the guard only has to reject negatives and overflow.

use crate::error::{Error, Result};

/// Integer types accepted wherever an element count is expected.
pub trait Count: Copy {
    fn is_negative(self) -> bool;
    fn to_usize(self) -> Option<usize>;
}

macro_rules! impl_count {
    ($($t:ty),* $(,)?) => {
        $(
            impl Count for $t {
                #[allow(unused_comparisons)]
                fn is_negative(self) -> bool {
                    self < 0
                }

                fn to_usize(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }
            }
        )*
    };
}

impl_count!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Convert a caller-supplied count into `usize`, rejecting negatives and
/// values that do not fit.
pub fn ensure_count<C: Count>(count: C, name: &str) -> Result<usize> {
    if count.is_negative() {
        return Err(Error::validation(format!("{name} must be non-negative.")));
    }
    count
        .to_usize()
        .ok_or_else(|| Error::validation(format!("{name} must be a finite integer.")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_non_negative() {
        assert_eq!(ensure_count(0, "count").unwrap(), 0);
        assert_eq!(ensure_count(5u8, "count").unwrap(), 5);
        assert_eq!(ensure_count(7i64, "count").unwrap(), 7);
        assert_eq!(ensure_count(9usize, "count").unwrap(), 9);
    }

    #[test]
    fn test_rejects_negative() {
        let err = ensure_count(-1, "count").unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(err.to_string(), "count must be non-negative.");
    }

    #[test]
    fn test_rejects_overflow() {
        let err = ensure_count(u128::MAX, "count").unwrap_err();
        assert_eq!(err.to_string(), "count must be a finite integer.");
    }
}
