//! Numeric conversion for `sum`/`min`/`max`.
//!
//! Aggregates accept anything that can report itself as an `f64`. Values that
//! are not numbers at all (a JSON string, say) report `None`; NaN and the
//! infinities are rejected separately by [`ensure_finite`].

use crate::error::{Error, Result};

pub trait Numeric {
    fn to_number(&self) -> Option<f64>;
}

macro_rules! impl_numeric {
    ($($t:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                #[inline]
                fn to_number(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }
        )*
    };
}

impl_numeric!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl Numeric for serde_json::Value {
    fn to_number(&self) -> Option<f64> {
        self.as_f64()
    }
}

impl<N: Numeric + ?Sized> Numeric for &N {
    fn to_number(&self) -> Option<f64> {
        (**self).to_number()
    }
}

impl<N: Numeric> Numeric for Option<N> {
    fn to_number(&self) -> Option<f64> {
        self.as_ref().and_then(Numeric::to_number)
    }
}

/// Resolve a selected value to a finite `f64`, naming the aggregate `op` in
/// the error.
pub fn ensure_finite<N: Numeric + ?Sized>(value: &N, op: &str) -> Result<f64> {
    value
        .to_number()
        .filter(|v| v.is_finite())
        .ok_or_else(|| Error::type_conversion(format!("{op}: value must be a finite number.")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_primitives_convert() {
        assert_eq!(ensure_finite(&3u8, "sum").unwrap(), 3.0);
        assert_eq!(ensure_finite(&-2i64, "sum").unwrap(), -2.0);
        assert_eq!(ensure_finite(&1.5f32, "sum").unwrap(), 1.5);
    }

    #[test]
    fn test_non_finite_rejected() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = ensure_finite(&bad, "max").unwrap_err();
            assert_eq!(err.to_string(), "max: value must be a finite number.");
        }
    }

    #[test]
    fn test_json_values() {
        assert_eq!(ensure_finite(&json!(4), "sum").unwrap(), 4.0);
        assert!(ensure_finite(&json!("4"), "sum").is_err());
        assert!(ensure_finite(&json!(null), "min").is_err());
    }

    #[test]
    fn test_missing_is_not_numeric() {
        assert!(ensure_finite(&None::<i32>, "sum").is_err());
        assert_eq!(ensure_finite(&Some(2), "sum").unwrap(), 2.0);
    }
}
