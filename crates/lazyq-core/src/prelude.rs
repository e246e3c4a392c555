//! Convenient re-exports for downstream crates.

pub use crate::compare::{default_compare, identity};
pub use crate::config::QueryConfig;
pub use crate::error::{Error, Result};
pub use crate::guards::{ensure_count, Count};
pub use crate::numeric::{ensure_finite, Numeric};
