#![forbid(unsafe_code)]
//! lazyq-core: shared vocabulary for the lazyq query pipelines.
//!
//! Everything here is free of iteration logic: the error taxonomy, the named
//! defaults (`identity`, `default_compare`), argument guards, numeric
//! conversion for aggregates, configuration and tracing hooks. Both the
//! synchronous and asynchronous operator crates depend on this crate only.

pub mod compare;
pub mod config;
pub mod error;
pub mod guards;
pub mod metrics;
pub mod numeric;
pub mod prelude;

pub use compare::{default_compare, identity};
pub use config::QueryConfig;
pub use error::{Error, Result};
pub use numeric::Numeric;
