#![forbid(unsafe_code)]
//! lazyq-query: immutable, re-chainable query handles.
//!
//! A handle binds one source. Every operator call returns a *new* handle whose
//! source is an operator node wrapping the old one; nothing runs until a
//! terminal (`to_vec`, `first`, `sum`, ...) or direct iteration starts a
//! traversal, at which point the whole chain executes in a single pass.
//!
//! Argument checks (counts) happen when the chain is built, so a bad `take`
//! fails at the call site, not during evaluation.

mod counted;

pub mod async_query;
pub mod query;
pub mod source;

pub use async_query::{from_async, AsyncQuery};
pub use query::{from, Query};
pub use source::{BridgeSource, OnceSource, OnceStreamSource, VecSource};
