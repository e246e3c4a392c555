#![forbid(unsafe_code)]
//! lazyq-operators: deferred synchronous operators over `Iterator`s.
//!
//! Design intent:
//! - Every transformation is an iterator adapter that does no work until
//!   `next()` is called, and pulls from its upstream one element at a time.
//! - `order_by` and the `other` side of `intersect`/`except` are the only
//!   places that buffer; they do so on the first pull, never at construction.
//! - Terminal functions (`to_vec`, `first`, `sum`, ...) drive exactly one pass.
//! - A [`Sequence`] hands out fresh traversals; query handles chain nodes
//!   built on top of it.

pub mod aggregate;
pub mod concat;
pub mod element;
pub mod filter;
pub mod map;
pub mod partition;
pub mod set;
pub mod sort;
pub mod traits;

pub use aggregate::{count, count_by, max, max_by, min, min_by, sum, sum_by};
pub use concat::{append, concat, prepend, Append, Concat, Prepend};
pub use element::{all, any, any_by, first, first_by, to_vec};
pub use filter::{filter, Where};
pub use map::{select, Select};
pub use partition::{skip, take, Skip, Take};
pub use set::{distinct_by, except_by, intersect_by, union_by, Distinct, Except, Intersect, Union};
pub use sort::{order_by, OrderBy};
pub use traits::{boxed, FnSequence, Sequence, Traversal};
