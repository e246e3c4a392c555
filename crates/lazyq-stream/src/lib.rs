#![forbid(unsafe_code)]
//! lazyq-stream: the asynchronous twin of `lazyq-operators`.
//!
//! Every operator keeps the synchronous contract (ordering, multiplicity,
//! laziness, `take` never over-pulling) while allowing two kinds of
//! suspension: awaiting the next upstream element, and awaiting a
//! caller-supplied predicate/selector/key. Callbacks return
//! `impl IntoFuture`, so both `async` blocks and `std::future::ready(v)` work.
//!
//! Elements are always yielded in upstream order. The only place futures run
//! side by side is `order_by`'s key stage, whose results are re-paired with
//! their elements before the (deterministic) sort.

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
pub use concat::{append, concat, prepend};
pub use element::{all, any, any_by, first, first_by, to_vec};
pub use filter::filter;
pub use map::select;
pub use partition::{skip, take};
pub use set::{distinct_by, except_by, intersect_by, union_by};
pub use sort::order_by;
pub use traits::{AsyncSequence, SequenceStream};
