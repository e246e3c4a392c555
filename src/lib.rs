#![forbid(unsafe_code)]
//! lazyq: deferred, composable queries over iterators, streams and JSON.
//!
//! ```
//! use lazyq::Query;
//!
//! let evens = Query::from(vec![1, 2, 3, 4]).filter(|x, _| x % 2 == 0);
//! assert_eq!(evens.select(|x, _| x * 10).to_vec(), vec![20, 40]);
//! ```

pub use lazyq_core::prelude::*;
pub use lazyq_core::{compare, config, error, guards, metrics, numeric};
pub use lazyq_json::{
    compare_values, from_json, from_json_array, from_json_array_as, from_json_object,
};
pub use lazyq_operators as operators;
pub use lazyq_query::{
    from, from_async, AsyncQuery, BridgeSource, OnceSource, OnceStreamSource, Query, VecSource,
};
pub use lazyq_stream as stream;
