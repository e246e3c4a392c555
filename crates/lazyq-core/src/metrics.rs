//! Metrics/tracing hooks.
//!
//! Compiled to no-ops unless the `tracing` feature is on. Wire a subscriber
//! up in the binary layer to see them.

use crate::config::QueryConfig;

/// Record a finished terminal evaluation: operator name and elements pulled.
#[cfg(feature = "tracing")]
pub fn emit_terminal(cfg: &QueryConfig, op: &'static str, pulled: usize) {
    if cfg.trace_terminals {
        tracing::trace!(op, pulled, "terminal evaluated");
    }
}

#[cfg(not(feature = "tracing"))]
pub fn emit_terminal(_cfg: &QueryConfig, _op: &'static str, _pulled: usize) { /* no-op */
}

/// A one-shot source was asked for a second traversal.
#[cfg(feature = "tracing")]
pub fn emit_exhausted_source(kind: &'static str) {
    tracing::warn!(kind, "one-shot source traversed again; yielding nothing");
}

#[cfg(not(feature = "tracing"))]
pub fn emit_exhausted_source(_kind: &'static str) { /* no-op */
}

/// Async `order_by` finished buffering and is about to resolve keys.
#[cfg(feature = "tracing")]
pub fn emit_sort_buffered(buffered: usize, concurrency: usize) {
    tracing::trace!(buffered, concurrency, "order_by resolving keys");
}

#[cfg(not(feature = "tracing"))]
pub fn emit_sort_buffered(_buffered: usize, _concurrency: usize) { /* no-op */
}
