//! Query configuration that downstream crates can serialize/deserialize.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Upper bound on key futures resolved concurrently by async `order_by`.
    pub key_concurrency: usize,

    /// Emit a trace event after each terminal evaluation.
    pub trace_terminals: bool,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            key_concurrency: 16,
            trace_terminals: true,
        }
    }
}

impl QueryConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `LAZYQ_KEY_CONCURRENCY`: async `order_by` key concurrency (min 1)
    /// - `LAZYQ_TRACE_TERMINALS`: `true`/`false`
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("LAZYQ_KEY_CONCURRENCY") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.key_concurrency = v;
            }
        }

        if let Ok(s) = std::env::var("LAZYQ_TRACE_TERMINALS") {
            if let Ok(v) = s.parse::<bool>() {
                cfg.trace_terminals = v;
            }
        }

        cfg.normalized()
    }

    pub fn with_key_concurrency(mut self, n: usize) -> Self {
        self.key_concurrency = n;
        self.normalized()
    }

    fn normalized(mut self) -> Self {
        self.key_concurrency = self.key_concurrency.max(1);
        self
    }
}
