//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store the static path → handler table
//! - Look up the handler for a normalized path
//! - Resolve misses to the not-found fallback
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(1) exact-path lookup via HashMap
//! - Explicit fallback rather than silent drop

use std::collections::HashMap;
use std::sync::Arc;

use crate::handlers::{Handler, Hello, NotFound, Ping};

/// Static mapping from normalized path to handler.
///
/// Keys are paths with leading/trailing slashes already stripped, matching
/// what the request normalizer produces.
pub struct RouterTable {
    routes: HashMap<String, Arc<dyn Handler>>,
    fallback: Arc<dyn Handler>,
}

impl RouterTable {
    /// Build the table with the full handler set registered.
    pub fn new() -> Self {
        let mut routes: HashMap<String, Arc<dyn Handler>> = HashMap::new();
        routes.insert("ping".to_string(), Arc::new(Ping));
        routes.insert("hello".to_string(), Arc::new(Hello));

        Self {
            routes,
            fallback: Arc::new(NotFound),
        }
    }

    /// Look up the handler for a normalized path.
    ///
    /// Every path resolves to exactly one handler; unknown paths get the
    /// fallback.
    pub fn resolve(&self, path: &str) -> &dyn Handler {
        self.routes
            .get(path)
            .map(|h| h.as_ref())
            .unwrap_or_else(|| self.fallback.as_ref())
    }

    /// Whether a path has a dedicated (non-fallback) entry.
    pub fn is_registered(&self, path: &str) -> bool {
        self.routes.contains_key(path)
    }
}

impl Default for RouterTable {
    fn default() -> Self {
        Self::new()
    }
}
