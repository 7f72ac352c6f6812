//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Normalized path ("ping", "hello", ...)
//!     → router.rs (exact-match lookup)
//!     → Return: registered handler, or the not-found fallback
//!
//! Table Construction (at startup):
//!     handler set → HashMap<path, handler> → frozen as immutable RouterTable
//! ```
//!
//! # Design Decisions
//! - Table built once at startup, immutable at runtime
//! - Exact string match only: no prefixes, no wildcards, no method dispatch
//! - A miss resolves to the fallback handler, never to a dropped request

pub mod router;

pub use router::RouterTable;
