//! Dual-protocol HTTP request dispatcher.
//!
//! Two listeners (plaintext and TLS) feed one pipeline:
//!
//! ```text
//! TCP / TLS connection
//!     → net       (listener pair, certificate loading)
//!     → http      (normalize request, dispatch, write JSON response)
//!     → routing   (exact-path lookup in a static table)
//!     → handlers  (pure functions: record → status + body)
//! ```

// Core subsystems
pub mod config;
pub mod handlers;
pub mod http;
pub mod net;
pub mod routing;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::RouterTable;
