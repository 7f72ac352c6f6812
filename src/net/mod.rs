//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     listener.rs binds the plaintext port
//!     tls.rs loads certificate material for the encrypted port
//!     → both listeners hand connections to the same HTTP layer
//! ```
//!
//! # Design Decisions
//! - Bind or certificate failure at startup is fatal
//! - Both transports serve identical routing logic

pub mod listener;
pub mod tls;

pub use listener::ListenerError;
