//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP/TLS connection
//!     → server.rs (Axum setup, shared by both listeners)
//!     → request.rs (normalize into a RequestRecord)
//!     → [routing table picks the handler]
//!     → response.rs (apply defaults, serialize JSON, log)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestIdGen, RequestRecord, X_REQUEST_ID};
pub use response::HandlerReply;
pub use server::HttpServer;
