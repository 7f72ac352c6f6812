//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Ctrl+C
//!     → watch_ctrl_c (signal handler)
//!     → Shutdown::trigger
//!     → both listeners observe the broadcast and drain
//! ```
//!
//! # Design Decisions
//! - One broadcast channel fans the signal out to the listener pair
//! - Startup order: config, router table, then listeners

pub mod shutdown;

pub use shutdown::{watch_ctrl_c, Shutdown};
