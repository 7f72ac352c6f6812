//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once at startup
//! - Derive the default filter from the configured log level
//! - Let `RUST_LOG` override everything for ad-hoc debugging

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber.
///
/// `level` comes from the configuration and seeds the default filter for
/// this crate and the HTTP middleware; `RUST_LOG` takes precedence when set.
pub fn init(level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(format!(
                    "http_dispatcher={level},tower_http={level}"
                ))
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
