//! Plaintext TCP listener binding.
//!
//! # Responsibilities
//! - Bind to the configured port on all interfaces
//! - Surface bind failures as typed, fatal errors
//!
//! There is no admission control here: every accepted connection flows
//! straight into the HTTP layer.

use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;

/// Error type for listener operations.
#[derive(Debug, Error)]
pub enum ListenerError {
    /// Failed to bind to address.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },
}

/// Bind a plaintext listener on the given port, on all interfaces.
pub async fn bind(port: u16) -> Result<TcpListener, ListenerError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ListenerError::Bind { addr, source })?;

    tracing::debug!(address = %addr, "Listener bound");

    Ok(listener)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn binding_a_taken_port_fails() {
        // Hold a port, then try to bind it again.
        let first = TcpListener::bind("0.0.0.0:0").await.unwrap();
        let port = first.local_addr().unwrap().port();

        let err = bind(port).await.unwrap_err();
        let ListenerError::Bind { addr, .. } = err;
        assert_eq!(addr.port(), port);
    }
}
