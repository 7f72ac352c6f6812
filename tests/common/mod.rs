//! Shared utilities for integration testing.

use std::net::SocketAddr;

use http_dispatcher::{AppConfig, HttpServer, RouterTable};

/// Spawn the dispatcher's router on an ephemeral plaintext listener and
/// return its address.
pub async fn spawn_dispatcher() -> SocketAddr {
    spawn_with(AppConfig::default()).await
}

/// Same, with a caller-supplied configuration.
pub async fn spawn_with(config: AppConfig) -> SocketAddr {
    let server = HttpServer::new(config, RouterTable::new());
    let app = server.router();

    // Bind before spawning so the address is connectable on return.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
