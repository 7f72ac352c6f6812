//! HTTP server setup and dispatch.
//!
//! # Responsibilities
//! - Create the Axum router with the catch-all dispatch handler
//! - Wire up middleware (request ID, tracing, timeout)
//! - Bind the listener pair (plaintext + TLS) to the same router
//! - Normalize each request, route it, and write the handler's reply
//!
//! # Design Decisions
//! - One handler for every path and method: routing is the table's job,
//!   not Axum's
//! - The router table is injected through state, never reached as a global
//! - Request state lives on the dispatch task; nothing is shared between
//!   in-flight requests

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::response::Response;
use axum::routing::any;
use axum::Router;
use thiserror::Error;
use tower::ServiceBuilder;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::http::request::{RequestIdGen, RequestRecord, X_REQUEST_ID};
use crate::http::response::{self, HandlerReply};
use crate::lifecycle::Shutdown;
use crate::net::{listener, tls, ListenerError};
use crate::routing::RouterTable;

/// Fatal serving errors. All of these terminate the process.
#[derive(Debug, Error)]
pub enum ServeError {
    #[error(transparent)]
    Listener(#[from] ListenerError),

    #[error("TLS setup failed: {0}")]
    Tls(std::io::Error),

    #[error("server error: {0}")]
    Serve(std::io::Error),
}

/// Application state injected into the dispatch handler.
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<RouterTable>,
    pub max_body_bytes: usize,
}

/// HTTP server for the dispatcher. One instance serves both listeners.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new server from a validated configuration and a built
    /// router table.
    pub fn new(config: AppConfig, table: RouterTable) -> Self {
        let state = AppState {
            table: Arc::new(table),
            max_body_bytes: config.limits.max_body_bytes,
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(dispatch))
            .route("/", any(dispatch))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(RequestIdGen))
                    .layer(PropagateRequestIdLayer::x_request_id())
                    .layer(TraceLayer::new_for_http())
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    ))),
            )
    }

    /// The assembled router, for serving on an externally bound listener.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Run both listeners until shutdown is triggered.
    ///
    /// The plaintext listener binds first; then certificate material is
    /// loaded for the encrypted listener. Failure of either is fatal and
    /// nothing is served.
    pub async fn run(self, shutdown: Shutdown) -> Result<(), ServeError> {
        let Self { router, config } = self;

        let plain = listener::bind(config.http_port).await?;
        tracing::info!(
            port = config.http_port,
            env = %config.env_name,
            "Plaintext listener started"
        );

        let tls_config = tls::load_tls_config(
            Path::new(&config.tls.cert_path),
            Path::new(&config.tls.key_path),
        )
        .await
        .map_err(ServeError::Tls)?;

        let mut plain_rx = shutdown.subscribe();
        let plain_server = axum::serve(plain, router.clone()).with_graceful_shutdown(async move {
            let _ = plain_rx.recv().await;
        });

        // The TLS listener drains through its handle when shutdown fires.
        let handle = axum_server::Handle::new();
        let mut tls_rx = shutdown.subscribe();
        let tls_handle = handle.clone();
        tokio::spawn(async move {
            let _ = tls_rx.recv().await;
            tls_handle.graceful_shutdown(Some(Duration::from_secs(5)));
        });

        let tls_addr = SocketAddr::from(([0, 0, 0, 0], config.https_port));
        let tls_server = axum_server::bind_rustls(tls_addr, tls_config)
            .handle(handle)
            .serve(router.into_make_service());
        tracing::info!(
            port = config.https_port,
            env = %config.env_name,
            "Encrypted listener started"
        );

        tokio::try_join!(
            async { plain_server.await.map_err(ServeError::Serve) },
            async { tls_server.await.map_err(ServeError::Serve) },
        )?;

        tracing::info!("Both listeners stopped");
        Ok(())
    }
}

/// Single dispatch point for every request on either listener.
async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> Response {
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let record = match RequestRecord::from_request(request, state.max_body_bytes).await {
        Ok(record) => record,
        Err(error) => {
            tracing::warn!(request_id = %request_id, error = %error, "Request body rejected");
            return response::write_reply(HandlerReply::with_status(413));
        }
    };

    tracing::debug!(
        request_id = %request_id,
        method = %record.method,
        path = %record.path,
        "Dispatching request"
    );

    let reply = state.table.resolve(&record.path).respond(&record);
    response::write_reply(reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use tower::ServiceExt;

    fn test_server(max_body_bytes: usize) -> Router {
        let mut config = AppConfig::default();
        config.limits.max_body_bytes = max_body_bytes;
        HttpServer::new(config, RouterTable::new()).router()
    }

    #[tokio::test]
    async fn requests_flow_through_the_middleware_stack() {
        let router = test_server(1024);
        let request = Request::builder()
            .uri("/ping")
            .body(Body::empty())
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        // The request ID layer stamps the response.
        assert!(response.headers().contains_key(X_REQUEST_ID));
    }

    #[tokio::test]
    async fn oversize_body_yields_413_with_empty_object() {
        let router = test_server(8);
        let request = Request::builder()
            .method("POST")
            .uri("/hello")
            .body(Body::from("way past the eight byte limit"))
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"{}");
    }

    #[tokio::test]
    async fn root_path_hits_the_fallback() {
        let router = test_server(1024);
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();

        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
