//! Request normalization.
//!
//! # Responsibilities
//! - Generate unique request IDs for tracing
//! - Flatten an incoming request into a uniform [`RequestRecord`]
//! - Bound body accumulation at the configured limit
//!
//! # Design Decisions
//! - Record is built once per request and never mutated afterwards
//! - Body is decoded as UTF-8 best-effort; malformed bytes are replaced,
//!   never rejected
//! - Both listeners produce identical records, so nothing downstream knows
//!   which transport a request arrived on

use std::collections::HashMap;

use axum::body::Body;
use axum::http::header::HeaderValue;
use axum::http::Request;
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Header carrying the per-request correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Generates a UUID v4 for each incoming request.
#[derive(Clone, Copy, Default)]
pub struct RequestIdGen;

impl MakeRequestId for RequestIdGen {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// The uniform internal representation of an inbound request, regardless of
/// originating listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestRecord {
    /// URI path with leading and trailing slashes stripped.
    pub path: String,
    /// Lowercase method name.
    pub method: String,
    /// Flat query-string mapping; the last value wins on duplicate keys.
    pub query: HashMap<String, String>,
    /// Header mapping; duplicate header values are comma-joined.
    pub headers: HashMap<String, String>,
    /// Accumulated body, decoded as UTF-8 text.
    pub body: String,
}

impl RequestRecord {
    /// Normalize a raw request, accumulating at most `max_body_bytes` of
    /// body. The only failure is a body that cannot be read within that
    /// limit.
    pub async fn from_request(
        request: Request<Body>,
        max_body_bytes: usize,
    ) -> Result<Self, axum::Error> {
        let (parts, body) = request.into_parts();

        let path = parts.uri.path().trim_matches('/').to_string();
        let method = parts.method.as_str().to_lowercase();

        let query: HashMap<String, String> =
            url::form_urlencoded::parse(parts.uri.query().unwrap_or("").as_bytes())
                .into_owned()
                .collect();

        let mut headers: HashMap<String, String> = HashMap::new();
        for (name, value) in parts.headers.iter() {
            let value = String::from_utf8_lossy(value.as_bytes());
            headers
                .entry(name.as_str().to_string())
                .and_modify(|existing| {
                    existing.push_str(", ");
                    existing.push_str(&value);
                })
                .or_insert_with(|| value.into_owned());
        }

        let bytes = axum::body::to_bytes(body, max_body_bytes).await?;
        let body = String::from_utf8_lossy(&bytes).into_owned();

        Ok(Self {
            path,
            method,
            query,
            headers,
            body,
        })
    }
}
