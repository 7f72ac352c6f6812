//! Handler results and the response writer.
//!
//! # Responsibilities
//! - Carry a handler's (status, body) back to the transport
//! - Apply defaults: 200 for a missing/invalid status, `{}` for a
//!   missing/non-object body
//! - Serialize the body as JSON and set the content-type header
//! - Emit one log line per completed request
//!
//! # Design Decisions
//! - Single atomic write per request; no streaming, no retry
//! - Defaulting lives here, not in handlers, so every response passes
//!   through the same coercion

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::{Map, Value};

/// What a handler produced for one request.
///
/// Both fields are optional; the writer resolves absent or malformed values
/// to defaults rather than surfacing an error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HandlerReply {
    /// HTTP status code. Invalid codes are coerced to 200.
    pub status: Option<u16>,
    /// JSON body. Anything but an object is coerced to `{}`.
    pub body: Option<Value>,
}

impl HandlerReply {
    /// Reply with a status and no body.
    pub fn with_status(status: u16) -> Self {
        Self {
            status: Some(status),
            body: None,
        }
    }

    /// Attach a body.
    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Serialize a handler reply into the wire response and log the outcome.
pub fn write_reply(reply: HandlerReply) -> Response {
    let status = reply
        .status
        .and_then(|code| StatusCode::from_u16(code).ok())
        .unwrap_or(StatusCode::OK);

    let body = match reply.body {
        Some(Value::Object(map)) => Value::Object(map),
        _ => Value::Object(Map::new()),
    };
    let payload = body.to_string();

    tracing::info!(
        status = status.as_u16(),
        payload = %payload,
        "Returning response"
    );

    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        payload,
    )
        .into_response()
}
