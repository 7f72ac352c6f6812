//! The handler set.
//!
//! # Design Decisions
//! - Handlers are pure: no I/O, no shared state, output depends only on the
//!   normalized record
//! - Each handler runs exactly once per request, on the dispatch task
//! - Missing status/body fields are resolved by the response writer, so
//!   handlers only state what they care about

use serde_json::json;

use crate::http::request::RequestRecord;
use crate::http::response::HandlerReply;

/// A named handler: maps a normalized request to a status code and body.
pub trait Handler: Send + Sync {
    /// Produce the reply for one request.
    fn respond(&self, record: &RequestRecord) -> HandlerReply;
}

/// Liveness probe. Ignores its input entirely.
pub struct Ping;

impl Handler for Ping {
    fn respond(&self, _record: &RequestRecord) -> HandlerReply {
        HandlerReply::with_status(200)
    }
}

/// Greeting endpoint.
pub struct Hello;

impl Handler for Hello {
    fn respond(&self, _record: &RequestRecord) -> HandlerReply {
        HandlerReply::with_status(200).body(json!({ "message": "hello friend!" }))
    }
}

/// Fallback for paths with no table entry.
pub struct NotFound;

impl Handler for NotFound {
    fn respond(&self, _record: &RequestRecord) -> HandlerReply {
        HandlerReply::with_status(404)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_record() -> RequestRecord {
        RequestRecord {
            path: String::new(),
            method: "get".to_string(),
            query: Default::default(),
            headers: Default::default(),
            body: String::new(),
        }
    }

    #[test]
    fn ping_replies_200_without_body() {
        let reply = Ping.respond(&empty_record());
        assert_eq!(reply.status, Some(200));
        assert_eq!(reply.body, None);
    }

    #[test]
    fn hello_replies_200_with_greeting() {
        let reply = Hello.respond(&empty_record());
        assert_eq!(reply.status, Some(200));
        assert_eq!(reply.body, Some(json!({ "message": "hello friend!" })));
    }

    #[test]
    fn not_found_replies_404_without_body() {
        let reply = NotFound.respond(&empty_record());
        assert_eq!(reply.status, Some(404));
        assert_eq!(reply.body, None);
    }

    #[test]
    fn handlers_ignore_the_record() {
        let mut record = empty_record();
        record.path = "hello".to_string();
        record.method = "post".to_string();
        record.body = "some payload".to_string();
        record.query.insert("x".to_string(), "1".to_string());

        assert_eq!(Hello.respond(&record), Hello.respond(&empty_record()));
        assert_eq!(Ping.respond(&record), Ping.respond(&empty_record()));
    }
}
