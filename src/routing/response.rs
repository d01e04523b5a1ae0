//! Response sink handed to handlers and middleware.
//!
//! # Responsibilities
//! - Collect status, headers and body written by a handler
//! - Convert the collected response into an axum `Response`
//!
//! # Design Decisions
//! - The first explicit status wins; later `set_status` calls are ignored
//! - Writing body bytes without a status implies 200 OK
//! - Header writes after the status is committed are still accepted because
//!   nothing is flushed until the handler returns

use axum::body::Body;
use axum::http::header::{self, HeaderMap, HeaderName, HeaderValue};
use axum::http::StatusCode;
use axum::response::Response;
use serde::Serialize;

#[derive(Debug, Default)]
pub struct ResponseWriter {
    status: Option<StatusCode>,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl ResponseWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commits the response status. Only the first call has an effect.
    pub fn set_status(&mut self, status: StatusCode) {
        if self.status.is_none() {
            self.status = Some(status);
        }
    }

    /// The committed status, or 200 if nothing has been committed yet.
    pub fn status(&self) -> StatusCode {
        self.status.unwrap_or(StatusCode::OK)
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// Sets a header from static parts, replacing any previous value.
    pub fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.insert(name, value);
    }

    pub fn write(&mut self, bytes: &[u8]) {
        if self.status.is_none() {
            self.status = Some(StatusCode::OK);
        }
        self.body.extend_from_slice(bytes);
    }

    pub fn write_str(&mut self, text: &str) {
        self.write(text.as_bytes());
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Writes `value` as a JSON body with the matching content type.
    ///
    /// A value that fails to serialize produces a 500 instead.
    pub fn json<T: Serialize + ?Sized>(&mut self, status: StatusCode, value: &T) {
        match serde_json::to_vec(value) {
            Ok(bytes) => {
                self.set_header(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json"),
                );
                self.set_status(status);
                self.write(&bytes);
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize JSON response");
                self.set_status(StatusCode::INTERNAL_SERVER_ERROR);
                self.write_str("500 internal server error");
            }
        }
    }

    pub fn html(&mut self, status: StatusCode, markup: &str) {
        self.set_header(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/html; charset=utf-8"),
        );
        self.set_status(status);
        self.write_str(markup);
    }

    /// Plain-text response, as used by the router's own 404 and 405 outcomes.
    pub fn text(&mut self, status: StatusCode, text: &str) {
        self.set_header(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/plain; charset=utf-8"),
        );
        self.set_status(status);
        self.write_str(text);
    }

    pub fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = self.status.unwrap_or(StatusCode::OK);
        *response.headers_mut() = self.headers;
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_status_wins() {
        let mut w = ResponseWriter::new();
        w.set_status(StatusCode::CREATED);
        w.set_status(StatusCode::BAD_REQUEST);
        assert_eq!(w.status(), StatusCode::CREATED);
    }

    #[test]
    fn test_write_implies_ok() {
        let mut w = ResponseWriter::new();
        w.write_str("hello");
        w.set_status(StatusCode::NOT_FOUND);
        assert_eq!(w.status(), StatusCode::OK);
        assert_eq!(w.body(), b"hello");
    }

    #[test]
    fn test_json_sets_content_type() {
        let mut w = ResponseWriter::new();
        w.json(StatusCode::OK, &serde_json::json!({ "ok": true }));
        assert_eq!(w.headers()[header::CONTENT_TYPE], "application/json");
        assert_eq!(w.body(), br#"{"ok":true}"#);

        let response = w.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
