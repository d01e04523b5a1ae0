//! Built-in router middleware.

use std::time::Instant;

use axum::http::header::{self, HeaderValue};

use crate::routing::router::{handler_fn, Handler};

/// Logs method, path, status and latency of every routed request.
pub fn request_logger() -> impl Fn(Handler) -> Handler + Send + Sync + 'static {
    |next: Handler| {
        handler_fn(move |w, req, params| {
            let start = Instant::now();
            next(w, req, params);

            let request_id = req
                .headers()
                .get("x-request-id")
                .and_then(|v| v.to_str().ok())
                .unwrap_or("unknown");

            tracing::info!(
                request_id = %request_id,
                method = %req.method(),
                path = %req.uri().path(),
                status = w.status().as_u16(),
                elapsed_us = start.elapsed().as_micros() as u64,
                "Request handled"
            );
        })
    }
}

/// Adds conservative browser security headers to routed responses.
pub fn security_headers() -> impl Fn(Handler) -> Handler + Send + Sync + 'static {
    |next: Handler| {
        handler_fn(move |w, req, params| {
            next(w, req, params);

            let headers = w.headers_mut();
            headers
                .entry(header::X_CONTENT_TYPE_OPTIONS)
                .or_insert(HeaderValue::from_static("nosniff"));
            headers
                .entry(header::X_FRAME_OPTIONS)
                .or_insert(HeaderValue::from_static("DENY"));
            headers
                .entry(header::REFERRER_POLICY)
                .or_insert(HeaderValue::from_static("same-origin"));
        })
    }
}
