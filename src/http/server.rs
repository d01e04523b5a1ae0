//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum app: static assets plus a fallback into the segment router
//! - Wire up middleware (tracing, request ID, timeout)
//! - Buffer request bodies and hand requests to `routing::Router::dispatch`
//! - Serve with graceful shutdown

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::routing::{ResponseWriter, Router as SegmentRouter};

/// Application state injected into the dispatch handler.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<SegmentRouter>,
    pub max_body_size: usize,
}

/// HTTP server for the settlements dashboard.
pub struct HttpServer {
    app: Router,
}

impl HttpServer {
    /// Create a new HTTP server around a fully registered router.
    pub fn new(config: &AppConfig, router: SegmentRouter) -> Self {
        let state = AppState {
            router: Arc::new(router),
            max_body_size: config.server.max_body_size,
        };
        Self {
            app: Self::build_app(config, state),
        }
    }

    /// Build the Axum app with all middleware layers.
    #[allow(deprecated)]
    fn build_app(config: &AppConfig, state: AppState) -> Router {
        Router::new()
            .nest_service("/static", ServeDir::new(&config.server.static_dir))
            .fallback(dispatch_handler)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.server.request_timeout_secs,
            )))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// The Axum app, for driving requests without a socket.
    pub fn app(&self) -> Router {
        self.app.clone()
    }

    /// Serve on `listener` until `signal` completes, then drain in-flight
    /// connections.
    pub async fn run<S>(self, listener: TcpListener, signal: S) -> Result<(), std::io::Error>
    where
        S: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.app)
            .with_graceful_shutdown(async move {
                signal.await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Buffers the body and runs the request through the segment router.
async fn dispatch_handler(State(state): State<AppState>, request: Request) -> Response {
    let (parts, body) = request.into_parts();

    let bytes = match axum::body::to_bytes(body, state.max_body_size).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(path = %parts.uri.path(), error = %e, "Failed to read request body");
            return (StatusCode::PAYLOAD_TOO_LARGE, "413 payload too large").into_response();
        }
    };

    let request = axum::http::Request::from_parts(parts, bytes);
    let mut writer = ResponseWriter::new();
    state.router.dispatch(&request, &mut writer);
    writer.into_response()
}
