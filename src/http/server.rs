//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum router with the health endpoint and the /api mount
//! - Wire up middleware (tracing, CORS, body limit, date revival)
//! - Bind to the resolved address/port, surfacing bind failures
//! - Serve with graceful shutdown

use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::errors::BootstrapError;
use crate::http::revive::{revive_request_dates, BODY_LIMIT};
use crate::http::routes;

/// HTTP server for the service, not yet bound.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Build the router with all middleware layers.
    pub fn new() -> Self {
        let router = Router::new()
            .route("/health", get(health_handler))
            .nest("/api", routes::api_router())
            .layer(middleware::from_fn(revive_request_dates))
            .layer(RequestBodyLimitLayer::new(BODY_LIMIT))
            .layer(CorsLayer::new().allow_origin(Any))
            .layer(TraceLayer::new_for_http());

        Self { router }
    }

    /// Expose the router, for tests driving it without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Bind the listener on the resolved address and port.
    ///
    /// The health endpoint only starts answering once the returned
    /// [`BoundServer`] is served; callers must not report the instance as
    /// discoverable before that.
    pub async fn bind(self, address: &str, port: u16) -> Result<BoundServer, BootstrapError> {
        let listener =
            TcpListener::bind((address, port))
                .await
                .map_err(|e| BootstrapError::Listen {
                    addr: format!("{}:{}", address, port),
                    source: e,
                })?;

        let local_addr = listener.local_addr().map_err(|e| BootstrapError::Listen {
            addr: format!("{}:{}", address, port),
            source: e,
        })?;

        tracing::info!(address = %local_addr, "listener bound");

        Ok(BoundServer {
            listener,
            router: self.router,
            local_addr,
        })
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

/// A server whose listener has successfully bound.
pub struct BoundServer {
    listener: TcpListener,
    router: Router,
    local_addr: SocketAddr,
}

impl BoundServer {
    /// The address the listener actually bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Serve until the shutdown signal fires.
    pub async fn serve(self, mut shutdown: broadcast::Receiver<()>) -> std::io::Result<()> {
        let local_addr = self.local_addr;
        tracing::info!(address = %local_addr, "HTTP server starting");

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("HTTP server draining");
            })
            .await?;

        tracing::info!(address = %local_addr, "HTTP server stopped");
        Ok(())
    }
}

/// Fixed liveness answer, independent of bootstrap stage.
async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "UP")
}
