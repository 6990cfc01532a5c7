//! Server lifecycle: route construction, listener bind, timeout policy,
//! and signal-driven stop.
//!
//! Lifecycle: Created -> Routed (route table built) -> Listening ->
//! ShuttingDown (signal received) -> Stopped. Shutdown stops accepting
//! new connections and abandons in-flight requests; there is no drain
//! phase.

use crate::config::ServerConfig;
use crate::error::StartupError;
use crate::routes::build_router;
use crate::state::AppState;
use axum::Router;
use std::future::{Future, IntoFuture};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{catch_panic::CatchPanicLayer, timeout::TimeoutLayer, trace::TraceLayer};

pub struct Server {
    config: ServerConfig,
    router: Router,
}

impl Server {
    /// Builds the route table and attaches the middleware stack. Duplicate
    /// routes surface here, before any socket is opened.
    pub fn new(config: ServerConfig, state: AppState) -> Result<Self, StartupError> {
        // Catch-panic sits outermost so even middleware failures are
        // reported to the client as 500 instead of a dropped connection.
        let router = build_router(state)?
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(config.request_deadline()))
            .layer(CatchPanicLayer::new());
        tracing::info!(port = %config.listen_port, "routes registered");
        Ok(Self { config, router })
    }

    /// Binds the listener and serves until `shutdown` resolves.
    ///
    /// Bind failure is fatal. When `shutdown` resolves the serve future is
    /// dropped: no new connections are accepted and in-flight requests are
    /// not drained.
    pub async fn run(self, shutdown: impl Future<Output = ()>) -> Result<(), StartupError> {
        let addr = format!("0.0.0.0:{}", self.config.listen_port);
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| StartupError::Bind {
                addr: addr.clone(),
                source,
            })?;
        tracing::info!(
            %addr,
            read_timeout = ?self.config.read_timeout,
            write_timeout = ?self.config.write_timeout,
            idle_timeout = ?self.config.idle_timeout,
            "server listening"
        );

        let app = self
            .router
            .into_make_service_with_connect_info::<SocketAddr>();
        tokio::select! {
            result = axum::serve(listener, app).into_future() => {
                result.map_err(StartupError::Serve)?;
            }
            _ = shutdown => {
                tracing::info!("shutdown signal received, stopping listener");
            }
        }
        tracing::info!("server stopped");
        Ok(())
    }
}

/// Resolves on SIGINT or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
