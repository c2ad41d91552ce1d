//! HTTP server lifecycle.
//!
//! # Responsibilities
//! - Bind the configured port and accept connections
//! - Apply the fixed timeout policy to every connection
//! - Dispatch requests to the supplied router
//! - Report terminal listener errors to the caller
//!
//! # Design Decisions
//! - `serve` is one blocking call: it is the process main loop, and it
//!   returns only on a fatal listener error
//! - Per-connection failures (timeouts, protocol garbage) stay on their
//!   connection and are traced at debug level, never logged as fatal

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use hyper_util::rt::{TokioExecutor, TokioIo, TokioTimer};
use hyper_util::server::conn::auto::Builder as ConnectionBuilder;
use hyper_util::service::TowerToHyperService;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::app::AppContext;
use crate::http::timeouts::{TimedStream, TimeoutPolicy};

/// Terminal failures of the listener. Both are fatal to the run; there
/// is no retry.
#[derive(Debug, Error)]
pub enum ServeError {
    /// The configured port could not be bound (in use, permission
    /// denied).
    #[error("failed to bind port {port}: {source}")]
    Bind {
        port: u16,
        #[source]
        source: io::Error,
    },

    /// The accept loop failed after a successful bind.
    #[error("listener failed: {0}")]
    Transport(#[source] io::Error),
}

/// The HTTP server: `Unstarted` on construction, `Listening` once
/// `serve` binds, `Terminated` when `serve` returns.
pub struct Server {
    ctx: Arc<AppContext>,
    dispatcher: Router,
    timeouts: TimeoutPolicy,
}

impl Server {
    /// Create a server over the shared context and a request
    /// dispatcher. Any router works; tests pass a stub table.
    pub fn new(ctx: Arc<AppContext>, dispatcher: Router) -> Self {
        Self {
            ctx,
            dispatcher,
            timeouts: TimeoutPolicy::default(),
        }
    }

    /// Replace the timeout policy. Tests shorten deadlines with this;
    /// production keeps the default.
    pub fn with_timeouts(mut self, timeouts: TimeoutPolicy) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Bind `0.0.0.0:<port>` and serve until the listener fails.
    ///
    /// Blocks the calling task for the life of the server. Each
    /// accepted connection runs on its own task under the connection
    /// timeout policy.
    pub async fn serve(self) -> Result<(), ServeError> {
        let port = self.ctx.config.port;

        self.ctx.info_log.print(format_args!(
            "Listening in {} mode on port {}",
            self.ctx.config.env, port
        ));

        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServeError::Bind { port, source })?;

        // Core middleware goes on top of whatever dispatcher we were
        // handed: whole-request deadline, then request tracing.
        let app = self
            .dispatcher
            .layer(TimeoutLayer::new(self.timeouts.read))
            .layer(TraceLayer::new_for_http());

        let mut builder = ConnectionBuilder::new(TokioExecutor::new());
        builder
            .http1()
            .timer(TokioTimer::new())
            .header_read_timeout(self.timeouts.read_header);
        builder.http2().timer(TokioTimer::new());
        let builder = Arc::new(builder);

        loop {
            let (stream, peer) = listener.accept().await.map_err(ServeError::Transport)?;
            let stream = TimedStream::new(stream, &self.timeouts);
            let service = TowerToHyperService::new(app.clone());
            let builder = builder.clone();

            tokio::spawn(async move {
                let io = TokioIo::new(stream);
                if let Err(err) = builder.serve_connection_with_upgrades(io, service).await {
                    // Slow clients and malformed requests end up here;
                    // the listener keeps running.
                    tracing::debug!(peer = %peer, error = %err, "connection closed with error");
                }
            });
        }
    }
}
