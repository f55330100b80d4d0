//! HTTP status server exposing the host snapshot.

mod error;
mod routes;

use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use crate::config::Config;
use crate::host::SnapshotCache;
use crate::shutdown::{ShutdownHandle, ShutdownManager};

pub use error::ServerError;
pub use routes::{build_router, Heartbeat, ServerState};

pub struct StatusServer {
    addr: SocketAddr,
    /// Bound at construction so the port is held until `run()`.
    listener: TcpListener,
    state: ServerState,
    shutdown: Arc<ShutdownManager>,
}

impl StatusServer {
    /// Binds the configured address with the system probe behind `/s`.
    pub async fn bind(config: &Config) -> Result<Self, ServerError> {
        let max_age = Duration::from_secs(config.server.snapshot_max_age_seconds);
        Self::bind_with_cache(config, SnapshotCache::system(max_age)).await
    }

    pub async fn bind_with_cache(
        config: &Config,
        cache: SnapshotCache,
    ) -> Result<Self, ServerError> {
        let requested = config.bind_addr()?;
        let listener = TcpListener::bind(requested)
            .await
            .map_err(|e| ServerError::Bind {
                addr: requested.to_string(),
                source: e,
            })?;
        let addr = listener.local_addr()?;

        Ok(Self {
            addr,
            listener,
            state: ServerState {
                cache,
                user: config.panel.user.clone(),
            },
            shutdown: Arc::new(ShutdownManager::new()),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn handle(&self) -> ShutdownHandle {
        ShutdownHandle::new(Arc::clone(&self.shutdown))
    }

    /// Serves until Ctrl-C, SIGTERM or the handle asks to stop.
    pub async fn run(self) -> Result<(), ServerError> {
        tracing::info!("Listening on http://{}", self.addr);

        let app = build_router(self.state);
        let shutdown = Arc::clone(&self.shutdown);
        axum::serve(self.listener, app)
            .with_graceful_shutdown(async move {
                if let Err(err) = shutdown.wait_for_shutdown().await {
                    tracing::warn!(error = %err, "Signal handler unavailable, shutting down");
                }
            })
            .into_future()
            .await?;

        tracing::info!("Status server stopped");
        Ok(())
    }
}
