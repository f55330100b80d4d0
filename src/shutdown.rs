use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::signal;
use tokio::sync::Notify;

/// Shared shutdown flag, tripped by Ctrl-C, SIGTERM or [`ShutdownManager::signal_shutdown`].
#[derive(Default)]
pub struct ShutdownManager {
    shutdown: AtomicBool,
    notify: Notify,
}

impl ShutdownManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for an OS signal or an explicit shutdown request.
    pub async fn wait_for_shutdown(&self) -> std::io::Result<()> {
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_shutting_down() {
            return Ok(());
        }

        #[cfg(unix)]
        {
            let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())?;
            tokio::select! {
                _ = signal::ctrl_c() => {},
                _ = sigterm.recv() => {},
                _ = notified => {},
            }
        }

        #[cfg(not(unix))]
        {
            tokio::select! {
                _ = signal::ctrl_c() => {},
                _ = notified => {},
            }
        }

        self.shutdown.store(true, Ordering::SeqCst);
        tracing::info!("Shutting down gracefully...");
        Ok(())
    }

    pub fn signal_shutdown(&self) {
        if !self.shutdown.swap(true, Ordering::SeqCst) {
            self.notify.notify_waiters();
        }
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }
}

/// Cloneable trigger for a [`ShutdownManager`].
#[derive(Clone)]
pub struct ShutdownHandle {
    manager: Arc<ShutdownManager>,
}

impl ShutdownHandle {
    pub fn new(manager: Arc<ShutdownManager>) -> Self {
        Self { manager }
    }

    pub fn shutdown(&self) {
        self.manager.signal_shutdown();
    }

    pub fn is_shutting_down(&self) -> bool {
        self.manager.is_shutting_down()
    }
}
