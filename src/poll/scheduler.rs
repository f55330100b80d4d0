use std::sync::Arc;

use parking_lot::Mutex;

use crate::poll::error::PollError;
use crate::poll::token::CancellationToken;

/// Holds the one live cancellation token of a poller.
///
/// Rotation and [`FetchScheduler::commit`] take the same lock, so a fetch whose
/// token was rotated out can never publish after the rotation.
#[derive(Clone, Default)]
pub struct FetchScheduler {
    current: Arc<Mutex<CancellationToken>>,
}

impl FetchScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels the live token (unless it already is) and issues a fresh one.
    pub fn rotate(&self) -> CancellationToken {
        let mut current = self.current.lock();
        if !current.is_cancelled() {
            current.cancel();
        }
        *current = CancellationToken::new();
        current.clone()
    }

    /// Cancels the live token without issuing a new one.
    pub fn cancel(&self) {
        self.current.lock().cancel();
    }

    pub fn current(&self) -> CancellationToken {
        self.current.lock().clone()
    }

    /// Runs `publish` only if `token` has not been cancelled.
    pub fn commit<R>(
        &self,
        token: &CancellationToken,
        publish: impl FnOnce() -> R,
    ) -> Result<R, PollError> {
        let _guard = self.current.lock();
        if token.is_cancelled() {
            return Err(PollError::Aborted);
        }
        Ok(publish())
    }
}
