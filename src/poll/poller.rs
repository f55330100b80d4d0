use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

use crate::host::HostData;
use crate::poll::client::StatusClient;
use crate::poll::error::PollError;
use crate::poll::scheduler::FetchScheduler;
use crate::poll::token::CancellationToken;

/// Shortest period `Poller::start` will run at.
pub const MIN_POLL_PERIOD: Duration = Duration::from_millis(1);

/// Presentation layer fed by the poller.
pub trait Renderer: Send + Sync {
    fn render(&self, data: &HostData);
}

/// Periodic fetch-and-render against the status endpoint.
#[derive(Clone)]
pub struct Poller {
    client: Arc<StatusClient>,
    renderer: Arc<dyn Renderer>,
    scheduler: FetchScheduler,
}

impl Poller {
    pub fn new(client: StatusClient, renderer: Arc<dyn Renderer>) -> Self {
        Self {
            client: Arc::new(client),
            renderer,
            scheduler: FetchScheduler::new(),
        }
    }

    pub fn scheduler(&self) -> &FetchScheduler {
        &self.scheduler
    }

    /// One scheduler tick: rotate the token and start a fetch tagged with it.
    ///
    /// The fetch runs on its own task so a slow response never holds up the
    /// next tick. The handle resolves to the poll outcome, already logged.
    pub fn tick(&self) -> JoinHandle<Result<(), PollError>> {
        let token = self.scheduler.rotate();
        let poller = self.clone();
        tokio::spawn(async move { poller.fetch_and_render(&token).await })
    }

    /// Fetches once and hands the payload to the renderer unless `token`
    /// was cancelled in the meantime. Failures are logged, never raised.
    pub async fn fetch_and_render(&self, token: &CancellationToken) -> Result<(), PollError> {
        let result = match self.client.fetch(token).await {
            Ok(data) => self
                .scheduler
                .commit(token, || self.renderer.render(&data))
                .map(|()| data.lines.len()),
            Err(err) => Err(err),
        };

        match result {
            Ok(lines) => {
                tracing::debug!(url = self.client.url(), lines, "Host panel refreshed");
                Ok(())
            }
            Err(err) if err.is_aborted() => {
                tracing::debug!(url = self.client.url(), "Poll superseded, result dropped");
                Err(err)
            }
            Err(err) => {
                tracing::warn!(
                    url = self.client.url(),
                    kind = err.kind(),
                    error = %err,
                    "Poll failed"
                );
                Err(err)
            }
        }
    }

    /// Polls immediately, then every `period`, until the handle is stopped.
    /// A zero period is raised to [`MIN_POLL_PERIOD`].
    pub fn start(self, period: Duration) -> PollerHandle {
        if period < MIN_POLL_PERIOD {
            tracing::warn!(?period, "Poll period too short, using the minimum");
        }
        let period = period.max(MIN_POLL_PERIOD);
        let scheduler = self.scheduler.clone();
        let task = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                self.tick();
            }
        });
        tracing::info!(?period, "Status polling started");
        PollerHandle {
            task: Some(task),
            scheduler,
        }
    }
}

/// Stops the poll loop and aborts the in-flight fetch when dropped.
pub struct PollerHandle {
    task: Option<JoinHandle<()>>,
    scheduler: FetchScheduler,
}

impl PollerHandle {
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            self.scheduler.cancel();
            tracing::info!("Status polling stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
