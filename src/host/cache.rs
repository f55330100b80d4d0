use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::host::info::HostData;

/// Probe used to refresh the snapshot.
pub type ProbeFn = Arc<dyn Fn() -> HostData + Send + Sync>;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Host probe task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}

struct Snapshot {
    data: HostData,
    taken_at: Instant,
}

/// Host snapshot reused for `max_age` so bursts of polls don't re-probe.
#[derive(Clone)]
pub struct SnapshotCache {
    probe: ProbeFn,
    max_age: Duration,
    current: Arc<RwLock<Option<Snapshot>>>,
}

impl SnapshotCache {
    pub fn new(probe: ProbeFn, max_age: Duration) -> Self {
        Self {
            probe,
            max_age,
            current: Arc::new(RwLock::new(None)),
        }
    }

    /// Cache backed by the real system probe.
    pub fn system(max_age: Duration) -> Self {
        Self::new(Arc::new(crate::host::probe::collect), max_age)
    }

    /// Returns the cached snapshot while fresh, probing again otherwise.
    pub async fn get(&self) -> Result<HostData, ProbeError> {
        {
            let guard = self.current.read().await;
            if let Some(snapshot) = guard.as_ref() {
                if snapshot.taken_at.elapsed() < self.max_age {
                    return Ok(snapshot.data.clone());
                }
            }
        }

        let probe = Arc::clone(&self.probe);
        let data = tokio::task::spawn_blocking(move || probe()).await?;
        tracing::debug!(host = %data.host, lines = data.lines.len(), "Host snapshot refreshed");

        let mut guard = self.current.write().await;
        *guard = Some(Snapshot {
            data: data.clone(),
            taken_at: Instant::now(),
        });
        Ok(data)
    }
}
