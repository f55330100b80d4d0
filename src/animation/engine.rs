//! Typewriter state machine driving one console buffer.
//!
//! ```text
//! request ──→ Clearing ──→ Delaying ──→ Writing ──→ Idle
//!    │            │                        ↑
//!    │            └──→ Idle (pure clear)   │
//!    └─────────────── (empty buffer) ──────┘
//! ```
//!
//! Each request runs as one tokio task. A newer request aborts that task and
//! bumps the generation, so a tick already past its await point finds a stale
//! generation and leaves the buffer alone.

use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, sleep_until, Instant, MissedTickBehavior};

use crate::animation::state::{AnimationPhase, AnimationSnapshot, ConsoleSurface, EngineState};
use crate::animation::timing::AnimationTiming;

#[derive(Debug, Error)]
pub enum AnimationError {
    #[error("No async runtime available to drive the animation")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),
}

struct Shared {
    state: Mutex<EngineState>,
    phase_tx: watch::Sender<AnimationPhase>,
    surface: Arc<dyn ConsoleSurface>,
    timing: AnimationTiming,
}

impl Shared {
    /// Runs `f` on the buffer if `generation` is still current, then mirrors
    /// the buffer to the surface. `None` means the sequence was superseded.
    fn apply<R>(&self, generation: u64, f: impl FnOnce(&mut EngineState) -> R) -> Option<R> {
        let mut state = self.state.lock();
        if state.generation != generation {
            return None;
        }
        let result = f(&mut state);
        self.surface.show(&state.buffer);
        Some(result)
    }

    fn set_phase(&self, generation: u64, phase: AnimationPhase) -> bool {
        let mut state = self.state.lock();
        if state.generation != generation {
            return false;
        }
        state.phase = phase;
        if phase == AnimationPhase::Idle {
            state.target = None;
        }
        self.phase_tx.send_replace(phase);
        true
    }
}

/// Owns a console's text buffer and the single task animating it.
pub struct TextAnimator {
    shared: Arc<Shared>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl TextAnimator {
    pub fn new(surface: Arc<dyn ConsoleSurface>, timing: AnimationTiming) -> Self {
        let (phase_tx, _) = watch::channel(AnimationPhase::Idle);
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(EngineState::new()),
                phase_tx,
                surface,
                timing,
            }),
            task: Mutex::new(None),
        }
    }

    pub fn timing(&self) -> AnimationTiming {
        self.shared.timing
    }

    /// Clear the current buffer, then type `text`. Blank text only clears.
    pub fn request_write(&self, text: String) -> Result<(), AnimationError> {
        if text.trim().is_empty() {
            return self.request_clear();
        }
        self.start(Some(text))
    }

    /// Clear the current buffer.
    pub fn request_clear(&self) -> Result<(), AnimationError> {
        self.start(None)
    }

    pub fn snapshot(&self) -> AnimationSnapshot {
        self.shared.state.lock().snapshot()
    }

    pub fn phase(&self) -> AnimationPhase {
        self.shared.state.lock().phase
    }

    pub fn text(&self) -> String {
        self.shared.state.lock().buffer.clone()
    }

    /// Phase changes, starting from the current phase.
    pub fn subscribe(&self) -> watch::Receiver<AnimationPhase> {
        self.shared.phase_tx.subscribe()
    }

    /// Waits until no sequence is running.
    pub async fn settled(&self) {
        let mut phases = self.subscribe();
        // The sender lives in `self`, so the channel cannot close while we wait.
        let _ = phases.wait_for(|phase| *phase == AnimationPhase::Idle).await;
    }

    fn start(&self, target: Option<String>) -> Result<(), AnimationError> {
        let runtime = tokio::runtime::Handle::try_current()?;
        let started = Instant::now();

        let mut task = self.task.lock();
        if let Some(previous) = task.take() {
            previous.abort();
        }

        let (generation, phase) = {
            let mut state = self.shared.state.lock();
            state.generation += 1;
            state.phase = if !state.buffer.is_empty() {
                AnimationPhase::Clearing
            } else if target.is_some() {
                AnimationPhase::Writing
            } else {
                AnimationPhase::Idle
            };
            state.target = if state.phase == AnimationPhase::Idle {
                None
            } else {
                target.clone()
            };
            self.shared.phase_tx.send_replace(state.phase);
            (state.generation, state.phase)
        };

        tracing::debug!(
            generation,
            ?phase,
            chars = target.as_ref().map(|t| t.chars().count()),
            "Animation requested"
        );

        if phase != AnimationPhase::Idle {
            let shared = Arc::clone(&self.shared);
            *task = Some(runtime.spawn(run_sequence(shared, generation, started, target)));
        }
        Ok(())
    }
}

impl Drop for TextAnimator {
    fn drop(&mut self) {
        if let Some(task) = self.task.get_mut().take() {
            task.abort();
        }
    }
}

async fn run_sequence(
    shared: Arc<Shared>,
    generation: u64,
    started: Instant,
    target: Option<String>,
) {
    let timing = shared.timing;

    let cleared = {
        let state = shared.state.lock();
        if state.generation != generation {
            return;
        }
        state.buffer.chars().count()
    };

    if cleared > 0 {
        let period = timing.clear_tick();
        let mut ticker = interval_at(started + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let Some(empty) = shared.apply(generation, |state| {
                state.buffer.pop();
                state.buffer.is_empty()
            }) else {
                return;
            };
            if empty {
                break;
            }
        }

        if target.is_none() {
            shared.set_phase(generation, AnimationPhase::Idle);
            return;
        }
        if !shared.set_phase(generation, AnimationPhase::Delaying) {
            return;
        }
        sleep_until(started + timing.write_start_offset(cleared)).await;
    }

    let Some(target) = target else {
        shared.set_phase(generation, AnimationPhase::Idle);
        return;
    };
    if !shared.set_phase(generation, AnimationPhase::Writing) {
        return;
    }

    let period = timing.write_tick();
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    for ch in target.chars() {
        ticker.tick().await;
        if shared.apply(generation, |state| state.buffer.push(ch)).is_none() {
            return;
        }
    }

    shared.set_phase(generation, AnimationPhase::Idle);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[derive(Default)]
    struct Frames(Mutex<Vec<String>>);

    impl ConsoleSurface for Frames {
        fn show(&self, text: &str) {
            self.0.lock().push(text.to_string());
        }
    }

    fn animator() -> (TextAnimator, Arc<Frames>) {
        let frames = Arc::new(Frames::default());
        let surface: Arc<dyn ConsoleSurface> = frames.clone();
        (TextAnimator::new(surface, AnimationTiming::default()), frames)
    }

    #[tokio::test(start_paused = true)]
    async fn write_on_empty_buffer_skips_clear() {
        let (animator, frames) = animator();
        animator.request_write("hey".to_string()).unwrap();
        assert_eq!(animator.phase(), AnimationPhase::Writing);

        animator.settled().await;
        assert_eq!(animator.text(), "hey");
        assert_eq!(frames.0.lock().as_slice(), ["h", "he", "hey"]);
    }

    #[tokio::test(start_paused = true)]
    async fn clear_on_empty_buffer_stays_idle() {
        let (animator, frames) = animator();
        animator.request_clear().unwrap();
        assert_eq!(animator.snapshot(), AnimationSnapshot::default());
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(frames.0.lock().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn blank_write_clears_instead_of_typing() {
        let (animator, frames) = animator();
        animator.request_write("hi".to_string()).unwrap();
        animator.settled().await;

        animator.request_write(" \t ".to_string()).unwrap();
        assert_eq!(animator.phase(), AnimationPhase::Clearing);
        assert_eq!(animator.snapshot().target, None);

        animator.settled().await;
        assert_eq!(animator.text(), "");
        assert_eq!(frames.0.lock().as_slice(), ["h", "hi", "h", ""]);
    }

    #[test]
    fn request_outside_runtime_fails() {
        let (animator, _) = animator();
        let err = animator.request_write("x".to_string()).unwrap_err();
        assert!(matches!(err, AnimationError::NoRuntime(_)));
        assert_eq!(animator.phase(), AnimationPhase::Idle);
    }
}
