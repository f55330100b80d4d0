/// Where the typewriter sequence currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationPhase {
    #[default]
    Idle,
    /// Removing one trailing character per clear period.
    Clearing,
    /// Buffer is empty, waiting for the write phase to begin.
    Delaying,
    /// Appending one character of the target per write period.
    Writing,
}

/// Point-in-time view of one console's animation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnimationSnapshot {
    pub phase: AnimationPhase,
    pub buffer: String,
    /// Text the running sequence will end on; `None` for a pure clear.
    pub target: Option<String>,
}

/// Presentation surface the buffer is mirrored to on every change.
pub trait ConsoleSurface: Send + Sync {
    fn show(&self, text: &str);
}

pub(crate) struct EngineState {
    pub phase: AnimationPhase,
    pub buffer: String,
    pub target: Option<String>,
    pub generation: u64,
}

impl EngineState {
    pub fn new() -> Self {
        Self {
            phase: AnimationPhase::Idle,
            buffer: String::new(),
            target: None,
            generation: 0,
        }
    }

    pub fn snapshot(&self) -> AnimationSnapshot {
        AnimationSnapshot {
            phase: self.phase,
            buffer: self.buffer.clone(),
            target: self.target.clone(),
        }
    }
}
