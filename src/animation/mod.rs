//! Clear-then-write typewriter animation for the console overlay.

mod engine;
mod state;
mod timing;

pub use engine::{AnimationError, TextAnimator};
pub use state::{AnimationPhase, AnimationSnapshot, ConsoleSurface};
pub use timing::{AnimationTiming, MIN_PERIOD};
