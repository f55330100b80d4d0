//! Shared test utilities.

#![allow(dead_code, unused_imports)]

pub mod mock_status;

use helios::animation::{AnimationTiming, ConsoleSurface, TextAnimator};
use helios::console::Console;
use helios::host::HostData;
use helios::poll::Renderer;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

/// Surface that records every frame it is asked to show.
#[derive(Default)]
pub struct RecordingSurface {
    frames: Mutex<Vec<String>>,
}

impl RecordingSurface {
    pub fn frames(&self) -> Vec<String> {
        self.frames.lock().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.frames.lock().last().cloned()
    }
}

impl ConsoleSurface for RecordingSurface {
    fn show(&self, text: &str) {
        self.frames.lock().push(text.to_string());
    }
}

/// Renderer that records every payload it receives.
#[derive(Default)]
pub struct RecordingRenderer {
    rendered: Mutex<Vec<HostData>>,
}

impl RecordingRenderer {
    pub fn rendered(&self) -> Vec<HostData> {
        self.rendered.lock().clone()
    }

    pub fn hosts(&self) -> Vec<String> {
        self.rendered.lock().iter().map(|d| d.host.clone()).collect()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&self, data: &HostData) {
        self.rendered.lock().push(data.clone());
    }
}

pub fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

pub fn recording_animator() -> (TextAnimator, Arc<RecordingSurface>) {
    let surface = Arc::new(RecordingSurface::default());
    let dyn_surface: Arc<dyn ConsoleSurface> = surface.clone();
    (TextAnimator::new(dyn_surface, AnimationTiming::default()), surface)
}

pub fn recording_console() -> (Console, Arc<RecordingSurface>) {
    let surface = Arc::new(RecordingSurface::default());
    let dyn_surface: Arc<dyn ConsoleSurface> = surface.clone();
    (Console::new(dyn_surface, AnimationTiming::default()), surface)
}

/// Sleeps `millis` of (possibly paused) tokio time.
pub async fn after(millis: u64) {
    tokio::time::sleep(ms(millis)).await;
}
