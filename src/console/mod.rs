//! Public entry points of the console overlay.
//!
//! Every entry point is fire-and-forget: failures are logged and the request
//! becomes a no-op, so callers never see an error.

mod sanitize;

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use crate::animation::{AnimationError, AnimationTiming, ConsoleSurface, TextAnimator};

pub use sanitize::sanitize;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Console input must be a string, got {kind}")]
    InvalidInput { kind: &'static str },

    #[error("Console surface is not attached")]
    MissingSurface,

    #[error("Animation failed to start: {0}")]
    Animation(#[from] AnimationError),
}

/// Text console façade over one [`TextAnimator`].
pub struct Console {
    animator: Option<TextAnimator>,
}

impl Console {
    pub fn new(surface: Arc<dyn ConsoleSurface>, timing: AnimationTiming) -> Self {
        Self {
            animator: Some(TextAnimator::new(surface, timing)),
        }
    }

    /// A console whose surface never showed up. Every request is ignored.
    pub fn detached() -> Self {
        Self { animator: None }
    }

    pub fn is_attached(&self) -> bool {
        self.animator.is_some()
    }

    pub fn animator(&self) -> Option<&TextAnimator> {
        self.animator.as_ref()
    }

    /// Types `text` after clearing what is shown. Blank text clears.
    pub fn write(&self, text: &str) {
        report("write", self.try_write(text));
    }

    /// Dynamic-input variant of [`Console::write`]; non-strings are rejected.
    pub fn write_value(&self, value: &Value) {
        report("write", self.try_write_value(value));
    }

    pub fn clear(&self) {
        report("clear", self.try_clear());
    }

    /// Interactive trigger: `None` when the prompt was dismissed, otherwise
    /// the entered text (empty means clear).
    pub fn prompt(&self, answer: Option<String>) {
        let Some(answer) = answer else {
            tracing::debug!("Console prompt dismissed");
            return;
        };
        self.write(&answer);
    }

    pub fn try_write(&self, text: &str) -> Result<(), ConsoleError> {
        let animator = self.animator.as_ref().ok_or(ConsoleError::MissingSurface)?;
        let text = sanitize(text);
        if text.is_empty() {
            animator.request_clear()?;
        } else {
            animator.request_write(text)?;
        }
        Ok(())
    }

    pub fn try_write_value(&self, value: &Value) -> Result<(), ConsoleError> {
        match value {
            Value::String(text) => self.try_write(text),
            other => Err(ConsoleError::InvalidInput {
                kind: value_kind(other),
            }),
        }
    }

    pub fn try_clear(&self) -> Result<(), ConsoleError> {
        let animator = self.animator.as_ref().ok_or(ConsoleError::MissingSurface)?;
        animator.request_clear()?;
        Ok(())
    }

    /// Currently displayed text.
    pub fn text(&self) -> String {
        self.animator
            .as_ref()
            .map(TextAnimator::text)
            .unwrap_or_default()
    }

    /// Waits for the running sequence to finish.
    pub async fn settled(&self) {
        if let Some(animator) = &self.animator {
            animator.settled().await;
        }
    }
}

fn report(operation: &str, result: Result<(), ConsoleError>) {
    if let Err(err) = result {
        tracing::warn!(operation, error = %err, "Console request ignored");
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
