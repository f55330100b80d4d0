//! Terminal client: host panel, animated console line and edit prompt.

pub mod app;
pub mod events;
pub mod input;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::{run, ClientError};
