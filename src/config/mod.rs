mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{AnimationConfig, Config, PanelConfig, PollConfig, ServerConfig};
