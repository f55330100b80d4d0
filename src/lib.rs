pub mod animation;
pub mod cli;
pub mod config;
pub mod console;
pub mod host;
pub mod logging;
pub mod panel;
pub mod poll;
pub mod server;
pub mod shutdown;
pub mod ui;
