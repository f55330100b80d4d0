//! Periodic refresh of the host panel with at most one live fetch.

mod client;
mod error;
mod poller;
mod scheduler;
mod token;

pub use client::StatusClient;
pub use error::PollError;
pub use poller::{Poller, PollerHandle, Renderer, MIN_POLL_PERIOD};
pub use scheduler::FetchScheduler;
pub use token::CancellationToken;
