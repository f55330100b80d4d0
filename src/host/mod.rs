//! Local host probing and the snapshot served at `GET /s`.

mod cache;
mod dmi;
mod format;
mod info;
pub mod probe;

pub use cache::{ProbeError, ProbeFn, SnapshotCache};
pub use dmi::ProductInfo;
pub use format::{format_bytes, format_cpu_freq, format_uptime, format_usage};
pub use info::{HostData, LineInfo};
