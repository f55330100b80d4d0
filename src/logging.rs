use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file for the terminal client.
pub const LOG_FILE_ENV: &str = "HELIOS_LOG";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Logs to stderr with UTC timestamps. Used by the server and one-shot commands.
pub fn init_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();
}

/// Initialize tracing with optional file output.
///
/// Logging is disabled by default for the terminal client so log lines never
/// land on the alternate screen. Set `HELIOS_LOG` to a file path to enable it;
/// the file is suffixed `{path}.{timestamp}.{pid}` so instances don't collide.
pub fn init_file_from_env() {
    let Some(log_path) = std::env::var(LOG_FILE_ENV).ok() else {
        return;
    };

    let pid = std::process::id();
    let timestamp = chrono::Utc::now().timestamp();
    let unique_path = format!("{}.{}.{}", log_path, timestamp, pid);

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(file_layer)
        .init();
}
