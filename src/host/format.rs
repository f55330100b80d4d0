//! Human readable formatting for probe values.

const UNITS: &[&str] = &["B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB"];

fn plural(count: u64) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Formats an uptime in seconds using the two most significant units.
pub fn format_uptime(seconds: u64) -> String {
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3_600;
    let minutes = (seconds % 3_600) / 60;
    let secs = seconds % 60;

    if days > 0 {
        format!(
            "{days} day{}, {hours} hour{}, {minutes} minute{}",
            plural(days),
            plural(hours),
            plural(minutes)
        )
    } else if hours > 0 {
        format!(
            "{hours} hour{}, {minutes} minute{}",
            plural(hours),
            plural(minutes)
        )
    } else if minutes > 0 {
        format!(
            "{minutes} minute{}, {secs} second{}",
            plural(minutes),
            plural(secs)
        )
    } else {
        format!("{secs} second{}", plural(secs))
    }
}

/// Formats a byte count with IEC units and one decimal.
pub fn format_bytes(bytes: u64) -> String {
    let mut size = bytes as f64;
    let mut unit = 0;

    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", size, UNITS[unit])
    }
}

/// Formats `used / total (pct%)`.
pub fn format_usage(used: u64, total: u64) -> String {
    let pct = if total > 0 {
        used as f64 / total as f64 * 100.0
    } else {
        0.0
    };
    format!("{} / {} ({:.1}%)", format_bytes(used), format_bytes(total), pct)
}

/// Formats a CPU frequency given in MHz.
pub fn format_cpu_freq(mhz: u64) -> String {
    if mhz < 1_000 {
        return format!("{mhz} MHz");
    }
    let ghz = mhz as f64 / 1_000.0;
    if ghz.fract() == 0.0 {
        format!("{} GHz", ghz as u64)
    } else {
        format!("{ghz:.2} GHz")
    }
}
