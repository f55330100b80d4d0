//! Gathers the host panel lines from the local machine.

use std::collections::HashSet;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use sysinfo::{Disks, Networks, System};

use crate::host::dmi::ProductInfo;
use crate::host::format::{format_cpu_freq, format_uptime, format_usage};
use crate::host::info::{HostData, LineInfo};

const MAC_VERSIONS: [(&str, &str, &str); 23] = [
    ("26", "macOS", "Tahoe"),
    ("15", "macOS", "Sequoia"),
    ("14", "macOS", "Sonoma"),
    ("13", "macOS", "Ventura"),
    ("12", "macOS", "Monterey"),
    ("11", "macOS", "Big Sur"),
    // Big Sur reports 10.16 to older SDKs.
    ("10.16", "macOS", "Big Sur"),
    ("10.15", "macOS", "Catalina"),
    ("10.14", "macOS", "Mojave"),
    ("10.13", "macOS", "High Sierra"),
    ("10.12", "macOS", "Sierra"),
    ("10.11", "OS X", "El Capitan"),
    ("10.10", "OS X", "Yosemite"),
    ("10.9", "OS X", "Mavericks"),
    ("10.8", "OS X", "Mountain Lion"),
    ("10.7", "Mac OS X", "Lion"),
    ("10.6", "Mac OS X", "Snow Leopard"),
    ("10.5", "Mac OS X", "Leopard"),
    ("10.4", "Mac OS X", "Tiger"),
    ("10.3", "Mac OS X", "Panther"),
    ("10.2", "Mac OS X", "Jaguar"),
    ("10.1", "Mac OS X", "Puma"),
    ("10.0", "Mac OS X", "Cheetah"),
];

const SKIPPED_FILESYSTEMS: [&str; 4] = ["tmpfs", "devtmpfs", "overlay", "squashfs"];

/// One mounted filesystem as seen by the probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskSample {
    pub device: String,
    pub file_system: String,
    pub mount_point: String,
    pub total: u64,
    pub available: u64,
}

/// Probes the machine. Blocking: sysinfo reads procfs/sysctl synchronously.
pub fn collect() -> HostData {
    let mut sys = System::new_all();
    sys.refresh_all();

    let mut lines: Vec<LineInfo> = Vec::new();

    lines.push(LineInfo::new("OS", os_display(System::name(), System::os_version())));

    let product = ProductInfo::read().display();
    if !product.is_empty() {
        lines.push(LineInfo::new("Host", product));
    }

    if let Some(kernel) = System::kernel_version() {
        lines.push(LineInfo::new("Kernel", kernel));
    }
    lines.push(LineInfo::new("Uptime", format_uptime(System::uptime())));

    let cpus = sys.cpus();
    if let Some(cpu) = cpus.first() {
        lines.push(LineInfo::new(
            "CPU",
            format!(
                "{} ({}) @ {}",
                cpu.brand().trim(),
                cpus.len(),
                format_cpu_freq(cpu.frequency())
            ),
        ));
    }

    lines.push(LineInfo::new(
        "Memory",
        format_usage(sys.used_memory(), sys.total_memory()),
    ));
    lines.push(LineInfo::new(
        "Swap",
        swap_display(sys.used_swap(), sys.total_swap()),
    ));

    let disks = Disks::new_with_refreshed_list();
    let samples = disks.list().iter().map(|disk| DiskSample {
        device: disk.name().to_string_lossy().into_owned(),
        file_system: disk.file_system().to_string_lossy().into_owned(),
        mount_point: disk.mount_point().to_string_lossy().into_owned(),
        total: disk.total_space(),
        available: disk.available_space(),
    });
    lines.extend(disk_lines(samples));

    let networks = Networks::new_with_refreshed_list();
    let addrs = networks
        .list()
        .iter()
        .flat_map(|(_, data)| data.ip_networks().iter().map(|net| net.addr));
    if let Some(summary) = network_summary(addrs) {
        lines.push(LineInfo::new("Network", summary));
    }

    let host = System::host_name().unwrap_or_else(|| "unknown.local".to_string());
    HostData::new(host, lines)
}

/// Marketing name for Darwin, `name version` elsewhere.
pub fn os_display(name: Option<String>, version: Option<String>) -> String {
    let name = name.unwrap_or_else(|| "Unknown".to_string());

    if name == "Darwin" {
        let Some(version) = version else {
            return "macOS".to_string();
        };
        return match MAC_VERSIONS
            .iter()
            .find(|(prefix, _, _)| version.starts_with(prefix))
        {
            Some((_, family, codename)) => format!("{family} {version} {codename}"),
            None => format!("macOS {version}"),
        };
    }

    match version {
        Some(version) => format!("{name} {version}"),
        None => name,
    }
}

pub fn swap_display(used: u64, total: u64) -> String {
    if total == 0 {
        "Disabled".to_string()
    } else {
        format_usage(used, total)
    }
}

/// One `Disk` line per real filesystem. Keys carry the mount point once
/// there is more than one disk.
pub fn disk_lines(samples: impl IntoIterator<Item = DiskSample>) -> Vec<LineInfo> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut kept: Vec<(String, String)> = Vec::new();

    for disk in samples {
        if !seen.insert(disk.device.clone()) {
            continue;
        }
        if disk.file_system.is_empty() || SKIPPED_FILESYSTEMS.contains(&disk.file_system.as_str())
        {
            continue;
        }
        let used = disk.total.saturating_sub(disk.available);
        kept.push((
            format!("{} - {}", format_usage(used, disk.total), disk.file_system),
            disk.mount_point,
        ));
    }

    let many = kept.len() > 1;
    kept.into_iter()
        .map(|(value, mount)| {
            let key = if many {
                format!("Disk ({mount})")
            } else {
                "Disk".to_string()
            };
            LineInfo::new(key, value)
        })
        .collect()
}

fn is_public_v4(addr: &Ipv4Addr) -> bool {
    !(addr.is_broadcast()
        || addr.is_documentation()
        || addr.is_link_local()
        || addr.is_loopback()
        || addr.is_multicast()
        || addr.is_unspecified()
        || addr.is_private())
}

fn is_public_v6(addr: &Ipv6Addr) -> bool {
    let first = addr.segments()[0];
    let link_local = first & 0xffc0 == 0xfe80;
    let unique_local = first & 0xfe00 == 0xfc00;
    !(addr.is_loopback() || addr.is_multicast() || addr.is_unspecified() || link_local || unique_local)
}

/// `Nx IPv4, Mx IPv6` over globally routable addresses, `None` if there are none.
pub fn network_summary(addrs: impl IntoIterator<Item = IpAddr>) -> Option<String> {
    let (mut v4, mut v6) = (0usize, 0usize);
    for addr in addrs {
        match addr {
            IpAddr::V4(addr) if is_public_v4(&addr) => v4 += 1,
            IpAddr::V6(addr) if is_public_v6(&addr) => v6 += 1,
            _ => {}
        }
    }

    let mut parts = Vec::new();
    if v4 > 0 {
        parts.push(format!("{v4}x IPv4"));
    }
    if v6 > 0 {
        parts.push(format!("{v6}x IPv6"));
    }
    (!parts.is_empty()).then(|| parts.join(", "))
}
