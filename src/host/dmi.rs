//! Host model lookup from DMI and device-tree files.

use std::fs;

const DMI_ROOTS: [&str; 2] = ["/sys/devices/virtual/dmi/id", "/sys/class/dmi/id"];
const MODEL_FALLBACKS: [&str; 3] = [
    "/sys/firmware/devicetree/base/model",
    "/sys/firmware/devicetree/base/banner-name",
    "/tmp/sysinfo/model",
];

/// Raw DMI fields describing the machine.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProductInfo {
    pub family: Option<String>,
    pub name: Option<String>,
    pub version: Option<String>,
}

impl ProductInfo {
    pub fn read() -> Self {
        Self {
            family: read_dmi("product_family"),
            name: read_dmi("product_name").or_else(read_model_fallback),
            version: read_dmi("product_version"),
        }
    }

    /// `family name (version)`, skipping blank parts. QEMU's generic board
    /// names get a `KVM/QEMU` prefix.
    pub fn display(&self) -> String {
        let mut parts: Vec<String> = Vec::new();

        if let Some(family) = non_blank(&self.family) {
            parts.push(family.to_string());
        }
        if let Some(name) = non_blank(&self.name) {
            if name.starts_with("Standard PC") {
                parts.push("KVM/QEMU".to_string());
            }
            parts.push(name.to_string());
        }
        if let Some(version) = non_blank(&self.version) {
            parts.push(format!("({version})"));
        }

        parts.join(" ")
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn read_trimmed(path: &str) -> Option<String> {
    fs::read_to_string(path)
        .ok()
        // device-tree strings are NUL terminated
        .map(|value| value.trim().trim_end_matches('\0').to_string())
}

fn read_dmi(field: &str) -> Option<String> {
    DMI_ROOTS
        .iter()
        .find_map(|root| read_trimmed(&format!("{root}/{field}")))
}

fn read_model_fallback() -> Option<String> {
    MODEL_FALLBACKS.iter().find_map(|path| read_trimmed(path))
}
