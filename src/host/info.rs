use serde::{Deserialize, Serialize};

/// One `key: value` row of the host panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineInfo {
    pub key: String,
    pub value: String,
}

/// Payload of `GET /s`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostData {
    pub host: String,
    pub lines: Vec<LineInfo>,
}

impl LineInfo {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl From<(String, String)> for LineInfo {
    fn from((key, value): (String, String)) -> Self {
        Self { key, value }
    }
}

impl HostData {
    pub fn new(host: impl Into<String>, lines: Vec<LineInfo>) -> Self {
        Self {
            host: host.into(),
            lines,
        }
    }

    /// Value of the first line with the given key.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|line| line.key == key)
            .map(|line| line.value.as_str())
    }
}
