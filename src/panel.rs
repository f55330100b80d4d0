//! Host panel view model, rebuilt from scratch on every render.

use std::sync::Arc;

use chrono::{DateTime, Local};
use parking_lot::RwLock;

use crate::host::HostData;
use crate::poll::Renderer;

/// Rows and columns of the decorative palette grid.
pub const PALETTE_ROWS: usize = 2;
pub const PALETTE_COLUMNS: usize = 8;

/// Built panel: `user@host` header, separator, and one row per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPanel {
    pub user: String,
    pub host: String,
    pub separator: String,
    pub rows: Vec<(String, String)>,
}

impl HostPanel {
    pub fn build(user: &str, data: &HostData) -> Self {
        let header_len = user.chars().count() + 1 + data.host.chars().count();
        Self {
            user: user.to_string(),
            host: data.host.clone(),
            separator: "-".repeat(header_len),
            rows: data
                .lines
                .iter()
                .map(|line| (line.key.clone(), line.value.clone()))
                .collect(),
        }
    }

    pub fn header(&self) -> String {
        format!("{}@{}", self.user, self.host)
    }

    /// Palette cell indices, normal colors on the first row, bright on the second.
    pub fn palette() -> [[u8; PALETTE_COLUMNS]; PALETTE_ROWS] {
        let mut grid = [[0u8; PALETTE_COLUMNS]; PALETTE_ROWS];
        for (row, cells) in grid.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = (row * PALETTE_COLUMNS + col) as u8;
            }
        }
        grid
    }

    /// Plain-text rendition used by `helios show` and the server's `/`.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.header());
        out.push('\n');
        out.push_str(&self.separator);
        out.push('\n');
        for (key, value) in &self.rows {
            out.push_str(key);
            out.push_str(": ");
            out.push_str(value);
            out.push('\n');
        }
        out
    }
}

/// Renderer that keeps only the latest built panel.
#[derive(Clone)]
pub struct PanelStore {
    user: String,
    panel: Arc<RwLock<Option<(HostPanel, DateTime<Local>)>>>,
}

impl PanelStore {
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            panel: Arc::new(RwLock::new(None)),
        }
    }

    pub fn current(&self) -> Option<HostPanel> {
        self.panel.read().as_ref().map(|(panel, _)| panel.clone())
    }

    /// When the panel was last rebuilt.
    pub fn refreshed_at(&self) -> Option<DateTime<Local>> {
        self.panel.read().as_ref().map(|(_, at)| *at)
    }
}

impl Renderer for PanelStore {
    fn render(&self, data: &HostData) {
        *self.panel.write() = Some((HostPanel::build(&self.user, data), Local::now()));
    }
}
