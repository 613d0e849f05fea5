//! Dashboard state
//!
//! Plain state objects, each owned by the smallest component that needs it:
//!
//! - [`DashboardState`]: active tab and selected year, owned by the root page
//! - [`MetricSelection`]: the card opened for analysis, owned by a panel
//! - [`UploadLog`]: synthesized upload names, owned by the data panel
//!
//! The UI wraps these in signals; the terminal preview mutates them directly.

use serde::Serialize;

use super::panels::{panel, Panel};
use super::tab::{FinancialYear, Tab};

/// State owned by the root page
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct DashboardState {
    pub active_tab: Tab,
    pub selected_year: FinancialYear,
}

impl DashboardState {
    pub fn new(active_tab: Tab, selected_year: FinancialYear) -> Self {
        Self {
            active_tab,
            selected_year,
        }
    }

    /// Switch tabs. Returns `true` when the active panel changed.
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        if self.active_tab == tab {
            return false;
        }
        tracing::debug!(from = %self.active_tab, to = %tab, "tab changed");
        self.active_tab = tab;
        true
    }

    /// Store a year label unchanged
    pub fn select_year(&mut self, year: impl Into<FinancialYear>) {
        let year = year.into();
        tracing::debug!(year = %year, "financial year changed");
        self.selected_year = year;
    }

    /// The panel rendered for the active tab
    pub fn active_panel(&self) -> &'static Panel {
        panel(self.active_tab)
    }
}

/// Metric card currently opened for analysis
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct MetricSelection {
    selected: Option<String>,
}

impl MetricSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clicking the selected title clears it; any other title replaces it
    pub fn toggle(&mut self, title: &str) {
        if self.selected.as_deref() == Some(title) {
            self.selected = None;
        } else {
            self.selected = Some(title.to_string());
        }
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_selected(&self, title: &str) -> bool {
        self.selected.as_deref() == Some(title)
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}

/// Prefix of every synthesized upload name
pub const UPLOAD_PREFIX: &str = "Economic_Data_";
/// Extension of every synthesized upload name
pub const UPLOAD_EXTENSION: &str = "xlsx";

/// Build the upload name for a Unix timestamp in milliseconds
pub fn synthesized_file_name(timestamp_millis: i64) -> String {
    format!("{}{}.{}", UPLOAD_PREFIX, timestamp_millis, UPLOAD_EXTENSION)
}

/// Append-only list of "processed" uploads.
///
/// No file is ever read: recording an upload only synthesizes a name from the
/// current time.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct UploadLog {
    files: Vec<String>,
}

impl UploadLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an upload stamped with the current time
    pub fn record(&mut self) -> &str {
        self.record_at(chrono::Utc::now().timestamp_millis())
    }

    /// Record an upload stamped with the given Unix milliseconds
    pub fn record_at(&mut self, timestamp_millis: i64) -> &str {
        let name = synthesized_file_name(timestamp_millis);
        tracing::info!(file = %name, total = self.files.len() + 1, "upload recorded");
        self.files.push(name);
        &self.files[self.files.len() - 1]
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
