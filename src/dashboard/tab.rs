//! Tab identifiers and financial-year labels

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::types::Icon;
use crate::error::DashboardError;

/// Dashboard panel selected by the tab strip
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Economy,
    Markets,
    Data,
}

impl Tab {
    /// All tabs in display order
    pub const ALL: [Tab; 3] = [Tab::Economy, Tab::Markets, Tab::Data];

    /// Stable identifier (`economy`, `markets`, `data`)
    pub fn id(self) -> &'static str {
        match self {
            Tab::Economy => "economy",
            Tab::Markets => "markets",
            Tab::Data => "data",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Economy => "Indian Economy",
            Tab::Markets => "Financial Markets",
            Tab::Data => "Listed & Unlisted Data",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            Tab::Economy => Icon::Building,
            Tab::Markets => Icon::TrendingUp,
            Tab::Data => Icon::Database,
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Tab {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "economy" => Ok(Tab::Economy),
            "markets" => Ok(Tab::Markets),
            "data" => Ok(Tab::Data),
            _ => Err(DashboardError::UnknownTab(s.to_string())),
        }
    }
}

/// Labels offered by the year selector, newest first
pub const FINANCIAL_YEARS: [&str; 8] = [
    "FY24 (2023-24)",
    "FY23 (2022-23)",
    "FY22 (2021-22)",
    "FY21 (2020-21)",
    "FY20 (2019-20)",
    "FY19 (2018-19)",
    "FY18 (2017-18)",
    "All Years",
];

/// Label selected when the dashboard first loads
pub const DEFAULT_FINANCIAL_YEAR: &str = FINANCIAL_YEARS[0];

/// An opaque financial-year label.
///
/// The label is carried through the panels unchanged. It is never validated
/// against [`FINANCIAL_YEARS`] and never filters any data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct FinancialYear(String);

impl FinancialYear {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the label is one of the selector's fixed options
    pub fn is_listed(&self) -> bool {
        FINANCIAL_YEARS.contains(&self.0.as_str())
    }

    /// The selector's options in display order
    pub fn options() -> impl Iterator<Item = FinancialYear> {
        FINANCIAL_YEARS.iter().map(|label| FinancialYear::new(*label))
    }
}

impl Default for FinancialYear {
    fn default() -> Self {
        Self::new(DEFAULT_FINANCIAL_YEAR)
    }
}

impl fmt::Display for FinancialYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FinancialYear {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for FinancialYear {
    fn from(label: String) -> Self {
        Self(label)
    }
}
