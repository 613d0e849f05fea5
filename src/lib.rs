//! # Econboard
//!
//! Indian economy and markets dashboard. This crate holds everything the
//! dashboard shows and every state transition it makes, independent of any
//! UI framework:
//!
//! - **Literal panels**: economy, markets and listed-company metrics
//! - **Polarity**: up/down/flat classification of metric changes
//! - **Ticker**: a cycling highlight over a fixed quote list
//! - **Mock series**: yearly values annotated with historical events
//! - **Terminal preview**: text rendering of the same panels (`cli` feature)
//!
//! The web dashboard lives in the `econboard-ui` crate, which depends on this
//! one with `default-features = false`.
//!
//! ## Modules
//!
//! - [`dashboard`]: data model, literal panels and state
//! - [`series`]: time-series points, generator and chart geometry
//! - [`ticker`]: ticker items and cycle
//! - [`render`]: plain-text rendering
//!
//! ## Quick Start
//!
//! ```rust
//! use econboard::dashboard::{DashboardState, MetricSelection, Tab};
//!
//! let mut state = DashboardState::default();
//! assert_eq!(state.active_panel().title, "Indian Economy Dashboard");
//!
//! state.select_tab(Tab::Markets);
//! let mut selection = MetricSelection::new();
//! selection.toggle("Sensex");
//! assert_eq!(selection.selected(), Some("Sensex"));
//! ```

#[cfg(feature = "cli")]
pub mod config;
pub mod dashboard;
pub mod error;
pub mod render;
pub mod series;
pub mod ticker;

// Re-export top-level types for convenience
pub use dashboard::{
    panel, ChartSpec, DashboardState, FinancialYear, Icon, Metric, MetricSelection, MetricValue,
    Panel, Polarity, Tab, UploadLog,
};

pub use error::{DashboardError, DashboardResult};

pub use series::{generate_series, mock_series, ChartLayout, HistoricalEvent, TimeSeriesPoint};

pub use ticker::{TickerCycle, TickerItem, MARKET_TICKER, TICKER_INTERVAL_MS};

#[cfg(feature = "cli")]
pub use ticker::{TickerHandle, TickerRunner};

#[cfg(feature = "cli")]
pub use config::{Config, ConfigError, LoggingConfig};
