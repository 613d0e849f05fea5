//! UI Components
//!
//! Reusable Leptos components for the dashboard panels.

pub mod analysis;
pub mod chart;
pub mod metric_card;
pub mod panel_header;
pub mod tab_nav;
pub mod ticker_bar;
pub mod year_selector;

pub use analysis::AnalysisPanel;
pub use chart::TimeSeriesChart;
pub use metric_card::MetricCard;
pub use panel_header::PanelHeader;
pub use tab_nav::TabNavigation;
pub use ticker_bar::TickerBar;
pub use year_selector::YearSelector;
