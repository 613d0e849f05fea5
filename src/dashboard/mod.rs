//! Dashboard model
//!
//! - **types**: metrics, polarity, icons and the other panel literals
//! - **format**: locale-style number formatting
//! - **tab**: tab identifiers and financial-year labels
//! - **panels**: the literal content of the economy, markets and data panels
//! - **state**: root, selection and upload state transitions

pub mod format;
pub mod panels;
pub mod state;
pub mod tab;
pub mod types;

pub use format::{format_grouped, format_signed, format_with_unit};
pub use panels::{panel, Panel, RECENT_IPOS, TOP_STOCKS};
pub use state::{synthesized_file_name, DashboardState, MetricSelection, UploadLog};
pub use tab::{FinancialYear, Tab, DEFAULT_FINANCIAL_YEAR, FINANCIAL_YEARS};
pub use types::{
    AnalysisSection, AnalysisTemplate, ChartSpec, Icon, IpoListing, Metric, MetricValue,
    Polarity, StockQuote,
};
