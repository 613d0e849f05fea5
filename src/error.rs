//! Dashboard error types
//!
//! The dashboard itself renders literal data and cannot fail; these errors
//! cover the edges where user input enters (tab ids, output formats, series
//! spans) and serialization of previews.

use thiserror::Error;

/// Errors raised by the dashboard core
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Tab identifier outside `economy | markets | data`
    #[error("Unknown tab: {0} (expected economy, markets or data)")]
    UnknownTab(String),

    /// Output format not understood by the preview
    #[error("Unknown output format: {0}")]
    UnknownFormat(String),

    /// Series span outside `1..=MAX_SPAN_YEARS`
    #[error("Invalid series span: {0} years (expected 1 to {})", crate::series::MAX_SPAN_YEARS)]
    InvalidSpan(u32),

    /// Serialization failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::Serialization(err.to_string())
    }
}

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DashboardError::UnknownTab("portfolio".to_string());
        assert_eq!(
            err.to_string(),
            "Unknown tab: portfolio (expected economy, markets or data)"
        );

        let err = DashboardError::InvalidSpan(0);
        assert_eq!(
            err.to_string(),
            "Invalid series span: 0 years (expected 1 to 500)"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: DashboardError = json_err.into();
        assert!(matches!(err, DashboardError::Serialization(_)));
    }
}
