//! Time-series support for the chart panels
//!
//! - **generator**: `TimeSeriesPoint` and the mock yearly series
//! - **events**: historical events annotated on the series
//! - **layout**: pure chart geometry shared by the canvas and the terminal preview
//!
//! # Example
//!
//! ```rust
//! use econboard::series::{generate_series, HistoricalEvent};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let points = generate_series(20, 2024, &mut rng);
//!
//! assert_eq!(points.len(), 20);
//! let covid = points.iter().find(|p| p.period == "2020").unwrap();
//! assert_eq!(covid.event.as_deref(), Some(HistoricalEvent::Covid19.label()));
//! ```

pub mod events;
pub mod generator;
pub mod layout;

pub use events::HistoricalEvent;
pub use generator::{
    generate_series, mock_series, try_generate_series, TimeSeriesPoint, DEFAULT_SPAN_YEARS,
    MAX_SPAN_YEARS,
};
pub use layout::{ChartLayout, Margins};
