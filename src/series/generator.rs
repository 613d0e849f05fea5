//! Time-series points and the mock series generator

use chrono::Datelike;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::events::HistoricalEvent;
use crate::error::{DashboardError, DashboardResult};

/// Span used when a chart is given no data
pub const DEFAULT_SPAN_YEARS: u32 = 20;

/// Longest span accepted from user input
pub const MAX_SPAN_YEARS: u32 = 500;

/// Lower bound of a generated base value
const BASE_MIN: f64 = 50.0;
/// Width of the base value range; values fall in `[50, 90)` before scaling
const BASE_RANGE: f64 = 40.0;

/// One (period, value) pair, optionally annotated with an event label
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeSeriesPoint {
    pub period: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
}

impl TimeSeriesPoint {
    pub fn new(period: impl Into<String>, value: f64) -> Self {
        Self {
            period: period.into(),
            value,
            event: None,
        }
    }

    /// Builder: attach an event label
    pub fn event(mut self, label: impl Into<String>) -> Self {
        self.event = Some(label.into());
        self
    }

    pub fn has_event(&self) -> bool {
        self.event.is_some()
    }
}

/// Generate one point per year for the `years` years before `current_year`.
///
/// The window starts at `current_year - years` and excludes `current_year`.
/// Each value is drawn from `[50, 90)`, scaled in event years and rounded to
/// two decimals.
pub fn generate_series<R: Rng + ?Sized>(
    years: u32,
    current_year: i32,
    rng: &mut R,
) -> Vec<TimeSeriesPoint> {
    let start_year = i64::from(current_year) - i64::from(years);

    (0..i64::from(years))
        .map(|i| {
            let year = start_year + i;
            let mut value = BASE_MIN + rng.gen::<f64>() * BASE_RANGE;

            let event = i32::try_from(year).ok().and_then(HistoricalEvent::for_year);
            if let Some(e) = event {
                value *= e.scale();
            }

            TimeSeriesPoint {
                period: year.to_string(),
                value: round2(value),
                event: event.map(|e| e.label().to_string()),
            }
        })
        .collect()
}

/// Like [`generate_series`], rejecting spans outside `1..=MAX_SPAN_YEARS`
pub fn try_generate_series<R: Rng + ?Sized>(
    years: u32,
    current_year: i32,
    rng: &mut R,
) -> DashboardResult<Vec<TimeSeriesPoint>> {
    if years == 0 || years > MAX_SPAN_YEARS {
        return Err(DashboardError::InvalidSpan(years));
    }
    Ok(generate_series(years, current_year, rng))
}

/// Unseeded series ending the year before today.
///
/// Not reproducible across calls.
pub fn mock_series(years: u32) -> Vec<TimeSeriesPoint> {
    let current_year = chrono::Utc::now().year();
    generate_series(years, current_year, &mut rand::thread_rng())
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_twenty_year_series() {
        let mut rng = StdRng::seed_from_u64(7);
        let points = generate_series(20, 2024, &mut rng);

        assert_eq!(points.len(), 20);
        let years: Vec<i32> = points.iter().map(|p| p.period.parse().unwrap()).collect();
        assert_eq!(years, (2004..2024).collect::<Vec<_>>());
    }

    #[test]
    fn test_event_labels_only_on_event_years() {
        let mut rng = StdRng::seed_from_u64(42);
        let points = generate_series(20, 2024, &mut rng);

        for p in &points {
            let year: i32 = p.period.parse().unwrap();
            let expected = match year {
                2008 => Some("Global Financial Crisis"),
                2016 => Some("Demonetization"),
                2017 => Some("GST Launch"),
                2020 => Some("COVID-19"),
                _ => None,
            };
            assert_eq!(p.event.as_deref(), expected, "year {}", year);
        }
        assert_eq!(points.iter().filter(|p| p.has_event()).count(), 4);
    }

    #[test]
    fn test_events_outside_window_are_absent() {
        let mut rng = StdRng::seed_from_u64(1);
        let points = generate_series(5, 2016, &mut rng);
        assert_eq!(points.first().map(|p| p.period.as_str()), Some("2011"));
        assert!(points.iter().all(|p| p.event.is_none()));
    }

    #[test]
    fn test_value_bounds_and_rounding() {
        let mut rng = StdRng::seed_from_u64(99);
        for p in generate_series(200, 2100, &mut rng) {
            // 0.7 * 50 is the lowest scaled value, 1.1 * 90 the highest
            assert!(p.value >= 35.0 && p.value <= 99.0, "{}", p.value);
            assert!((p.value * 100.0 - (p.value * 100.0).round()).abs() < 1e-6);
            if p.event.is_none() {
                assert!(p.value >= 50.0 && p.value <= 90.0);
            }
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = generate_series(20, 2024, &mut StdRng::seed_from_u64(3));
        let b = generate_series(20, 2024, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_span() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(generate_series(0, 2024, &mut rng).is_empty());
        assert!(matches!(
            try_generate_series(0, 2024, &mut rng),
            Err(DashboardError::InvalidSpan(0))
        ));
    }

    #[test]
    fn test_oversized_span_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        for years in [MAX_SPAN_YEARS + 1, 2_147_483_648, 3_000_000_000, u32::MAX] {
            assert!(matches!(
                try_generate_series(years, 2026, &mut rng),
                Err(DashboardError::InvalidSpan(y)) if y == years
            ));
        }

        let points = try_generate_series(MAX_SPAN_YEARS, 2026, &mut rng).unwrap();
        assert_eq!(points.len(), MAX_SPAN_YEARS as usize);
        assert_eq!(points.first().map(|p| p.period.as_str()), Some("1526"));
    }

    #[test]
    fn test_span_reaching_before_year_zero() {
        let mut rng = StdRng::seed_from_u64(5);
        let points = generate_series(3, 1, &mut rng);
        let periods: Vec<&str> = points.iter().map(|p| p.period.as_str()).collect();
        assert_eq!(periods, ["-2", "-1", "0"]);
    }

    #[test]
    fn test_mock_series_uses_default_span() {
        let points = mock_series(DEFAULT_SPAN_YEARS);
        assert_eq!(points.len(), DEFAULT_SPAN_YEARS as usize);
    }
}
