//! Historical events annotated on the mock series

use serde::Serialize;

/// Years the generated series marks with an event label
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum HistoricalEvent {
    GlobalFinancialCrisis,
    Demonetization,
    GstLaunch,
    Covid19,
}

impl HistoricalEvent {
    pub const ALL: [HistoricalEvent; 4] = [
        HistoricalEvent::GlobalFinancialCrisis,
        HistoricalEvent::Demonetization,
        HistoricalEvent::GstLaunch,
        HistoricalEvent::Covid19,
    ];

    /// Event falling in a calendar year, if any
    pub fn for_year(year: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.year() == year)
    }

    pub fn year(self) -> i32 {
        match self {
            HistoricalEvent::GlobalFinancialCrisis => 2008,
            HistoricalEvent::Demonetization => 2016,
            HistoricalEvent::GstLaunch => 2017,
            HistoricalEvent::Covid19 => 2020,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HistoricalEvent::GlobalFinancialCrisis => "Global Financial Crisis",
            HistoricalEvent::Demonetization => "Demonetization",
            HistoricalEvent::GstLaunch => "GST Launch",
            HistoricalEvent::Covid19 => "COVID-19",
        }
    }

    /// Multiplier applied to the base value in the event year
    pub fn scale(self) -> f64 {
        match self {
            HistoricalEvent::Covid19 => 0.7,
            HistoricalEvent::Demonetization => 0.85,
            HistoricalEvent::GlobalFinancialCrisis | HistoricalEvent::GstLaunch => 1.1,
        }
    }
}
