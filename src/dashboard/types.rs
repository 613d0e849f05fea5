//! Core data types for the dashboard panels
//!
//! - `Metric`: one labeled indicator with an optional period-over-period change
//! - `Polarity`: sign classification of a change, resolved once per render
//! - `Icon`: the closed set of icons the panels reference
//! - `ChartSpec`, `StockQuote`, `IpoListing`, `AnalysisTemplate`: panel literals
//!
//! Everything here is built from `'static` literals; nothing is owned or
//! persisted.

use serde::Serialize;

use super::format::{format_grouped, format_signed};

/// Direction of a change value
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

impl Polarity {
    /// Classify an optional change: `> 0` positive, `< 0` negative,
    /// zero, absent or NaN neutral.
    pub fn of(change: Option<f64>) -> Self {
        match change {
            Some(c) if c > 0.0 => Polarity::Positive,
            Some(c) if c < 0.0 => Polarity::Negative,
            _ => Polarity::Neutral,
        }
    }

    /// Directional indicator glyph
    pub fn indicator(self) -> &'static str {
        match self {
            Polarity::Positive => "↑",
            Polarity::Negative => "↓",
            Polarity::Neutral => "−",
        }
    }

    /// Class for the indicator badge on a metric card
    pub fn indicator_class(self) -> &'static str {
        match self {
            Polarity::Positive => "growth-indicator",
            Polarity::Negative => "decline-indicator",
            Polarity::Neutral => "text-muted-foreground",
        }
    }

    /// Class for delta text
    pub fn text_class(self) -> &'static str {
        match self {
            Polarity::Positive => "text-growth",
            Polarity::Negative => "text-decline",
            Polarity::Neutral => "text-muted-foreground",
        }
    }

    /// Class for a ticker strip entry
    pub fn ticker_class(self) -> &'static str {
        match self {
            Polarity::Positive => "ticker-positive",
            Polarity::Negative => "ticker-negative",
            Polarity::Neutral => "text-muted-foreground",
        }
    }
}

/// Icons referenced by cards, tabs and controls
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    TrendingUp,
    TrendingDown,
    DollarSign,
    PieChart,
    BarChart,
    Users,
    Building,
    Zap,
    Database,
    Upload,
    FileSpreadsheet,
    Calendar,
}

impl Icon {
    /// Glyph used in place of the icon artwork
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::TrendingUp => "📈",
            Icon::TrendingDown => "📉",
            Icon::DollarSign => "💵",
            Icon::PieChart => "🥧",
            Icon::BarChart => "📊",
            Icon::Users => "👥",
            Icon::Building => "🏛",
            Icon::Zap => "⚡",
            Icon::Database => "🗄",
            Icon::Upload => "📤",
            Icon::FileSpreadsheet => "📄",
            Icon::Calendar => "📅",
        }
    }
}

/// A metric value is either numeric (grouped on display) or verbatim text
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(&'static str),
}

impl MetricValue {
    /// Display string: numbers get locale-style grouping, text is verbatim
    pub fn display(&self) -> String {
        match self {
            MetricValue::Number(n) => format_grouped(*n),
            MetricValue::Text(s) => (*s).to_string(),
        }
    }
}

/// A single labeled indicator shown on a card
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Metric {
    pub title: &'static str,
    pub value: MetricValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
}

impl Metric {
    /// Create a metric with only a title and value
    pub const fn new(title: &'static str, value: MetricValue) -> Self {
        Self {
            title,
            value,
            change: None,
            change_percent: None,
            unit: None,
            description: None,
            icon: None,
        }
    }

    /// Builder: set the absolute and percentage change
    pub const fn change(mut self, change: f64, change_percent: f64) -> Self {
        self.change = Some(change);
        self.change_percent = Some(change_percent);
        self
    }

    /// Builder: set the unit; an empty unit is treated as none
    pub const fn unit(mut self, unit: &'static str) -> Self {
        self.unit = if unit.is_empty() { None } else { Some(unit) };
        self
    }

    /// Builder: set the description line
    pub const fn description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    /// Builder: set the icon
    pub const fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn polarity(&self) -> Polarity {
        Polarity::of(self.change)
    }

    /// Formatted value without unit
    pub fn display_value(&self) -> String {
        self.value.display()
    }

    /// Delta line, e.g. `+0.3 (+4.35%)`. `None` when no change is set.
    pub fn change_text(&self) -> Option<String> {
        let change = self.change?;
        let mut text = format_signed(change);
        if let Some(pct) = self.change_percent {
            let sign = if pct > 0.0 { "+" } else { "" };
            text.push_str(&format!(" ({}{:.2}%)", sign, pct));
        }
        Some(text)
    }
}

/// Configuration of one time-series chart on a panel
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ChartSpec {
    pub title: &'static str,
    /// Stroke color as a CSS hex string
    pub color: &'static str,
    /// Suffix appended to values in the tooltip
    pub unit: &'static str,
    /// Plot height in pixels
    pub height: u32,
}

impl ChartSpec {
    pub const DEFAULT_COLOR: &'static str = "#3B82F6";
    pub const DEFAULT_HEIGHT: u32 = 300;

    pub const fn new(title: &'static str) -> Self {
        Self {
            title,
            color: Self::DEFAULT_COLOR,
            unit: "",
            height: Self::DEFAULT_HEIGHT,
        }
    }

    pub const fn color(mut self, color: &'static str) -> Self {
        self.color = color;
        self
    }

    pub const fn unit(mut self, unit: &'static str) -> Self {
        self.unit = unit;
        self
    }

    pub const fn height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }
}

/// A row in the "Top Performing Stocks" table
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct StockQuote {
    pub name: &'static str,
    /// Day change in percent
    pub change: f64,
    /// Last traded price in rupees
    pub price: f64,
}

impl StockQuote {
    /// Rows only distinguish gains from everything else
    pub fn is_gain(&self) -> bool {
        self.change > 0.0
    }

    pub fn change_class(&self) -> &'static str {
        if self.is_gain() {
            "text-growth"
        } else {
            "text-decline"
        }
    }

    pub fn change_text(&self) -> String {
        format!("{}%", format_signed(self.change))
    }

    pub fn price_text(&self) -> String {
        format!("₹{:.2}", self.price)
    }
}

/// A row in the "Recent IPOs" table
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct IpoListing {
    pub name: &'static str,
    /// Issue size, already formatted
    pub size: &'static str,
    /// Listing exchange (NSE or BSE)
    pub exchange: &'static str,
    /// Listing date, ISO 8601
    pub date: &'static str,
}

/// A titled bullet list inside an analysis panel
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct AnalysisSection {
    pub heading: &'static str,
    pub items: &'static [&'static str],
}

/// Static explanatory panel revealed when a metric card is selected.
///
/// The content is keyed only by the metric title; no analytics are computed.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct AnalysisTemplate {
    /// Heading prefix, e.g. `Analysis` or `Market Analysis`
    pub heading: &'static str,
    /// Intro paragraph; `{metric}` is replaced with the selected title
    pub intro: &'static str,
    pub sections: &'static [AnalysisSection],
}

impl AnalysisTemplate {
    pub fn heading_for(&self, title: &str) -> String {
        format!("{}: {}", self.heading, title)
    }

    pub fn intro_for(&self, title: &str) -> String {
        self.intro.replace("{metric}", title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polarity_classification() {
        assert_eq!(Polarity::of(Some(0.3)), Polarity::Positive);
        assert_eq!(Polarity::of(Some(-0.2)), Polarity::Negative);
        assert_eq!(Polarity::of(Some(0.0)), Polarity::Neutral);
        assert_eq!(Polarity::of(None), Polarity::Neutral);
        assert_eq!(Polarity::of(Some(f64::NAN)), Polarity::Neutral);
    }

    #[test]
    fn test_polarity_styling() {
        let up = Metric::new("GDP", MetricValue::Number(7.2)).change(0.3, 4.35);
        assert_eq!(up.polarity().indicator(), "↑");
        assert_eq!(up.polarity().indicator_class(), "growth-indicator");
        assert_eq!(up.polarity().text_class(), "text-growth");

        let down = Metric::new("Deficit", MetricValue::Number(5.8)).change(-0.2, -3.33);
        assert_eq!(down.polarity().indicator(), "↓");
        assert_eq!(down.polarity().text_class(), "text-decline");

        let flat = Metric::new("Repo", MetricValue::Number(6.5)).change(0.0, 0.0);
        assert_eq!(flat.polarity(), Polarity::Neutral);
        assert_eq!(flat.polarity().text_class(), "text-muted-foreground");
    }

    #[test]
    fn test_change_text() {
        let m = Metric::new("GDP", MetricValue::Number(7.2)).change(0.3, 4.35);
        assert_eq!(m.change_text().as_deref(), Some("+0.3 (+4.35%)"));

        let m = Metric::new("Sensex", MetricValue::Number(71595.3)).change(-123.8, -0.17);
        assert_eq!(m.change_text().as_deref(), Some("-123.8 (-0.17%)"));

        let m = Metric::new("Plain", MetricValue::Text("n/a"));
        assert_eq!(m.change_text(), None);
        assert_eq!(m.display_value(), "n/a");
    }

    #[test]
    fn test_empty_unit_is_none() {
        let m = Metric::new("Nifty 50", MetricValue::Number(21731.4)).unit("");
        assert_eq!(m.unit, None);
        let m = m.unit("K Cr");
        assert_eq!(m.unit, Some("K Cr"));
    }

    #[test]
    fn test_stock_quote_formatting() {
        let q = StockQuote { name: "TCS", change: 1.87, price: 3628.15 };
        assert_eq!(q.change_text(), "+1.87%");
        assert_eq!(q.price_text(), "₹3628.15");
        assert_eq!(q.change_class(), "text-growth");

        let q = StockQuote { name: "HDFC Bank", change: -0.62, price: 1543.75 };
        assert_eq!(q.change_text(), "-0.62%");
        assert_eq!(q.change_class(), "text-decline");
    }

    #[test]
    fn test_analysis_template() {
        let t = AnalysisTemplate {
            heading: "Analysis",
            intro: "Insights for {metric} go here.",
            sections: &[],
        };
        assert_eq!(t.heading_for("Sensex"), "Analysis: Sensex");
        assert_eq!(t.intro_for("Sensex"), "Insights for Sensex go here.");
    }
}
