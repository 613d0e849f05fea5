//! Panel definitions
//!
//! Each tab maps to one [`Panel`]: a header, a metric grid, its charts and an
//! optional analysis template. All content is literal.

use serde::Serialize;

use super::tab::Tab;
use super::types::{
    AnalysisSection, AnalysisTemplate, ChartSpec, Icon, IpoListing, Metric, MetricValue,
    StockQuote,
};

/// Static description of one dashboard panel
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Panel {
    pub tab: Tab,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub metrics: &'static [Metric],
    /// Whether clicking a card selects it for analysis
    pub metrics_clickable: bool,
    pub charts: &'static [ChartSpec],
    pub analysis: Option<&'static AnalysisTemplate>,
}

impl Panel {
    pub fn metric(&self, title: &str) -> Option<&'static Metric> {
        self.metrics.iter().find(|m| m.title == title)
    }
}

/// Look up the panel for a tab
pub fn panel(tab: Tab) -> &'static Panel {
    match tab {
        Tab::Economy => &ECONOMY_PANEL,
        Tab::Markets => &MARKETS_PANEL,
        Tab::Data => &DATA_PANEL,
    }
}

const fn number(title: &'static str, value: f64) -> Metric {
    Metric::new(title, MetricValue::Number(value))
}

// ---------------------------------------------------------------------------
// Economy
// ---------------------------------------------------------------------------

pub static ECONOMY_METRICS: [Metric; 6] = [
    number("GDP Growth Rate", 7.2)
        .change(0.3, 4.35)
        .unit("%")
        .description("Year-over-year real GDP growth")
        .icon(Icon::TrendingUp),
    number("Inflation (CPI)", 5.69)
        .change(0.12, 2.15)
        .unit("%")
        .description("Consumer Price Index inflation")
        .icon(Icon::TrendingDown),
    number("Fiscal Deficit", 5.8)
        .change(-0.2, -3.33)
        .unit("% of GDP")
        .description("Government fiscal deficit ratio")
        .icon(Icon::DollarSign),
    number("Unemployment Rate", 4.1)
        .change(-0.3, -6.82)
        .unit("%")
        .description("Urban unemployment percentage")
        .icon(Icon::Users),
    number("Current Account", -1.3)
        .change(0.4, 23.53)
        .unit("% of GDP")
        .description("Current account balance")
        .icon(Icon::PieChart),
    number("Forex Reserves", 635.2)
        .change(2.8, 0.44)
        .unit("B USD")
        .description("Foreign exchange reserves")
        .icon(Icon::BarChart),
];

pub static ECONOMY_CHARTS: [ChartSpec; 4] = [
    ChartSpec::new("GDP Growth Rate (20 Years)")
        .color("#00D8FF")
        .unit("%")
        .height(350),
    ChartSpec::new("Inflation Rate (CPI)")
        .color("#FF6B6B")
        .unit("%")
        .height(350),
    ChartSpec::new("Forex Reserves")
        .color("#4ECDC4")
        .unit(" B USD")
        .height(350),
    ChartSpec::new("Fiscal Deficit (% of GDP)")
        .color("#FFE66D")
        .unit("%")
        .height(350),
];

pub static ECONOMY_ANALYSIS: AnalysisTemplate = AnalysisTemplate {
    heading: "Analysis",
    intro: "Detailed analysis and insights for {metric} will be displayed here. \
            This section can include correlation analysis, policy impact assessment, \
            and forecasting models.",
    sections: &[
        AnalysisSection {
            heading: "Key Factors",
            items: &[
                "Monetary policy decisions",
                "Global economic conditions",
                "Government fiscal policies",
            ],
        },
        AnalysisSection {
            heading: "Impact Areas",
            items: &[
                "Consumer spending",
                "Investment flows",
                "Export competitiveness",
            ],
        },
    ],
};

pub static ECONOMY_PANEL: Panel = Panel {
    tab: Tab::Economy,
    title: "Indian Economy Dashboard",
    subtitle: "Comprehensive macroeconomic indicators and trends",
    metrics: &ECONOMY_METRICS,
    metrics_clickable: true,
    charts: &ECONOMY_CHARTS,
    analysis: Some(&ECONOMY_ANALYSIS),
};

// ---------------------------------------------------------------------------
// Markets
// ---------------------------------------------------------------------------

pub static MARKETS_METRICS: [Metric; 6] = [
    number("Nifty 50", 21731.4)
        .change(45.2, 0.21)
        .unit("")
        .description("NSE benchmark index")
        .icon(Icon::TrendingUp),
    number("Sensex", 71595.3)
        .change(-123.8, -0.17)
        .unit("")
        .description("BSE flagship index")
        .icon(Icon::TrendingUp),
    number("Bank Nifty", 48127.5)
        .change(234.7, 0.49)
        .unit("")
        .description("Banking sector index")
        .icon(Icon::Building),
    number("IT Index", 33842.1)
        .change(-98.3, -0.29)
        .unit("")
        .description("Information Technology sector")
        .icon(Icon::Zap),
    number("FII Investment", 12.8)
        .change(3.2, 33.33)
        .unit("K Cr")
        .description("Foreign institutional investment")
        .icon(Icon::DollarSign),
    number("Market Cap", 387.2)
        .change(8.5, 2.24)
        .unit("L Cr")
        .description("Total market capitalization")
        .icon(Icon::TrendingUp),
];

pub static MARKETS_CHARTS: [ChartSpec; 4] = [
    ChartSpec::new("Nifty 50 Historical Performance")
        .color("#00D8FF")
        .height(350),
    ChartSpec::new("FII Investment Flows")
        .color("#FF6B6B")
        .unit(" K Cr")
        .height(350),
    ChartSpec::new("Market Volatility Index")
        .color("#4ECDC4")
        .unit("%")
        .height(350),
    ChartSpec::new("Sectoral Performance")
        .color("#FFE66D")
        .unit("%")
        .height(350),
];

pub static MARKETS_ANALYSIS: AnalysisTemplate = AnalysisTemplate {
    heading: "Market Analysis",
    intro: "Comprehensive market analysis for {metric} including technical indicators, \
            fundamental analysis, and correlation with global markets.",
    sections: &[
        AnalysisSection {
            heading: "Technical Indicators",
            items: &[
                "RSI: 58.2 (Neutral)",
                "MACD: Bullish crossover",
                "Support: 21,500",
            ],
        },
        AnalysisSection {
            heading: "Market Drivers",
            items: &[
                "RBI monetary policy",
                "Global risk sentiment",
                "Earnings growth",
            ],
        },
        AnalysisSection {
            heading: "Risk Factors",
            items: &[
                "Inflation concerns",
                "Geopolitical tensions",
                "Oil price volatility",
            ],
        },
    ],
};

pub static MARKETS_PANEL: Panel = Panel {
    tab: Tab::Markets,
    title: "Financial Markets",
    subtitle: "Real-time market data and investment flows",
    metrics: &MARKETS_METRICS,
    metrics_clickable: true,
    charts: &MARKETS_CHARTS,
    analysis: Some(&MARKETS_ANALYSIS),
};

// ---------------------------------------------------------------------------
// Listed & unlisted data
// ---------------------------------------------------------------------------

pub static DATA_METRICS: [Metric; 4] = [
    number("Listed Companies", 5418.0)
        .change(127.0, 2.4)
        .unit("")
        .description("Active listed companies on exchanges")
        .icon(Icon::Database),
    number("Market Cap (Listed)", 387.2)
        .change(8.5, 2.24)
        .unit("L Cr")
        .description("Total listed market capitalization")
        .icon(Icon::BarChart),
    number("IPO Fundraising", 56.8)
        .change(12.3, 27.64)
        .unit("K Cr")
        .description("IPO funds raised this year")
        .icon(Icon::Upload),
    number("Unicorns", 108.0)
        .change(15.0, 16.13)
        .unit("")
        .description("Indian unicorn startups")
        .icon(Icon::Database),
];

pub static DATA_PANEL: Panel = Panel {
    tab: Tab::Data,
    title: "Listed & Unlisted Data",
    subtitle: "Comprehensive data on public and private market entities",
    metrics: &DATA_METRICS,
    metrics_clickable: false,
    charts: &[],
    analysis: None,
};

/// Heading of the upload card on the data panel
pub const UPLOAD_HEADING: &str = "Excel Data Upload";
pub const UPLOAD_BUTTON_LABEL: &str = "Upload Excel File";
pub const UPLOAD_HINT: &str =
    "Upload Excel files containing economic data to automatically update all charts and metrics.";

pub static TOP_STOCKS: [StockQuote; 5] = [
    StockQuote { name: "Reliance Industries", change: 2.45, price: 2847.30 },
    StockQuote { name: "TCS", change: 1.87, price: 3628.15 },
    StockQuote { name: "HDFC Bank", change: -0.62, price: 1543.75 },
    StockQuote { name: "Infosys", change: 1.23, price: 1456.80 },
    StockQuote { name: "ICICI Bank", change: 0.89, price: 987.45 },
];

pub static RECENT_IPOS: [IpoListing; 4] = [
    IpoListing { name: "Tech Startup A", size: "₹2,500 Cr", exchange: "NSE", date: "2024-01-15" },
    IpoListing { name: "Healthcare Corp", size: "₹1,800 Cr", exchange: "BSE", date: "2024-01-20" },
    IpoListing { name: "Green Energy Ltd", size: "₹3,200 Cr", exchange: "NSE", date: "2024-01-25" },
    IpoListing { name: "Fintech Solutions", size: "₹950 Cr", exchange: "NSE", date: "2024-02-01" },
];
