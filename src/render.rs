//! Plain-text rendering of the dashboard
//!
//! Used by the terminal preview. Renders the same composition as the web UI:
//! ticker strip, tab strip, then exactly one panel for the active tab.

use std::fmt;

use crate::dashboard::panels::{
    Panel, RECENT_IPOS, TOP_STOCKS, UPLOAD_BUTTON_LABEL, UPLOAD_HEADING, UPLOAD_HINT,
};
use crate::dashboard::state::{DashboardState, MetricSelection, UploadLog};
use crate::dashboard::tab::Tab;
use crate::dashboard::types::{ChartSpec, Icon, Metric};
use crate::error::DashboardResult;
use crate::series::TimeSeriesPoint;
use crate::ticker::{TickerCycle, TickerItem, TICKER_CAPTION};

const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Ticker strip with the highlighted item bracketed
pub struct TickerLine<'a> {
    pub items: &'a [TickerItem],
    pub cycle: &'a TickerCycle,
}

impl fmt::Display for TickerLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", TICKER_CAPTION)?;
        for (i, item) in self.items.iter().enumerate() {
            let arrow = item.arrow().map(|a| format!("{} ", a)).unwrap_or_default();
            let body = format!(
                "{} {} {}{}",
                item.symbol,
                item.value_text(),
                arrow,
                item.change_text()
            );
            if self.cycle.is_current(i) {
                write!(f, "  [{}]", body)?;
            } else {
                write!(f, "  {}", body)?;
            }
        }
        Ok(())
    }
}

/// Tab strip with the active tab bracketed
pub struct TabLine(pub Tab);

impl fmt::Display for TabLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<String> = Tab::ALL
            .iter()
            .map(|tab| {
                let label = format!("{} {}", tab.icon().glyph(), tab.label());
                if *tab == self.0 {
                    format!("[{}]", label)
                } else {
                    format!(" {} ", label)
                }
            })
            .collect();
        write!(f, "{}", labels.join(" "))
    }
}

/// Everything needed to render the active panel
pub struct PanelView<'a> {
    pub state: &'a DashboardState,
    pub selection: &'a MetricSelection,
    pub uploads: &'a UploadLog,
    /// One series per chart of the active panel, in chart order
    pub series: &'a [Vec<TimeSeriesPoint>],
}

impl PanelView<'_> {
    fn panel(&self) -> &'static Panel {
        self.state.active_panel()
    }
}

impl fmt::Display for PanelView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let panel = self.panel();

        writeln!(f, "{}", panel.title)?;
        writeln!(f, "{}", panel.subtitle)?;
        writeln!(
            f,
            "{} Financial Year: {}",
            Icon::Calendar.glyph(),
            self.state.selected_year
        )?;
        writeln!(f)?;

        if panel.tab == Tab::Data {
            write_upload_card(f, self.uploads)?;
        }

        for metric in panel.metrics {
            write_metric(f, metric, panel.metrics_clickable, self.selection)?;
        }

        for (i, chart) in panel.charts.iter().enumerate() {
            let points = self.series.get(i).map(Vec::as_slice).unwrap_or(&[]);
            write_chart(f, chart, points)?;
        }

        if let (Some(template), Some(title)) = (panel.analysis, self.selection.selected()) {
            writeln!(f)?;
            writeln!(f, "{}", template.heading_for(title))?;
            writeln!(f, "{}", template.intro_for(title))?;
            for section in template.sections {
                writeln!(f, "  {}", section.heading)?;
                for item in section.items {
                    writeln!(f, "    • {}", item)?;
                }
            }
        }

        if panel.tab == Tab::Data {
            write_data_tables(f)?;
        }

        Ok(())
    }
}

fn write_metric(
    f: &mut fmt::Formatter<'_>,
    metric: &Metric,
    clickable: bool,
    selection: &MetricSelection,
) -> fmt::Result {
    let marker = if selection.is_selected(metric.title) { '*' } else { ' ' };
    let icon = metric.icon.map(Icon::glyph).unwrap_or(" ");
    let indicator = if metric.change.is_some() {
        metric.polarity().indicator()
    } else {
        " "
    };

    write!(f, "{} {} {:<22} {}", marker, icon, metric.title, indicator)?;
    write!(f, " {}", metric.display_value())?;
    if let Some(unit) = metric.unit {
        write!(f, " {}", unit)?;
    }
    if let Some(change) = metric.change_text() {
        write!(f, "  {}", change)?;
    }
    writeln!(f)?;

    if let Some(description) = metric.description {
        writeln!(f, "      {}", description)?;
    }
    if clickable {
        writeln!(f, "      Click to analyze →")?;
    }
    Ok(())
}

fn write_chart(
    f: &mut fmt::Formatter<'_>,
    chart: &ChartSpec,
    points: &[TimeSeriesPoint],
) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{}", chart.title)?;
    if points.is_empty() {
        return writeln!(f, "  (no data)");
    }

    writeln!(f, "  {}", sparkline(points))?;
    let events: String = points
        .iter()
        .map(|p| if p.has_event() { '^' } else { ' ' })
        .collect();
    writeln!(f, "  {}", events.trim_end())?;

    if let (Some(first), Some(last)) = (points.first(), points.last()) {
        writeln!(f, "  {} … {}", first.period, last.period)?;
    }
    for p in points.iter().filter(|p| p.has_event()) {
        writeln!(
            f,
            "  📍 {} {}{}: {}",
            p.period,
            p.value,
            chart.unit,
            p.event.as_deref().unwrap_or_default()
        )?;
    }
    Ok(())
}

fn write_upload_card(f: &mut fmt::Formatter<'_>, uploads: &UploadLog) -> fmt::Result {
    writeln!(
        f,
        "{} {}    [{} {}]",
        Icon::FileSpreadsheet.glyph(),
        UPLOAD_HEADING,
        Icon::Upload.glyph(),
        UPLOAD_BUTTON_LABEL
    )?;
    writeln!(f, "  {}", UPLOAD_HINT)?;
    if !uploads.is_empty() {
        writeln!(f, "  Recent Uploads:")?;
        for file in uploads.files() {
            writeln!(f, "    {} {}  ✓ Processed", Icon::FileSpreadsheet.glyph(), file)?;
        }
    }
    writeln!(f)
}

fn write_data_tables(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "Top Performing Stocks")?;
    for stock in &TOP_STOCKS {
        writeln!(
            f,
            "  {:<22} {:>10} {:>8}",
            stock.name,
            stock.price_text(),
            stock.change_text()
        )?;
    }

    writeln!(f)?;
    writeln!(f, "Recent IPOs")?;
    for ipo in &RECENT_IPOS {
        writeln!(
            f,
            "  {:<22} {:<4} {:>10}  {}",
            ipo.name, ipo.exchange, ipo.size, ipo.date
        )?;
    }
    Ok(())
}

/// One block character per point, scaled between the series min and max
pub fn sparkline(points: &[TimeSeriesPoint]) -> String {
    let min = points.iter().map(|p| p.value).fold(f64::INFINITY, f64::min);
    let max = points.iter().map(|p| p.value).fold(f64::NEG_INFINITY, f64::max);
    let range = if (max - min).abs() < f64::EPSILON { 1.0 } else { max - min };
    let top = (SPARK_LEVELS.len() - 1) as f64;

    points
        .iter()
        .map(|p| {
            let level = ((p.value - min) / range * top).round() as usize;
            SPARK_LEVELS[level.min(SPARK_LEVELS.len() - 1)]
        })
        .collect()
}

/// Period / value / event table for a series
pub fn series_table(points: &[TimeSeriesPoint], unit: &str) -> String {
    let mut lines = vec![format!("{:<8} {:>12}  {}", "Period", "Value", "Event")];
    for p in points {
        lines.push(format!(
            "{:<8} {:>12}  {}",
            p.period,
            format!("{:.2}{}", p.value, unit),
            p.event.as_deref().unwrap_or("")
        ));
    }
    lines.join("\n")
}

/// Pretty-printed JSON array of points; `event` is omitted when absent
pub fn series_json(points: &[TimeSeriesPoint]) -> DashboardResult<String> {
    Ok(serde_json::to_string_pretty(points)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ticker::MARKET_TICKER;

    fn render(state: &DashboardState, selection: &MetricSelection, uploads: &UploadLog) -> String {
        PanelView {
            state,
            selection,
            uploads,
            series: &[],
        }
        .to_string()
    }

    #[test]
    fn test_only_active_panel_renders() {
        let selection = MetricSelection::new();
        let uploads = UploadLog::new();

        for tab in Tab::ALL {
            let state = DashboardState::new(tab, Default::default());
            let text = render(&state, &selection, &uploads);

            for other in Tab::ALL {
                let title = crate::dashboard::panel(other).title;
                assert_eq!(text.contains(title), other == tab, "{} in {} panel", title, tab);
            }
        }
    }

    #[test]
    fn test_panel_switch_replaces_content() {
        let selection = MetricSelection::new();
        let uploads = UploadLog::new();
        let mut state = DashboardState::default();

        assert!(render(&state, &selection, &uploads).contains("GDP Growth Rate"));
        state.select_tab(Tab::Markets);
        let text = render(&state, &selection, &uploads);
        assert!(text.contains("Nifty 50"));
        assert!(!text.contains("GDP Growth Rate"));
    }

    #[test]
    fn test_analysis_follows_selection() {
        let uploads = UploadLog::new();
        let state = DashboardState::default();
        let mut selection = MetricSelection::new();

        assert!(!render(&state, &selection, &uploads).contains("Analysis:"));

        selection.toggle("Forex Reserves");
        let text = render(&state, &selection, &uploads);
        assert!(text.contains("Analysis: Forex Reserves"));
        assert!(text.contains("• Export competitiveness"));

        selection.toggle("Forex Reserves");
        assert!(!render(&state, &selection, &uploads).contains("Analysis:"));
    }

    #[test]
    fn test_data_panel_lists_uploads() {
        let state = DashboardState::new(Tab::Data, Default::default());
        let selection = MetricSelection::new();
        let mut uploads = UploadLog::new();

        let text = render(&state, &selection, &uploads);
        assert!(!text.contains("Recent Uploads:"));
        assert!(text.contains("Reliance Industries"));
        assert!(text.contains("Fintech Solutions"));

        uploads.record_at(1_700_000_000_000);
        let text = render(&state, &selection, &uploads);
        assert!(text.contains("Economic_Data_1700000000000.xlsx  ✓ Processed"));
    }

    #[test]
    fn test_year_label_shown_verbatim() {
        let state = DashboardState::new(Tab::Markets, "All Years".into());
        let text = render(&state, &MetricSelection::new(), &UploadLog::new());
        assert!(text.contains("Financial Year: All Years"));
    }

    #[test]
    fn test_ticker_line_highlights_current() {
        let mut cycle = TickerCycle::new(MARKET_TICKER.len());
        let line = TickerLine { items: &MARKET_TICKER, cycle: &cycle }.to_string();
        assert!(line.starts_with("LIVE MARKETS"));
        assert!(line.contains("[NIFTY 21,731.4 ↑ +45.2 (+0.21%)]"));

        cycle.advance();
        let line = TickerLine { items: &MARKET_TICKER, cycle: &cycle }.to_string();
        assert!(line.contains("[SENSEX"));
        assert!(!line.contains("[NIFTY"));
    }

    #[test]
    fn test_tab_line() {
        let line = TabLine(Tab::Markets).to_string();
        assert!(line.contains("[📈 Financial Markets]"));
        assert!(line.contains(" 🏛 Indian Economy "));
    }

    #[test]
    fn test_sparkline_and_table() {
        let points = vec![
            TimeSeriesPoint::new("2019", 50.0),
            TimeSeriesPoint::new("2020", 70.0).event("COVID-19"),
            TimeSeriesPoint::new("2021", 90.0),
        ];
        assert_eq!(sparkline(&points), "▁▅█");

        let table = series_table(&points, "%");
        assert!(table.contains("2020"));
        assert!(table.contains("70.00%"));
        assert!(table.contains("COVID-19"));
        assert_eq!(table.lines().count(), 4);
    }

    #[test]
    fn test_series_json_omits_missing_events() {
        let points = vec![
            TimeSeriesPoint::new("2019", 61.25),
            TimeSeriesPoint::new("2020", 38.5).event("COVID-19"),
        ];
        let json = series_json(&points).unwrap();

        let parsed: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0]["period"], "2019");
        assert!(parsed[0].get("event").is_none());
        assert_eq!(parsed[1]["event"], "COVID-19");
        assert_eq!(series_json(&[]).unwrap(), "[]");
    }
}
