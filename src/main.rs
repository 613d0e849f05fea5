//! Econboard CLI
//!
//! Terminal preview of the dashboard:
//! - Render a panel
//! - Run the market ticker
//! - Print a generated chart series
//! - Print the year labels or a default config file

use std::path::PathBuf;

use anyhow::Context;
use chrono::Datelike;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use econboard::config::{generate_default_config, Config};
use econboard::dashboard::{
    DashboardState, FinancialYear, MetricSelection, Tab, UploadLog, FINANCIAL_YEARS,
};
use econboard::render::{series_json, series_table, PanelView, TabLine, TickerLine};
use econboard::series::{try_generate_series, TimeSeriesPoint};
use econboard::ticker::{TickerCycle, TickerRunner, MARKET_TICKER};
use econboard::DashboardError;

#[derive(Parser)]
#[command(name = "econboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Indian economy and markets dashboard preview")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a dashboard panel
    Show {
        /// Tab to show (economy, markets, data)
        #[arg(short, long)]
        tab: Option<Tab>,
        /// Financial year label
        #[arg(short, long)]
        year: Option<String>,
        /// Metric title to open in the analysis panel
        #[arg(short, long)]
        select: Option<String>,
        /// Number of simulated uploads on the data panel
        #[arg(short, long, default_value = "0")]
        uploads: usize,
    },

    /// Run the market ticker
    Ticker {
        /// Stop after this many advances (default: run until Ctrl-C)
        #[arg(short = 'n', long)]
        ticks: Option<usize>,
        /// Milliseconds between advances (default: from config)
        #[arg(short, long)]
        interval_ms: Option<u64>,
    },

    /// Print a generated chart series
    Series {
        /// Number of years (default: from config)
        #[arg(short, long)]
        years: Option<u32>,
        /// Seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,
        /// Output format (table, json, csv)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// List the financial year labels
    Years,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load_default(),
    };

    init_logging(&config, cli.verbose);
    tracing::debug!("Econboard v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Show {
            tab,
            year,
            select,
            uploads,
        } => show(&config, tab, year, select, uploads),
        Commands::Ticker { ticks, interval_ms } => run_ticker(&config, ticks, interval_ms).await,
        Commands::Series {
            years,
            seed,
            format,
        } => print_series(&config, years, seed, &format),
        Commands::Years => {
            for label in FINANCIAL_YEARS {
                println!("{}", label);
            }
            Ok(())
        }
        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
            Ok(())
        }
    }
}

fn init_logging(config: &Config, verbose: bool) {
    let default_filter = if verbose {
        "econboard=debug".to_string()
    } else {
        format!("econboard={}", config.logging.level)
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    // Logs go to stderr so previews on stdout stay clean
    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn show(
    config: &Config,
    tab: Option<Tab>,
    year: Option<String>,
    select: Option<String>,
    upload_count: usize,
) -> anyhow::Result<()> {
    let mut state = DashboardState::new(config.dashboard.default_tab, config.dashboard.year());
    if let Some(tab) = tab {
        state.select_tab(tab);
    }
    if let Some(year) = year {
        let year = FinancialYear::from(year);
        if !year.is_listed() {
            tracing::warn!("{:?} is not one of the selector's years; showing it as given", year.as_str());
        }
        state.select_year(year);
    }

    let panel = state.active_panel();

    let mut selection = MetricSelection::new();
    if let Some(title) = select {
        if !panel.metrics_clickable {
            tracing::warn!("{} panel has no analysis view; ignoring --select", panel.tab);
        } else if panel.metric(&title).is_none() {
            tracing::warn!("No metric titled {:?} on the {} panel", title, panel.tab);
        } else {
            selection.toggle(&title);
        }
    }

    let mut uploads = UploadLog::new();
    if upload_count > 0 && panel.tab != Tab::Data {
        tracing::warn!("Uploads only appear on the data panel");
    }
    for _ in 0..upload_count {
        uploads.record();
    }

    let current_year = chrono::Utc::now().year();
    let mut rng = rand::thread_rng();
    let series = panel
        .charts
        .iter()
        .map(|_| try_generate_series(config.charts.span_years, current_year, &mut rng))
        .collect::<Result<Vec<Vec<TimeSeriesPoint>>, _>>()
        .context("generating chart series (check charts.span_years)")?;

    let cycle = TickerCycle::new(MARKET_TICKER.len());
    println!("{}", TickerLine { items: &MARKET_TICKER, cycle: &cycle });
    println!("{}", TabLine(state.active_tab));
    println!();
    print!(
        "{}",
        PanelView {
            state: &state,
            selection: &selection,
            uploads: &uploads,
            series: &series,
        }
    );
    Ok(())
}

async fn run_ticker(
    config: &Config,
    ticks: Option<usize>,
    interval_ms: Option<u64>,
) -> anyhow::Result<()> {
    let period = interval_ms
        .map(|ms| std::time::Duration::from_millis(ms.max(1)))
        .unwrap_or_else(|| config.ticker.interval());

    let mut cycle = TickerCycle::new(MARKET_TICKER.len());
    println!("{}", TickerLine { items: &MARKET_TICKER, cycle: &cycle });
    if ticks == Some(0) {
        return Ok(());
    }

    let handle = TickerRunner::new(MARKET_TICKER.len()).period(period).start();
    let mut index = handle.subscribe();
    let mut seen = 0usize;

    loop {
        tokio::select! {
            changed = index.changed() => {
                if changed.is_err() {
                    break;
                }
                // Several advances may arrive as one notification
                let target = *index.borrow_and_update();
                let mut steps = cycle.steps_to(target);
                if let Some(limit) = ticks {
                    steps = steps.min(limit - seen);
                }
                for _ in 0..steps {
                    cycle.advance();
                }
                seen += steps;
                println!("{}", TickerLine { items: &MARKET_TICKER, cycle: &cycle });

                if ticks.is_some_and(|limit| seen >= limit) {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted");
                break;
            }
        }
    }

    handle.stop();
    Ok(())
}

fn print_series(
    config: &Config,
    years: Option<u32>,
    seed: Option<u64>,
    format: &str,
) -> anyhow::Result<()> {
    let years = years.unwrap_or(config.charts.span_years);
    let current_year = chrono::Utc::now().year();

    let points = match seed {
        Some(seed) => try_generate_series(years, current_year, &mut StdRng::seed_from_u64(seed))?,
        None => try_generate_series(years, current_year, &mut rand::thread_rng())?,
    };

    match format {
        "table" => println!("{}", series_table(&points, "")),
        "json" => println!("{}", series_json(&points)?),
        "csv" => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            writer.write_record(["period", "value", "event"])?;
            for point in &points {
                writer.write_record([
                    point.period.as_str(),
                    &format!("{:.2}", point.value),
                    point.event.as_deref().unwrap_or(""),
                ])?;
            }
            writer.flush()?;
        }
        other => return Err(DashboardError::UnknownFormat(other.to_string()).into()),
    }
    Ok(())
}
