//! CLI argument definitions for volrank.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `dashboard` | Rank one year and render cards and charts |
//! | `interactive` | Read years from stdin and re-render each time |
//! | `universe` | List tickers and selectable years |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--source` | `yahoo` | Market data source |
//! | `--top` | `15` | Number of assets to show |
//! | `--timeout-ms` | `10000` | HTTP request timeout in ms |
//! | `--no-color` | `false` | Disable ANSI colors |
//!
//! # Examples
//!
//! ```bash
//! volrank dashboard --year 2021
//! volrank --source synthetic dashboard --no-charts
//! volrank interactive
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use volrank_core::ProviderId;

use crate::render::{DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH};

/// 🪙 volrank - Top cryptocurrencies by trading volume
///
/// Ranks a fixed basket of crypto pairs by mean daily volume for a calendar
/// year and renders summary cards and adjusted-close charts in the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "volrank",
    author,
    version,
    about = "Top cryptocurrencies by trading volume"
)]
pub struct Cli {
    /// Market data source.
    #[arg(long, global = true, value_enum, default_value_t = SourceSelector::Yahoo)]
    pub source: SourceSelector,

    /// Number of assets to show (at least 1).
    #[arg(long, global = true, default_value_t = 15, value_parser = clap::value_parser!(u64).range(1..))]
    pub top: u64,

    /// HTTP request timeout in milliseconds.
    #[arg(long, global = true, default_value_t = 10_000)]
    pub timeout_ms: u64,

    /// Disable ANSI colors.
    #[arg(long, global = true, default_value_t = false)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceSelector {
    /// Yahoo Finance chart API.
    Yahoo,
    /// Deterministic offline data.
    Synthetic,
}

impl From<SourceSelector> for ProviderId {
    fn from(value: SourceSelector) -> Self {
        match value {
            SourceSelector::Yahoo => Self::Yahoo,
            SourceSelector::Synthetic => Self::Synthetic,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 📊 Rank one year and render the dashboard.
    ///
    /// # Examples
    ///
    ///   volrank dashboard
    ///   volrank dashboard --year 2020 --no-charts
    Dashboard(DashboardArgs),

    /// 🔁 Pick years interactively.
    ///
    /// Reads one year per line. An empty line selects the default year;
    /// `q`, `quit`, or end of input exits. Fetched years are kept in memory.
    Interactive(InteractiveArgs),

    /// 📋 List the ticker universe and selectable years.
    Universe,
}

#[derive(Debug, Args)]
pub struct ChartArgs {
    /// Skip the price charts.
    #[arg(long, default_value_t = false)]
    pub no_charts: bool,

    /// Plot width of each chart in columns.
    #[arg(long, default_value_t = DEFAULT_CHART_WIDTH)]
    pub chart_width: usize,

    /// Plot height of each chart in rows.
    #[arg(long, default_value_t = DEFAULT_CHART_HEIGHT)]
    pub chart_height: usize,
}

#[derive(Debug, Args)]
pub struct DashboardArgs {
    /// Calendar year to rank (defaults to the newest selectable year).
    #[arg(long)]
    pub year: Option<i32>,

    #[command(flatten)]
    pub chart: ChartArgs,
}

#[derive(Debug, Args)]
pub struct InteractiveArgs {
    #[command(flatten)]
    pub chart: ChartArgs,
}
