use std::io::Write;

use colored::Colorize;
use tabled::{Table, Tabled};
use volrank_core::DashboardConfig;

use crate::error::CliError;

#[derive(Tabled)]
struct TickerRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Ticker")]
    ticker: String,
    #[tabled(rename = "Base")]
    base: String,
}

pub fn run<W: Write>(config: &DashboardConfig, output: &mut W) -> Result<(), CliError> {
    let rows: Vec<TickerRow> = config
        .universe
        .iter()
        .enumerate()
        .map(|(index, symbol)| TickerRow {
            position: index + 1,
            ticker: symbol.to_string(),
            base: symbol.base().to_string(),
        })
        .collect();

    let years: Vec<String> = config.years.years().map(|y| y.to_string()).collect();

    writeln!(output, "{}", "Universe".bold())?;
    writeln!(output, "{}", Table::new(rows))?;
    writeln!(output, "{} {}", "Years:".cyan(), years.join(", "))?;
    writeln!(output, "{} {}", "Top:".cyan(), config.top_n)?;
    Ok(())
}
