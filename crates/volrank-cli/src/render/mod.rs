//! Terminal rendering of a [`DashboardReport`].
//!
//! | Section | Content |
//! |---------|---------|
//! | Header | Title and one-line description |
//! | Cards | Symbol, mean volume, and percent change per selected asset |
//! | Charts | Adjusted close per selected asset, two per row |

mod cards;
mod chart;
mod format;

use colored::Colorize;
use volrank_core::DashboardReport;

pub use cards::render_cards;
pub use chart::{render_chart, side_by_side, DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH};

pub const TITLE: &str = "Top Cryptocurrencies by Trading Volume";
const DESCRIPTION: &str =
    "Daily volume and adjusted close of the most traded cryptocurrencies for the selected year.";
const CHARTS_PER_ROW: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub charts: bool,
    pub chart_width: usize,
    pub chart_height: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            charts: true,
            chart_width: DEFAULT_CHART_WIDTH,
            chart_height: DEFAULT_CHART_HEIGHT,
        }
    }
}

pub fn render_header() -> String {
    format!("{}\n{}", TITLE.bold().blue(), DESCRIPTION.dimmed())
}

/// Everything below the header for one selected year.
pub fn render_report(report: &DashboardReport, options: &RenderOptions) -> String {
    let mut out = Vec::new();
    out.push(format!(
        "{} {}  {} {}",
        "Year:".cyan(),
        report.year,
        "Source:".cyan(),
        report.source
    ));

    if report.ranking.is_empty() {
        out.push(format!("no data for {}", report.year).yellow().to_string());
        return out.join("\n");
    }

    let shown = report.ranking.selection.len();
    out.push(String::new());
    out.push(
        format!("Top {shown} Cryptocurrencies by Trading Volume")
            .bold()
            .to_string(),
    );
    out.push(render_cards(&report.ranking));

    for warning in &report.ranking.warnings {
        out.push(format!("{} {warning}", "warning:".yellow()));
    }

    if options.charts {
        out.push(String::new());
        out.push("Detailed Price Charts".bold().to_string());
        for pair in report.charts.chunks(CHARTS_PER_ROW) {
            let blocks: Vec<Vec<String>> = pair
                .iter()
                .map(|c| render_chart(c, report.year, options.chart_width, options.chart_height))
                .collect();
            let row = match blocks.as_slice() {
                [left, right] => side_by_side(left, right, 4),
                [single] => single.clone(),
                _ => Vec::new(),
            };
            out.push(String::new());
            out.extend(row);
        }
    }

    out.join("\n")
}
