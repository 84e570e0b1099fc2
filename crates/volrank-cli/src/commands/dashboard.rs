use volrank_core::Pipeline;

use crate::cli::DashboardArgs;
use crate::error::CliError;
use crate::render::{render_header, render_report};

use super::render_options;

pub async fn run(args: &DashboardArgs, pipeline: &Pipeline) -> Result<(), CliError> {
    let year = args.year.unwrap_or_else(|| pipeline.years().default_year());
    let report = pipeline.run(year).await?;

    println!("{}", render_header());
    println!("{}", render_report(&report, &render_options(&args.chart)));
    Ok(())
}
