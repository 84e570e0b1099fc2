mod dashboard;
mod interactive;
mod universe;

use std::sync::Arc;

use volrank_core::{
    DashboardConfig, MarketDataSource, Pipeline, ProviderId, SyntheticAdapter, YahooAdapter,
};

use crate::cli::{ChartArgs, Cli, Command};
use crate::error::CliError;
use crate::render::RenderOptions;

pub async fn run(cli: &Cli) -> Result<(), CliError> {
    let config = DashboardConfig::default()
        .with_top_n(usize::try_from(cli.top).unwrap_or(usize::MAX))
        .with_timeout_ms(cli.timeout_ms);
    config.validate()?;

    match &cli.command {
        Command::Dashboard(args) => {
            let pipeline = build_pipeline(cli.source.into(), &config);
            dashboard::run(args, &pipeline).await
        }
        Command::Interactive(args) => {
            let pipeline = build_pipeline(cli.source.into(), &config);
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            interactive::run(
                &pipeline,
                &render_options(&args.chart),
                stdin.lock(),
                stdout.lock(),
            )
            .await
        }
        Command::Universe => universe::run(&config, &mut std::io::stdout().lock()),
    }
}

fn build_source(provider: ProviderId, config: &DashboardConfig) -> Arc<dyn MarketDataSource> {
    match provider {
        ProviderId::Yahoo => {
            Arc::new(YahooAdapter::default().with_timeout_ms(config.timeout_ms))
        }
        ProviderId::Synthetic => Arc::new(SyntheticAdapter::default()),
    }
}

fn build_pipeline(provider: ProviderId, config: &DashboardConfig) -> Pipeline {
    Pipeline::new(build_source(provider, config), config)
}

fn render_options(args: &ChartArgs) -> RenderOptions {
    RenderOptions {
        charts: !args.no_charts,
        chart_width: args.chart_width,
        chart_height: args.chart_height,
    }
}
