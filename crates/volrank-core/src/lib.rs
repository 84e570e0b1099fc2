//! # Volrank Core
//!
//! Data acquisition, ranking, and caching for the crypto volume dashboard.
//!
//! ## Overview
//!
//! For a selected calendar year the [`Pipeline`] fetches daily history for a
//! fixed universe of tickers, computes the mean traded volume and total
//! percent change of each asset, and keeps the top N by volume together with
//! their adjusted-close series for charting.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Provider adapters (Yahoo, Synthetic) |
//! | [`cache`] | Memo of fetched universes |
//! | [`config`] | Dashboard settings |
//! | [`data_source`] | Data source trait and request types |
//! | [`domain`] | Domain models (Symbol, AssetSeries, DateRange) |
//! | [`error`] | Validation errors |
//! | [`http_client`] | HTTP client abstraction |
//! | [`metrics`] | Mean volume and percent change |
//! | [`pipeline`] | One dashboard run |
//! | [`ranking`] | Top-N selection |
//! | [`source`] | Provider identifiers |
//! | [`universe`] | Default ticker basket |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use volrank_core::{DashboardConfig, Pipeline, SyntheticAdapter};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DashboardConfig::default();
//!     let pipeline = Pipeline::new(Arc::new(SyntheticAdapter::default()), &config);
//!
//!     let report = pipeline.run(2023).await?;
//!     for metrics in report.ranking.selected_metrics() {
//!         println!("{} {:.0}", metrics.symbol, metrics.mean_volume);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  CLI / Render   │
//! └────────┬────────┘
//!          │ year
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │    Pipeline     │────▶│   SeriesCache    │
//! └────────┬────────┘     └──────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │ Data Source     │────▶│ HTTP Client      │
//! │ (Adapter Trait) │     │ (reqwest)        │
//! └────────┬────────┘     └──────────────────┘
//!          │ AssetSeries
//!          ▼
//! ┌─────────────────┐
//! │ Metrics/Ranking │
//! └─────────────────┘
//! ```

pub mod adapters;
pub mod cache;
pub mod config;
pub mod data_source;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod metrics;
pub mod pipeline;
pub mod ranking;
pub mod source;
pub mod universe;

// Adapter implementations
pub use adapters::{SyntheticAdapter, YahooAdapter};

// Caching
pub use cache::{CacheMode, FetchKey, SeriesCache};

pub use config::DashboardConfig;

// Data source trait and types
pub use data_source::{
    HistoryFuture, HistoryRequest, MarketDataSource, SourceError, SourceErrorKind,
};

// Domain models
pub use domain::{AssetSeries, DateRange, Observation, Symbol, UtcDateTime, YearRange};

pub use error::ValidationError;

pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};

// Kernel
pub use metrics::{AssetMetrics, MetricsError};
pub use pipeline::{DashboardReport, FetchOutcome, Pipeline, PipelineError, PriceChart, PricePoint};
pub use ranking::{rank, Ranking, DEFAULT_TOP_N};

pub use source::ProviderId;
pub use universe::{default_universe, DEFAULT_UNIVERSE};
