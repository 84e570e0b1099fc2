// Shared fixtures for volrank behavior tests
pub use std::sync::Arc;

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

pub use volrank_core::{
    rank, AssetSeries, DashboardConfig, DateRange, HistoryFuture, HistoryRequest,
    MarketDataSource, Observation, Pipeline, PipelineError, ProviderId, SourceError, Symbol,
    UtcDateTime, ValidationError, YearRange,
};

pub fn sym(raw: &str) -> Symbol {
    Symbol::parse(raw).expect("valid symbol")
}

/// Daily series starting 2023-01-01 with one row per price/volume pair.
pub fn series(symbol: &str, prices: &[f64], volumes: &[f64]) -> AssetSeries {
    assert_eq!(prices.len(), volumes.len(), "fixture rows must line up");
    let observations = prices
        .iter()
        .zip(volumes)
        .enumerate()
        .map(|(day, (&price, &volume))| {
            let ts = UtcDateTime::from_unix_timestamp(1_672_531_200 + day as i64 * 86_400)
                .expect("valid timestamp");
            Observation::new(ts, price, volume).expect("valid observation")
        })
        .collect();
    AssetSeries::new(sym(symbol), observations).expect("ordered observations")
}

/// In-memory source returning canned series and counting calls.
#[derive(Default)]
pub struct StaticSource {
    series: HashMap<Symbol, AssetSeries>,
    failing: Option<Symbol>,
    calls: AtomicUsize,
}

impl StaticSource {
    pub fn new(series: Vec<AssetSeries>) -> Self {
        Self {
            series: series.into_iter().map(|s| (s.symbol.clone(), s)).collect(),
            ..Self::default()
        }
    }

    /// Requests for `symbol` fail with an unavailable error.
    pub fn failing_on(mut self, symbol: &str) -> Self {
        self.failing = Some(sym(symbol));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl MarketDataSource for StaticSource {
    fn id(&self) -> ProviderId {
        ProviderId::Synthetic
    }

    fn history<'a>(&'a self, req: HistoryRequest) -> HistoryFuture<'a> {
        Box::pin(async move {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.failing.as_ref() == Some(&req.symbol) {
                return Err(SourceError::unavailable(format!("{} is down", req.symbol)));
            }
            Ok(self
                .series
                .get(&req.symbol)
                .cloned()
                .unwrap_or_else(|| AssetSeries::empty(req.symbol.clone())))
        })
    }
}

/// Config over an explicit universe with the default year range.
pub fn config(universe: &[&str], top_n: usize) -> DashboardConfig {
    DashboardConfig::default()
        .with_universe(universe.iter().map(|raw| sym(raw)).collect())
        .with_top_n(top_n)
}
