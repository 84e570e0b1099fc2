//! One dashboard run: validate the year, fetch the universe, rank, chart.

use std::sync::Arc;
use std::time::Instant;

use log::{debug, info};
use thiserror::Error;

use crate::cache::{CacheMode, FetchKey, SeriesCache};
use crate::config::DashboardConfig;
use crate::data_source::{HistoryRequest, MarketDataSource, SourceError};
use crate::ranking::{rank, Ranking};
use crate::{AssetSeries, DateRange, ProviderId, Symbol, UtcDateTime, ValidationError, YearRange};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PipelineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Fetched universe plus whether it came from the memo.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub series: Arc<Vec<AssetSeries>>,
    pub cache_hit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub ts: UtcDateTime,
    pub adj_close: f64,
}

/// Adjusted-close line for one selected asset.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceChart {
    pub symbol: Symbol,
    pub points: Vec<PricePoint>,
}

impl PriceChart {
    fn from_series(series: &AssetSeries) -> Self {
        Self {
            symbol: series.symbol.clone(),
            points: series
                .observations()
                .iter()
                .map(|o| PricePoint {
                    ts: o.ts,
                    adj_close: o.adj_close,
                })
                .collect(),
        }
    }
}

/// Everything the presentation layer needs for one selected year.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardReport {
    pub year: i32,
    pub range: DateRange,
    pub source: ProviderId,
    pub ranking: Ranking,
    /// One chart per selected symbol, in rank order.
    pub charts: Vec<PriceChart>,
    pub cache_hit: bool,
    pub latency_ms: u64,
}

pub struct Pipeline {
    source: Arc<dyn MarketDataSource>,
    universe: Vec<Symbol>,
    years: YearRange,
    top_n: usize,
    cache: SeriesCache,
    cache_mode: CacheMode,
}

impl Pipeline {
    pub fn new(source: Arc<dyn MarketDataSource>, config: &DashboardConfig) -> Self {
        Self {
            source,
            universe: config.universe.clone(),
            years: config.years,
            top_n: config.top_n,
            cache: SeriesCache::new(),
            cache_mode: CacheMode::default(),
        }
    }

    /// Shares an existing memo, e.g. across pipelines for the same session.
    pub fn with_cache(mut self, cache: SeriesCache) -> Self {
        self.cache = cache;
        self
    }

    pub fn with_cache_mode(mut self, mode: CacheMode) -> Self {
        self.cache_mode = mode;
        self
    }

    pub fn cache(&self) -> &SeriesCache {
        &self.cache
    }

    pub fn years(&self) -> YearRange {
        self.years
    }

    pub fn source_id(&self) -> ProviderId {
        self.source.id()
    }

    /// Fetches every universe symbol for `range`, one at a time in universe
    /// order. The first failure aborts and nothing is stored.
    pub async fn fetch_universe(&self, range: DateRange) -> Result<FetchOutcome, SourceError> {
        let key = FetchKey::new(&self.universe, range);

        if self.cache_mode == CacheMode::Use {
            if let Some(series) = self.cache.get(&key).await {
                debug!("cache hit for {range}");
                return Ok(FetchOutcome {
                    series,
                    cache_hit: true,
                });
            }
        }

        let mut fetched = Vec::with_capacity(self.universe.len());
        for symbol in &self.universe {
            let request = HistoryRequest::new(symbol.clone(), range);
            let series = self.source.history(request).await?;
            if series.is_empty() {
                debug!("{symbol}: no data in {range}");
            }
            fetched.push(series);
        }

        let series = Arc::new(fetched);
        if self.cache_mode != CacheMode::Bypass {
            self.cache.put(key, Arc::clone(&series)).await;
        }

        Ok(FetchOutcome {
            series,
            cache_hit: false,
        })
    }

    pub async fn run(&self, year: i32) -> Result<DashboardReport, PipelineError> {
        let started = Instant::now();
        let year = self.years.validate(year)?;
        let range = DateRange::calendar_year(year)?;

        let outcome = self.fetch_universe(range).await?;
        let ranking = rank(&outcome.series, self.top_n);

        let charts = ranking
            .selection
            .iter()
            .filter_map(|symbol| {
                // Later duplicates win, matching the ranking.
                outcome
                    .series
                    .iter()
                    .rev()
                    .find(|s| &s.symbol == symbol && !s.is_empty())
                    .map(PriceChart::from_series)
            })
            .collect();

        let latency_ms = elapsed_ms(started);
        info!(
            "{year}: ranked {} of {} assets via {} in {latency_ms}ms (cache_hit={})",
            ranking.metrics.len(),
            self.universe.len(),
            self.source.id(),
            outcome.cache_hit
        );

        Ok(DashboardReport {
            year,
            range,
            source: self.source.id(),
            ranking,
            charts,
            cache_hit: outcome.cache_hit,
            latency_ms,
        })
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis().min(u128::from(u64::MAX)) as u64
}
