//! Process-lifetime memo of fetched universes.
//!
//! Entries never expire: a finished year of daily history does not change
//! while the dashboard runs, so a repeated selection is served from memory.

use std::collections::HashMap;
use std::sync::Arc;

use crate::{AssetSeries, DateRange, Symbol};

/// How a pipeline run interacts with the memo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheMode {
    /// Serve a stored universe when present, otherwise fetch and store it.
    #[default]
    Use,
    /// Always fetch and overwrite the stored entry.
    Refresh,
    /// Always fetch; neither read nor write the memo.
    Bypass,
}

/// Identifies one fetched universe: the ordered tickers and the date range.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FetchKey {
    pub symbols: Vec<Symbol>,
    pub range: DateRange,
}

impl FetchKey {
    pub fn new(symbols: &[Symbol], range: DateRange) -> Self {
        Self {
            symbols: symbols.to_vec(),
            range,
        }
    }
}

/// Thread-safe memo shared by clones.
#[derive(Debug, Clone, Default)]
pub struct SeriesCache {
    inner: Arc<tokio::sync::RwLock<HashMap<FetchKey, Arc<Vec<AssetSeries>>>>>,
}

impl SeriesCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, key: &FetchKey) -> Option<Arc<Vec<AssetSeries>>> {
        self.inner.read().await.get(key).cloned()
    }

    pub async fn put(&self, key: FetchKey, series: Arc<Vec<AssetSeries>>) {
        self.inner.write().await.insert(key, series);
    }

    pub async fn clear(&self) {
        self.inner.write().await.clear();
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}
