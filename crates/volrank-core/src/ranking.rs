//! Top-N selection by mean volume.

use std::cmp::Ordering;

use indexmap::IndexMap;
use log::{debug, warn};

use crate::metrics::{AssetMetrics, MetricsError};
use crate::{AssetSeries, Symbol};

/// Number of assets shown by default.
pub const DEFAULT_TOP_N: usize = 15;

/// Outcome of ranking one set of series.
///
/// `metrics` holds every asset with a non-empty series, keyed in input
/// order. `selection` is the top slice of those keys, ordered by mean volume
/// descending.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    pub selection: Vec<Symbol>,
    pub metrics: IndexMap<Symbol, AssetMetrics>,
    pub warnings: Vec<MetricsError>,
}

impl Ranking {
    pub fn is_empty(&self) -> bool {
        self.selection.is_empty()
    }

    pub fn metrics_for(&self, symbol: &Symbol) -> Option<&AssetMetrics> {
        self.metrics.get(symbol)
    }

    /// Metrics of the selected assets, in rank order.
    pub fn selected_metrics(&self) -> impl Iterator<Item = &AssetMetrics> + '_ {
        self.selection
            .iter()
            .filter_map(|symbol| self.metrics.get(symbol))
    }
}

/// Ranks `series` by mean volume and keeps the first `top_n`.
///
/// Empty series are skipped. When a symbol appears twice the later series
/// replaces the earlier one but keeps its position. Equal mean volumes keep
/// input order.
pub fn rank(series: &[AssetSeries], top_n: usize) -> Ranking {
    let mut metrics: IndexMap<Symbol, AssetMetrics> = IndexMap::new();

    for item in series {
        if item.is_empty() {
            continue;
        }
        match AssetMetrics::from_series(item) {
            // IndexMap::insert keeps the existing slot for a repeated key.
            Ok(computed) => {
                metrics.insert(item.symbol.clone(), computed);
            }
            Err(error) => debug!("{error}"),
        }
    }

    // Collected from the final map so a replaced duplicate leaves no warning.
    let warnings: Vec<MetricsError> = metrics
        .values()
        .filter(|m| m.percent_change.is_none())
        .map(|m| {
            warn!("{}: first adjusted close is zero, percent change undefined", m.symbol);
            MetricsError::DivisionByZero {
                symbol: m.symbol.clone(),
            }
        })
        .collect();

    let mut ordered: Vec<&AssetMetrics> = metrics.values().collect();
    ordered.sort_by(|a, b| descending(a.mean_volume, b.mean_volume));

    let selection = ordered
        .into_iter()
        .take(top_n)
        .map(|m| m.symbol.clone())
        .collect();

    Ranking {
        selection,
        metrics,
        warnings,
    }
}

fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}
