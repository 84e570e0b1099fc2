//! Per-asset aggregates: mean volume and total percent change.

use thiserror::Error;

use crate::{AssetSeries, Symbol};

/// Why a metric could not be computed for one series.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MetricsError {
    #[error("series for '{symbol}' has no observations")]
    EmptySeries { symbol: Symbol },
    #[error("percent change for '{symbol}' is undefined: first adjusted close is zero")]
    DivisionByZero { symbol: Symbol },
}

/// Unweighted arithmetic mean of the volume column.
pub fn mean_volume(series: &AssetSeries) -> Result<f64, MetricsError> {
    if series.is_empty() {
        return Err(MetricsError::EmptySeries {
            symbol: series.symbol.clone(),
        });
    }

    let total: f64 = series.observations().iter().map(|o| o.volume).sum();
    Ok(total / series.len() as f64)
}

/// `(last - first) / first * 100` over the adjusted close.
///
/// Only the first and last observations are read. A single observation
/// yields `0.0`.
pub fn percent_change(series: &AssetSeries) -> Result<f64, MetricsError> {
    let (Some(first), Some(last)) = (series.first(), series.last()) else {
        return Err(MetricsError::EmptySeries {
            symbol: series.symbol.clone(),
        });
    };

    if first.adj_close == 0.0 {
        return Err(MetricsError::DivisionByZero {
            symbol: series.symbol.clone(),
        });
    }

    Ok((last.adj_close - first.adj_close) / first.adj_close * 100.0)
}

/// Derived metrics for one non-empty series.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetMetrics {
    pub symbol: Symbol,
    pub mean_volume: f64,
    /// `None` when the first adjusted close is zero.
    pub percent_change: Option<f64>,
}

impl AssetMetrics {
    /// Computes both metrics. Fails only for an empty series; an undefined
    /// percent change is reported as `None`.
    pub fn from_series(series: &AssetSeries) -> Result<Self, MetricsError> {
        let mean_volume = mean_volume(series)?;
        let percent_change = match percent_change(series) {
            Ok(value) => Some(value),
            Err(MetricsError::DivisionByZero { .. }) => None,
            Err(error) => return Err(error),
        };

        Ok(Self {
            symbol: series.symbol.clone(),
            mean_volume,
            percent_change,
        })
    }
}
