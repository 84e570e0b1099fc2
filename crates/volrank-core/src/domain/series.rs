use serde::{Deserialize, Serialize};

use crate::{Symbol, UtcDateTime, ValidationError};

/// One trading day of a series: adjusted close and traded volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub ts: UtcDateTime,
    pub adj_close: f64,
    pub volume: f64,
}

impl Observation {
    pub fn new(ts: UtcDateTime, adj_close: f64, volume: f64) -> Result<Self, ValidationError> {
        validate_non_negative("adj_close", adj_close)?;
        validate_non_negative("volume", volume)?;

        Ok(Self {
            ts,
            adj_close,
            volume,
        })
    }
}

/// Chronological per-asset observations for one date range.
///
/// Timestamps are strictly increasing. An empty series means the provider had
/// no data for the period, e.g. the asset was not listed yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetSeries {
    pub symbol: Symbol,
    observations: Vec<Observation>,
}

impl AssetSeries {
    pub fn new(symbol: Symbol, observations: Vec<Observation>) -> Result<Self, ValidationError> {
        if let Some(index) = observations
            .windows(2)
            .position(|pair| pair[1].ts <= pair[0].ts)
        {
            return Err(ValidationError::ObservationsOutOfOrder { index: index + 1 });
        }

        Ok(Self {
            symbol,
            observations,
        })
    }

    pub fn empty(symbol: Symbol) -> Self {
        Self {
            symbol,
            observations: Vec::new(),
        }
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn first(&self) -> Option<&Observation> {
        self.observations.first()
    }

    pub fn last(&self) -> Option<&Observation> {
        self.observations.last()
    }
}

fn validate_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field });
    }
    Ok(())
}
