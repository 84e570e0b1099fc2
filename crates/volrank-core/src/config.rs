use crate::http_client::DEFAULT_TIMEOUT_MS;
use crate::ranking::DEFAULT_TOP_N;
use crate::universe::default_universe;
use crate::{Symbol, ValidationError, YearRange};

/// Settings for one dashboard session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub universe: Vec<Symbol>,
    pub years: YearRange,
    pub top_n: usize,
    pub timeout_ms: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            universe: default_universe(),
            years: YearRange::default(),
            top_n: DEFAULT_TOP_N,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl DashboardConfig {
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_universe(mut self, universe: Vec<Symbol>) -> Self {
        self.universe = universe;
        self
    }

    pub fn with_years(mut self, years: YearRange) -> Self {
        self.years = years;
        self
    }

    /// Rejects settings the dashboard cannot render.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.top_n == 0 {
            return Err(ValidationError::InvalidTopCount);
        }
        if self.universe.is_empty() {
            return Err(ValidationError::EmptyUniverse);
        }
        Ok(())
    }
}
