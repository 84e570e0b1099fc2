//! # Domain Models
//!
//! Canonical domain types for volrank market data.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Symbol`] | Validated trading-pair ticker (`BTC-USD`) |
//! | [`UtcDateTime`] | UTC timestamp |
//! | [`Observation`] | Adjusted close and volume for one trading day |
//! | [`AssetSeries`] | Chronological observations for one symbol |
//! | [`DateRange`] | Inclusive calendar-date range |
//! | [`YearRange`] | Descending set of selectable years |
//!
//! All constructors validate their invariants and return
//! [`ValidationError`](crate::ValidationError) on bad input.

mod period;
mod series;
mod symbol;
mod timestamp;

pub use period::{DateRange, YearRange};
pub use series::{AssetSeries, Observation};
pub use symbol::Symbol;
pub use timestamp::UtcDateTime;
