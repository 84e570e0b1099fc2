use thiserror::Error;

/// Validation and contract errors exposed by `volrank-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol must start with an ASCII letter: '{ch}'")]
    SymbolInvalidStart { ch: char },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("invalid source '{value}', expected one of yahoo, synthetic")]
    InvalidSource { value: String },

    #[error("timestamp must be RFC3339 UTC (suffix Z): '{value}'")]
    TimestampNotUtc { value: String },
    #[error("unix timestamp {value} is out of range")]
    InvalidUnixTimestamp { value: i64 },

    #[error("'{input}' is not a year")]
    UnparsableYear { input: String },
    #[error("invalid calendar year {year}")]
    InvalidCalendarYear { year: i32 },
    #[error("date range start {start} is after end {end}")]
    InvalidDateRange { start: String, end: String },
    #[error("year {year} is not selectable, expected {newest} down through {oldest}")]
    YearOutOfRange { year: i32, newest: i32, oldest: i32 },
    #[error("year range must run from newest to oldest, got {newest}..{oldest}")]
    InvalidYearRange { newest: i32, oldest: i32 },

    #[error("top count must be at least 1")]
    InvalidTopCount,
    #[error("universe must contain at least one symbol")]
    EmptyUniverse,

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
    #[error("field '{field}' must be non-negative")]
    NegativeValue { field: &'static str },
    #[error("observation at index {index} is not after its predecessor")]
    ObservationsOutOfOrder { index: usize },
}

