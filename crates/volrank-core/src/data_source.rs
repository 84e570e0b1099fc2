//! Market-data source contract.
//!
//! Every provider adapter implements [`MarketDataSource`]: given a symbol and
//! an inclusive [`DateRange`], return the chronological daily series of
//! adjusted close and volume.
//!
//! Sources must not fail for a well-formed symbol that has no data. Unknown
//! or not-yet-listed assets come back as an empty [`AssetSeries`]; only
//! transport, upstream, and decoding failures are errors.

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use crate::{AssetSeries, DateRange, ProviderId, Symbol};

/// Adapter-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    Unavailable,
    RateLimited,
    InvalidRequest,
    Internal,
}

/// Structured source error. Any of these aborts the current run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    kind: SourceErrorKind,
    message: String,
}

impl SourceError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Unavailable,
            message: message.into(),
        }
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::RateLimited,
            message: message.into(),
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::InvalidRequest,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Internal,
            message: message.into(),
        }
    }

    pub const fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            SourceErrorKind::Unavailable => "source.unavailable",
            SourceErrorKind::RateLimited => "source.rate_limited",
            SourceErrorKind::InvalidRequest => "source.invalid_request",
            SourceErrorKind::Internal => "source.internal",
        }
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for SourceError {}

/// Request payload for one symbol's daily history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRequest {
    pub symbol: Symbol,
    pub range: DateRange,
}

impl HistoryRequest {
    pub fn new(symbol: Symbol, range: DateRange) -> Self {
        Self { symbol, range }
    }
}

/// Boxed future returned by [`MarketDataSource::history`].
pub type HistoryFuture<'a> =
    Pin<Box<dyn Future<Output = Result<AssetSeries, SourceError>> + Send + 'a>>;

/// Source adapter contract.
///
/// Implementations must be `Send + Sync`; the pipeline holds them behind an
/// `Arc<dyn MarketDataSource>`.
pub trait MarketDataSource: Send + Sync {
    /// Returns the provider identifier.
    fn id(&self) -> ProviderId;

    /// Fetches the daily series for `req.symbol` inside `req.range`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the provider is unreachable, rate limited,
    /// or answers with something that cannot be decoded. An asset without
    /// data in range is *not* an error.
    fn history<'a>(&'a self, req: HistoryRequest) -> HistoryFuture<'a>;
}
