use std::sync::Arc;

use log::{debug, warn};
use serde::Deserialize;

use crate::data_source::{HistoryFuture, HistoryRequest, MarketDataSource, SourceError};
use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient, DEFAULT_TIMEOUT_MS};
use crate::{AssetSeries, Observation, ProviderId, UtcDateTime, ValidationError};

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";
const COOKIE_ENV: &str = "YAHOO_COOKIE";

/// Yahoo Finance daily chart adapter.
///
/// Reads `/v8/finance/chart/{symbol}` with an explicit `period1`/`period2`
/// window and keeps the adjusted close and volume columns.
#[derive(Clone)]
pub struct YahooAdapter {
    http_client: Arc<dyn HttpClient>,
    cookie: Option<String>,
    timeout_ms: u64,
    base_url: String,
}

impl Default for YahooAdapter {
    fn default() -> Self {
        Self::new(Arc::new(ReqwestHttpClient::new()))
    }
}

impl YahooAdapter {
    /// Build an adapter over `http_client`. A session cookie is picked up from
    /// `YAHOO_COOKIE` when set.
    pub fn new(http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            http_client,
            cookie: std::env::var(COOKIE_ENV).ok().filter(|c| !c.trim().is_empty()),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            base_url: String::from(DEFAULT_BASE_URL),
        }
    }

    pub fn with_cookie(mut self, cookie: Option<String>) -> Self {
        self.cookie = cookie;
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    fn chart_url(&self, req: &HistoryRequest) -> String {
        let (period1, period2) = req.range.unix_bounds();
        format!(
            "{}/v8/finance/chart/{}?period1={}&period2={}&interval=1d&includeAdjustedClose=true&events=div%2Csplits",
            self.base_url,
            urlencoding::encode(req.symbol.as_str()),
            period1,
            period2
        )
    }

    async fn fetch_history(&self, req: HistoryRequest) -> Result<AssetSeries, SourceError> {
        debug!("yahoo: fetching {} for {}", req.symbol, req.range);

        let request = HttpRequest::get(self.chart_url(&req))
            .with_header("referer", "https://finance.yahoo.com/")
            .with_cookie(self.cookie.as_deref())
            .with_timeout_ms(self.timeout_ms);

        let response = self.http_client.execute(request).await.map_err(|e| {
            SourceError::unavailable(format!("yahoo transport error: {}", e.message()))
        })?;

        let status = response.status;
        if status == 429 {
            return Err(SourceError::rate_limited(format!(
                "yahoo rate limited the chart request for {}",
                req.symbol
            )));
        }
        let client_error = (400..500).contains(&status);
        if !response.is_success() && !client_error {
            return Err(SourceError::unavailable(format!(
                "yahoo returned status {status}"
            )));
        }

        // Unknown tickers and windows before listing come back as a structured
        // chart error, with a 4xx status or inside a 200 body.
        match serde_json::from_str::<YahooChartResponse>(&response.body) {
            Ok(chart) => decode_chart(&req, chart),
            Err(e) if client_error => Err(SourceError::invalid_request(format!(
                "yahoo rejected the chart request for {} with status {status}: {e}",
                req.symbol
            ))),
            Err(e) => Err(SourceError::internal(format!(
                "failed to parse yahoo chart: {e}"
            ))),
        }
    }
}

impl MarketDataSource for YahooAdapter {
    fn id(&self) -> ProviderId {
        ProviderId::Yahoo
    }

    fn history<'a>(&'a self, req: HistoryRequest) -> HistoryFuture<'a> {
        Box::pin(async move { self.fetch_history(req).await })
    }
}

/// Decode a chart payload into an in-range, strictly ordered series.
///
/// Any chart error means no data for the requested window.
fn decode_chart(
    req: &HistoryRequest,
    response: YahooChartResponse,
) -> Result<AssetSeries, SourceError> {
    if let Some(error) = response.chart.error {
        debug!(
            "yahoo: no data for {} in {}: {} {}",
            req.symbol,
            req.range,
            error.code,
            error.description.unwrap_or_default()
        );
        return Ok(AssetSeries::empty(req.symbol.clone()));
    }

    let Some(result) = response.chart.result.and_then(|results| results.into_iter().next())
    else {
        return Ok(AssetSeries::empty(req.symbol.clone()));
    };
    let Some(timestamps) = result.timestamp else {
        return Ok(AssetSeries::empty(req.symbol.clone()));
    };

    let quote = result.indicators.quote.into_iter().next().unwrap_or_default();
    let prices = match result.indicators.adjclose.into_iter().next() {
        Some(adjusted) => adjusted.adjclose,
        None => quote.close,
    };
    let volumes = quote.volume;

    let mut observations: Vec<Observation> = Vec::with_capacity(timestamps.len());
    for (index, &seconds) in timestamps.iter().enumerate() {
        let ts = UtcDateTime::from_unix_timestamp(seconds).map_err(validation_to_error)?;
        if !req.range.contains(ts.date()) {
            continue;
        }

        let (Some(Some(price)), Some(Some(volume))) = (prices.get(index), volumes.get(index))
        else {
            continue;
        };

        if observations.last().is_some_and(|previous| previous.ts >= ts) {
            warn!("yahoo: dropping out-of-order row for {} at {ts}", req.symbol);
            continue;
        }

        match Observation::new(ts, *price, *volume) {
            Ok(observation) => observations.push(observation),
            Err(error) => warn!("yahoo: dropping row for {} at {ts}: {error}", req.symbol),
        }
    }

    AssetSeries::new(req.symbol.clone(), observations).map_err(validation_to_error)
}

fn validation_to_error(error: ValidationError) -> SourceError {
    SourceError::internal(error.to_string())
}

#[derive(Debug, Deserialize)]
struct YahooChartResponse {
    chart: YahooChartData,
}

#[derive(Debug, Deserialize)]
struct YahooChartData {
    #[serde(default)]
    result: Option<Vec<YahooChartResult>>,
    #[serde(default)]
    error: Option<YahooChartError>,
}

#[derive(Debug, Deserialize)]
struct YahooChartError {
    code: String,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct YahooChartResult {
    #[serde(default)]
    timestamp: Option<Vec<i64>>,
    indicators: YahooChartIndicators,
}

#[derive(Debug, Deserialize)]
struct YahooChartIndicators {
    #[serde(default)]
    quote: Vec<YahooChartQuote>,
    #[serde(default)]
    adjclose: Vec<YahooAdjClose>,
}

#[derive(Debug, Default, Deserialize)]
struct YahooChartQuote {
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct YahooAdjClose {
    #[serde(default)]
    adjclose: Vec<Option<f64>>,
}
