//! The fixed basket of tickers ranked by the dashboard.

use crate::Symbol;

/// Candidate tickers, in input order. Ties in the ranking keep this order.
pub const DEFAULT_UNIVERSE: [&str; 20] = [
    "BTC-USD", "ETH-USD", "XRP-USD", "BCH-USD", "ADA-USD", "LTC-USD", "EOS-USD", "BNB-USD",
    "XTZ-USD", "XLM-USD", "LINK-USD", "TRX-USD", "NEO-USD", "IOTA-USD", "DASH-USD", "DOT-USD",
    "UNI-USD", "DOGE-USD", "SOL-USD", "AVAX-USD",
];

/// Parsed [`DEFAULT_UNIVERSE`].
pub fn default_universe() -> Vec<Symbol> {
    DEFAULT_UNIVERSE
        .iter()
        .filter_map(|raw| Symbol::parse(raw).ok())
        .collect()
}
