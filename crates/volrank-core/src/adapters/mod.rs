//! Provider adapters implementing [`MarketDataSource`](crate::MarketDataSource).

mod synthetic;
mod yahoo;

pub use synthetic::SyntheticAdapter;
pub use yahoo::YahooAdapter;
