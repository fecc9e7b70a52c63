pub mod error;
pub mod record;
pub mod snapshot;
pub mod source;
pub mod symbol;

pub use error::Error;
pub use record::Record;
pub use snapshot::Snapshot;
pub use source::{fetch_record, resolve_symbols, symbol_exists, QuoteSource, SymbolCatalog};
pub use symbol::{CurrencyInfo, Symbol, TickerQuote};

#[cfg(feature = "hitbtc")]
mod hitbtc_adaptor;

#[cfg(feature = "hitbtc")]
pub use hitbtc_adaptor::*;
