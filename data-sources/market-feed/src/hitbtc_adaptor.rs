use async_trait::async_trait;
use url::Url;

use crate::{
    error::Error,
    source::{QuoteSource, SymbolCatalog},
    symbol::{CurrencyInfo, Symbol, TickerQuote},
};

/// HitBTC public API: catalog over REST, quotes over per-call web socket sessions.
#[derive(Debug, Clone)]
pub struct HitbtcSource {
    api_host: Url,
    ws_host: Url,
}

impl HitbtcSource {
    pub fn new(api_host: Url, ws_host: Url) -> Self {
        Self { api_host, ws_host }
    }
}

#[async_trait]
impl SymbolCatalog for HitbtcSource {
    async fn fetch_symbols(&self) -> Result<Vec<Symbol>, Error> {
        let symbols = hitbtc::public::fetch_symbols(&self.api_host)
            .await
            .map_err(catalog_error)?;

        Ok(symbols.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl QuoteSource for HitbtcSource {
    async fn fetch_currency_info(&self, base_currency: &str) -> Result<CurrencyInfo, Error> {
        let currency = hitbtc::ws::get_currency(&self.ws_host, base_currency).await?;
        Ok(currency.into())
    }

    async fn fetch_ticker(&self, symbol_id: &str) -> Result<TickerQuote, Error> {
        let ticker = hitbtc::ws::fetch_ticker(&self.ws_host, symbol_id).await?;
        Ok(ticker.into())
    }
}

/// Anything that goes wrong while fetching the catalog, short of a readable
/// but malformed body, means the catalog is unavailable.
fn catalog_error(e: hitbtc::error::Error) -> Error {
    match e {
        hitbtc::error::Error::Decode(..) => Error::DecodeError(e.to_string()),
        e => Error::UpstreamUnavailable(e.to_string()),
    }
}

impl From<hitbtc::error::Error> for Error {
    fn from(e: hitbtc::error::Error) -> Self {
        use hitbtc::error::Error as Hitbtc;

        match e {
            Hitbtc::Connect { .. } => Error::ConnectFailure(e.to_string()),
            Hitbtc::Send(_) => Error::SendFailure(e.to_string()),
            Hitbtc::Receive(_) | Hitbtc::StreamClosed => Error::ReceiveFailure(e.to_string()),
            Hitbtc::Decode(..) => Error::DecodeError(e.to_string()),
            Hitbtc::Rpc { code, message } => Error::Rpc { code, message },
            Hitbtc::Url(_) | Hitbtc::Http { .. } | Hitbtc::Status { .. } => {
                Error::UpstreamUnavailable(e.to_string())
            }
        }
    }
}

impl From<hitbtc::public::symbol::Symbol> for Symbol {
    fn from(s: hitbtc::public::symbol::Symbol) -> Self {
        Self {
            id: s.id,
            base_currency: s.base_currency,
            fee_currency: s.fee_currency,
        }
    }
}

impl From<hitbtc::public::currency::Currency> for CurrencyInfo {
    fn from(c: hitbtc::public::currency::Currency) -> Self {
        Self {
            id: c.id,
            full_name: c.full_name,
        }
    }
}

impl From<hitbtc::public::ticker::Ticker> for TickerQuote {
    fn from(t: hitbtc::public::ticker::Ticker) -> Self {
        Self {
            ask: t.ask,
            bid: t.bid,
            last: t.last,
            open: t.open,
            low: t.low,
            high: t.high,
        }
    }
}
