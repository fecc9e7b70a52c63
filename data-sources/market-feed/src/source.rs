use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::{
    error::Error,
    record::Record,
    symbol::{CurrencyInfo, Symbol, TickerQuote},
};

/// Plain request/response access to the venue's symbol list.
#[async_trait]
pub trait SymbolCatalog: Send + Sync {
    async fn fetch_symbols(&self) -> Result<Vec<Symbol>, Error>;
}

/// Per-symbol quote access. Each call is independent of the others.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn fetch_currency_info(&self, base_currency: &str) -> Result<CurrencyInfo, Error>;

    async fn fetch_ticker(&self, symbol_id: &str) -> Result<TickerQuote, Error>;
}

/// Working set: catalog entries whose id is allowlisted, in catalog order.
pub async fn resolve_symbols(
    catalog: &dyn SymbolCatalog,
    allowlist: &[String],
) -> Result<Vec<Symbol>, Error> {
    let symbols = catalog.fetch_symbols().await?;
    let working_set: Vec<Symbol> = symbols
        .into_iter()
        .filter(|s| allowlist.contains(&s.id))
        .collect();

    let missing: Vec<&String> = allowlist
        .iter()
        .filter(|id| !working_set.iter().any(|s| &s.id == *id))
        .collect();
    if !missing.is_empty() {
        warn!(?missing, "Allowlisted symbols absent from catalog");
    }
    info!(symbols = ?working_set.iter().map(|s| &s.id).collect::<Vec<_>>(), "Resolved working set");

    Ok(working_set)
}

/// Is `symbol_id` listed in the catalog right now.
pub async fn symbol_exists(catalog: &dyn SymbolCatalog, symbol_id: &str) -> Result<bool, Error> {
    let symbols = catalog.fetch_symbols().await?;
    Ok(symbols.iter().any(|s| s.id == symbol_id))
}

/// Fetch currency info and ticker for `symbol` and assemble its record.
///
/// Non-fatal failures fall back to empty fields. When the currency lookup
/// fails the id still comes from the catalog's base currency. Only a fatal
/// error (the feed cannot be reached) is returned.
pub async fn fetch_record(source: &dyn QuoteSource, symbol: &Symbol) -> Result<Record, Error> {
    let currency = match source.fetch_currency_info(&symbol.base_currency).await {
        Ok(currency) => currency,
        Err(e) if e.is_fatal() => return Err(e),
        Err(e) => {
            warn!(symbol = %symbol.id, %e, "Currency info unavailable");
            CurrencyInfo {
                id: symbol.base_currency.clone(),
                full_name: String::new(),
            }
        }
    };

    let ticker = match source.fetch_ticker(&symbol.id).await {
        Ok(ticker) => ticker,
        Err(e) if e.is_fatal() => return Err(e),
        Err(e) => {
            warn!(symbol = %symbol.id, %e, "Ticker unavailable");
            TickerQuote::default()
        }
    };

    debug!(symbol = %symbol.id, ?currency, ?ticker, "Record assembled");
    Ok(Record::new(currency, ticker, symbol))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Catalog(Result<Vec<Symbol>, Error>);

    #[async_trait]
    impl SymbolCatalog for Catalog {
        async fn fetch_symbols(&self) -> Result<Vec<Symbol>, Error> {
            self.0.clone()
        }
    }

    struct Quotes {
        currency: Result<CurrencyInfo, Error>,
        ticker: Result<TickerQuote, Error>,
    }

    #[async_trait]
    impl QuoteSource for Quotes {
        async fn fetch_currency_info(&self, _base_currency: &str) -> Result<CurrencyInfo, Error> {
            self.currency.clone()
        }

        async fn fetch_ticker(&self, _symbol_id: &str) -> Result<TickerQuote, Error> {
            self.ticker.clone()
        }
    }

    fn symbol(id: &str, base: &str, fee: &str) -> Symbol {
        Symbol {
            id: id.into(),
            base_currency: base.into(),
            fee_currency: fee.into(),
        }
    }

    fn catalog() -> Catalog {
        Catalog(Ok(vec![
            symbol("ETHBTC", "ETH", "BTC"),
            symbol("LTCBTC", "LTC", "BTC"),
            symbol("BTCUSD", "BTC", "USD"),
        ]))
    }

    fn ticker() -> TickerQuote {
        TickerQuote {
            ask: "6543.21".into(),
            bid: "6543.20".into(),
            last: "6543.21".into(),
            open: "6600.00".into(),
            low: "6500.00".into(),
            high: "6650.00".into(),
        }
    }

    #[tokio::test]
    async fn resolve_keeps_catalog_order() {
        let allowlist = vec!["BTCUSD".to_string(), "ETHBTC".to_string()];
        let working_set = resolve_symbols(&catalog(), &allowlist).await.unwrap();

        let ids: Vec<_> = working_set.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["ETHBTC", "BTCUSD"]);
    }

    #[tokio::test]
    async fn resolve_to_empty_set() {
        let allowlist = vec!["XRPUSD".to_string()];
        let working_set = resolve_symbols(&catalog(), &allowlist).await.unwrap();
        assert!(working_set.is_empty());
    }

    #[tokio::test]
    async fn resolve_propagates_catalog_failure() {
        let catalog = Catalog(Err(Error::UpstreamUnavailable("down".into())));
        let err = resolve_symbols(&catalog, &["BTCUSD".to_string()])
            .await
            .unwrap_err();
        assert_eq!(err, Error::UpstreamUnavailable("down".into()));
    }

    #[tokio::test]
    async fn existence_check() {
        assert!(symbol_exists(&catalog(), "LTCBTC").await.unwrap());
        assert!(!symbol_exists(&catalog(), "NOPE").await.unwrap());
    }

    #[tokio::test]
    async fn full_record() {
        let quotes = Quotes {
            currency: Ok(CurrencyInfo {
                id: "BTC".into(),
                full_name: "Bitcoin".into(),
            }),
            ticker: Ok(ticker()),
        };

        let record = fetch_record(&quotes, &symbol("BTCUSD", "BTC", "USD"))
            .await
            .unwrap();
        assert_eq!(record.full_name, "Bitcoin");
        assert_eq!(record.high, "6650.00");
        assert_eq!(record.key(), "BTCUSD");
    }

    #[tokio::test]
    async fn transport_failure_keeps_metadata() {
        let quotes = Quotes {
            currency: Err(Error::ReceiveFailure("reset".into())),
            ticker: Err(Error::SendFailure("broken pipe".into())),
        };

        let record = fetch_record(&quotes, &symbol("ETHBTC", "ETH", "BTC"))
            .await
            .unwrap();
        assert_eq!(
            record,
            Record {
                id: "ETH".into(),
                fee_currency: "BTC".into(),
                ..Default::default()
            }
        );
    }

    #[tokio::test]
    async fn decode_failure_on_ticker_only() {
        let quotes = Quotes {
            currency: Ok(CurrencyInfo {
                id: "ETH".into(),
                full_name: "Ethereum".into(),
            }),
            ticker: Err(Error::DecodeError("garbage".into())),
        };

        let record = fetch_record(&quotes, &symbol("ETHBTC", "ETH", "BTC"))
            .await
            .unwrap();
        assert_eq!(record.full_name, "Ethereum");
        assert_eq!(record.ask, "");
        assert_eq!(record.last, "");
    }

    #[tokio::test]
    async fn connect_failure_is_returned() {
        let quotes = Quotes {
            currency: Err(Error::ConnectFailure("refused".into())),
            ticker: Ok(ticker()),
        };

        let err = fetch_record(&quotes, &symbol("BTCUSD", "BTC", "USD"))
            .await
            .unwrap_err();
        assert!(err.is_fatal());
    }
}
