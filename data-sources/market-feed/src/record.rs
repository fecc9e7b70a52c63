use serde::{Deserialize, Serialize};

use crate::symbol::{CurrencyInfo, Symbol, TickerQuote};

/// One row of a published snapshot. Prices stay as the venue's decimal text.
///
/// An all-empty record means "no data yet", not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: String,
    pub full_name: String,
    pub ask: String,
    pub bid: String,
    pub last: String,
    pub open: String,
    pub low: String,
    pub high: String,
    pub fee_currency: String,
}

impl Record {
    pub fn new(currency: CurrencyInfo, ticker: TickerQuote, symbol: &Symbol) -> Self {
        Self {
            id: currency.id,
            full_name: currency.full_name,
            ask: ticker.ask,
            bid: ticker.bid,
            last: ticker.last,
            open: ticker.open,
            low: ticker.low,
            high: ticker.high,
            fee_currency: symbol.fee_currency.clone(),
        }
    }

    /// Lookup key, the exchange's composite naming: currency id + fee currency.
    pub fn key(&self) -> String {
        format!("{}{}", self.id, self.fee_currency)
    }
}
