#[derive(Debug, Clone, PartialEq, Hash, Eq)]
pub struct Symbol {
    pub id: String,
    pub base_currency: String,
    pub fee_currency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrencyInfo {
    pub id: String,
    pub full_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickerQuote {
    pub ask: String,
    pub bid: String,
    pub last: String,
    pub open: String,
    pub low: String,
    pub high: String,
}
