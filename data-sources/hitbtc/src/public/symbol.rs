use serde::Deserialize;

/// Catalog entry from `/api/2/public/symbol`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Symbol {
    pub id: String,
    pub base_currency: String,
    #[serde(default)]
    pub quote_currency: String,
    pub fee_currency: String,
}
