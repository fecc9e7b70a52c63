use serde::Deserialize;
use toolset::deser_string_or_empty;

/// Quote values are kept as the venue sends them, as decimal text.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Ticker {
    #[serde(default, deserialize_with = "deser_string_or_empty")]
    pub ask: String,
    #[serde(default, deserialize_with = "deser_string_or_empty")]
    pub bid: String,
    #[serde(default, deserialize_with = "deser_string_or_empty")]
    pub last: String,
    #[serde(default, deserialize_with = "deser_string_or_empty")]
    pub open: String,
    #[serde(default, deserialize_with = "deser_string_or_empty")]
    pub low: String,
    #[serde(default, deserialize_with = "deser_string_or_empty")]
    pub high: String,
    #[serde(default)]
    pub symbol: String,
}
