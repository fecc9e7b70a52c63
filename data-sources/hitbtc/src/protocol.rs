use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{error::Error, REQUEST_ID};

#[derive(Serialize, Debug, Default, Clone, PartialEq)]
pub struct Params {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Request {
    pub method: String,
    pub params: Params,
    pub id: u32,
}

impl Request {
    pub fn get_currency(currency: &str) -> Self {
        Self {
            method: "getCurrency".to_string(),
            params: Params {
                currency: Some(currency.to_string()),
                ..Default::default()
            },
            id: REQUEST_ID,
        }
    }

    pub fn subscribe_ticker(symbol: &str) -> Self {
        Self {
            method: "subscribeTicker".to_string(),
            params: Params {
                symbol: Some(symbol.to_string()),
                ..Default::default()
            },
            id: REQUEST_ID,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Direct reply to a request.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum Response<T> {
    Success { result: T },
    Error { error: RpcError },
}

/// Server push, e.g. a ticker update after `subscribeTicker`.
#[derive(Deserialize, Debug, Clone)]
pub struct Notification<T> {
    pub method: String,
    pub params: T,
}

fn decode<T: DeserializeOwned>(text: &str) -> Result<T, Error> {
    serde_json::from_str::<T>(text).map_err(|e| Error::Decode(e, text.to_string()))
}

pub fn decode_reply<T: DeserializeOwned>(text: &str) -> Result<T, Error> {
    match decode::<Response<T>>(text)? {
        Response::Success { result } => Ok(result),
        Response::Error { error } => Err(Error::Rpc {
            code: error.code,
            message: error.message,
        }),
    }
}

pub fn decode_notification<T: DeserializeOwned>(text: &str) -> Result<T, Error> {
    if let Ok(Response::Error { error }) = decode::<Response<serde_json::Value>>(text) {
        return Err(Error::Rpc {
            code: error.code,
            message: error.message,
        });
    }
    decode::<Notification<T>>(text).map(|n| n.params)
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;
    use crate::public::{currency::Currency, ticker::Ticker};

    #[test]
    fn request_shape() {
        let request = serde_json::to_value(Request::get_currency("ETH")).unwrap();
        assert_eq!(
            request,
            json!({"method": "getCurrency", "params": {"currency": "ETH"}, "id": 123})
        );

        let request = serde_json::to_value(Request::subscribe_ticker("ETHBTC")).unwrap();
        assert_eq!(
            request,
            json!({"method": "subscribeTicker", "params": {"symbol": "ETHBTC"}, "id": 123})
        );
    }

    #[test]
    fn currency_reply() {
        let raw_msg = r#"{
            "jsonrpc": "2.0",
            "result": {
                "id": "ETH",
                "fullName": "Ethereum",
                "crypto": true,
                "payinEnabled": true,
                "payinPaymentId": false,
                "payinConfirmations": 2,
                "payoutEnabled": true,
                "payoutIsPaymentId": false,
                "transferEnabled": true,
                "delisted": false,
                "payoutFee": "0.001"
            },
            "id": 123
        }"#;

        let currency: Currency = decode_reply(raw_msg).unwrap();
        assert_eq!(currency.id, "ETH");
        assert_eq!(currency.full_name, "Ethereum");
    }

    #[test]
    fn error_reply() {
        let raw_msg = r#"{
            "jsonrpc": "2.0",
            "error": {"code": 2002, "message": "Currency not found", "description": ""},
            "id": 123
        }"#;

        let err = decode_reply::<Currency>(raw_msg).unwrap_err();
        assert!(matches!(err, Error::Rpc { code: 2002, .. }));
        assert!(!err.is_fatal());
    }

    #[test]
    fn ticker_notification() {
        let raw_msg = r#"{
            "jsonrpc": "2.0",
            "method": "ticker",
            "params": {
                "ask": "0.054464",
                "bid": "0.054463",
                "last": "0.054463",
                "open": "0.057133",
                "low": "0.053615",
                "high": "0.057559",
                "volume": "33068.346",
                "volumeQuote": "1832.687530809",
                "timestamp": "2018-10-19T16:34:25.041Z",
                "symbol": "ETHBTC"
            }
        }"#;

        let ticker: Ticker = decode_notification(raw_msg).unwrap();
        assert_eq!(ticker.ask, "0.054464");
        assert_eq!(ticker.high, "0.057559");
        assert_eq!(ticker.symbol, "ETHBTC");
    }

    #[test]
    fn ticker_without_market_values() {
        let raw_msg = r#"{
            "jsonrpc": "2.0",
            "method": "ticker",
            "params": {"ask": null, "bid": null, "last": "1.5", "open": null, "low": null, "high": null, "symbol": "XYZBTC"}
        }"#;

        let ticker: Ticker = decode_notification(raw_msg).unwrap();
        assert_eq!(ticker.ask, "");
        assert_eq!(ticker.last, "1.5");
    }

    #[test]
    fn garbage_is_decode_error() {
        let err = decode_notification::<Ticker>("not json").unwrap_err();
        assert!(matches!(err, Error::Decode(_, ref raw) if raw == "not json"));
    }
}
