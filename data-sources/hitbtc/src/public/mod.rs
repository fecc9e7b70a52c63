use tracing::{debug, info};
use url::Url;

use crate::error::Error;

use self::symbol::Symbol;

pub mod currency;
pub mod symbol;
pub mod ticker;

pub const SYMBOLS_PATH: &str = "/api/2/public/symbol";

/// Fetch the full symbol catalog. Order is the venue's order.
pub async fn fetch_symbols(api_host: &Url) -> Result<Vec<Symbol>, Error> {
    let url = api_host.join(SYMBOLS_PATH)?;
    info!(%url, "Fetch symbol catalog");

    let response = reqwest::Client::new()
        .get(url.clone())
        .send()
        .await
        .map_err(|source| Error::Http {
            url: url.clone(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status { url, status });
    }

    let result = response.text().await.map_err(|source| Error::Http {
        url: url.clone(),
        source,
    })?;

    let symbols = serde_json::from_str::<Vec<Symbol>>(&result)
        .map_err(|e| Error::Decode(e, result.clone()))?;
    debug!(count = symbols.len(), "Symbol catalog fetched");

    Ok(symbols)
}
