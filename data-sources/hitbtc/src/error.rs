use thiserror::Error;
use tokio_tungstenite::tungstenite;
use url::Url;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot build url: {0}")]
    Url(#[from] url::ParseError),

    #[error("Cannot reach {url}: {source}")]
    Http { url: Url, source: reqwest::Error },

    #[error("Unexpected status {status} from {url}")]
    Status { url: Url, status: reqwest::StatusCode },

    #[error("Cannot parse message <{1}>: {0}")]
    Decode(serde_json::Error, String),

    #[error("Cannot connect to {url}: {source}")]
    Connect { url: Url, source: tungstenite::Error },

    #[error("Cannot send request: {0}")]
    Send(tungstenite::Error),

    #[error("Cannot get message: {0}")]
    Receive(tungstenite::Error),

    #[error("Stream closed before a data frame arrived")]
    StreamClosed,

    #[error("Venue replied with error {code}: {message}")]
    Rpc { code: i64, message: String },
}

impl Error {
    /// Only a failed session handshake means the feed itself is gone; everything
    /// else is scoped to a single call.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Connect { .. })
    }
}
