use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Symbol catalog unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Cannot decode payload: {0}")]
    DecodeError(String),

    #[error("Cannot open feed session: {0}")]
    ConnectFailure(String),

    #[error("Cannot send request: {0}")]
    SendFailure(String),

    #[error("Cannot receive reply: {0}")]
    ReceiveFailure(String),

    #[error("Feed replied with error {code}: {message}")]
    Rpc { code: i64, message: String },
}

impl Error {
    /// Losing the feed connection ends the refresh path; every other failure
    /// only costs the current call.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::ConnectFailure(_))
    }
}
