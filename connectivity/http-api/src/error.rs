use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

pub const NOT_FOUND_MESSAGE: &str = "Symbol doesnot exist";

/// Lookup failures. Both are answered as plain text, never as JSON.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Symbol {0} doesnot exist")]
    NotFound(String),

    #[error("Symbol catalog unavailable: {0}")]
    CatalogUnavailable(#[source] market_feed::Error),
}

impl IntoResponse for QueryError {
    fn into_response(self) -> Response {
        match self {
            // Existing clients expect a 200 with this exact body.
            Self::NotFound(_) => (StatusCode::OK, NOT_FOUND_MESSAGE).into_response(),
            Self::CatalogUnavailable(_) => {
                (StatusCode::BAD_GATEWAY, "Symbol catalog unavailable").into_response()
            }
        }
    }
}
