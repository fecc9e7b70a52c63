use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use market_feed::Record;
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::{error::QueryError, ApiState};

#[derive(Serialize)]
struct AllCurrencies<'a> {
    currencies: &'a [Record],
}

pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/currency/all", get(all_currencies))
        .route("/currency/{symbol}", get(currency_by_symbol))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /currency/all, every record of the current snapshot.
async fn all_currencies(State(state): State<Arc<ApiState>>) -> Response {
    let snapshot = state.get_all();
    Json(AllCurrencies {
        currencies: snapshot.records(),
    })
    .into_response()
}

/// GET /currency/{symbol}
async fn currency_by_symbol(
    State(state): State<Arc<ApiState>>,
    Path(symbol): Path<String>,
) -> Result<Json<Record>, QueryError> {
    state.get_by_symbol(&symbol).await.map(Json)
}
