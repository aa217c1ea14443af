//! HTTP routes for the data API (axum)
//!
//! `GET /api/data?limit=N` returns the parsed records as a JSON array;
//! `GET /health` is a liveness probe.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Deserializer};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::Error;
use crate::app::services::data_service::DataService;
use crate::constants::{
    API_PREFIX, DATA_ROUTE, HEALTH_ROUTE, INVALID_LIMIT_MESSAGE, READ_ERROR_PREFIX,
};

/// Query parameters accepted by the data route
#[derive(Debug, Deserialize)]
pub struct DataParams {
    /// 32-bit limit; an empty value is treated as absent
    #[serde(default, deserialize_with = "empty_as_none")]
    pub limit: Option<i32>,
}

fn empty_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<i32>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Create the HTTP router over a shared data service
pub fn create_router(service: Arc<DataService>) -> Router {
    Router::new()
        .route(HEALTH_ROUTE, get(health))
        .nest(API_PREFIX, api_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

fn api_routes() -> Router<Arc<DataService>> {
    Router::new().route(DATA_ROUTE, get(get_data))
}

async fn health() -> &'static str {
    "ok"
}

/// Handle `GET /api/data`
///
/// A non-positive limit is rejected before the file is touched. Parsing runs
/// on the blocking pool.
async fn get_data(
    State(service): State<Arc<DataService>>,
    Query(params): Query<DataParams>,
) -> Response {
    let limit = params.limit.map(i64::from);
    if let Some(limit) = limit.filter(|&l| l <= 0) {
        warn!("Invalid limit parameter: {}", limit);
        return error_response(&Error::invalid_limit(limit));
    }

    let start_time = std::time::Instant::now();
    let result = tokio::task::spawn_blocking(move || service.query(limit)).await;

    let records = match result {
        Ok(Ok(records)) => records,
        Ok(Err(e)) => {
            error!("Request failed: {}", e);
            return error_response(&e);
        }
        Err(join_error) => {
            error!("Query task failed: {}", join_error);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("{}{}", READ_ERROR_PREFIX, join_error),
            )
                .into_response();
        }
    };

    if records.is_empty() {
        return StatusCode::NO_CONTENT.into_response();
    }

    info!(
        "Request processed successfully. Returned {} records in {}ms",
        records.len(),
        start_time.elapsed().as_millis()
    );
    (StatusCode::OK, Json(records)).into_response()
}

/// Map an error to a status code and plain-text body
pub fn error_response(error: &Error) -> Response {
    if error.is_client_error() {
        (StatusCode::BAD_REQUEST, INVALID_LIMIT_MESSAGE).into_response()
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("{}{}", READ_ERROR_PREFIX, error),
        )
            .into_response()
    }
}
