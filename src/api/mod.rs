use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
};
use serde::Serialize;
use serde_json::Value;

use crate::{VERSION, WeatherServerError, models::LocationQuery, weather::WeatherLookup};

#[derive(Serialize)]
pub struct ApiError {
    pub error: String,
}

#[derive(Serialize)]
pub struct ApiHealth {
    pub status: &'static str,
    pub version: &'static str,
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

pub fn router(lookup: Arc<WeatherLookup>) -> Router {
    Router::new()
        .route("/health", get(get_health))
        .route("/weather/{location}", get(get_weather))
        .with_state(lookup)
}

async fn get_health() -> Json<ApiHealth> {
    Json(ApiHealth {
        status: "ok",
        version: VERSION,
    })
}

async fn get_weather(
    State(lookup): State<Arc<WeatherLookup>>,
    Path(location): Path<String>,
) -> ApiResult<Value> {
    let payload = lookup
        .fetch(&LocationQuery::new(location))
        .await
        .map_err(into_response_error)?;
    Ok(Json(payload.into_value()))
}

fn status_for(err: &WeatherServerError) -> StatusCode {
    match err {
        WeatherServerError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
        WeatherServerError::UpstreamStatus { .. }
        | WeatherServerError::Decode { .. }
        | WeatherServerError::Network { .. } => StatusCode::BAD_GATEWAY,
        WeatherServerError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn into_response_error(err: WeatherServerError) -> (StatusCode, Json<ApiError>) {
    let status = status_for(&err);
    tracing::warn!("Weather API request failed with {}: {}", status, err);
    (
        status,
        Json(ApiError {
            error: err.to_string(),
        }),
    )
}
