pub mod categories;
pub mod products;

use std::any::Any;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::{error::AppError, AppState};

pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "message": "Server is running!",
            "timestamp": chrono::Utc::now().to_rfc3339(),
        })),
    )
}

/// `GET /` — points clients at the API entry points.
pub async fn index(State(state): State<AppState>) -> Json<serde_json::Value> {
    let prefix = &state.api_prefix;
    Json(json!({
        "message": "Welcome to Rainforest Foods API",
        "endpoints": {
            "health": format!("{}/health", prefix),
            "products": format!("{}/products", prefix),
            "categories": format!("{}/categories", prefix),
        },
    }))
}

pub async fn route_not_found() -> AppError {
    AppError::NotFound("Route not found".into())
}

/// Turns a handler panic into the generic 500 envelope.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::Internal(detail).into_response()
}
