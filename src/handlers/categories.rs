use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use tracing::debug;

use crate::{
    error::{AppError, AppResult},
    models::{ApiResponse, Category},
    queries::categories,
    AppState,
};

pub async fn list_categories(State(state): State<AppState>) -> Json<ApiResponse<Vec<Category>>> {
    let categories: Vec<Category> = categories::all(&state.catalog)
        .into_iter()
        .cloned()
        .collect();
    debug!(count = categories.len(), "Listed categories");
    Json(ApiResponse::ok(categories))
}

pub async fn get_category(
    State(state): State<AppState>,
    name: Result<Path<String>, PathRejection>,
) -> AppResult<Json<ApiResponse<Category>>> {
    let not_found = || AppError::NotFound("Category not found".into());

    let Path(name) = name.map_err(|rejection| {
        debug!(%rejection, "Rejected category name segment");
        not_found()
    })?;

    let category = categories::by_name(&state.catalog, &name)
        .cloned()
        .ok_or_else(not_found)?;

    debug!(%name, id = category.id, "Fetched category");
    Ok(Json(ApiResponse::ok(category)))
}
