use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use tracing::{debug, info};

use crate::{
    error::{AppError, AppResult},
    models::{ApiResponse, Product, SearchParams},
    queries::products,
    AppState,
};

// ── GET /products ─────────────────────────────────────────────────────────────

pub async fn list_products(State(state): State<AppState>) -> Json<ApiResponse<Vec<Product>>> {
    let products = products::all(&state.catalog);
    debug!(count = products.len(), "Listed products");
    Json(ApiResponse::ok(products.to_vec()))
}

// ── GET /products/:id ─────────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    raw_id: Result<Path<String>, PathRejection>,
) -> AppResult<Json<ApiResponse<Product>>> {
    // An undecodable segment is just another invalid id
    let id = raw_id
        .inspect_err(|rejection| debug!(%rejection, "Rejected product id segment"))
        .ok()
        .and_then(|Path(raw)| parse_id(&raw))
        .ok_or_else(|| AppError::BadRequest("Invalid product ID".into()))?;

    let product = products::by_id(&state.catalog, id)
        .cloned()
        .ok_or_else(|| AppError::NotFound("Product not found".into()))?;

    debug!(id, name = %product.name, "Fetched product");
    Ok(Json(ApiResponse::ok(product)))
}

// ── GET /products/category/:category ──────────────────────────────────────────

pub async fn list_by_category(
    State(state): State<AppState>,
    category: Result<Path<String>, PathRejection>,
) -> Json<ApiResponse<Vec<Product>>> {
    // No category name is undecodable, so nothing can match it
    let Ok(Path(category)) = category else {
        debug!("Rejected category segment");
        return Json(ApiResponse::ok(Vec::new()));
    };

    let products = owned(products::by_category(&state.catalog, &category));
    debug!(%category, count = products.len(), "Listed products by category");
    Json(ApiResponse::ok(products))
}

// ── GET /products/featured ────────────────────────────────────────────────────

pub async fn list_featured(State(state): State<AppState>) -> Json<ApiResponse<Vec<Product>>> {
    let products = owned(products::featured(&state.catalog));
    debug!(count = products.len(), "Listed featured products");
    Json(ApiResponse::ok(products))
}

// ── GET /products/in-stock ────────────────────────────────────────────────────

pub async fn list_in_stock(State(state): State<AppState>) -> Json<ApiResponse<Vec<Product>>> {
    let products = owned(products::in_stock(&state.catalog));
    debug!(count = products.len(), "Listed in-stock products");
    Json(ApiResponse::ok(products))
}

// ── GET /products/search?q= ───────────────────────────────────────────────────

pub async fn search_products(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> AppResult<Json<ApiResponse<Vec<Product>>>> {
    // Repeated or malformed `q` counts as no usable term
    let term = params
        .inspect_err(|rejection| debug!(%rejection, "Rejected search query"))
        .ok()
        .and_then(|Query(params)| params.q)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| AppError::BadRequest("Search term is required".into()))?;

    let products = owned(products::search(&state.catalog, &term));
    info!(%term, count = products.len(), "Searched products");
    Ok(Json(ApiResponse::ok(products)))
}

/// Whole-segment integer parse; "12abc" and "" are rejected.
fn parse_id(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

fn owned(products: Vec<&Product>) -> Vec<Product> {
    products.into_iter().cloned().collect()
}
