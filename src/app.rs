use std::sync::Arc;

use axum::{
    handler::Handler,
    routing::{get, MethodRouter},
    Router,
};
use tower::Layer;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    normalize_path::{NormalizePath, NormalizePathLayer},
    trace::TraceLayer,
};

use crate::{catalog::Catalog, handlers};

/// Shared application state — cheap to clone (all heap behind Arc).
/// The catalog is never mutated after startup, so no lock is needed.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    /// Normalized mount point of the API routes, "" for the root
    pub api_prefix: Arc<str>,
}

impl AppState {
    pub fn new(catalog: Catalog, api_prefix: &str) -> Self {
        Self {
            catalog: Arc::new(catalog),
            api_prefix: Arc::from(api_prefix),
        }
    }
}

/// The full service: routes, middleware and trailing-slash trimming.
/// Trimming has to wrap the router, since a router layer runs after routing.
pub type App = NormalizePath<Router>;

pub fn build_router(state: AppState) -> App {
    let api = Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/health", read_only(handlers::health))

        // ── Products ────────────────────────────────────────────────────────
        .route("/products", read_only(handlers::products::list_products))
        // Static segments must stay ahead of the `:id` capture
        .route("/products/featured", read_only(handlers::products::list_featured))
        .route("/products/in-stock", read_only(handlers::products::list_in_stock))
        .route("/products/search", read_only(handlers::products::search_products))
        .route(
            "/products/category/:category",
            read_only(handlers::products::list_by_category),
        )
        .route("/products/:id", read_only(handlers::products::get_product))

        // ── Categories ──────────────────────────────────────────────────────
        .route("/categories", read_only(handlers::categories::list_categories))
        .route("/categories/:name", read_only(handlers::categories::get_category));

    // axum refuses to nest at the root
    let router = if state.api_prefix.is_empty() {
        Router::new().merge(api)
    } else {
        Router::new().nest(&state.api_prefix, api)
    };

    let router = router.route("/", read_only(handlers::index));

    NormalizePathLayer::trim_trailing_slash().layer(with_middleware(router, state))
}

/// Route fallback, panic catching, CORS and tracing, then the state.
pub fn with_middleware(router: Router<AppState>, state: AppState) -> Router {
    router
        .fallback(handlers::route_not_found)

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CatchPanicLayer::custom(handlers::handle_panic))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET route whose other methods get the "Route not found" envelope
/// instead of an empty 405.
fn read_only<H, T>(handler: H) -> MethodRouter<AppState>
where
    H: Handler<T, AppState>,
    T: 'static,
{
    get(handler).fallback(handlers::route_not_found)
}
