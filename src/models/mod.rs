mod category;
mod product;
mod response;

pub use category::Category;
pub use product::Product;
pub use response::ApiResponse;

use serde::Deserialize;

// ── Query parameters ──────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
pub struct SearchParams {
    pub q: Option<String>,
}
