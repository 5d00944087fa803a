pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod queries;

pub use app::{build_router, with_middleware, App, AppState};
pub use catalog::{Catalog, CatalogError, ReferenceCheck};
pub use config::Config;
pub use error::{AppError, AppResult};
