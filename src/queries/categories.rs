use crate::catalog::Catalog;
use crate::models::Category;

pub fn all(catalog: &Catalog) -> Vec<&Category> {
    catalog.categories().collect()
}

/// Exact match on the unique category name.
pub fn by_name<'a>(catalog: &'a Catalog, name: &str) -> Option<&'a Category> {
    catalog.category_named(name)
}

pub fn by_id(catalog: &Catalog, id: i64) -> Option<&Category> {
    catalog.categories().find(|c| c.id == id)
}

pub fn exists(catalog: &Catalog, name: &str) -> bool {
    by_name(catalog, name).is_some()
}
