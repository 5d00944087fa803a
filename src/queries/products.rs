use crate::catalog::Catalog;
use crate::models::Product;

pub fn all(catalog: &Catalog) -> &[Product] {
    catalog.products()
}

/// First product with this id.
pub fn by_id(catalog: &Catalog, id: i64) -> Option<&Product> {
    catalog.products().iter().find(|p| p.id == id)
}

/// Exact, case-sensitive match on the category name.
pub fn by_category<'a>(catalog: &'a Catalog, category: &str) -> Vec<&'a Product> {
    catalog
        .products()
        .iter()
        .filter(|p| p.category == category)
        .collect()
}

pub fn featured(catalog: &Catalog) -> Vec<&Product> {
    catalog.products().iter().filter(|p| p.is_featured()).collect()
}

/// Case-insensitive substring search over name and description.
/// Callers reject empty terms before getting here.
pub fn search<'a>(catalog: &'a Catalog, term: &str) -> Vec<&'a Product> {
    let needle = term.to_lowercase();
    catalog
        .products()
        .iter()
        .filter(|p| p.matches_lowercase(&needle))
        .collect()
}

pub fn in_stock(catalog: &Catalog) -> Vec<&Product> {
    catalog.products().iter().filter(|p| p.in_stock).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::fixtures;

    fn ids(products: &[&Product]) -> Vec<i64> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn all_keeps_source_order() {
        let catalog = fixtures::catalog();
        let ids: Vec<i64> = all(&catalog).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 3]);
    }

    #[test]
    fn by_id_returns_matching_product() {
        let catalog = fixtures::catalog();
        for id in [1, 2, 4] {
            let p = by_id(&catalog, id).unwrap();
            assert_eq!(p.id, id);
        }
    }

    #[test]
    fn by_id_first_match_wins_on_duplicates() {
        let catalog = fixtures::catalog();
        assert_eq!(by_id(&catalog, 3).unwrap().name, "Camu Camu Powder");
    }

    #[test]
    fn by_id_unknown_is_none() {
        let catalog = fixtures::catalog();
        assert!(by_id(&catalog, 999_999).is_none());
        assert!(by_id(&catalog, -1).is_none());
    }

    #[test]
    fn by_category_is_exact_and_case_sensitive() {
        let catalog = fixtures::catalog();
        let powders = by_category(&catalog, "powders");
        assert_eq!(ids(&powders), vec![1, 3, 3]);
        assert!(powders.iter().all(|p| p.category == "powders"));

        assert!(by_category(&catalog, "Powders").is_empty());
        assert!(by_category(&catalog, "powder").is_empty());
        assert!(by_category(&catalog, "no-such-category").is_empty());
    }

    #[test]
    fn featured_is_subset_with_flag_true() {
        let catalog = fixtures::catalog();
        let featured = featured(&catalog);
        assert_eq!(ids(&featured), vec![1, 4]);
        for p in &featured {
            assert_eq!(p.featured, Some(true));
            assert!(all(&catalog).contains(*p));
        }
    }

    #[test]
    fn search_ignores_case() {
        let catalog = fixtures::catalog();
        let upper = search(&catalog, "MACA");
        let lower = search(&catalog, "maca");
        assert_eq!(ids(&upper), ids(&lower));
        assert_eq!(ids(&lower), vec![1, 2], "name or description may match");
    }

    #[test]
    fn search_results_contain_the_term() {
        let catalog = fixtures::catalog();
        for term in ["powder", "AMAZON", "c"] {
            let needle = term.to_lowercase();
            for p in search(&catalog, term) {
                assert!(
                    p.name.to_lowercase().contains(&needle)
                        || p.description.to_lowercase().contains(&needle),
                    "{} does not contain {}",
                    p.name,
                    term
                );
            }
        }
    }

    #[test]
    fn search_without_hits_is_empty() {
        let catalog = fixtures::catalog();
        assert!(search(&catalog, "durian").is_empty());
    }

    #[test]
    fn in_stock_filters_on_availability() {
        let catalog = fixtures::catalog();
        let stocked = in_stock(&catalog);
        assert_eq!(ids(&stocked), vec![1, 3, 3]);
        assert!(stocked.iter().all(|p| p.in_stock));
    }
}
