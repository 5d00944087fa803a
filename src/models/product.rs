use serde::{Deserialize, Serialize};

/// Core catalog entity, shaped exactly like the records in `products.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Price in dollars (e.g. 12.99)
    pub price: f64,
    /// Name of the owning category, e.g. "powders"
    pub category: String,
    pub description: String,
    /// Path to the product image, served by the frontend
    pub image: String,
    pub in_stock: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

impl Product {
    /// Only an explicit `featured: true` counts; absent and `false` do not.
    pub fn is_featured(&self) -> bool {
        self.featured == Some(true)
    }

    /// Case-insensitive substring match against name or description.
    /// `needle` must already be lowercased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make(name: &str, description: &str, featured: Option<bool>) -> Product {
        Product {
            id: 1,
            name: name.to_string(),
            description: description.to_string(),
            price: 9.5,
            category: "powders".to_string(),
            image: "/images/test.jpg".to_string(),
            in_stock: true,
            featured,
        }
    }

    // ── Serde shape ────────────────────────────────────────────────────────────

    #[test]
    fn deserializes_camel_case_source_record() {
        let p: Product = serde_json::from_value(json!({
            "id": 7,
            "name": "Maca Powder",
            "price": 14.99,
            "category": "powders",
            "description": "Peruvian root",
            "image": "/images/maca.jpg",
            "inStock": false
        }))
        .unwrap();
        assert_eq!(p.id, 7);
        assert!(!p.in_stock);
        assert_eq!(p.featured, None, "missing featured must deserialize as None");
    }

    #[test]
    fn absent_featured_is_not_serialized() {
        let value = serde_json::to_value(make("A", "B", None)).unwrap();
        assert!(value.get("featured").is_none());
        assert_eq!(value["inStock"], json!(true));
    }

    #[test]
    fn featured_flag_round_trips_when_present() {
        let value = serde_json::to_value(make("A", "B", Some(true))).unwrap();
        assert_eq!(value["featured"], json!(true));
    }

    // ── Predicates ─────────────────────────────────────────────────────────────

    #[test]
    fn featured_requires_explicit_true() {
        assert!(make("A", "B", Some(true)).is_featured());
        assert!(!make("A", "B", Some(false)).is_featured());
        assert!(!make("A", "B", None).is_featured());
    }

    #[test]
    fn matches_name_or_description_ignoring_case() {
        let p = make("Organic MACA Powder", "Energy from the Andes", None);
        assert!(p.matches_lowercase("maca"));
        assert!(p.matches_lowercase("andes"));
        assert!(!p.matches_lowercase("cacao"));
    }
}
