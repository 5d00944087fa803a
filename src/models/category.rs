use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    /// URL-friendly lookup key, e.g. "powders"
    pub name: String,
    /// Human-facing label, e.g. "Superfood Powders"
    pub display_name: String,
    pub description: String,
}
