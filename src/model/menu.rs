use serde::{Deserialize, Serialize};

/// A catalog entry. The catalog is seeded at startup and immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u64,
    pub name: String,
    pub price: f64,
    pub category: String,
}
