use serde::{Deserialize, Serialize};

/// Gross margin per product (`GET /products/margine-lordo/`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductMargin {
    pub product_id: i64,
    pub avg_price: f64,
    pub food_cost: f64,
    pub margin: f64,
}
