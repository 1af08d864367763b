use serde::{Deserialize, Serialize};

/// Ingredient cost of one unit of a product, computed server-side
/// (`GET /products/food-cost/`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodCost {
    pub product_id: i64,
    pub food_cost: f64,
}
