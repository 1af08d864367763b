use contracts::projections::p900_food_cost::FoodCost;
use contracts::projections::p901_product_margin::ProductMargin;

use crate::shared::api_utils::{get, send_json, ApiError, Body};

/// Food cost per product, computed server-side
pub async fn fetch_food_costs(token: Option<&str>) -> Result<Vec<FoodCost>, ApiError> {
    send_json(get("/products/food-cost/", token), Body::Empty).await
}

/// Gross margin per product
pub async fn fetch_product_margins(token: Option<&str>) -> Result<Vec<ProductMargin>, ApiError> {
    send_json(get("/products/margine-lordo/", token), Body::Empty).await
}
