use contracts::domain::a001_order::{Order, OrderQuery};

use crate::shared::api_utils::{get, send_json, with_query, ApiError, Body};

/// `GET /orders/` filtered by the set fields of `query`
pub async fn fetch_orders(query: &OrderQuery, token: Option<&str>) -> Result<Vec<Order>, ApiError> {
    let path = with_query("/orders/", query)?;
    send_json(get(&path, token), Body::Empty).await
}
