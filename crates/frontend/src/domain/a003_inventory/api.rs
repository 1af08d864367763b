use contracts::domain::a003_inventory::InventoryRow;

use crate::shared::api_utils::{get, send_json, ApiError, Body};

pub async fn fetch_inventory(token: Option<&str>) -> Result<Vec<InventoryRow>, ApiError> {
    send_json(get("/inventory/", token), Body::Empty).await
}
