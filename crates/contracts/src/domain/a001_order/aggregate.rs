use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Sold order line as returned by `GET /orders/`.
///
/// The API does not send `total`/`date` for every deployment, and older
/// rows may lack a timestamp, so everything but `id` and `quantity` is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub product_id: Option<i64>,
    pub quantity: i64,
    #[serde(default)]
    pub rider_id: Option<i64>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub total: Option<f64>,
    #[serde(default)]
    pub date: Option<String>,
}

/// Optional filters accepted by `GET /orders/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rider_id: Option<i64>,
}
