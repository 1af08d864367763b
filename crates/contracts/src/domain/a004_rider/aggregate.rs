use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rider {
    pub name: String,
    #[serde(default)]
    pub deliveries: i64,
    #[serde(default)]
    pub delivery_time: Option<f64>,
}

/// Row of `GET /riders/performance/`.
///
/// Shown next to the rider list; the two are not joined by key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiderPerformance {
    #[serde(default)]
    pub rider_id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub avg_time: f64,
    #[serde(default)]
    pub deliveries: i64,
}
