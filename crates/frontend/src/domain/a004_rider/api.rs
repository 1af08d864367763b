use contracts::domain::a004_rider::{Rider, RiderPerformance};

use crate::shared::api_utils::{get, send_json, ApiError, Body};

pub async fn fetch_riders(token: Option<&str>) -> Result<Vec<Rider>, ApiError> {
    send_json(get("/riders/", token), Body::Empty).await
}

pub async fn fetch_performance(token: Option<&str>) -> Result<Vec<RiderPerformance>, ApiError> {
    send_json(get("/riders/performance/", token), Body::Empty).await
}
