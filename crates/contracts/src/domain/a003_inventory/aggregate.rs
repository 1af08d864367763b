use serde::{Deserialize, Serialize};

/// Residual stock line from `GET /inventory/`.
///
/// Rows carry no id of their own; the list view keys them by position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRow {
    #[serde(default, deserialize_with = "string_or_number")]
    pub ingredient: String,
    #[serde(default)]
    pub quantity: f64,
}

// Some deployments send the ingredient id instead of its name.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}
