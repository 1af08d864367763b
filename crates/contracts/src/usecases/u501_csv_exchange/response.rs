use serde_json::Value;

/// Outcome of a CSV import as far as the UI cares: how many rows went in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportSummary {
    pub imported: usize,
}

impl ImportSummary {
    /// Reads the count from whatever the import endpoint answered.
    ///
    /// The API returns the created rows as an array; a few handlers answer
    /// with an object carrying `length`, `count` or `imported` instead.
    /// Unknown shapes count as zero.
    pub fn from_json(body: &Value) -> Self {
        let imported = match body {
            Value::Array(items) => items.len(),
            Value::Object(map) => ["length", "count", "imported"]
                .iter()
                .filter_map(|key| map.get(*key))
                .find_map(count_of)
                .unwrap_or(0),
            _ => 0,
        };
        Self { imported }
    }
}

/// Non-negative integral counts only; `42.0` is fine, `-1` or `4.5` are skipped.
fn count_of(value: &Value) -> Option<usize> {
    match value {
        Value::Array(items) => Some(items.len()),
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0 && f.fract() == 0.0).map(|f| f as u64))
            .map(|n| n as usize),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_array_body_counts_rows() {
        let body = json!([{ "id": 1 }, { "id": 2 }, { "id": 3 }]);
        assert_eq!(ImportSummary::from_json(&body).imported, 3);
    }

    #[test]
    fn test_object_length_field() {
        assert_eq!(ImportSummary::from_json(&json!({ "length": 42 })).imported, 42);
        assert_eq!(ImportSummary::from_json(&json!({ "count": 5 })).imported, 5);
        assert_eq!(
            ImportSummary::from_json(&json!({ "imported": [1, 2] })).imported,
            2
        );
    }

    #[test]
    fn test_float_count_and_fallthrough() {
        assert_eq!(ImportSummary::from_json(&json!({ "length": 42.0 })).imported, 42);
        assert_eq!(
            ImportSummary::from_json(&json!({ "length": null, "count": 7 })).imported,
            7
        );
        assert_eq!(
            ImportSummary::from_json(&json!({ "count": "n/a", "imported": [1, 2, 3] })).imported,
            3
        );
    }

    #[test]
    fn test_unknown_shape_is_zero() {
        assert_eq!(ImportSummary::from_json(&json!("ok")).imported, 0);
        assert_eq!(ImportSummary::from_json(&json!({ "status": "done" })).imported, 0);
        assert_eq!(ImportSummary::from_json(&Value::Null).imported, 0);
    }
}
