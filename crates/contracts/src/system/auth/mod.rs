use serde::{Deserialize, Serialize};

/// Form-encoded body of `POST /auth/login` (OAuth2 password form, so the
/// e-mail travels as `username`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// JSON body of `POST /auth/register`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Profile returned by `GET /users/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// Error body produced by the API (`{"detail": ...}`).
///
/// Validation failures carry a list instead of a string, hence the raw value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorDetail {
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            serde_json::Value::Array(items) => items
                .iter()
                .find_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .map(str::to_string),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detail_string() {
        let detail: ErrorDetail =
            serde_json::from_value(json!({ "detail": "Email già registrata" })).unwrap();
        assert_eq!(detail.message().as_deref(), Some("Email già registrata"));
    }

    #[test]
    fn test_detail_validation_list() {
        let detail: ErrorDetail = serde_json::from_value(json!({
            "detail": [{ "loc": ["body", "email"], "msg": "value is not a valid email address" }]
        }))
        .unwrap();
        assert_eq!(
            detail.message().as_deref(),
            Some("value is not a valid email address")
        );
    }

    #[test]
    fn test_detail_missing() {
        let detail: ErrorDetail = serde_json::from_value(json!({})).unwrap();
        assert_eq!(detail.message(), None);
        let blank: ErrorDetail = serde_json::from_value(json!({ "detail": "  " })).unwrap();
        assert_eq!(blank.message(), None);
    }
}
