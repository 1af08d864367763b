use contracts::system::auth::{LoginForm, RegisterRequest, TokenResponse, UserInfo};

use super::flow::AuthBackend;
use crate::shared::api_utils::{get, post, send_json, ApiError, Body};

/// Login with the OAuth2 password form
pub async fn login(form: &LoginForm) -> Result<TokenResponse, ApiError> {
    send_json(post("/auth/login", None), Body::form(form)?).await
}

pub async fn register(request: &RegisterRequest) -> Result<TokenResponse, ApiError> {
    send_json(post("/auth/register", None), Body::json(request)?).await
}

/// Get current user info
pub async fn get_current_user(access_token: &str) -> Result<UserInfo, ApiError> {
    send_json(get("/users/me", Some(access_token)), Body::Empty).await
}

/// [`AuthBackend`] talking to the dashboard API.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpAuthBackend;

impl AuthBackend for HttpAuthBackend {
    async fn login(&self, form: &LoginForm) -> Result<TokenResponse, ApiError> {
        login(form).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<TokenResponse, ApiError> {
        register(request).await
    }

    async fn fetch_profile(&self, token: &str) -> Result<UserInfo, ApiError> {
        get_current_user(token).await
    }
}
