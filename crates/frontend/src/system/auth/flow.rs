//! Credential exchange for the login and registration forms.
//!
//! Both flows run token exchange, then profile fetch, strictly in sequence and
//! hand back a [`Session`] only when both steps succeeded. Nothing is stored or
//! published on any failure path.

use contracts::system::auth::{LoginForm, RegisterRequest, TokenResponse, UserInfo};
use thiserror::Error;

use super::validation::{validate_login, validate_registration};
use crate::shared::api_utils::ApiError;

pub const REGISTER_FAILED: &str = "Registrazione fallita";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthError {
    #[error("Inserisci email e password")]
    MissingCredentials,
    #[error("Compila tutti i campi")]
    MissingFields,
    #[error("Le password non corrispondono")]
    PasswordMismatch,
    #[error("La password deve avere almeno 8 caratteri, con maiuscole, minuscole, numeri e simboli")]
    WeakPassword,
    #[error("Login Fallito")]
    LoginRejected,
    #[error("{0}")]
    RegisterRejected(String),
    #[error("Impossibile recuperare profilo")]
    ProfileUnavailable,
    #[error("Errore di connessione: {0}")]
    Api(ApiError),
}

impl AuthError {
    /// Raised locally, before any request.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AuthError::MissingCredentials
                | AuthError::MissingFields
                | AuthError::PasswordMismatch
                | AuthError::WeakPassword
        )
    }
}

/// Authenticated user plus the bearer token that proved it.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: UserInfo,
}

/// Remote side of the auth flow.
#[allow(async_fn_in_trait)]
pub trait AuthBackend {
    async fn login(&self, form: &LoginForm) -> Result<TokenResponse, ApiError>;
    async fn register(&self, request: &RegisterRequest) -> Result<TokenResponse, ApiError>;
    async fn fetch_profile(&self, token: &str) -> Result<UserInfo, ApiError>;
}

pub async fn sign_in<B: AuthBackend>(backend: &B, email: &str, password: &str) -> Result<Session, AuthError> {
    validate_login(email, password)?;

    let form = LoginForm {
        username: email.trim().to_string(),
        password: password.to_string(),
    };
    let token = backend.login(&form).await.map_err(|e| match e {
        ApiError::Status { .. } | ApiError::Unauthorized => AuthError::LoginRejected,
        other => AuthError::Api(other),
    })?;

    complete(backend, token, AuthError::LoginRejected).await
}

pub async fn register<B: AuthBackend>(
    backend: &B,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<Session, AuthError> {
    validate_registration(email, password, confirm)?;

    let request = RegisterRequest {
        email: email.trim().to_string(),
        password: password.to_string(),
    };
    let token = backend.register(&request).await.map_err(|e| match e {
        ApiError::Status { detail, .. } => {
            AuthError::RegisterRejected(detail.unwrap_or_else(|| REGISTER_FAILED.to_string()))
        }
        ApiError::Unauthorized => AuthError::RegisterRejected(REGISTER_FAILED.to_string()),
        other => AuthError::Api(other),
    })?;

    complete(backend, token, AuthError::RegisterRejected(REGISTER_FAILED.to_string())).await
}

/// Validate a token restored from storage.
pub async fn restore<B: AuthBackend>(backend: &B, token: String) -> Result<Session, AuthError> {
    let user = backend
        .fetch_profile(&token)
        .await
        .map_err(|_| AuthError::ProfileUnavailable)?;
    Ok(Session { token, user })
}

async fn complete<B: AuthBackend>(
    backend: &B,
    token: TokenResponse,
    on_empty_token: AuthError,
) -> Result<Session, AuthError> {
    if token.access_token.trim().is_empty() {
        return Err(on_empty_token);
    }
    match backend.fetch_profile(&token.access_token).await {
        Ok(user) => Ok(Session {
            token: token.access_token,
            user,
        }),
        Err(e) => {
            log::warn!("profile fetch after token exchange failed: {}", e);
            Err(AuthError::ProfileUnavailable)
        }
    }
}

/// Per-form submission state: `Idle -> Submitting -> {Succeeded | Failed}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl AuthPhase {
    pub fn is_submitting(self) -> bool {
        self == AuthPhase::Submitting
    }

    /// Enter `Submitting`; false when a request is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        *self = AuthPhase::Submitting;
        true
    }

    pub fn finish(&mut self, succeeded: bool) {
        *self = if succeeded {
            AuthPhase::Succeeded
        } else {
            AuthPhase::Failed
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;

    struct FakeBackend {
        token: Result<String, ApiError>,
        profile: Result<UserInfo, ApiError>,
        token_calls: Cell<usize>,
        profile_calls: Cell<usize>,
    }

    impl FakeBackend {
        fn new(token: Result<&str, ApiError>, profile: Result<UserInfo, ApiError>) -> Self {
            Self {
                token: token.map(str::to_string),
                profile,
                token_calls: Cell::new(0),
                profile_calls: Cell::new(0),
            }
        }

        fn issue_token(&self) -> Result<TokenResponse, ApiError> {
            self.token_calls.set(self.token_calls.get() + 1);
            self.token.clone().map(|access_token| TokenResponse {
                access_token,
                token_type: Some("bearer".to_string()),
            })
        }

        fn calls(&self) -> (usize, usize) {
            (self.token_calls.get(), self.profile_calls.get())
        }
    }

    impl AuthBackend for FakeBackend {
        async fn login(&self, _form: &LoginForm) -> Result<TokenResponse, ApiError> {
            self.issue_token()
        }

        async fn register(&self, _request: &RegisterRequest) -> Result<TokenResponse, ApiError> {
            self.issue_token()
        }

        async fn fetch_profile(&self, _token: &str) -> Result<UserInfo, ApiError> {
            self.profile_calls.set(self.profile_calls.get() + 1);
            self.profile.clone()
        }
    }

    fn chef() -> UserInfo {
        UserInfo {
            id: 7,
            email: "chef@example.com".to_string(),
            is_active: Some(true),
        }
    }

    #[test]
    fn test_sign_in_publishes_token_and_profile() {
        let backend = FakeBackend::new(Ok("tok-123"), Ok(chef()));
        let session = block_on(sign_in(&backend, "chef@example.com", "secret")).unwrap();
        assert_eq!(session.token, "tok-123");
        assert_eq!(session.user, chef());
        assert_eq!(backend.calls(), (1, 1));
    }

    #[test]
    fn test_sign_in_empty_fields_never_hit_network() {
        let backend = FakeBackend::new(Ok("tok-123"), Ok(chef()));
        let err = block_on(sign_in(&backend, "", "secret")).unwrap_err();
        assert_eq!(err, AuthError::MissingCredentials);
        assert!(err.is_validation());
        let err = block_on(sign_in(&backend, "chef@example.com", "")).unwrap_err();
        assert_eq!(err, AuthError::MissingCredentials);
        assert_eq!(backend.calls(), (0, 0));
    }

    #[test]
    fn test_rejected_login_skips_profile() {
        let backend = FakeBackend::new(Err(ApiError::Unauthorized), Ok(chef()));
        let err = block_on(sign_in(&backend, "chef@example.com", "wrong")).unwrap_err();
        assert_eq!(err, AuthError::LoginRejected);
        assert_eq!(err.to_string(), "Login Fallito");
        assert_eq!(backend.calls(), (1, 0));
    }

    #[test]
    fn test_profile_failure_yields_no_session() {
        let backend = FakeBackend::new(Ok("tok-123"), Err(ApiError::Timeout(15_000)));
        let err = block_on(sign_in(&backend, "chef@example.com", "secret")).unwrap_err();
        assert_eq!(err, AuthError::ProfileUnavailable);
        assert_eq!(backend.calls(), (1, 1));
    }

    #[test]
    fn test_empty_token_is_rejected_before_profile() {
        let backend = FakeBackend::new(Ok(""), Ok(chef()));
        let err = block_on(sign_in(&backend, "chef@example.com", "secret")).unwrap_err();
        assert_eq!(err, AuthError::LoginRejected);
        assert_eq!(backend.calls(), (1, 0));
    }

    #[test]
    fn test_transport_failure_is_not_reported_as_rejection() {
        let backend = FakeBackend::new(Err(ApiError::Transport("offline".to_string())), Ok(chef()));
        let err = block_on(sign_in(&backend, "chef@example.com", "secret")).unwrap_err();
        assert!(matches!(err, AuthError::Api(ApiError::Transport(_))));
    }

    #[test]
    fn test_register_validation_never_hits_network() {
        let backend = FakeBackend::new(Ok("tok"), Ok(chef()));
        let mismatch = block_on(register(&backend, "chef@example.com", "Str0ng!pw", "Str0ng!pX"));
        assert_eq!(mismatch.unwrap_err(), AuthError::PasswordMismatch);
        let weak = block_on(register(&backend, "chef@example.com", "password", "password"));
        assert_eq!(weak.unwrap_err(), AuthError::WeakPassword);
        assert_eq!(backend.calls(), (0, 0));
    }

    #[test]
    fn test_register_surfaces_server_detail() {
        let backend = FakeBackend::new(
            Err(ApiError::Status {
                status: 400,
                detail: Some("Email già registrata".to_string()),
            }),
            Ok(chef()),
        );
        let err = block_on(register(&backend, "chef@example.com", "Str0ng!pw", "Str0ng!pw")).unwrap_err();
        assert_eq!(err.to_string(), "Email già registrata");

        let backend = FakeBackend::new(Err(ApiError::Status { status: 500, detail: None }), Ok(chef()));
        let err = block_on(register(&backend, "chef@example.com", "Str0ng!pw", "Str0ng!pw")).unwrap_err();
        assert_eq!(err.to_string(), REGISTER_FAILED);
    }

    #[test]
    fn test_register_then_profile() {
        let backend = FakeBackend::new(Ok("fresh"), Ok(chef()));
        let session = block_on(register(&backend, " chef@example.com ", "Str0ng!pw", "Str0ng!pw")).unwrap();
        assert_eq!(session.token, "fresh");
        assert_eq!(backend.calls(), (1, 1));
    }

    #[test]
    fn test_restore_requires_profile() {
        let backend = FakeBackend::new(Ok("unused"), Err(ApiError::Unauthorized));
        let err = block_on(restore(&backend, "stale".to_string())).unwrap_err();
        assert_eq!(err, AuthError::ProfileUnavailable);
        assert_eq!(backend.calls(), (0, 1));
    }

    #[test]
    fn test_phase_allows_single_submission() {
        let mut phase = AuthPhase::default();
        assert!(phase.begin());
        assert!(phase.is_submitting());
        assert!(!phase.begin());
        phase.finish(false);
        assert_eq!(phase, AuthPhase::Failed);
        assert!(phase.begin());
        phase.finish(true);
        assert_eq!(phase, AuthPhase::Succeeded);
    }
}
