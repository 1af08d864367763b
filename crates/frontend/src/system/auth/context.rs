use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api::HttpAuthBackend;
use super::flow::{self, Session};
use super::storage;
use crate::shared::api_utils::ApiError;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    /// True until the stored token has been checked on startup
    pub restoring: bool,
}

impl AuthState {
    pub fn token(&self) -> Option<String> {
        self.session.as_ref().map(|s| s.token.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let stored = storage::get_access_token();
    let auth_state = RwSignal::new(AuthState {
        session: None,
        restoring: stored.is_some(),
    });

    // Try to restore session from localStorage on mount
    Effect::new(move |_| {
        let Some(token) = stored.clone() else {
            return;
        };
        spawn_local(async move {
            match flow::restore(&HttpAuthBackend, token).await {
                Ok(session) => {
                    log::info!("session restored for {}", session.user.email);
                    auth_state.set(AuthState {
                        session: Some(session),
                        restoring: false,
                    });
                }
                Err(e) => {
                    log::warn!("stored token rejected: {}", e);
                    storage::clear_access_token();
                    auth_state.set(AuthState::default());
                }
            }
        });
    });

    provide_context(auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> RwSignal<AuthState> {
    use_context::<RwSignal<AuthState>>().expect("AuthProvider not found in component tree")
}

/// Persist and publish a fully established session
pub fn publish(auth_state: RwSignal<AuthState>, session: Session) {
    log::info!("signed in as {}", session.user.email);
    storage::save_access_token(&session.token);
    auth_state.set(AuthState {
        session: Some(session),
        restoring: false,
    });
}

pub fn sign_out(auth_state: RwSignal<AuthState>) {
    storage::clear_access_token();
    auth_state.set(AuthState::default());
    log::info!("signed out");
}

/// Ends the session when the API reports the token as no longer valid.
/// Returns true when it did.
pub fn handle_unauthorized(auth_state: RwSignal<AuthState>, err: &ApiError) -> bool {
    if matches!(err, ApiError::Unauthorized) {
        log::warn!("token expired, signing out");
        sign_out(auth_state);
        true
    } else {
        false
    }
}
