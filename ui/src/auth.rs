use api::{ApiClient, ApiError};
use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use shared::auth::{redirect_reason, session_state, LoginResponse, RedirectReason, SessionState};

use crate::storage::handoff;

/// Tokens of the logged-in student.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: Option<String>,
}

impl Session {
    /// Session persisted by an earlier visit, if any.
    pub fn restore() -> Option<Self> {
        let store = handoff();
        store.access_token().map(|access_token| Session {
            access_token,
            refresh_token: store.refresh_token(),
        })
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Auth {
    state: Signal<Option<Session>>,
    /// Set when the student pressed Logout, as opposed to a rejected session.
    signed_out: Signal<bool>,
}

impl Auth {
    pub fn new(state: Signal<Option<Session>>, signed_out: Signal<bool>) -> Self {
        Self { state, signed_out }
    }

    pub fn login(&mut self, response: LoginResponse) {
        let store = handoff();
        store.store_tokens(&response.access_token, response.refresh_token.as_deref());
        self.state.set(Some(Session {
            access_token: response.access_token,
            refresh_token: response.refresh_token.or_else(|| store.refresh_token()),
        }));
        self.signed_out.set(false);
    }

    /// Logout requested by the student.
    pub fn sign_out(&mut self) {
        self.signed_out.set(true);
        self.logout();
    }

    pub fn signed_out(&self) -> bool {
        *self.signed_out.read()
    }

    /// Session presence without subscribing the caller to later changes.
    pub fn had_session(&self) -> bool {
        self.state.peek().is_some()
    }

    pub fn logout(&mut self) {
        handoff().clear_session();
        self.state.set(None);
    }

    pub fn token(&self) -> Option<String> {
        self.state.read().as_ref().map(|s| s.access_token.clone())
    }

    /// Client carrying the current access token.
    pub fn client(&self) -> Result<ApiClient, ApiError> {
        ApiClient::with_token(self.token())
    }

    /// Check if an API error is an authentication error.
    /// If it is, logs the user out locally.
    /// Returns true if the error was handled (user logged out), false otherwise.
    pub fn handle_error(&mut self, error: &ApiError) -> bool {
        if error.is_unauthorized() {
            warn!("Request rejected as unauthenticated, clearing session");
            self.logout();
            return true;
        }
        false
    }

    /// Wraps an API call to automatically handle authentication errors.
    pub async fn call<T>(
        mut self,
        fut: impl std::future::Future<Output = Result<T, ApiError>>,
    ) -> Result<T, ApiError> {
        match fut.await {
            Ok(val) => Ok(val),
            Err(e) => {
                self.handle_error(&e);
                Err(e)
            }
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.read().is_some()
    }
}

pub fn use_auth() -> Auth {
    use_context::<Auth>()
}

/// Checks the stored session before a protected page renders. An expired
/// access token is refreshed once. Returns where to send the user, or `None`
/// when the page may render.
pub async fn verify_session(mut auth: Auth, now: i64) -> Option<RedirectReason> {
    let store = handoff();
    let state = session_state(store.access_token().as_deref(), now);

    let refreshed = match (state, store.refresh_token()) {
        (SessionState::Expired, Some(refresh_token)) => {
            match refresh(&refresh_token).await {
                Ok(response) => {
                    info!("Access token refreshed");
                    auth.login(response);
                    true
                }
                Err(e) => {
                    warn!("Token refresh failed: {}", e);
                    false
                }
            }
        }
        _ => false,
    };

    let reason = redirect_reason(state, refreshed);
    if reason.is_some() {
        auth.logout();
    }
    reason
}

async fn refresh(refresh_token: &str) -> Result<LoginResponse, ApiError> {
    ApiClient::with_token(None)?.refresh(refresh_token).await
}
