use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Teacher,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Why a guarded page sent the user back to `/login`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectReason {
    SessionExpired,
    AuthRequired,
}

impl RedirectReason {
    pub fn as_query(&self) -> &'static str {
        match self {
            RedirectReason::SessionExpired => "session_expired",
            RedirectReason::AuthRequired => "auth_required",
        }
    }

    pub fn from_query(value: &str) -> Option<Self> {
        match value {
            "session_expired" => Some(RedirectReason::SessionExpired),
            "auth_required" => Some(RedirectReason::AuthRequired),
            _ => None,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            RedirectReason::SessionExpired => "Your session has expired. Please log in again.",
            RedirectReason::AuthRequired => "Please log in to access that page.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Missing,
    Expired,
    Valid,
}

#[derive(Deserialize)]
struct ExpiryClaim {
    exp: Option<i64>,
}

/// `exp` claim of a JWT, without verifying the signature.
pub fn token_expiry(token: &str) -> Option<i64> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .ok()?;
    serde_json::from_slice::<ExpiryClaim>(&bytes).ok()?.exp
}

/// Tokens that cannot be decoded count as expired.
pub fn is_token_expired(token: &str, now: i64) -> bool {
    token_expiry(token).map_or(true, |exp| exp <= now)
}

pub fn session_state(token: Option<&str>, now: i64) -> SessionState {
    match token {
        None => SessionState::Missing,
        Some(t) if t.trim().is_empty() => SessionState::Missing,
        Some(t) if is_token_expired(t, now) => SessionState::Expired,
        Some(_) => SessionState::Valid,
    }
}

/// Where the guard sends the user, given the stored session and whether an
/// expired token could be refreshed. `None` lets the page render.
pub fn redirect_reason(state: SessionState, refreshed: bool) -> Option<RedirectReason> {
    match state {
        SessionState::Valid => None,
        SessionState::Expired if refreshed => None,
        SessionState::Expired => Some(RedirectReason::SessionExpired),
        SessionState::Missing => Some(RedirectReason::AuthRequired),
    }
}

/// What the route guard does with a protected page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardAction {
    /// Session check still running.
    Wait,
    Render,
    /// Leave for `/login`, with the reason shown there.
    Login(Option<RedirectReason>),
}

/// `check` is the outcome of the session check (`None` while it runs).
/// Afterwards the live session decides: a student who pressed Logout goes to
/// `/login` plainly, a session dropped by a rejected request asks to log in.
pub fn guard_action(
    check: Option<Option<RedirectReason>>,
    logged_in: bool,
    signed_out: bool,
) -> GuardAction {
    match check {
        None => GuardAction::Wait,
        Some(Some(reason)) => GuardAction::Login(Some(reason)),
        Some(None) if logged_in => GuardAction::Render,
        Some(None) if signed_out => GuardAction::Login(None),
        Some(None) => GuardAction::Login(Some(RedirectReason::AuthRequired)),
    }
}

/// A plain visit to `/login` with a live session goes straight to the
/// dashboard. Decided once on arrival, never when a login completes there.
pub fn skip_login_page(had_session: bool, reason: Option<RedirectReason>) -> bool {
    had_session && reason.is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;

    fn token_with(payload: &str) -> String {
        format!(
            "{}.{}.sig",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    #[test]
    fn reads_exp_claim() {
        let token = token_with(r#"{"sub":"u1","exp":1700000000}"#);
        assert_eq!(token_expiry(&token), Some(1_700_000_000));
        assert!(is_token_expired(&token, 1_700_000_000));
        assert!(!is_token_expired(&token, 1_699_999_999));
    }

    #[test]
    fn tolerates_padded_payload() {
        let token = format!(
            "h.{}.s",
            base64::engine::general_purpose::URL_SAFE.encode(r#"{"exp":5}"#)
        );
        assert_eq!(token_expiry(&token), Some(5));
    }

    #[test]
    fn garbage_tokens_are_expired() {
        assert!(is_token_expired("not-a-jwt", 0));
        assert!(is_token_expired(&token_with(r#"{"sub":"u1"}"#), 0));
    }

    #[test]
    fn missing_token_requires_auth() {
        let state = session_state(None, 10);
        assert_eq!(state, SessionState::Missing);
        assert_eq!(
            redirect_reason(state, false),
            Some(RedirectReason::AuthRequired)
        );
        assert_eq!(session_state(Some("  "), 10), SessionState::Missing);
    }

    #[test]
    fn expired_token_redirects_unless_refreshed() {
        let token = token_with(r#"{"exp":100}"#);
        let state = session_state(Some(&token), 200);
        assert_eq!(state, SessionState::Expired);
        assert_eq!(
            redirect_reason(state, false).map(|r| r.as_query()),
            Some("session_expired")
        );
        assert_eq!(redirect_reason(state, true), None);
    }

    #[test]
    fn valid_token_passes() {
        let token = token_with(r#"{"exp":300}"#);
        assert_eq!(redirect_reason(session_state(Some(&token), 200), false), None);
    }

    #[test]
    fn guard_waits_then_keeps_the_check_reason() {
        assert_eq!(guard_action(None, false, false), GuardAction::Wait);
        // The check already cleared the session; its reason must win.
        assert_eq!(
            guard_action(Some(Some(RedirectReason::SessionExpired)), false, false),
            GuardAction::Login(Some(RedirectReason::SessionExpired))
        );
        assert_eq!(
            guard_action(Some(Some(RedirectReason::AuthRequired)), false, false),
            GuardAction::Login(Some(RedirectReason::AuthRequired))
        );
    }

    #[test]
    fn guard_after_a_passed_check() {
        assert_eq!(guard_action(Some(None), true, false), GuardAction::Render);
        assert_eq!(
            guard_action(Some(None), false, false),
            GuardAction::Login(Some(RedirectReason::AuthRequired))
        );
        assert_eq!(guard_action(Some(None), false, true), GuardAction::Login(None));
    }

    #[test]
    fn login_page_is_skipped_only_on_arrival_with_a_session() {
        assert!(skip_login_page(true, None));
        assert!(!skip_login_page(false, None));
        assert!(!skip_login_page(true, Some(RedirectReason::SessionExpired)));
    }

    #[test]
    fn redirect_reason_query_round_trip() {
        for reason in [RedirectReason::SessionExpired, RedirectReason::AuthRequired] {
            assert_eq!(RedirectReason::from_query(reason.as_query()), Some(reason));
        }
        assert_eq!(RedirectReason::from_query(""), None);
    }
}
