use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("API error {status}: {}", message.as_deref().unwrap_or("no message"))]
    Api { status: u16, message: Option<String> },

    #[error("You have already submitted this exam.")]
    AlreadySubmitted,

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Missing authentication token")]
    NotAuthenticated,

    #[error("Student profile not found.")]
    ProfileNotFound,
}

pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            ApiError::AlreadySubmitted => Some(409),
            ApiError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::NotAuthenticated) || self.status() == Some(401)
    }

    /// Message the backend put in the error body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Api {
                message: Some(m), ..
            } if !m.trim().is_empty() => Some(m),
            _ => None,
        }
    }

    /// The server message verbatim, or `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }
}

/// `message`, else a string `detail`, from a JSON error body.
pub fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "detail"]
        .iter()
        .find_map(|key| value.get(key).and_then(|v| v.as_str()))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_preferred_over_detail() {
        assert_eq!(
            extract_message(r#"{"message":"m","detail":"d"}"#).as_deref(),
            Some("m")
        );
        assert_eq!(extract_message(r#"{"detail":"d"}"#).as_deref(), Some("d"));
    }

    #[test]
    fn structured_detail_and_non_json_yield_nothing() {
        assert_eq!(
            extract_message(r#"{"detail":[{"loc":["body"],"msg":"field required"}]}"#),
            None
        );
        assert_eq!(extract_message("<html>502</html>"), None);
    }

    #[test]
    fn user_message_falls_back() {
        let with = ApiError::Api {
            status: 400,
            message: Some("Email already registered".into()),
        };
        let without = ApiError::Api {
            status: 500,
            message: None,
        };
        assert_eq!(with.user_message("Signup failed."), "Email already registered");
        assert_eq!(without.user_message("Signup failed."), "Signup failed.");
        assert_eq!(ApiError::NotAuthenticated.user_message("x"), "x");
    }

    #[test]
    fn unauthorized_detection() {
        assert!(ApiError::Api {
            status: 401,
            message: None
        }
        .is_unauthorized());
        assert!(ApiError::NotAuthenticated.is_unauthorized());
        assert!(!ApiError::AlreadySubmitted.is_unauthorized());
    }
}
