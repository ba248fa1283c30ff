//! Centralized configuration management.
//!
//! The backend base URL is resolved once, on first use, and shared through
//! [`CONFIG`].

use std::sync::LazyLock;

pub const API_URL_ENV: &str = "EXAMINIE_API_URL";
pub const DEFAULT_API_URL: &str = "https://zainattiq-examinie.hf.space";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Backend root, without a trailing slash.
    pub base_url: String,
}

impl ApiConfig {
    /// Runtime environment (native targets only), then the value baked in at
    /// build time, then [`DEFAULT_API_URL`].
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let runtime = std::env::var(API_URL_ENV).ok();
        #[cfg(target_arch = "wasm32")]
        let runtime: Option<String> = None;

        Self::resolve(runtime.as_deref(), option_env!("EXAMINIE_API_URL"))
    }

    pub fn resolve(runtime: Option<&str>, baked: Option<&str>) -> Self {
        let base_url = [runtime, baked]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Full URL of `endpoint` under `base`. One leading slash is dropped so the
/// result never contains a double slash.
pub fn api_url(base: &str, endpoint: &str) -> String {
    let endpoint = endpoint.strip_prefix('/').unwrap_or(endpoint);
    format!("{}/{}", base.trim_end_matches('/'), endpoint)
}

/// Global API configuration singleton.
pub static CONFIG: LazyLock<ApiConfig> = LazyLock::new(ApiConfig::from_env);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_value_wins_over_baked_value() {
        let config = ApiConfig::resolve(Some("http://localhost:8000/"), Some("http://baked"));
        assert_eq!(config.base_url(), "http://localhost:8000");
    }

    #[test]
    fn blank_values_fall_through_to_default() {
        assert_eq!(ApiConfig::resolve(Some("  "), None).base_url(), DEFAULT_API_URL);
        assert_eq!(
            ApiConfig::resolve(None, Some("http://baked")).base_url(),
            "http://baked"
        );
    }

    #[test]
    fn api_url_strips_one_leading_slash() {
        let config = ApiConfig::resolve(None, None);
        assert_eq!(
            api_url(config.base_url(), "/auth/login"),
            "https://zainattiq-examinie.hf.space/auth/login"
        );
        assert_eq!(
            api_url("http://localhost:8000/", "exams/create_exam/"),
            "http://localhost:8000/exams/create_exam/"
        );
        assert_eq!(
            api_url(config.base_url(), "exams/create_exam/"),
            "https://zainattiq-examinie.hf.space/exams/create_exam/"
        );
    }
}
