use reqwest::Method;
use shared::auth::{LoginResponse, RefreshRequest, SignupRequest};
use tracing::info;

use crate::client::ApiClient;
use crate::error::{ApiError, Result};

impl ApiClient {
    /// `POST auth/login` as an OAuth2 password form. The email goes in
    /// `username`.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let request = self
            .request(Method::POST, "auth/login", false)?
            .form(&[("username", email), ("password", password)]);
        let response: LoginResponse = Self::send(request).await?;
        info!("Logged in");
        Ok(response)
    }

    pub async fn signup(&self, body: &SignupRequest) -> Result<serde_json::Value> {
        let request = self
            .request(Method::POST, "auth/signup", false)?
            .json(body);
        Self::send(request).await
    }

    /// Exchanges a refresh token for a new access token.
    pub async fn refresh(&self, refresh_token: &str) -> Result<LoginResponse> {
        if refresh_token.is_empty() {
            return Err(ApiError::NotAuthenticated);
        }
        let request = self
            .request(Method::POST, "auth/refresh", false)?
            .json(&RefreshRequest {
                refresh_token: refresh_token.to_string(),
            });
        Self::send(request).await
    }
}
