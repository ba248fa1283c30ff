use reqwest::{multipart::Form, Client, Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::config::{api_url, CONFIG};
use crate::error::{extract_message, ApiError, Result};

/// HTTP client for the exam backend. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    token: Option<String>,
    client: Client,
}

#[derive(Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    token: Option<String>,
}

impl ApiClientBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = Some(url.to_string());
        self
    }

    pub fn token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn build(self) -> Result<ApiClient> {
        let base = self
            .base_url
            .unwrap_or_else(|| CONFIG.base_url().to_string());
        let base_url = Url::parse(base.trim_end_matches('/'))?;

        Ok(ApiClient {
            base_url,
            token: self.token,
            client: Client::new(),
        })
    }
}

impl ApiClient {
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::new()
    }

    /// Client for the configured backend carrying `token`.
    pub fn with_token(token: Option<String>) -> Result<Self> {
        ApiClientBuilder::new().token(token).build()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub(crate) fn url(&self, endpoint: &str) -> Result<Url> {
        Ok(Url::parse(&api_url(self.base_url.as_str(), endpoint))?)
    }

    /// Starts a request. Authenticated requests fail fast without a token.
    pub(crate) fn request(
        &self,
        method: Method,
        endpoint: &str,
        authenticated: bool,
    ) -> Result<RequestBuilder> {
        let url = self.url(endpoint)?;
        debug!("Request: {} {}", method, url);
        let mut request = self.client.request(method, url);
        if authenticated {
            let token = self.token.as_deref().ok_or(ApiError::NotAuthenticated)?;
            request = request.bearer_auth(token);
        }
        Ok(request)
    }

    pub(crate) async fn make_request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<T> {
        let mut request = self.request(method, endpoint, true)?;
        if let Some(b) = body {
            request = request.json(b);
        }
        Self::send(request).await
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        self.make_request::<T, ()>(Method::GET, endpoint, None)
            .await
    }

    /// POST without a body.
    pub(crate) async fn post<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        self.make_request::<T, ()>(Method::POST, endpoint, None)
            .await
    }

    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T> {
        self.make_request(Method::POST, endpoint, Some(body)).await
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        form: Form,
    ) -> Result<T> {
        let request = self.request(Method::POST, endpoint, true)?.multipart(form);
        Self::send(request).await
    }

    pub(crate) async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            let text = response.text().await?;
            let body = if text.trim().is_empty() { "null" } else { text.as_str() };
            serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
        } else {
            let text = response.text().await.unwrap_or_default();
            let message = extract_message(&text);
            warn!(
                "Request failed with {}: {}",
                status.as_u16(),
                message.as_deref().unwrap_or("no message")
            );
            Err(ApiError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_join_under_base_path() {
        let client = ApiClient::builder()
            .base_url("http://localhost:9000/api")
            .build()
            .unwrap();
        assert_eq!(
            client.url("/auth/login").unwrap().as_str(),
            "http://localhost:9000/api/auth/login"
        );
        assert_eq!(
            client.url("exams/get_full_exam/e1").unwrap().as_str(),
            "http://localhost:9000/api/exams/get_full_exam/e1"
        );
    }

    #[test]
    fn authenticated_request_requires_token() {
        let client = ApiClient::builder()
            .base_url("http://localhost:9000")
            .token(Some(String::new()))
            .build()
            .unwrap();
        assert!(client.token().is_none());
        assert!(matches!(
            client.request(Method::GET, "student/get_student_profile", true),
            Err(ApiError::NotAuthenticated)
        ));
        assert!(client.request(Method::POST, "auth/login", false).is_ok());
    }
}
