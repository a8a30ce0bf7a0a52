//! reqwest-backed implementation of the authentication transport.
//!
//! `ApiClient` posts JSON to the login/register endpoints and deserializes
//! the response payload at the boundary, so an untyped or misshapen body
//! surfaces as an error instead of flowing into session state.

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::models::{AuthResponse, LoginCredentials, RegisterCredentials};

use super::{ApiError, AuthTransport};

// ============================================================================
// Constants
// ============================================================================

/// Login endpoint, relative to the API base URL
const LOGIN_PATH: &str = "/auth/login";

/// Registration endpoint, relative to the API base URL
const REGISTER_PATH: &str = "/auth/register";

/// HTTP request timeout in seconds.
/// 30s allows for slow API responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// API client for the authentication service.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against the given base URL (scheme + host, no
    /// trailing slash required).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body))
        }
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "POST");

        let response = self.client.post(&url).json(body).send().await?;
        let response = Self::check_response(response).await?;

        response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl AuthTransport for ApiClient {
    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthResponse, ApiError> {
        self.post_json(LOGIN_PATH, credentials).await
    }

    async fn register(
        &self,
        credentials: &RegisterCredentials,
    ) -> Result<AuthResponse, ApiError> {
        self.post_json(REGISTER_PATH, credentials).await
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn login_creds() -> LoginCredentials {
        LoginCredentials {
            email: "user@example.com".to_string(),
            password: "SecurePass1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_posts_credentials_and_parses_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(body_json(json!({
                "email": "user@example.com",
                "password": "SecurePass1"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "accessToken": "jwt-access-token",
                "refreshToken": "jwt-refresh-token",
                "user": {
                    "id": "1",
                    "email": "user@example.com",
                    "completeName": "Test User",
                    "phone": null
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri()).unwrap();
        let response = client.login(&login_creds()).await.unwrap();

        assert_eq!(response.access_token, "jwt-access-token");
        assert_eq!(response.refresh_token, "jwt-refresh-token");
        assert_eq!(response.user.complete_name, "Test User");
        assert_eq!(response.user.phone, None);
    }

    #[tokio::test]
    async fn test_register_hits_register_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/register"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "accessToken": "a",
                "refreshToken": "r",
                "user": {"id": "2", "email": "new@example.com", "completeName": "New User"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri()).unwrap();
        let creds = RegisterCredentials {
            email: "new@example.com".to_string(),
            password: "NewPass123".to_string(),
            complete_name: "New User".to_string(),
            phone: Some("+51123456789".to_string()),
        };
        let response = client.register(&creds).await.unwrap();
        assert_eq!(response.user.id, "2");
    }

    #[tokio::test]
    async fn test_401_maps_to_unauthorized() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri()).unwrap();
        let err = client.login(&login_creds()).await.unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized));
    }

    #[tokio::test]
    async fn test_misshapen_body_is_an_invalid_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "legacy"})))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri()).unwrap();
        let err = client.login(&login_creds()).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_trailing_slash_in_base_url_is_tolerated() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "accessToken": "a",
                "refreshToken": "r",
                "user": {"id": "1", "email": "user@example.com", "completeName": "Test User"}
            })))
            .mount(&server)
            .await;

        let client = ApiClient::new(format!("{}/", server.uri())).unwrap();
        assert!(client.login(&login_creds()).await.is_ok());
    }
}
