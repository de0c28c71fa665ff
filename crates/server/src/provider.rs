//! External auth provider used by the login and callback routes.
//!
//! The provider owns sessions; this server only sends the browser to its
//! authorize page and trades the returned code for a session.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Errors talking to the auth provider.
#[derive(Error, Debug)]
pub enum AuthProviderError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid provider URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Provider rejected the request ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("Auth provider is not configured")]
    NotConfigured,
}

/// Result type for provider operations.
pub type Result<T> = std::result::Result<T, AuthProviderError>;

/// The user a session belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Session issued by the provider after a code exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    pub user: SessionUser,
}

/// Opaque external auth service.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Where to send the browser to start a login that returns to `redirect_to`.
    fn authorize_url(&self, redirect_to: &str) -> Result<Url>;

    /// Trade an authorization code for a session.
    async fn exchange_code_for_session(&self, code: &str) -> Result<Session>;
}

/// Configuration for [`HostedAuthProvider`].
#[derive(Debug, Clone)]
pub struct HostedAuthConfig {
    /// Base URL of the auth service, e.g. https://project.auth.example.com
    pub base_url: String,
    /// Public API key sent as the `apikey` header
    pub anon_key: String,
    /// OAuth provider name passed to the authorize endpoint
    pub oauth_provider: String,
}

/// Client for a hosted auth service speaking the `/auth/v1` REST API.
pub struct HostedAuthProvider {
    base_url: Url,
    anon_key: String,
    oauth_provider: String,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct TokenRequest<'a> {
    auth_code: &'a str,
}

impl HostedAuthProvider {
    pub fn new(config: HostedAuthConfig) -> Result<Self> {
        // Url::join drops the last path segment unless the base ends in '/'.
        let mut base = config.base_url.trim_end_matches('/').to_string();
        base.push('/');

        Ok(Self {
            base_url: Url::parse(&base)?,
            anon_key: config.anon_key,
            oauth_provider: config.oauth_provider,
            client: reqwest::Client::new(),
        })
    }
}

#[async_trait]
impl AuthProvider for HostedAuthProvider {
    fn authorize_url(&self, redirect_to: &str) -> Result<Url> {
        let mut url = self.base_url.join("auth/v1/authorize")?;
        url.query_pairs_mut()
            .append_pair("provider", &self.oauth_provider)
            .append_pair("redirect_to", redirect_to);
        Ok(url)
    }

    async fn exchange_code_for_session(&self, code: &str) -> Result<Session> {
        let mut url = self.base_url.join("auth/v1/token")?;
        url.query_pairs_mut().append_pair("grant_type", "pkce");

        let response = self
            .client
            .post(url)
            .header("apikey", &self.anon_key)
            .json(&TokenRequest { auth_code: code })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AuthProviderError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<Session>().await?)
    }
}

/// Provider used when no auth service is configured. Every call fails.
pub struct DisabledAuthProvider;

#[async_trait]
impl AuthProvider for DisabledAuthProvider {
    fn authorize_url(&self, _redirect_to: &str) -> Result<Url> {
        Err(AuthProviderError::NotConfigured)
    }

    async fn exchange_code_for_session(&self, _code: &str) -> Result<Session> {
        Err(AuthProviderError::NotConfigured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn provider(base_url: &str) -> HostedAuthProvider {
        HostedAuthProvider::new(HostedAuthConfig {
            base_url: base_url.to_string(),
            anon_key: "anon-key".to_string(),
            oauth_provider: "github".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_authorize_url() {
        let url = provider("https://auth.example.com/")
            .authorize_url("http://localhost:3000/auth/callback?next=/dashboard")
            .unwrap();

        assert_eq!(url.path(), "/auth/v1/authorize");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("provider".to_string(), "github".to_string()),
                (
                    "redirect_to".to_string(),
                    "http://localhost:3000/auth/callback?next=/dashboard".to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_base_url_with_path_keeps_path() {
        let url = provider("https://example.com/project")
            .authorize_url("/")
            .unwrap();
        assert_eq!(url.path(), "/project/auth/v1/authorize");
    }

    #[test]
    fn test_invalid_base_url() {
        let result = HostedAuthProvider::new(HostedAuthConfig {
            base_url: "not a url".to_string(),
            anon_key: String::new(),
            oauth_provider: "google".to_string(),
        });
        assert!(matches!(result, Err(AuthProviderError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_exchange_code_success() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/auth/v1/token")
                    .query_param("grant_type", "pkce")
                    .header("apikey", "anon-key")
                    .json_body(json!({ "auth_code": "code-123" }));
                then.status(200).json_body(json!({
                    "access_token": "access",
                    "refresh_token": "refresh",
                    "expires_in": 3600,
                    "token_type": "bearer",
                    "user": { "id": "user-1", "email": "ada@example.com" }
                }));
            })
            .await;

        let session = provider(&server.base_url())
            .exchange_code_for_session("code-123")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(session.access_token, "access");
        assert_eq!(session.user.email.as_deref(), Some("ada@example.com"));
    }

    #[tokio::test]
    async fn test_exchange_code_rejected() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/auth/v1/token");
                then.status(400)
                    .json_body(json!({ "error": "invalid_grant" }));
            })
            .await;

        let err = provider(&server.base_url())
            .exchange_code_for_session("stale")
            .await
            .unwrap_err();

        match err {
            AuthProviderError::Rejected { status, body } => {
                assert_eq!(status, 400);
                assert!(body.contains("invalid_grant"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_disabled_provider() {
        let provider = DisabledAuthProvider;
        assert!(matches!(
            provider.authorize_url("/"),
            Err(AuthProviderError::NotConfigured)
        ));
        assert!(matches!(
            provider.exchange_code_for_session("code").await,
            Err(AuthProviderError::NotConfigured)
        ));
    }
}
