//! Token verification against the hosted identity service.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;
use uuid::Uuid;

use crate::config::AuthConfig;

#[derive(Debug, Clone, Deserialize)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
}

/// Seam for the external identity service. Verification failures resolve
/// to `None` rather than an error: an unverifiable token is the same as no
/// token, and the handler layer decides whether that matters.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn verify_token(&self, token: &str) -> Option<AuthenticatedUser>;
}

pub struct HttpIdentity {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpIdentity {
    pub fn new(config: &AuthConfig) -> Self {
        let http = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(5))
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_default();
        Self {
            http,
            base_url: config.identity_url.trim_end_matches('/').to_string(),
            api_key: config.identity_api_key.clone(),
        }
    }
}

#[async_trait]
impl IdentityVerifier for HttpIdentity {
    async fn verify_token(&self, token: &str) -> Option<AuthenticatedUser> {
        let url = format!("{}/auth/v1/user", self.base_url);
        let response = match self
            .http
            .get(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(token)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "identity service unreachable");
                return None;
            }
        };

        if !response.status().is_success() {
            warn!(status = %response.status(), "token rejected by identity service");
            return None;
        }

        match response.json::<AuthenticatedUser>().await {
            Ok(user) => Some(user),
            Err(e) => {
                warn!(error = %e, "unexpected identity response shape");
                None
            }
        }
    }
}
