use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use super::{AccessToken, AccessTokenProvider, flow::FlowCore};
use crate::{error::Res, http::HttpClient};

/// Application-only authorization: no user, no refresh token.
///
/// An expired token is replaced by requesting a new one with the stored
/// client credentials.
pub struct ClientCredentialsFlow {
    core: FlowCore,
    current: Mutex<Option<AccessToken>>,
}

impl ClientCredentialsFlow {
    pub fn new(http: Arc<dyn HttpClient>, client_id: &str, client_secret: &str) -> Self {
        Self {
            core: FlowCore::new(http, client_id, client_secret),
            current: Mutex::new(None),
        }
    }

    /// Sends token requests to `token_url` instead of the accounts service.
    pub fn with_token_url(mut self, token_url: impl Into<String>) -> Self {
        self.core.set_token_url(token_url.into());
        self
    }

    /// The token currently held, expired or not.
    pub async fn current_access_token(&self) -> Option<AccessToken> {
        self.current.lock().await.clone()
    }
}

#[async_trait]
impl AccessTokenProvider for ClientCredentialsFlow {
    async fn access_token(&self) -> Res<AccessToken> {
        // held until the new token is stored, so concurrent callers share one request
        let mut current = self.current.lock().await;
        if let Some(token) = current.as_ref().filter(|token| !token.has_expired()) {
            return Ok(token.clone());
        }

        if current.is_some() {
            debug!("client credentials token expired, requesting a new one");
        }
        let token = self
            .core
            .request_token(&[("grant_type", "client_credentials")])
            .await?
            .access_token;

        *current = Some(token.clone());
        Ok(token)
    }
}
