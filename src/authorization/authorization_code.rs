use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use super::{AUTHORIZE_URL, AccessToken, AccessTokenProvider, flow::FlowCore};
use crate::{
    error::{Error, Res},
    http::HttpClient,
    model::AuthorizationScopes,
};

/// Authorization on behalf of a user who granted a one-time code.
///
/// The first call exchanges the code for an access and refresh token pair.
/// Later calls return the cached token until it expires, then refresh it with
/// the stored refresh token.
pub struct AuthorizationCodeFlow {
    core: FlowCore,
    code: String,
    redirect_uri: String,
    state: Mutex<CodeFlowState>,
}

#[derive(Default)]
struct CodeFlowState {
    access_token: Option<AccessToken>,
    refresh_token: Option<String>,
}

impl AuthorizationCodeFlow {
    pub fn new(
        http: Arc<dyn HttpClient>,
        client_id: &str,
        client_secret: &str,
        code: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            core: FlowCore::new(http, client_id, client_secret),
            code: code.into(),
            redirect_uri: redirect_uri.into(),
            state: Mutex::new(CodeFlowState::default()),
        }
    }

    /// Sends token requests to `token_url` instead of the accounts service.
    pub fn with_token_url(mut self, token_url: impl Into<String>) -> Self {
        self.core.set_token_url(token_url.into());
        self
    }

    /// Builds the URL the user opens to grant access.
    pub fn authorization_url(
        client_id: &str,
        redirect_uri: &str,
        state: Option<&str>,
        scopes: Option<AuthorizationScopes>,
        show_dialog: Option<bool>,
    ) -> String {
        Self::authorization_url_from(
            AUTHORIZE_URL,
            client_id,
            redirect_uri,
            state,
            scopes,
            show_dialog,
        )
    }

    /// Like [`authorization_url`](Self::authorization_url) with a custom
    /// authorize endpoint.
    pub fn authorization_url_from(
        base_url: &str,
        client_id: &str,
        redirect_uri: &str,
        state: Option<&str>,
        scopes: Option<AuthorizationScopes>,
        show_dialog: Option<bool>,
    ) -> String {
        let mut query = vec![
            format!("client_id={}", urlencoding::encode(client_id)),
            "response_type=code".to_string(),
            format!("redirect_uri={}", urlencoding::encode(redirect_uri)),
        ];
        if let Some(state) = state {
            query.push(format!("state={}", urlencoding::encode(state)));
        }
        if let Some(scopes) = scopes.filter(|scopes| !scopes.is_empty()) {
            let scope = scopes
                .to_spotify_strings()
                .map(|token| urlencoding::encode(token).into_owned())
                .collect::<Vec<_>>()
                .join("%20");
            query.push(format!("scope={scope}"));
        }
        if let Some(show_dialog) = show_dialog {
            query.push(format!("show_dialog={show_dialog}"));
        }

        format!("{base_url}?{}", query.join("&"))
    }

    /// The refresh token received so far, if any.
    pub async fn refresh_token(&self) -> Option<String> {
        self.state.lock().await.refresh_token.clone()
    }

    /// The token currently held, expired or not.
    pub async fn current_access_token(&self) -> Option<AccessToken> {
        self.state.lock().await.access_token.clone()
    }
}

#[async_trait]
impl AccessTokenProvider for AuthorizationCodeFlow {
    async fn access_token(&self) -> Res<AccessToken> {
        let mut state = self.state.lock().await;

        let response = match (&state.access_token, &state.refresh_token) {
            (Some(token), _) if !token.has_expired() => return Ok(token.clone()),
            (None, _) => {
                debug!("exchanging authorization code");
                self.core
                    .request_token(&[
                        ("grant_type", "authorization_code"),
                        ("code", self.code.as_str()),
                        ("redirect_uri", self.redirect_uri.as_str()),
                    ])
                    .await?
            }
            (Some(_), Some(refresh_token)) => {
                debug!("access token expired, refreshing");
                self.core
                    .request_token(&[
                        ("grant_type", "refresh_token"),
                        ("refresh_token", refresh_token.as_str()),
                    ])
                    .await?
            }
            (Some(_), None) => {
                return Err(Error::InvalidOperation(
                    "no refresh token to refresh the access token with",
                ));
            }
        };

        // a refresh response may omit the refresh token; keep the old one then
        if let Some(refresh_token) = response.refresh_token {
            state.refresh_token = Some(refresh_token);
        }
        state.access_token = Some(response.access_token.clone());
        Ok(response.access_token)
    }
}
