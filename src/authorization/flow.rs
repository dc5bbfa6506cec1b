use std::sync::Arc;

use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::header::AUTHORIZATION;
use tracing::debug;

use super::{AccessRefreshToken, AuthenticationError, TOKEN_URL};
use crate::{
    error::{Error, Res},
    http::{HttpClient, HttpRequest, HttpResponse},
};

/// State and request plumbing shared by every flow: the transport, the
/// client credentials as a Basic authorization header, and the token
/// endpoint.
pub(crate) struct FlowCore {
    http: Arc<dyn HttpClient>,
    basic_authorization: String,
    token_url: String,
}

impl FlowCore {
    pub(crate) fn new(http: Arc<dyn HttpClient>, client_id: &str, client_secret: &str) -> Self {
        let credentials = STANDARD.encode(format!("{client_id}:{client_secret}"));
        Self {
            http,
            basic_authorization: format!("Basic {credentials}"),
            token_url: TOKEN_URL.to_string(),
        }
    }

    pub(crate) fn set_token_url(&mut self, token_url: String) {
        self.token_url = token_url;
    }

    /// Posts `form` to the token endpoint. The first pair must be the grant
    /// type.
    pub(crate) async fn request_token(&self, form: &[(&str, &str)]) -> Res<AccessRefreshToken> {
        let grant_type = form.first().map(|(_, value)| *value).unwrap_or_default();
        debug!(grant_type, url = %self.token_url, "requesting access token");

        let request = HttpRequest::post(&self.token_url)
            .header(AUTHORIZATION, &self.basic_authorization)?
            .form(form);
        let response = self.http.send(request).await.map_err(Error::Transport)?;

        if response.is_success() {
            response.json()
        } else {
            Err(authentication_failure(&response))
        }
    }
}

// Bodies that are not an error object still produce a typed failure.
fn authentication_failure(response: &HttpResponse) -> Error {
    let status = response.status;
    match response.json::<AuthenticationError>() {
        Ok(error) => Error::Authorization {
            status,
            error: error.error,
            description: error.error_description,
        },
        Err(_) => Error::Authorization {
            status,
            error: status
                .canonical_reason()
                .unwrap_or("unknown_error")
                .to_string(),
            description: String::from_utf8_lossy(&response.body).into_owned(),
        },
    }
}
