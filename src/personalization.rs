//! Personalization endpoints of the Web API: the current user's top artists
//! and tracks.
//!
//! Requests are authenticated with whatever [`AccessTokenProvider`] the API
//! was built with; typically an
//! [`AuthorizationCodeFlow`](crate::authorization::AuthorizationCodeFlow)
//! granted the `user-top-read` scope, since the endpoints act on behalf of a
//! user.

use std::sync::Arc;

use reqwest::{StatusCode, header::AUTHORIZATION};
use serde::{Deserialize, de::DeserializeOwned};
use tracing::debug;

use crate::{
    authorization::AccessTokenProvider,
    error::{Error, Res},
    http::{HttpClient, HttpRequest, HttpResponse},
    model::{Artist, Paging, TimeRange, Track},
};

pub const API_URL: &str = "https://api.spotify.com/v1";

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

#[derive(Deserialize)]
struct ApiError {
    #[serde(default)]
    status: Option<u16>,
    #[serde(default)]
    message: String,
}

pub struct PersonalizationApi {
    http: Arc<dyn HttpClient>,
    tokens: Arc<dyn AccessTokenProvider>,
    base_url: String,
}

impl PersonalizationApi {
    pub fn new(http: Arc<dyn HttpClient>, tokens: Arc<dyn AccessTokenProvider>) -> Self {
        Self {
            http,
            tokens,
            base_url: API_URL.to_string(),
        }
    }

    /// Sends requests to `base_url` instead of the public Web API.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Retrieves a page of the user's top artists.
    ///
    /// # Arguments
    ///
    /// * `limit` - Maximum number of items to return (the API accepts 1-50)
    /// * `offset` - Index of the first item to return
    /// * `time_range` - Period the affinities are computed over, the API
    ///   defaults to `medium_term`
    pub async fn top_artists(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
        time_range: Option<TimeRange>,
    ) -> Res<Paging<Artist>> {
        self.top("artists", limit, offset, time_range).await
    }

    /// Retrieves a page of the user's top tracks. See
    /// [`top_artists`](Self::top_artists) for the arguments.
    pub async fn top_tracks(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
        time_range: Option<TimeRange>,
    ) -> Res<Paging<Track>> {
        self.top("tracks", limit, offset, time_range).await
    }

    async fn top<T: DeserializeOwned>(
        &self,
        kind: &str,
        limit: Option<u32>,
        offset: Option<u32>,
        time_range: Option<TimeRange>,
    ) -> Res<Paging<T>> {
        let mut query = Vec::new();
        if let Some(limit) = limit {
            query.push(format!("limit={limit}"));
        }
        if let Some(offset) = offset {
            query.push(format!("offset={offset}"));
        }
        if let Some(time_range) = time_range {
            query.push(format!("time_range={}", time_range.as_spotify_str()));
        }

        let mut url = format!("{}/me/top/{kind}", self.base_url);
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query.join("&"));
        }

        self.get(&url).await
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Res<T> {
        let token = self.tokens.access_token().await?;
        debug!(url, "requesting web api resource");

        let request = HttpRequest::get(url).header(AUTHORIZATION, &token.authorization_header())?;
        let response = self.http.send(request).await.map_err(Error::Transport)?;

        if response.is_success() {
            response.json()
        } else {
            Err(api_failure(&response))
        }
    }
}

fn api_failure(response: &HttpResponse) -> Error {
    match response.json::<ErrorEnvelope>() {
        Ok(ErrorEnvelope { error }) => Error::Api {
            status: error
                .status
                .and_then(|status| StatusCode::from_u16(status).ok())
                .unwrap_or(response.status),
            message: error.message,
        },
        Err(_) => Error::Api {
            status: response.status,
            message: String::from_utf8_lossy(&response.body).into_owned(),
        },
    }
}
