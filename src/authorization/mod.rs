//! OAuth 2.0 authorization flows against the Spotify accounts service.
//!
//! Each flow holds the current access token and moves through
//! `NoToken -> Valid -> Expired -> Valid`:
//!
//! - the first [`AccessTokenProvider::access_token`] call issues the
//!   flow-specific token request,
//! - while the token is valid the cached token is returned without a request,
//! - once it has expired the flow refreshes it
//!   ([`AuthorizationCodeFlow`]) or requests a new one
//!   ([`ClientCredentialsFlow`]).
//!
//! The check-and-request sequence runs under the flow's lock, so concurrent
//! callers of one flow instance wait for a single in-flight request instead
//! of issuing their own. Non-success responses become
//! [`Error::Authorization`](crate::Error::Authorization); nothing is retried.

mod authorization_code;
mod client_credentials;
mod flow;
mod token;

use std::future::Future;

use async_trait::async_trait;

use crate::error::{Error, Res};

pub use authorization_code::AuthorizationCodeFlow;
pub use client_credentials::ClientCredentialsFlow;
pub use token::{AccessRefreshToken, AccessToken, AuthenticationError};

pub const AUTHORIZE_URL: &str = "https://accounts.spotify.com/authorize";
pub const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Something that can hand out a currently valid access token.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    async fn access_token(&self) -> Res<AccessToken>;
}

/// A fixed token, for callers that obtained one elsewhere.
#[async_trait]
impl AccessTokenProvider for AccessToken {
    async fn access_token(&self) -> Res<AccessToken> {
        Ok(self.clone())
    }
}

/// Runs `operation` until it completes or `cancelled` resolves, whichever
/// comes first.
///
/// On cancellation the operation future is dropped, aborting any in-flight
/// request, and [`Error::Cancelled`] is returned. Flows only store a token
/// after a completed response, so a cancelled call leaves them unchanged.
///
/// ```
/// let (cancel, cancelled) = tokio::sync::oneshot::channel::<()>();
/// let token = cancellable(flow.access_token(), async {
///     let _ = cancelled.await;
/// })
/// .await;
/// ```
pub async fn cancellable<T, F, C>(operation: F, cancelled: C) -> Res<T>
where
    F: Future<Output = Res<T>>,
    C: Future<Output = ()>,
{
    tokio::select! {
        biased;
        () = cancelled => Err(Error::Cancelled),
        result = operation => result,
    }
}
