use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

use crate::{error::Error, model::AuthorizationScopes};

/// A bearer token issued by the accounts service.
///
/// The expiry instant is fixed when the token is created; [`has_expired`]
/// only compares it against the clock and never refreshes anything.
///
/// [`has_expired`]: AccessToken::has_expired
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    value: String,
    token_type: String,
    scope: AuthorizationScopes,
    expires_in: Duration,
    expires_at: DateTime<Utc>,
}

impl AccessToken {
    /// Creates a token issued now that lives for `expires_in` seconds.
    pub fn new(value: impl Into<String>, scope: AuthorizationScopes, expires_in: i64) -> Self {
        Self::issued_at(value, scope, expires_in, Utc::now())
    }

    /// Creates a token as if it had been issued at `issued_at`.
    ///
    /// Negative lifetimes are clamped to zero, so such a token is expired
    /// from the moment it was issued.
    ///
    /// # Arguments
    ///
    /// * `value` - The opaque token string
    /// * `scope` - Scopes the user granted
    /// * `expires_in` - Lifetime in seconds
    /// * `issued_at` - Issuance instant the expiry is computed from
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::{Duration, Utc};
    /// use spotify_web::authorization::AccessToken;
    /// use spotify_web::model::AuthorizationScopes;
    ///
    /// let issued = Utc::now();
    /// let token = AccessToken::issued_at("abc", AuthorizationScopes::empty(), 60, issued);
    /// assert_eq!(token.expires_at(), issued + Duration::seconds(60));
    /// ```
    pub fn issued_at(
        value: impl Into<String>,
        scope: AuthorizationScopes,
        expires_in: i64,
        issued_at: DateTime<Utc>,
    ) -> Self {
        let expires_in = Duration::try_seconds(expires_in.max(0)).unwrap_or(Duration::MAX);
        let expires_at = issued_at
            .checked_add_signed(expires_in)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        Self {
            value: value.into(),
            token_type: "Bearer".to_string(),
            scope,
            expires_in,
            expires_at,
        }
    }

    /// Replaces the default `Bearer` token type.
    pub fn with_token_type(mut self, token_type: impl Into<String>) -> Self {
        self.token_type = token_type.into();
        self
    }

    /// The token string sent to the API.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Authorization scheme, `Bearer` unless the service said otherwise.
    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    /// Scopes the token was granted; empty for client credentials tokens.
    pub fn scope(&self) -> AuthorizationScopes {
        self.scope
    }

    /// Lifetime the token was issued with.
    pub fn expires_in(&self) -> Duration {
        self.expires_in
    }

    /// Instant after which the token is no longer accepted.
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Returns `true` once the current time reaches [`expires_at`].
    ///
    /// [`expires_at`]: AccessToken::expires_at
    pub fn has_expired(&self) -> bool {
        self.has_expired_at(Utc::now())
    }

    /// Checks expiry against an explicit instant instead of the clock.
    ///
    /// # Arguments
    ///
    /// * `now` - The instant to compare the expiry against
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::{Duration, Utc};
    /// use spotify_web::authorization::AccessToken;
    /// use spotify_web::model::AuthorizationScopes;
    ///
    /// let issued = Utc::now();
    /// let token = AccessToken::issued_at("abc", AuthorizationScopes::empty(), 3600, issued);
    /// assert!(!token.has_expired_at(issued));
    /// assert!(token.has_expired_at(issued + Duration::hours(1)));
    /// ```
    pub fn has_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Value of the `Authorization` header for API requests.
    pub fn authorization_header(&self) -> String {
        format!("{} {}", self.token_type, self.value)
    }
}

/// Successful token endpoint response.
///
/// Reading fails when the `scope` string names a scope outside
/// [`AuthorizationScopes`]; the JSON error carries the
/// [`Error::InvalidEnumValue`] message naming the token. A scope Spotify adds
/// later therefore fails the whole token acquisition until it is listed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "TokenResponse")]
pub struct AccessRefreshToken {
    pub access_token: AccessToken,
    pub refresh_token: Option<String>,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "bearer")]
    token_type: String,
    #[serde(default)]
    scope: Option<String>,
    expires_in: i64,
    #[serde(default)]
    refresh_token: Option<String>,
}

fn bearer() -> String {
    "Bearer".to_string()
}

impl TryFrom<TokenResponse> for AccessRefreshToken {
    type Error = Error;

    fn try_from(response: TokenResponse) -> Result<Self, Self::Error> {
        let scope =
            AuthorizationScopes::from_scope_string(response.scope.as_deref().unwrap_or_default())?;
        let access_token = AccessToken::new(response.access_token, scope, response.expires_in)
            .with_token_type(response.token_type);

        Ok(Self {
            access_token,
            refresh_token: response.refresh_token,
        })
    }
}

/// Error body returned by the accounts service with a non-success status.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthenticationError {
    pub error: String,
    #[serde(default)]
    pub error_description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_is_fixed_at_issuance() {
        let issued = Utc::now();
        let token = AccessToken::issued_at("abc", AuthorizationScopes::empty(), 3600, issued);

        assert!(!token.has_expired_at(issued + Duration::seconds(3599)));
        assert!(token.has_expired_at(issued + Duration::seconds(3600)));
    }

    #[test]
    fn token_response_scope_is_space_separated() {
        let json = r#"{"access_token":"abc","token_type":"Bearer","scope":"user-top-read user-read-email","expires_in":3600}"#;
        let token: AccessRefreshToken = serde_json::from_str(json).unwrap();

        assert_eq!(
            token.access_token.scope(),
            AuthorizationScopes::USER_TOP_READ | AuthorizationScopes::USER_READ_EMAIL
        );
        assert_eq!(token.refresh_token, None);
        assert_eq!(token.access_token.authorization_header(), "Bearer abc");
    }

    #[test]
    fn token_response_with_unknown_scope_fails() {
        let json = r#"{"access_token":"abc","scope":"user-top-read user-read-aura","expires_in":3600}"#;
        let err = serde_json::from_str::<AccessRefreshToken>(json).unwrap_err();

        assert!(err.to_string().contains("user-read-aura"));
    }
}
