//! Configuration management for the Spotify Web API client.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. Credentials and endpoint overrides for the
//! authorization flows and the API surface are all read from here.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Spotify's public endpoints as defaults for the URL values

use std::{env, path::PathBuf};

use tracing::debug;

use crate::{
    authorization::{AUTHORIZE_URL, TOKEN_URL},
    error::{Error, Res},
    model::AuthorizationScopes,
    personalization::API_URL,
};

pub const CLIENT_ID_VAR: &str = "SPOTIFY_API_AUTH_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "SPOTIFY_API_AUTH_CLIENT_SECRET";
pub const REDIRECT_URI_VAR: &str = "SPOTIFY_API_REDIRECT_URI";
pub const SCOPE_VAR: &str = "SPOTIFY_API_AUTH_SCOPE";
pub const AUTH_URL_VAR: &str = "SPOTIFY_API_AUTH_URL";
pub const TOKEN_URL_VAR: &str = "SPOTIFY_API_TOKEN_URL";
pub const API_URL_VAR: &str = "SPOTIFY_API_URL";

/// Returns the path of the `.env` file in the local data directory.
///
/// - Linux: `~/.local/share/spotify-web/.env`
/// - macOS: `~/Library/Application Support/spotify-web/.env`
/// - Windows: `%LOCALAPPDATA%/spotify-web/.env`
pub fn env_file() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotify-web/.env");
    path
}

/// Loads environment variables from the `.env` file in the local data directory.
///
/// Variables already present in the environment are left untouched. A missing
/// file is not an error, since every value can also come from the environment.
///
/// # Errors
///
/// Returns [`Error::Config`] if the file exists but cannot be read or parsed.
///
/// # Example
///
/// ```
/// use spotify_web::config;
///
/// if let Err(e) = config::load_env() {
///     eprintln!("Configuration error: {}", e);
/// }
/// ```
pub fn load_env() -> Res<()> {
    let path = env_file();
    if !path.exists() {
        debug!(path = %path.display(), "no env file found");
        return Ok(());
    }

    dotenv::from_path(&path)
        .map_err(|e| Error::Config(format!("cannot load {}: {e}", path.display())))
}

/// Runtime configuration collected from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    /// Required only by the authorization-code flow.
    pub redirect_uri: Option<String>,
    pub scopes: AuthorizationScopes,
    pub authorize_url: String,
    pub token_url: String,
    pub api_url: String,
}

impl Config {
    /// Reads the configuration from environment variables.
    ///
    /// # Required variables
    ///
    /// - `SPOTIFY_API_AUTH_CLIENT_ID`
    /// - `SPOTIFY_API_AUTH_CLIENT_SECRET`
    ///
    /// # Optional variables
    ///
    /// - `SPOTIFY_API_REDIRECT_URI`
    /// - `SPOTIFY_API_AUTH_SCOPE`, space separated scope tokens
    /// - `SPOTIFY_API_AUTH_URL`, defaults to [`AUTHORIZE_URL`]
    /// - `SPOTIFY_API_TOKEN_URL`, defaults to [`TOKEN_URL`]
    /// - `SPOTIFY_API_URL`, defaults to [`API_URL`]
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if a required variable is missing or empty,
    /// and [`Error::InvalidEnumValue`] if the scope list names an unknown scope.
    pub fn from_env() -> Res<Self> {
        let scopes = match optional(SCOPE_VAR) {
            Some(scope) => AuthorizationScopes::from_scope_string(&scope)?,
            None => AuthorizationScopes::empty(),
        };

        Ok(Self {
            client_id: required(CLIENT_ID_VAR)?,
            client_secret: required(CLIENT_SECRET_VAR)?,
            redirect_uri: optional(REDIRECT_URI_VAR),
            scopes,
            authorize_url: optional(AUTH_URL_VAR).unwrap_or_else(|| AUTHORIZE_URL.to_string()),
            token_url: optional(TOKEN_URL_VAR).unwrap_or_else(|| TOKEN_URL.to_string()),
            api_url: optional(API_URL_VAR).unwrap_or_else(|| API_URL.to_string()),
        })
    }

    /// Returns the redirect URI or a configuration error naming the variable.
    pub fn require_redirect_uri(&self) -> Res<&str> {
        self.redirect_uri
            .as_deref()
            .ok_or_else(|| Error::Config(format!("{REDIRECT_URI_VAR} must be set")))
    }
}

fn optional(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn required(name: &str) -> Res<String> {
    optional(name).ok_or_else(|| Error::Config(format!("{name} must be set")))
}
