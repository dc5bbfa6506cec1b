//! Spotify Web API client library
//!
//! This library provides a typed object model for the resources served by the
//! Spotify Web API, the JSON converters that read (and, for some types, write)
//! those resources, and the OAuth 2.0 authorization flows that obtain and
//! refresh the access tokens used to authenticate requests.
//!
//! # Modules
//!
//! - `authorization` - Client-credentials and authorization-code flows
//! - `config` - Configuration management and environment variables
//! - `error` - The crate error type
//! - `http` - The injected HTTP transport seam
//! - `model` - Data structures mirroring the remote resources
//! - `personalization` - Top artists and tracks for the current user
//! - `serialization` - JSON converters for the object model
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use spotify_web::authorization::{AccessTokenProvider, ClientCredentialsFlow};
//!
//! #[tokio::main]
//! async fn main() -> spotify_web::Res<()> {
//!     let http = Arc::new(reqwest::Client::new());
//!     let flow = ClientCredentialsFlow::new(http, "client-id", "client-secret");
//!     let token = flow.access_token().await?;
//!     println!("expires at {}", token.expires_at());
//!     Ok(())
//! }
//! ```

pub mod authorization;
pub mod config;
pub mod error;
pub mod http;
pub mod model;
pub mod personalization;
pub mod serialization;

pub use error::{Error, Res};
