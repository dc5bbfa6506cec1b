//! # CLI Module
//!
//! Command implementations for the `spotify-web` binary. Each command loads
//! the [`Config`](spotify_web::config::Config) from the environment, builds
//! the flow it needs on top of a shared `reqwest` client, and reports results
//! through the colored status macros in [`output`].
//!
//! ## Commands
//!
//! - [`token`] - Requests an application token via the client-credentials flow
//! - [`authorize`] - Opens the Spotify consent page for the configured scopes
//! - [`exchange`] - Exchanges an authorization code for an access/refresh token pair
//! - [`top_artists`] / [`top_tracks`] - Lists the user's top items
//!
//! ## Usage Patterns
//!
//! ```bash
//! spotify-web authorize                      # grant access in the browser
//! spotify-web exchange --code AQD...         # inspect the resulting tokens
//! spotify-web top tracks --code AQD... --time-range short_term
//! ```

#[macro_use]
mod output;

mod authorize;
mod exchange;
mod token;
mod top;

use std::sync::Arc;

use spotify_web::http::HttpClient;

pub use authorize::authorize;
pub use exchange::exchange;
pub use token::token;
pub use top::{top_artists, top_tracks};

pub(crate) use output::spinner;

fn http_client() -> Arc<dyn HttpClient> {
    Arc::new(reqwest::Client::new())
}
