use spotify_web::{
    Res,
    authorization::{AccessTokenProvider, AuthorizationCodeFlow},
    config::Config,
};

use super::{http_client, spinner};

pub(crate) fn code_flow(config: &Config, code: &str) -> Res<AuthorizationCodeFlow> {
    Ok(AuthorizationCodeFlow::new(
        http_client(),
        &config.client_id,
        &config.client_secret,
        code,
        config.require_redirect_uri()?,
    )
    .with_token_url(&config.token_url))
}

/// Exchanges a one-time authorization code and prints the resulting tokens.
pub async fn exchange(code: &str) -> Res<()> {
    let config = Config::from_env()?;
    let flow = code_flow(&config, code)?;

    let pb = spinner("Exchanging authorization code...");
    let token = flow.access_token().await;
    pb.finish_and_clear();
    let token = token?;

    success!("Access token: {}", token.value());
    match flow.refresh_token().await {
        Some(refresh_token) => info!("Refresh token: {}", refresh_token),
        None => warning!("No refresh token was issued"),
    }
    info!("Scopes: {}", token.scope());
    info!("Expires at {}", token.expires_at());
    Ok(())
}
