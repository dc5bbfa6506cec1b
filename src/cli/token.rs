use spotify_web::{
    Res,
    authorization::{AccessTokenProvider, ClientCredentialsFlow},
    config::Config,
};

use super::{http_client, spinner};

/// Requests an application-only access token and prints it.
pub async fn token() -> Res<()> {
    let config = Config::from_env()?;
    let flow = ClientCredentialsFlow::new(http_client(), &config.client_id, &config.client_secret)
        .with_token_url(&config.token_url);

    let pb = spinner("Requesting client credentials token...");
    let token = flow.access_token().await;
    pb.finish_and_clear();
    let token = token?;

    success!("Access token: {}", token.value());
    info!(
        "Expires at {} (in {}s)",
        token.expires_at(),
        token.expires_in().num_seconds()
    );
    Ok(())
}
