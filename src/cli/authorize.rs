use rand::{Rng, distr::Alphanumeric};
use spotify_web::{Res, authorization::AuthorizationCodeFlow, config::Config};

fn generate_state() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(16)
        .map(char::from)
        .collect()
}

/// Builds the consent URL for the configured scopes and opens it in the
/// default browser.
///
/// The `state` value is random and printed so the caller can compare it with
/// the one Spotify appends to the redirect.
pub async fn authorize(show_dialog: bool) -> Res<()> {
    let config = Config::from_env()?;
    let state = generate_state();
    let url = AuthorizationCodeFlow::authorization_url_from(
        &config.authorize_url,
        &config.client_id,
        config.require_redirect_uri()?,
        Some(&state),
        Some(config.scopes),
        show_dialog.then_some(true),
    );

    info!("State: {}", state);
    if webbrowser::open(&url).is_err() {
        warning!("Cannot open browser, visit this URL manually:");
    } else {
        info!("Opened authorization page:");
    }
    println!("{url}");
    info!("Pass the returned `code` parameter to `exchange --code`");
    Ok(())
}
