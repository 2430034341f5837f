use chrono::Utc;
use reqwest::Url;

use crate::{
    spotify::{SpotifySession, send_logged},
    types::Token,
};

/// Builds the Spotify authorize URL the `/login` route redirects to.
///
/// All parameters are percent-encoded, including the space separated scope
/// list and the redirect URI.
///
/// # Errors
///
/// Returns an error if the configured authorize URL is not a valid URL.
pub fn authorize_url(session: &SpotifySession) -> Result<String, String> {
    let url = Url::parse_with_params(
        &session.auth_url,
        &[
            ("client_id", session.client_id.as_str()),
            ("response_type", "code"),
            ("redirect_uri", session.redirect_uri.as_str()),
            ("scope", session.scope.as_str()),
            ("state", session.state.as_str()),
        ],
    )
    .map_err(|e| format!("Invalid authorize URL '{}': {}", session.auth_url, e))?;

    Ok(url.to_string())
}

/// Exchanges an authorization code for an access token.
///
/// Uses the confidential-client variant of the flow: the client id and secret
/// go in an HTTP basic `Authorization` header, the code and redirect URI in
/// the form body.
///
/// # Errors
///
/// Returns an error on transport failures, non-success responses, and token
/// responses that cannot be decoded.
pub async fn exchange_code(session: &SpotifySession, code: &str) -> Result<Token, String> {
    let request = session
        .client
        .post(&session.token_url)
        .basic_auth(&session.client_id, Some(&session.client_secret))
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", session.redirect_uri.as_str()),
        ]);

    let (status, body) = send_logged(request).await.map_err(|e| e.to_string())?;
    if !status.is_success() {
        return Err(format!("token endpoint answered {}", status));
    }

    let mut token: Token = serde_json::from_slice(&body).map_err(|e| e.to_string())?;
    token.obtained_at = Utc::now().timestamp() as u64;
    Ok(token)
}
