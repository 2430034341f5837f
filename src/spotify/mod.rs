//! # Spotify Demo Module
//!
//! Client side of the Spotify demo served by `taskdeck spotify`. The demo is a
//! textbook OAuth 2.0 authorization-code flow followed by one search request:
//!
//! ```text
//! Browser ── GET /login ──▶ 307 to accounts.spotify.com/authorize
//!         ◀─ redirect ───── GET /callback?code&state
//!                           ├── POST /api/token   (code → access token)
//!                           ├── GET  /v1/search   (popular artists)
//!                           └── HTML artist grid
//! ```
//!
//! - [`auth`] builds the authorize URL and exchanges the code for a token
//! - [`artists`] runs the artist search
//! - [`page`] renders the landing page and the artist grid
//!
//! Tokens live only for the duration of one callback request; nothing is
//! cached and tokens are never refreshed.

pub mod artists;
pub mod auth;
pub mod page;

use reqwest::{Client, RequestBuilder, StatusCode};

use crate::{config, info, utils, warning};

/// Everything the demo routes need, shared through an axum `Extension`.
#[derive(Debug, Clone)]
pub struct SpotifySession {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub scope: String,
    pub auth_url: String,
    pub token_url: String,
    pub api_url: String,
    /// Random value expected back in the `state` parameter of `/callback`.
    pub state: String,
    pub client: Client,
}

impl SpotifySession {
    /// Builds a session from the environment with a freshly generated state.
    ///
    /// # Errors
    ///
    /// Fails when `SPOTIFY_CLIENT_ID` or `SPOTIFY_CLIENT_SECRET` is not set.
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            client_id: config::spotify_client_id()?,
            client_secret: config::spotify_client_secret()?,
            redirect_uri: config::spotify_redirect_uri(),
            scope: config::spotify_scope(),
            auth_url: config::spotify_apiauth_url(),
            token_url: config::spotify_apitoken_url(),
            api_url: config::spotify_apiurl(),
            state: utils::generate_state(),
            client: Client::new(),
        })
    }
}

/// Sends a request and logs it.
///
/// Logs the target URL up front, the error on transport failures, and the
/// status and body of every response that is not `200 OK`. Request bodies
/// are not logged because the token request carries the authorization code.
pub(crate) async fn send_logged(
    request: RequestBuilder,
) -> Result<(StatusCode, Vec<u8>), reqwest::Error> {
    let (client, request) = request.build_split();
    let request = request?;
    info!("Making request to {}", request.url());

    let response = match client.execute(request).await {
        Ok(response) => response,
        Err(e) => {
            warning!("Request error: {}", e);
            return Err(e);
        }
    };

    let status = response.status();
    let body = response.bytes().await?.to_vec();
    if status != StatusCode::OK {
        warning!(
            "Response status: {}, body: {}",
            status.as_u16(),
            String::from_utf8_lossy(&body)
        );
    }

    Ok((status, body))
}
