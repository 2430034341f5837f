use std::{net::SocketAddr, sync::Arc};

use crate::{config, error, info, server, spotify::SpotifySession, warning};

/// Serves the Spotify demo and, unless disabled, opens it in the browser.
///
/// `SPOTIFY_CLIENT_ID` and `SPOTIFY_CLIENT_SECRET` are required. The
/// redirect URI registered with Spotify has to point at this server's
/// `/callback` route.
pub async fn spotify(addr: Option<String>, open_browser: bool) {
    let session = match SpotifySession::from_env() {
        Ok(session) => Arc::new(session),
        Err(e) => error!("Missing Spotify credentials: {}", e),
    };

    let addr = addr.unwrap_or_else(config::server_addr);
    let listener = match server::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind {}: {}", addr, e),
    };
    let url = match listener.local_addr() {
        Ok(local) => home_url(local),
        Err(e) => error!("Failed to read bound address: {}", e),
    };

    info!("Redirect URI: {}", session.redirect_uri);
    info!("Server starting on {}", url);

    if open_browser && webbrowser::open(&url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            url
        );
    }

    if let Err(e) = server::serve(listener, server::spotify_router(session)).await {
        error!("Spotify demo server failed. Err: {}", e);
    }
}

/// Browser URL of the landing page. Wildcard binds are reached via
/// `localhost`.
pub fn home_url(addr: SocketAddr) -> String {
    if addr.ip().is_unspecified() {
        format!("http://localhost:{}/", addr.port())
    } else {
        format!("http://{}/", addr)
    }
}
