use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};

use crate::{
    api::ApiError,
    info,
    spotify::{
        SpotifySession,
        artists::{self, SearchError},
        auth, page,
    },
    warning,
};

/// Completes the authorization-code flow and renders the artist grid.
///
/// The `state` parameter must equal the one handed out by `/login`; the check
/// runs before anything else so a forged callback never reaches the token
/// endpoint.
pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(session): Extension<Arc<SpotifySession>>,
) -> Result<Html<String>, ApiError> {
    let received_state = params.get("state").map(String::as_str).unwrap_or_default();
    info!("Received callback");
    if received_state != session.state {
        warning!("State mismatch on callback");
        return Err(ApiError::BadRequest("State mismatch".to_string()));
    }

    if let Some(error) = params.get("error") {
        warning!("Authorization was not granted: {}", error);
        return Err(ApiError::BadRequest(format!("Authorization failed: {}", error)));
    }

    let Some(code) = params.get("code").filter(|c| !c.is_empty()) else {
        warning!("No code received in callback");
        return Err(ApiError::BadRequest("No code received".to_string()));
    };

    let token = auth::exchange_code(&session, code).await.map_err(|e| {
        warning!("Token exchange error: {}", e);
        ApiError::Internal("Failed to exchange token".to_string())
    })?;

    let artists = artists::search_popular_artists(&session, &token)
        .await
        .map_err(|e| {
            warning!("{}", e);
            match e {
                SearchError::Request(_) => ApiError::Internal("Failed to search artists".to_string()),
                SearchError::Decode(_) => ApiError::Internal("Failed to decode response".to_string()),
            }
        })?;

    Ok(Html(page::render_artists(&artists)))
}
