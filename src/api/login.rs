use std::sync::Arc;

use axum::{Extension, response::Redirect};

use crate::{
    api::ApiError,
    spotify::{SpotifySession, auth},
};

/// Sends the browser to Spotify's consent page with a `307 Temporary Redirect`.
pub async fn login(
    Extension(session): Extension<Arc<SpotifySession>>,
) -> Result<Redirect, ApiError> {
    let url = auth::authorize_url(&session).map_err(ApiError::Internal)?;
    Ok(Redirect::temporary(&url))
}
