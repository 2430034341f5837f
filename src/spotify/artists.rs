use std::fmt;

use crate::{
    spotify::{SpotifySession, send_logged},
    types::{Artist, SearchResponse, Token},
};

/// Genre query used to approximate "the most popular artists right now".
pub const POPULAR_GENRES_QUERY: &str = "genre:pop genre:rock genre:hip-hop genre:rap genre:latin";

pub const SEARCH_LIMIT: u32 = 50;

#[derive(Debug)]
pub enum SearchError {
    /// The request failed or Spotify answered with an error status.
    Request(String),
    /// Spotify answered, but not with a search result.
    Decode(String),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Request(e) => write!(f, "artist search failed: {}", e),
            SearchError::Decode(e) => write!(f, "artist search returned an unexpected body: {}", e),
        }
    }
}

/// Searches for up to fifty artists across the popular genres.
///
/// Artists are returned in the order Spotify ranks them.
pub async fn search_popular_artists(
    session: &SpotifySession,
    token: &Token,
) -> Result<Vec<Artist>, SearchError> {
    let request = session
        .client
        .get(format!("{}/search", session.api_url))
        .bearer_auth(&token.access_token)
        .query(&[
            ("type", "artist".to_string()),
            ("limit", SEARCH_LIMIT.to_string()),
            ("q", POPULAR_GENRES_QUERY.to_string()),
        ]);

    let (status, body) = send_logged(request)
        .await
        .map_err(|e| SearchError::Request(e.to_string()))?;
    if !status.is_success() {
        return Err(SearchError::Request(format!("Spotify answered {}", status)));
    }

    decode_search_response(&body)
}

pub fn decode_search_response(body: &[u8]) -> Result<Vec<Artist>, SearchError> {
    let response: SearchResponse =
        serde_json::from_slice(body).map_err(|e| SearchError::Decode(e.to_string()))?;
    Ok(response.artists.items)
}
