//! Configuration management for taskdeck.
//!
//! All settings come from environment variables. Before the CLI runs, values
//! can be loaded from `.env` files:
//!
//! 1. Environment variables (highest priority, never overwritten)
//! 2. `.env` in the local data directory (`~/.local/share/taskdeck/.env` on Linux)
//! 3. `.env` in the current working directory
//! 4. Application defaults (where applicable)
//!
//! Optional settings fall back to a default. Settings that have no sensible
//! default (API credentials) return an error string naming the missing
//! variable, so callers decide whether that is fatal.

use std::{env, path::PathBuf};

use crate::types::IdAssignment;

pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_TASKS_DATA_FILE: &str = "data.json";
pub const DEFAULT_SPOTIFY_REDIRECT_URI: &str = "http://localhost:8080/callback";
pub const DEFAULT_SPOTIFY_API_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_SPOTIFY_API_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SPOTIFY_API_AUTH_SCOPE: &str = "user-read-private user-read-email user-top-read";
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Loads environment variables from `.env` files.
///
/// Creates the `taskdeck` folder in the platform-specific local data
/// directory if needed, then loads `taskdeck/.env` from there followed by
/// `.env` in the working directory. Missing files are not an error; a file
/// that exists but cannot be parsed is.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/taskdeck/.env`
/// - macOS: `~/Library/Application Support/taskdeck/.env`
/// - Windows: `%LOCALAPPDATA%/taskdeck/.env`
///
/// # Errors
///
/// Returns an error string if the data directory cannot be created or one of
/// the `.env` files is malformed.
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))?;
    }

    match dotenv::dotenv() {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(format!(".env: {}", e)),
    }
}

/// Location of the per-user `.env` file.
pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("taskdeck/.env");
    path
}

fn var_or(name: &str, default: &str) -> String {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => default.to_string(),
    }
}

fn required(name: &str) -> Result<String, String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(format!("{} must be set", name)),
    }
}

/// Address the HTTP servers bind to, e.g. `0.0.0.0:8080`.
///
/// Read from `SERVER_ADDRESS`.
pub fn server_addr() -> String {
    var_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS)
}

/// Path of the JSON file holding the task collection.
///
/// Read from `TASKS_DATA_FILE`. Relative paths resolve against the working
/// directory of the server process.
pub fn tasks_data_file() -> PathBuf {
    PathBuf::from(var_or("TASKS_DATA_FILE", DEFAULT_TASKS_DATA_FILE))
}

/// Strategy used to assign ids to new tasks, read from `TASKS_ID_ASSIGNMENT`.
///
/// # Errors
///
/// Returns an error if the variable holds something other than `length` or
/// `max`.
pub fn tasks_id_assignment() -> Result<IdAssignment, String> {
    match env::var("TASKS_ID_ASSIGNMENT") {
        Ok(value) if !value.trim().is_empty() => value.parse(),
        _ => Ok(IdAssignment::default()),
    }
}

/// Returns the Spotify API client ID (`SPOTIFY_CLIENT_ID`).
pub fn spotify_client_id() -> Result<String, String> {
    required("SPOTIFY_CLIENT_ID")
}

/// Returns the Spotify API client secret (`SPOTIFY_CLIENT_SECRET`).
///
/// The secret is only ever sent to the token endpoint and must never be
/// logged.
pub fn spotify_client_secret() -> Result<String, String> {
    required("SPOTIFY_CLIENT_SECRET")
}

/// Returns the OAuth redirect URI registered with Spotify.
///
/// Read from `SPOTIFY_REDIRECT_URI`; it must point at the `/callback` route
/// of the demo server.
pub fn spotify_redirect_uri() -> String {
    var_or("SPOTIFY_REDIRECT_URI", DEFAULT_SPOTIFY_REDIRECT_URI)
}

pub fn spotify_apiauth_url() -> String {
    var_or("SPOTIFY_API_AUTH_URL", DEFAULT_SPOTIFY_API_AUTH_URL)
}

pub fn spotify_apitoken_url() -> String {
    var_or("SPOTIFY_API_TOKEN_URL", DEFAULT_SPOTIFY_API_TOKEN_URL)
}

pub fn spotify_apiurl() -> String {
    var_or("SPOTIFY_API_URL", DEFAULT_SPOTIFY_API_URL)
}

/// Space separated list of scopes requested during authorization.
pub fn spotify_scope() -> String {
    var_or("SPOTIFY_API_AUTH_SCOPE", DEFAULT_SPOTIFY_API_AUTH_SCOPE)
}

/// Returns the personal access token used by `taskdeck github`.
pub fn github_token() -> Result<String, String> {
    required("GITHUB_TOKEN")
}

pub fn github_api_url() -> String {
    var_or("GITHUB_API_URL", DEFAULT_GITHUB_API_URL)
}
