use reqwest::{Client, header};

use crate::types::{GithubUser, ProfileTableRow};

/// Fetches the profile of the user that owns `token`.
///
/// GitHub rejects requests without a `User-Agent`, so the crate name and
/// version are sent as one.
///
/// # Errors
///
/// Returns `reqwest::Error` for transport failures, error statuses (e.g. 401
/// for a revoked token) and bodies that are not a user object.
pub async fn get_authenticated_user(
    api_url: &str,
    token: &str,
) -> Result<GithubUser, reqwest::Error> {
    let client = Client::new();
    client
        .get(format!("{}/user", api_url.trim_end_matches('/')))
        .bearer_auth(token)
        .header(header::USER_AGENT, user_agent())
        .header(header::ACCEPT, "application/vnd.github+json")
        .send()
        .await?
        .error_for_status()?
        .json::<GithubUser>()
        .await
}

pub fn user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Turns a profile into the rows printed by the CLI. Missing values show
/// as `-`.
pub fn profile_rows(user: &GithubUser) -> Vec<ProfileTableRow> {
    fn or_dash(value: Option<String>) -> String {
        value.filter(|v| !v.is_empty()).unwrap_or_else(|| "-".to_string())
    }

    vec![
        ProfileTableRow {
            field: "Login".to_string(),
            value: user.login.clone(),
        },
        ProfileTableRow {
            field: "Name".to_string(),
            value: or_dash(user.name.clone()),
        },
        ProfileTableRow {
            field: "Bio".to_string(),
            value: or_dash(user.bio.clone()),
        },
        ProfileTableRow {
            field: "Public repos".to_string(),
            value: or_dash(user.public_repos.map(|n| n.to_string())),
        },
        ProfileTableRow {
            field: "Followers".to_string(),
            value: or_dash(user.followers.map(|n| n.to_string())),
        },
        ProfileTableRow {
            field: "Profile".to_string(),
            value: or_dash(user.html_url.clone()),
        },
    ]
}
