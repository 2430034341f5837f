use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{config, error, github::profile, success};

/// Prints the profile of the user owning `GITHUB_TOKEN`.
pub async fn github() {
    let token = match config::github_token() {
        Ok(token) => token,
        Err(e) => error!("{}", e),
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching GitHub profile...");
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let user = match profile::get_authenticated_user(&config::github_api_url(), &token).await {
        Ok(user) => user,
        Err(e) => {
            pb.finish_and_clear();
            error!("Error fetching user profile: {}", e);
        }
    };
    pb.finish_and_clear();

    success!("Authenticated as: {}", user.login);
    println!("{}", Table::new(profile::profile_rows(&user)));
}
