//! # CLI Module
//!
//! Entry points behind the `taskdeck` subcommands. Each function reads its
//! settings (flags first, then [`crate::config`]), reports progress through
//! the crate's console macros and terminates the process with exit code 1 on
//! fatal errors via [`crate::error!`].
//!
//! ## Commands
//!
//! - [`serve`] - runs the task API on top of the JSON task file
//! - [`spotify`] - runs the Spotify OAuth demo page
//! - [`github`] - prints the profile of the `GITHUB_TOKEN` owner
//!
//! ## Usage Patterns
//!
//! ```bash
//! taskdeck serve                               # :8080, ./data.json
//! taskdeck serve --addr 127.0.0.1:3000 --data-file ~/tasks.json --ids max
//! taskdeck spotify --no-browser
//! taskdeck github
//! taskdeck completions zsh > _taskdeck
//! ```

mod github;
mod serve;
mod spotify;

pub use github::github;
pub use serve::serve;
pub use spotify::home_url;
pub use spotify::spotify;
