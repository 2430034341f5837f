//! taskdeck library
//!
//! A to-do list REST API that keeps its tasks in one flat JSON file, bundled
//! with two small API demos: a Spotify OAuth page listing popular artists and
//! a GitHub profile fetcher.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the task API and the Spotify demo pages
//! - `cli` - Command-line entry points behind the `taskdeck` binary
//! - `config` - Configuration from environment variables and `.env` files
//! - `github` - GitHub REST API client
//! - `management` - The file backed task store
//! - `server` - Router construction and server startup
//! - `spotify` - Spotify Web API client and page rendering
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use taskdeck::{management::TaskStore, server, types::IdAssignment};
//!
//! #[tokio::main]
//! async fn main() -> taskdeck::Res<()> {
//!     let store = Arc::new(TaskStore::new("data.json", IdAssignment::Length));
//!     server::start_task_server("127.0.0.1:8080", store).await
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod github;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used by the top-level flows (server startup, CLI commands) where errors of
/// different subsystems meet. The boxed error keeps the Send + Sync bounds
/// needed across `.await` points.
///
/// # Example
///
/// ```
/// use taskdeck::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints a timestamped informational line with a blue `o` marker.
///
/// Takes the same arguments as `println!`. Used for startup messages, request
/// logs and outbound call logs.
///
/// ```
/// info!("Serving tasks from {}", path.display());
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!(
      "{} [{}] {}",
      chrono::Local::now().format("%H:%M:%S").to_string().dimmed(),
      "o".blue().bold(),
      std::format_args!($($arg)*)
    );
  })
}

/// Prints a timestamped success line with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!(
      "{} [{}] {}",
      chrono::Local::now().format("%H:%M:%S").to_string().dimmed(),
      "✓".green().bold(),
      std::format_args!($($arg)*)
    );
  })
}

/// Prints a timestamped error line to stderr and exits with status 1.
///
/// Only for fatal conditions in the CLI layer; the expression diverges, so it
/// can stand in for a value in a `match` arm:
///
/// ```
/// let token = match config::github_token() {
///     Ok(token) => token,
///     Err(e) => error!("{}", e),
/// };
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!(
      "{} [{}] {}",
      chrono::Local::now().format("%H:%M:%S").to_string().dimmed(),
      "!".red().bold(),
      std::format_args!($($arg)*)
    );
    std::process::exit(1);
  })
}

/// Prints a timestamped warning line to stderr with a yellow `!` marker.
///
/// For recoverable problems: a failed request handled with an error status,
/// a browser that would not open, a task file that cannot be read.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!(
      "{} [{}] {}",
      chrono::Local::now().format("%H:%M:%S").to_string().dimmed(),
      "!".yellow().bold(),
      std::format_args!($($arg)*)
    );
  })
}
