//! # API Module
//!
//! HTTP handlers for both servers run by taskdeck.
//!
//! ## Task API (`taskdeck serve`)
//!
//! | Method      | Path          | Handler         |
//! |-------------|---------------|-----------------|
//! | GET         | `/tasks`      | [`list_tasks`]  |
//! | GET         | `/tasks/{id}` | [`get_task`]    |
//! | POST        | `/tasks`      | [`create_task`] |
//! | PUT / PATCH | `/tasks/{id}` | [`update_task`] |
//! | DELETE      | `/tasks/{id}` | [`delete_task`] |
//! | GET         | `/health`     | [`health`]      |
//!
//! The task handlers receive the shared [`crate::management::TaskStore`]
//! through an axum `Extension` and translate its results into status codes:
//! a missing task (or an id that is not an integer) is a 404, a malformed
//! JSON body a 400, and a task file that cannot be read or written a 500.
//! Error bodies are plain text, see [`ApiError`].
//!
//! ## Spotify demo (`taskdeck spotify`)
//!
//! - [`home`] - landing page
//! - [`login`] - redirect to Spotify's authorize page
//! - [`callback`] - code exchange, artist search and the rendered grid
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Extension, Router, routing::get};
//! use taskdeck::api::{list_tasks, health};
//!
//! let app = Router::new()
//!     .route("/tasks", get(list_tasks))
//!     .route("/health", get(health))
//!     .layer(Extension(store));
//! ```

mod callback;
mod error;
mod health;
mod home;
mod login;
mod tasks;

pub use callback::callback;
pub use error::ApiError;
pub use health::health;
pub use home::home;
pub use login::login;
pub use tasks::create_task;
pub use tasks::delete_task;
pub use tasks::get_task;
pub use tasks::list_tasks;
pub use tasks::update_task;
