//! # GitHub Module
//!
//! Minimal client for the GitHub REST API used by `taskdeck github`. It
//! authenticates with a personal access token (`GITHUB_TOKEN`) and reads the
//! profile of the token's owner from `GET /user`.

pub mod profile;
