use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// A single to-do item as stored in the task file and returned by the API.
///
/// Every field falls back to its zero value when it is missing from the
/// persisted JSON, so hand-edited or older files still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    #[serde(alias = "ID", alias = "Id")]
    pub id: i64,
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Description")]
    pub description: String,
    #[serde(alias = "Completed")]
    pub completed: bool,
}

/// Request body of `POST /tasks`.
///
/// Any `id` sent by the caller is dropped; the store assigns one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NewTask {
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Description")]
    pub description: String,
    #[serde(alias = "Completed")]
    pub completed: bool,
}

impl NewTask {
    pub fn into_task(self, id: i64) -> Task {
        Task {
            id,
            name: self.name,
            description: self.description,
            completed: self.completed,
        }
    }
}

/// Request body of `PUT`/`PATCH /tasks/{id}`.
///
/// A field that is absent or `null` keeps its stored value. The id of a task
/// is never rewritten by a patch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TaskPatch {
    #[serde(alias = "Name")]
    pub name: Option<String>,
    #[serde(alias = "Description")]
    pub description: Option<String>,
    #[serde(alias = "Completed")]
    pub completed: Option<bool>,
}

impl TaskPatch {
    pub fn apply(self, task: &mut Task) {
        if let Some(name) = self.name {
            task.name = name;
        }
        if let Some(description) = self.description {
            task.description = description;
        }
        if let Some(completed) = self.completed {
            task.completed = completed;
        }
    }
}

/// How the store picks the id of a newly created task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdAssignment {
    /// `number of tasks + 1`. Ids can repeat once tasks have been deleted.
    #[default]
    Length,
    /// `highest existing id + 1`. Never equal to the id of a live task.
    Max,
}

impl IdAssignment {
    /// Returns `None` once the next id would not fit in an `i64`.
    pub fn next_id(&self, tasks: &[Task]) -> Option<i64> {
        match self {
            IdAssignment::Length => i64::try_from(tasks.len()).ok()?.checked_add(1),
            IdAssignment::Max => tasks
                .iter()
                .map(|t| t.id)
                .max()
                .unwrap_or(0)
                .max(0)
                .checked_add(1),
        }
    }
}

impl FromStr for IdAssignment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "length" => Ok(IdAssignment::Length),
            "max" => Ok(IdAssignment::Max),
            other => Err(format!(
                "Unknown id assignment '{}'. Expected 'length' or 'max'.",
                other
            )),
        }
    }
}

impl fmt::Display for IdAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdAssignment::Length => write!(f, "length"),
            IdAssignment::Max => write!(f, "max"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub scope: String,
    #[serde(default)]
    pub expires_in: u64,
    #[serde(default)]
    pub obtained_at: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Artist {
    pub name: String,
    pub popularity: u32,
    pub followers: Followers,
    pub images: Vec<Image>,
    pub genres: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Followers {
    pub total: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub artists: ArtistsContainer,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtistsContainer {
    pub items: Vec<Artist>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GithubUser {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub public_repos: Option<u64>,
    pub followers: Option<u64>,
    pub html_url: Option<String>,
}

#[derive(Tabled)]
pub struct ProfileTableRow {
    pub field: String,
    pub value: String,
}
