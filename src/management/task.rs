use std::{
    fmt,
    io::{Error, ErrorKind},
    path::{Path, PathBuf},
};

use tokio::sync::Mutex;

use crate::types::{IdAssignment, NewTask, Task, TaskPatch};

#[derive(Debug)]
pub enum StoreError {
    IoError(Error),
    SerdeError(serde_json::Error),
    /// The id that would be assigned next does not fit in an `i64`.
    IdsExhausted,
}

impl From<Error> for StoreError {
    fn from(err: Error) -> Self {
        StoreError::IoError(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::SerdeError(err)
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::IoError(e) => write!(f, "task file I/O failed: {}", e),
            StoreError::SerdeError(e) => write!(f, "task file is not a valid task list: {}", e),
            StoreError::IdsExhausted => write!(f, "no task id left to assign"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::IoError(e) => Some(e),
            StoreError::SerdeError(e) => Some(e),
            StoreError::IdsExhausted => None,
        }
    }
}

/// File backed task collection.
///
/// The JSON file is the only source of truth: each operation loads the whole
/// collection, works on it in memory and, when it changed something, writes
/// the whole collection back. A single async mutex is held for the complete
/// cycle so two requests in the same process never interleave their
/// read-modify-write steps.
pub struct TaskStore {
    path: PathBuf,
    ids: IdAssignment,
    lock: Mutex<()>,
}

impl TaskStore {
    pub fn new(path: impl Into<PathBuf>, ids: IdAssignment) -> Self {
        Self {
            path: path.into(),
            ids,
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn id_assignment(&self) -> IdAssignment {
        self.ids
    }

    /// Returns every task in file order.
    pub async fn list(&self) -> Result<Vec<Task>, StoreError> {
        let _guard = self.lock.lock().await;
        self.load().await
    }

    /// Returns the first task whose id equals `id`.
    pub async fn get(&self, id: i64) -> Result<Option<Task>, StoreError> {
        let _guard = self.lock.lock().await;
        let tasks = self.load().await?;
        Ok(tasks.into_iter().find(|t| t.id == id))
    }

    /// Appends a new task and returns it with its assigned id.
    pub async fn create(&self, new_task: NewTask) -> Result<Task, StoreError> {
        let _guard = self.lock.lock().await;
        let mut tasks = self.load().await?;

        let id = self.ids.next_id(&tasks).ok_or(StoreError::IdsExhausted)?;
        let task = new_task.into_task(id);
        tasks.push(task.clone());

        self.persist(&tasks).await?;
        Ok(task)
    }

    /// Merges `patch` into the first task with a matching id.
    ///
    /// Returns `Ok(None)` without touching the file when nothing matches.
    pub async fn update(&self, id: i64, patch: TaskPatch) -> Result<Option<Task>, StoreError> {
        self.update_with(id, || Ok::<_, StoreError>(patch)).await
    }

    /// Like [`TaskStore::update`], but the patch is only built once a task
    /// with `id` is known to exist. An error from `patch` is returned as is
    /// and leaves the file untouched.
    pub async fn update_with<E, F>(&self, id: i64, patch: F) -> Result<Option<Task>, E>
    where
        E: From<StoreError>,
        F: FnOnce() -> Result<TaskPatch, E>,
    {
        let _guard = self.lock.lock().await;
        let mut tasks = self.load().await?;

        let Some(task) = tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        patch()?.apply(task);
        let updated = task.clone();

        self.persist(&tasks).await?;
        Ok(Some(updated))
    }

    /// Removes the first task with a matching id, keeping the order of the
    /// remaining ones. Returns whether a task was removed.
    pub async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let _guard = self.lock.lock().await;
        let mut tasks = self.load().await?;

        let Some(index) = tasks.iter().position(|t| t.id == id) else {
            return Ok(false);
        };
        tasks.remove(index);

        self.persist(&tasks).await?;
        Ok(true)
    }

    // A missing file, a blank file and a literal `null` all mean "no tasks yet".
    async fn load(&self) -> Result<Vec<Task>, StoreError> {
        let content = match async_fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::IoError(e)),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let tasks: Option<Vec<Task>> = serde_json::from_str(&content)?;
        Ok(tasks.unwrap_or_default())
    }

    async fn persist(&self, tasks: &[Task]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                async_fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_string_pretty(tasks)?;
        async_fs::write(&self.path, json).await?;
        Ok(())
    }
}
