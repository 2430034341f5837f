use std::sync::Arc;

use axum::{
    Extension,
    body::Bytes,
    extract::Path,
    http::StatusCode,
    response::Json,
};
use serde::de::DeserializeOwned;

use crate::{
    api::ApiError,
    management::TaskStore,
    types::{NewTask, Task, TaskPatch},
    utils,
};

/// `GET /tasks`
pub async fn list_tasks(
    Extension(store): Extension<Arc<TaskStore>>,
) -> Result<Json<Vec<Task>>, ApiError> {
    Ok(Json(store.list().await?))
}

/// `GET /tasks/{id}`
pub async fn get_task(
    Extension(store): Extension<Arc<TaskStore>>,
    Path(raw_id): Path<String>,
) -> Result<Json<Task>, ApiError> {
    let id = utils::parse_task_id(&raw_id).ok_or(ApiError::NotFound)?;
    store.get(id).await?.map(Json).ok_or(ApiError::NotFound)
}

/// `POST /tasks`
///
/// The body is read as JSON whatever its content type. An `id` in the body is
/// ignored.
pub async fn create_task(
    Extension(store): Extension<Arc<TaskStore>>,
    body: Bytes,
) -> Result<Json<Task>, ApiError> {
    let new_task: NewTask = parse_body(&body)?;
    Ok(Json(store.create(new_task).await?))
}

/// `PUT /tasks/{id}` and `PATCH /tasks/{id}`
///
/// Only the fields present in the body are changed. The body is decoded only
/// when the task exists, so an unknown id is a 404 whatever the body holds.
pub async fn update_task(
    Extension(store): Extension<Arc<TaskStore>>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<Json<Task>, ApiError> {
    let id = utils::parse_task_id(&raw_id).ok_or(ApiError::NotFound)?;
    store
        .update_with(id, || parse_body::<TaskPatch>(&body))
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// `DELETE /tasks/{id}`
pub async fn delete_task(
    Extension(store): Extension<Arc<TaskStore>>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = utils::parse_task_id(&raw_id).ok_or(ApiError::NotFound)?;
    if store.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

// An empty body decodes to the all-defaults value.
fn parse_body<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|e| ApiError::BadRequest(format!("Invalid JSON body: {}", e)))
}
