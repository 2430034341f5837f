use std::sync::Arc;

use axum::{Extension, response::Json};
use serde_json::{Value, json};

use crate::management::TaskStore;

/// `GET /health`: liveness plus the store settings the server runs with.
pub async fn health(Extension(store): Extension<Arc<TaskStore>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "data_file": store.path().display().to_string(),
        "id_assignment": store.id_assignment().to_string(),
    }))
}
