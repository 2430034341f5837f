use std::{path::PathBuf, sync::Arc};

use crate::{
    config, error, management::TaskStore, server, types::IdAssignment, warning,
};

/// Runs the task API until Ctrl-C.
///
/// Flags take precedence over the environment (`SERVER_ADDRESS`,
/// `TASKS_DATA_FILE`, `TASKS_ID_ASSIGNMENT`). The task file does not have to
/// exist yet; it is created by the first write. An existing file that cannot
/// be read is reported up front but does not stop the server, every request
/// touching it answers 500 until it is fixed.
pub async fn serve(addr: Option<String>, data_file: Option<PathBuf>, ids: Option<IdAssignment>) {
    let addr = addr.unwrap_or_else(config::server_addr);
    let data_file = data_file.unwrap_or_else(config::tasks_data_file);
    let ids = match ids {
        Some(ids) => ids,
        None => match config::tasks_id_assignment() {
            Ok(ids) => ids,
            Err(e) => error!("{}", e),
        },
    };

    let store = Arc::new(TaskStore::new(data_file, ids));
    if let Err(e) = store.list().await {
        warning!("{}: {}", store.path().display(), e);
    }

    if let Err(e) = server::start_task_server(&addr, store).await {
        error!("Task server failed on {}. Err: {}", addr, e);
    }
}
