use std::sync::Arc;

use taskdeck::management::{StoreError, TaskStore};
use taskdeck::types::{IdAssignment, NewTask, Task, TaskPatch};
use tempfile::TempDir;

// Helper function to create a store on a fresh file inside a temp dir
fn create_test_store(ids: IdAssignment) -> (TempDir, TaskStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = TaskStore::new(dir.path().join("data.json"), ids);
    (dir, store)
}

fn new_task(name: &str) -> NewTask {
    NewTask {
        name: name.to_string(),
        description: format!("{} description", name),
        completed: false,
    }
}

fn names(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|t| t.name.as_str()).collect()
}

#[tokio::test]
async fn test_missing_file_is_empty_collection() {
    let (_dir, store) = create_test_store(IdAssignment::Length);

    assert!(store.list().await.unwrap().is_empty());
    assert_eq!(store.get(1).await.unwrap(), None);

    // Reads never create the file
    assert!(!store.path().exists());
}

#[tokio::test]
async fn test_blank_and_null_files_are_empty_collections() {
    let (_dir, store) = create_test_store(IdAssignment::Length);

    std::fs::write(store.path(), "  \n").unwrap();
    assert!(store.list().await.unwrap().is_empty());

    std::fs::write(store.path(), "null").unwrap();
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_corrupt_file_is_an_error() {
    let (_dir, store) = create_test_store(IdAssignment::Length);
    std::fs::write(store.path(), "{\"not\": \"a list\"}").unwrap();

    match store.list().await {
        Err(StoreError::SerdeError(_)) => {}
        other => panic!("expected a decode error, got {:?}", other),
    }

    // Writers must not clobber a file they could not read
    assert!(store.create(new_task("a")).await.is_err());
    assert_eq!(
        std::fs::read_to_string(store.path()).unwrap(),
        "{\"not\": \"a list\"}"
    );
}

#[tokio::test]
async fn test_create_assigns_length_plus_one() {
    let (_dir, store) = create_test_store(IdAssignment::Length);

    for expected_id in 1..=3 {
        let before = store.list().await.unwrap().len() as i64;
        let task = store.create(new_task(&format!("task {}", expected_id))).await.unwrap();

        assert_eq!(task.id, before + 1);
        assert_eq!(task.id, expected_id);
        assert!(store.list().await.unwrap().contains(&task));
    }
}

#[tokio::test]
async fn test_create_persists_json_array() {
    let (_dir, store) = create_test_store(IdAssignment::Length);
    store
        .create(NewTask {
            name: "A".to_string(),
            description: "d".to_string(),
            completed: false,
        })
        .await
        .unwrap();

    let content = std::fs::read_to_string(store.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{"id": 1, "name": "A", "description": "d", "completed": false}])
    );
}

#[tokio::test]
async fn test_create_makes_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let store = TaskStore::new(dir.path().join("nested/deeper/tasks.json"), IdAssignment::Length);

    store.create(new_task("a")).await.unwrap();

    assert!(store.path().is_file());
}

#[tokio::test]
async fn test_get_returns_submitted_fields() {
    let (_dir, store) = create_test_store(IdAssignment::Length);
    let submitted = NewTask {
        name: "buy milk".to_string(),
        description: "oat, 2 liters".to_string(),
        completed: true,
    };

    let created = store.create(submitted.clone()).await.unwrap();
    let fetched = store.get(created.id).await.unwrap().unwrap();

    assert_eq!(fetched, submitted.into_task(created.id));
}

#[tokio::test]
async fn test_update_merges_partial_patch() {
    let (_dir, store) = create_test_store(IdAssignment::Length);
    store.create(new_task("a")).await.unwrap();
    store.create(new_task("b")).await.unwrap();

    let updated = store
        .update(
            2,
            TaskPatch {
                completed: Some(true),
                ..TaskPatch::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, 2);
    assert_eq!(updated.name, "b");
    assert_eq!(updated.description, "b description");
    assert!(updated.completed);

    // The change is on disk, the other task is untouched
    let tasks = store.list().await.unwrap();
    assert_eq!(tasks[1], updated);
    assert!(!tasks[0].completed);
}

#[tokio::test]
async fn test_update_unknown_id_leaves_file_alone() {
    let (_dir, store) = create_test_store(IdAssignment::Length);
    store.create(new_task("a")).await.unwrap();
    let before = std::fs::read_to_string(store.path()).unwrap();

    let result = store
        .update(
            7,
            TaskPatch {
                name: Some("x".to_string()),
                ..TaskPatch::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(result, None);
    assert_eq!(std::fs::read_to_string(store.path()).unwrap(), before);
}

#[tokio::test]
async fn test_delete_removes_first_match_and_keeps_order() {
    let (_dir, store) = create_test_store(IdAssignment::Length);
    for name in ["a", "b", "c", "d"] {
        store.create(new_task(name)).await.unwrap();
    }

    assert!(store.delete(2).await.unwrap());

    let tasks = store.list().await.unwrap();
    assert_eq!(tasks.len(), 3);
    assert_eq!(names(&tasks), vec!["a", "c", "d"]);

    assert!(!store.delete(2).await.unwrap());
    assert_eq!(store.list().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_length_ids_can_collide_after_delete() {
    let (_dir, store) = create_test_store(IdAssignment::Length);
    for name in ["a", "b", "c"] {
        store.create(new_task(name)).await.unwrap();
    }
    store.delete(2).await.unwrap();

    let created = store.create(new_task("d")).await.unwrap();
    assert_eq!(created.id, 3);

    // Lookups act on the first task with the id
    assert_eq!(store.get(3).await.unwrap().unwrap().name, "c");
    assert!(store.delete(3).await.unwrap());
    assert_eq!(store.get(3).await.unwrap().unwrap().name, "d");
}

#[tokio::test]
async fn test_max_ids_never_collide_after_delete() {
    let (_dir, store) = create_test_store(IdAssignment::Max);
    for name in ["a", "b", "c"] {
        store.create(new_task(name)).await.unwrap();
    }
    store.delete(2).await.unwrap();

    let created = store.create(new_task("d")).await.unwrap();
    assert_eq!(created.id, 4);

    let mut ids: Vec<i64> = store.list().await.unwrap().iter().map(|t| t.id).collect();
    ids.dedup();
    assert_eq!(ids, vec![1, 3, 4]);
}

#[tokio::test]
async fn test_create_fails_when_ids_are_exhausted() {
    let (_dir, store) = create_test_store(IdAssignment::Max);
    let content = r#"[{"id":9223372036854775807,"name":"big"}]"#;
    std::fs::write(store.path(), content).unwrap();

    match store.create(NewTask::default()).await {
        Err(StoreError::IdsExhausted) => {}
        other => panic!("expected exhausted ids, got {:?}", other),
    }

    assert_eq!(std::fs::read_to_string(store.path()).unwrap(), content);
    assert_eq!(store.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_with_builds_patch_only_for_existing_task() {
    let (_dir, store) = create_test_store(IdAssignment::Length);
    store.create(new_task("a")).await.unwrap();
    let before = std::fs::read_to_string(store.path()).unwrap();

    // Unknown id: the patch is never built
    let result = store
        .update_with(9, || -> Result<TaskPatch, StoreError> {
            panic!("patch built for unknown id")
        })
        .await;
    assert!(matches!(result, Ok(None)));

    // Known id with a failing patch: the error comes back and the file stays
    let result = store
        .update_with(1, || Err::<TaskPatch, _>(StoreError::IdsExhausted))
        .await;
    assert!(matches!(result, Err(StoreError::IdsExhausted)));
    assert_eq!(std::fs::read_to_string(store.path()).unwrap(), before);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_are_not_lost() {
    let (_dir, store) = create_test_store(IdAssignment::Max);
    let store = Arc::new(store);

    let handles: Vec<_> = (0..25)
        .map(|i| {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.create(new_task(&format!("task {}", i))).await })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let tasks = store.list().await.unwrap();
    assert_eq!(tasks.len(), 25);

    let mut ids: Vec<i64> = tasks.iter().map(|t| t.id).collect();
    ids.sort();
    assert_eq!(ids, (1..=25).collect::<Vec<i64>>());
}
