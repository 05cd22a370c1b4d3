// ABOUTME: Integration tests for database initialization
// ABOUTME: Verifies file-backed setup, migrations, and storage wiring

use chrono::{TimeZone, Utc};
use taskboard_core::{DbState, TagCreateInput, TaskCreateInput};
use tempfile::TempDir;

#[tokio::test]
async fn test_init_with_path_creates_database_file() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("nested").join("taskboard.db");

    let db = DbState::init_with_path(Some(db_path.clone())).await.unwrap();

    assert!(db_path.exists());

    // Migrations ran and storage is usable
    let task = db
        .task_storage
        .create_task(TaskCreateInput {
            name: "Persisted".to_string(),
            description: "on disk".to_string(),
            date: Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap(),
        })
        .await
        .unwrap();

    let fetched = db.task_storage.get_task(task.id).await.unwrap();
    assert_eq!(fetched.name, "Persisted");
}

#[tokio::test]
async fn test_init_with_path_reuses_existing_database() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("taskboard.db");

    let db = DbState::init_with_path(Some(db_path.clone())).await.unwrap();
    db.tag_storage
        .create_tag(TagCreateInput {
            name: "sticky".to_string(),
        })
        .await
        .unwrap();
    db.pool.close().await;

    // A second init picks up the data written by the first
    let reopened = DbState::init_with_path(Some(db_path)).await.unwrap();
    let tags = reopened.tag_storage.list_tags().await.unwrap();

    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].name, "sticky");
}
