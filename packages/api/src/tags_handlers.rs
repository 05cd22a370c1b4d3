// ABOUTME: HTTP request handlers for tag operations
// ABOUTME: Handles CRUD and task attachment for tags

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use tracing::info;

use super::response::{created_or_error, list_or_no_content, no_content_or_error, ok_or_error};
use taskboard_core::{DbState, TagCreateInput, TagUpdateInput};

/// List all tags with their task collections
pub async fn list_tags(State(db): State<DbState>) -> impl IntoResponse {
    info!("Listing tags");

    let result = db.tag_storage.list_tags().await;
    list_or_no_content(result, "Failed to list tags")
}

/// List tags that have at least one task attached
pub async fn list_tags_with_tasks(State(db): State<DbState>) -> impl IntoResponse {
    info!("Listing tags with tasks");

    let result = db.tag_storage.list_tags_with_tasks().await;
    list_or_no_content(result, "Failed to list tags with tasks")
}

/// Get a single tag by ID, its tasks ordered by type id descending
pub async fn get_tag(State(db): State<DbState>, Path(tag_id): Path<i64>) -> impl IntoResponse {
    info!("Getting tag: {}", tag_id);

    let result = db.tag_storage.get_tag(tag_id).await.map(|mut tag| {
        tag.sort_tasks_by_type_desc();
        tag
    });
    ok_or_error(result, "Failed to get tag")
}

/// Create a new tag
pub async fn create_tag(
    State(db): State<DbState>,
    Json(input): Json<TagCreateInput>,
) -> impl IntoResponse {
    info!("Creating tag: {}", input.name);

    let result = db.tag_storage.create_tag(input).await;
    created_or_error(result, "Failed to create tag")
}

/// Rename a tag
pub async fn update_tag(
    State(db): State<DbState>,
    Path(tag_id): Path<i64>,
    Json(input): Json<TagUpdateInput>,
) -> impl IntoResponse {
    info!("Updating tag: {}", tag_id);

    let result = db.tag_storage.update_tag(tag_id, input).await;
    ok_or_error(result, "Failed to update tag")
}

/// Attach a task to a tag. The body is the task id.
pub async fn attach_task(
    State(db): State<DbState>,
    Path(tag_id): Path<i64>,
    Json(task_id): Json<i64>,
) -> impl IntoResponse {
    info!("Attaching task {} to tag {}", task_id, tag_id);

    let result = db.tag_storage.attach_task(tag_id, task_id).await;
    ok_or_error(result, "Failed to attach task to tag")
}

/// Detach a task from a tag. The body is the task id.
pub async fn detach_task(
    State(db): State<DbState>,
    Path(tag_id): Path<i64>,
    Json(task_id): Json<i64>,
) -> impl IntoResponse {
    info!("Detaching task {} from tag {}", task_id, tag_id);

    let result = db.tag_storage.detach_task(tag_id, task_id).await;
    ok_or_error(result, "Failed to detach task from tag")
}

/// Delete a tag by ID, clearing it from its tasks
pub async fn delete_tag(State(db): State<DbState>, Path(tag_id): Path<i64>) -> impl IntoResponse {
    info!("Deleting tag: {}", tag_id);

    let result = db.tag_storage.delete_tag(tag_id).await;
    no_content_or_error(result, "Failed to delete tag")
}

/// Delete all tags
pub async fn delete_all_tags(State(db): State<DbState>) -> impl IntoResponse {
    info!("Deleting all tags");

    let result = db.tag_storage.delete_all_tags().await;
    no_content_or_error(result, "Failed to delete all tags")
}
