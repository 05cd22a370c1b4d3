// ABOUTME: HTTP request handlers for task type operations
// ABOUTME: Handles CRUD for the categories tasks are classified under

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use tracing::info;

use super::response::{created_or_error, list_or_no_content, no_content_or_error, ok_or_error};
use taskboard_core::{DbState, TaskTypeCreateInput, TaskTypeUpdateInput};

/// List all task types
pub async fn list_task_types(State(db): State<DbState>) -> impl IntoResponse {
    info!("Listing task types");

    let result = db.task_type_storage.list_task_types().await;
    list_or_no_content(result, "Failed to list task types")
}

/// Get a single task type by ID
pub async fn get_task_type(
    State(db): State<DbState>,
    Path(type_id): Path<i64>,
) -> impl IntoResponse {
    info!("Getting task type: {}", type_id);

    let result = db.task_type_storage.get_task_type(type_id).await;
    ok_or_error(result, "Failed to get task type")
}

/// Create a new task type
pub async fn create_task_type(
    State(db): State<DbState>,
    Json(input): Json<TaskTypeCreateInput>,
) -> impl IntoResponse {
    info!("Creating task type: {}", input.name);

    let result = db.task_type_storage.create_task_type(input).await;
    created_or_error(result, "Failed to create task type")
}

/// Rename a task type
pub async fn update_task_type(
    State(db): State<DbState>,
    Path(type_id): Path<i64>,
    Json(input): Json<TaskTypeUpdateInput>,
) -> impl IntoResponse {
    info!("Updating task type: {}", type_id);

    let result = db.task_type_storage.update_task_type(type_id, input).await;
    ok_or_error(result, "Failed to update task type")
}

/// Delete a task type by ID, clearing it from tasks that reference it
pub async fn delete_task_type(
    State(db): State<DbState>,
    Path(type_id): Path<i64>,
) -> impl IntoResponse {
    info!("Deleting task type: {}", type_id);

    let result = db.task_type_storage.delete_task_type(type_id).await;
    no_content_or_error(result, "Failed to delete task type")
}

/// Delete all task types
pub async fn delete_all_task_types(State(db): State<DbState>) -> impl IntoResponse {
    info!("Deleting all task types");

    let result = db.task_type_storage.delete_all_task_types().await;
    no_content_or_error(result, "Failed to delete all task types")
}
