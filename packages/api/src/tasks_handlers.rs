// ABOUTME: HTTP request handlers for task operations
// ABOUTME: Handles CRUD, day queries, and type assignment for tasks

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use tracing::{error, info};

use super::response::{created_or_error, list_or_no_content, no_content_or_error, ok_or_error};
use taskboard_core::{DbState, TaskCreateInput, TaskUpdateInput};

/// List all tasks
pub async fn list_tasks(State(db): State<DbState>) -> impl IntoResponse {
    info!("Listing tasks");

    let result = db.task_storage.list_tasks().await;
    list_or_no_content(result, "Failed to list tasks")
}

/// List tasks falling on one calendar day. The body is a JSON string in
/// YYYY-MM-DD form.
pub async fn list_tasks_by_date(
    State(db): State<DbState>,
    Json(date): Json<String>,
) -> impl IntoResponse {
    info!("Listing tasks on date: {}", date);

    let day = match NaiveDate::parse_from_str(&date, "%Y-%m-%d") {
        Ok(day) => day,
        Err(e) => {
            error!("Failed to parse date {:?}: {}", date, e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let result = db.task_storage.list_tasks_on_date(day).await;
    list_or_no_content(result, "Failed to list tasks by date")
}

/// Get a single task by ID
pub async fn get_task(State(db): State<DbState>, Path(task_id): Path<i64>) -> impl IntoResponse {
    info!("Getting task: {}", task_id);

    let result = db.task_storage.get_task(task_id).await;
    ok_or_error(result, "Failed to get task")
}

/// Create a new task
pub async fn create_task(
    State(db): State<DbState>,
    Json(input): Json<TaskCreateInput>,
) -> impl IntoResponse {
    info!("Creating task: {}", input.name);

    let result = db.task_storage.create_task(input).await;
    created_or_error(result, "Failed to create task")
}

/// Update a task's name, description, and date
pub async fn update_task(
    State(db): State<DbState>,
    Path(task_id): Path<i64>,
    Json(input): Json<TaskUpdateInput>,
) -> impl IntoResponse {
    info!("Updating task: {}", task_id);

    let result = db.task_storage.update_task(task_id, input).await;
    ok_or_error(result, "Failed to update task")
}

/// Assign a task type to a task. The body is the type id.
pub async fn assign_task_type(
    State(db): State<DbState>,
    Path(task_id): Path<i64>,
    Json(type_id): Json<i64>,
) -> impl IntoResponse {
    info!("Assigning type {} to task {}", type_id, task_id);

    let result = db.task_storage.assign_type(task_id, type_id).await;
    ok_or_error(result, "Failed to assign task type")
}

/// Delete a task by ID
pub async fn delete_task(State(db): State<DbState>, Path(task_id): Path<i64>) -> impl IntoResponse {
    info!("Deleting task: {}", task_id);

    let result = db.task_storage.delete_task(task_id).await;
    no_content_or_error(result, "Failed to delete task")
}

/// Delete all tasks
pub async fn delete_all_tasks(State(db): State<DbState>) -> impl IntoResponse {
    info!("Deleting all tasks");

    let result = db.task_storage.delete_all_tasks().await;
    no_content_or_error(result, "Failed to delete all tasks")
}
