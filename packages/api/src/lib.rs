// ABOUTME: HTTP API layer for Taskboard providing REST endpoints and routing
// ABOUTME: Maps the /api surface onto the storage layer in taskboard-core

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use taskboard_core::DbState;

pub mod health;
pub mod response;
pub mod tags_handlers;
pub mod task_types_handlers;
pub mod tasks_handlers;

/// Creates the tasks API router
pub fn create_tasks_router() -> Router<DbState> {
    Router::new()
        .route("/", get(tasks_handlers::list_tasks))
        .route("/", post(tasks_handlers::create_task))
        .route("/", delete(tasks_handlers::delete_all_tasks))
        .route("/date", get(tasks_handlers::list_tasks_by_date))
        .route("/{task_id}", get(tasks_handlers::get_task))
        .route("/{task_id}", put(tasks_handlers::update_task))
        .route("/{task_id}", delete(tasks_handlers::delete_task))
        .route("/type/id/{task_id}", put(tasks_handlers::assign_task_type))
}

/// Creates the tags API router
pub fn create_tags_router() -> Router<DbState> {
    Router::new()
        .route("/", get(tags_handlers::list_tags))
        .route("/", post(tags_handlers::create_tag))
        .route("/", delete(tags_handlers::delete_all_tags))
        .route("/tasks", get(tags_handlers::list_tags_with_tasks))
        .route("/{tag_id}", get(tags_handlers::get_tag))
        .route("/{tag_id}", put(tags_handlers::update_tag))
        .route("/{tag_id}", delete(tags_handlers::delete_tag))
        .route("/task/{tag_id}", put(tags_handlers::attach_task))
        .route("/task/{tag_id}", delete(tags_handlers::detach_task))
}

/// Creates the task types API router
pub fn create_task_types_router() -> Router<DbState> {
    Router::new()
        .route("/", get(task_types_handlers::list_task_types))
        .route("/", post(task_types_handlers::create_task_type))
        .route("/", delete(task_types_handlers::delete_all_task_types))
        .route("/{type_id}", get(task_types_handlers::get_task_type))
        .route("/{type_id}", put(task_types_handlers::update_task_type))
        .route("/{type_id}", delete(task_types_handlers::delete_task_type))
}

/// Creates the full application router with every route nested under /api
pub fn create_router(db: DbState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_check))
        .nest("/api/tasks", create_tasks_router())
        .nest("/api/tags", create_tags_router())
        .nest("/api/types", create_task_types_router())
        .with_state(db)
}
