// ABOUTME: Core storage and domain types for Taskboard
// ABOUTME: Foundational package shared by the API layer and server binary

pub mod constants;
pub mod db;
pub mod storage;
pub mod tags;
pub mod task_types;
pub mod tasks;

// Re-export main types
pub use db::DbState;
pub use storage::{StorageError, StorageResult};
pub use tags::{Tag, TagCreateInput, TagStorage, TagUpdateInput};
pub use task_types::{TaskType, TaskTypeCreateInput, TaskTypeStorage, TaskTypeUpdateInput};
pub use tasks::{Task, TaskCreateInput, TaskStorage, TaskUpdateInput};

// Re-export constants
pub use constants::{database_file, taskboard_dir};
