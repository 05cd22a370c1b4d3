// ABOUTME: Task type module for classifying tasks
// ABOUTME: Provides types and storage for task categories

pub mod storage;
pub mod types;

pub use storage::*;
pub use types::*;
