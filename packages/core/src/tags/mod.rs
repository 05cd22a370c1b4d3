// ABOUTME: Tag management module for organizing tasks
// ABOUTME: Provides types and storage for task tags

pub mod storage;
pub mod types;

pub use storage::*;
pub use types::*;
