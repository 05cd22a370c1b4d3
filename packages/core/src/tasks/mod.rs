// ABOUTME: Task management module
// ABOUTME: Provides types and storage for dated work items

pub mod storage;
pub mod types;

pub use storage::*;
pub use types::*;
