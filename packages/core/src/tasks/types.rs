// ABOUTME: Task type definitions
// ABOUTME: Structures for dated work items and their input payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::task_types::TaskType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub task_type: Option<TaskType>,
    // Tag membership stays internal; clients see tasks nested in their tag.
    #[serde(skip)]
    pub tag_id: Option<i64>,
}

impl Task {
    pub fn type_id(&self) -> Option<i64> {
        self.task_type.as_ref().map(|t| t.id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskCreateInput {
    pub name: String,
    pub description: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskUpdateInput {
    pub name: String,
    pub description: String,
    pub date: DateTime<Utc>,
}
