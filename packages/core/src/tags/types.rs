// ABOUTME: Tag type definitions
// ABOUTME: Structures for tags that group tasks into named collections

use serde::{Deserialize, Serialize};

use crate::tasks::Task;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    pub tasks: Vec<Task>,
}

impl Tag {
    /// Orders tasks by their type id, highest first. Untyped tasks sort
    /// after typed ones; ties keep their existing order.
    pub fn sort_tasks_by_type_desc(&mut self) {
        self.tasks.sort_by(|a, b| match (a.type_id(), b.type_id()) {
            (Some(x), Some(y)) => y.cmp(&x),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagCreateInput {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagUpdateInput {
    pub name: String,
}
