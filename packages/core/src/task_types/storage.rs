// ABOUTME: Task type storage layer using SQLite
// ABOUTME: Handles CRUD for task types and clears task references on delete

use sqlx::{Row, SqlitePool};
use tracing::debug;

use super::types::{TaskType, TaskTypeCreateInput, TaskTypeUpdateInput};
use crate::storage::StorageError;

pub struct TaskTypeStorage {
    pool: SqlitePool,
}

impl TaskTypeStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all task types ordered by id
    pub async fn list_task_types(&self) -> Result<Vec<TaskType>, StorageError> {
        debug!("Fetching all task types");

        let rows = sqlx::query("SELECT * FROM task_types ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        let types = rows
            .iter()
            .map(|row| self.row_to_task_type(row))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(types)
    }

    /// Get a single task type by ID
    pub async fn get_task_type(&self, type_id: i64) -> Result<TaskType, StorageError> {
        debug!("Fetching task type: {}", type_id);

        let row = sqlx::query("SELECT * FROM task_types WHERE id = ?")
            .bind(type_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        match row {
            Some(r) => self.row_to_task_type(&r),
            None => Err(StorageError::NotFound("task type")),
        }
    }

    /// Create a new task type
    pub async fn create_task_type(
        &self,
        input: TaskTypeCreateInput,
    ) -> Result<TaskType, StorageError> {
        debug!("Creating task type: {}", input.name);

        let result = sqlx::query("INSERT INTO task_types (name) VALUES (?)")
            .bind(&input.name)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        self.get_task_type(result.last_insert_rowid()).await
    }

    /// Rename a task type
    pub async fn update_task_type(
        &self,
        type_id: i64,
        input: TaskTypeUpdateInput,
    ) -> Result<TaskType, StorageError> {
        debug!("Updating task type: {}", type_id);

        let result = sqlx::query("UPDATE task_types SET name = ? WHERE id = ?")
            .bind(&input.name)
            .bind(type_id)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound("task type"));
        }

        self.get_task_type(type_id).await
    }

    /// Delete a task type. Tasks referencing it drop back to untyped in
    /// the same transaction. Deleting an absent id is a no-op.
    pub async fn delete_task_type(&self, type_id: i64) -> Result<(), StorageError> {
        debug!("Deleting task type: {}", type_id);

        let mut tx = self.pool.begin().await.map_err(StorageError::Sqlx)?;

        sqlx::query("UPDATE tasks SET type_id = NULL WHERE type_id = ?")
            .bind(type_id)
            .execute(&mut *tx)
            .await
            .map_err(StorageError::Sqlx)?;

        sqlx::query("DELETE FROM task_types WHERE id = ?")
            .bind(type_id)
            .execute(&mut *tx)
            .await
            .map_err(StorageError::Sqlx)?;

        tx.commit().await.map_err(StorageError::Sqlx)?;

        Ok(())
    }

    /// Delete all task types and clear every task's type reference
    pub async fn delete_all_task_types(&self) -> Result<(), StorageError> {
        debug!("Deleting all task types");

        let mut tx = self.pool.begin().await.map_err(StorageError::Sqlx)?;

        sqlx::query("UPDATE tasks SET type_id = NULL WHERE type_id IS NOT NULL")
            .execute(&mut *tx)
            .await
            .map_err(StorageError::Sqlx)?;

        sqlx::query("DELETE FROM task_types")
            .execute(&mut *tx)
            .await
            .map_err(StorageError::Sqlx)?;

        tx.commit().await.map_err(StorageError::Sqlx)?;

        Ok(())
    }

    /// Convert a database row to a TaskType
    fn row_to_task_type(&self, row: &sqlx::sqlite::SqliteRow) -> Result<TaskType, StorageError> {
        Ok(TaskType {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
        })
    }
}
