// ABOUTME: Task storage layer using SQLite
// ABOUTME: Handles CRUD, type assignment, and date range queries for tasks

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use sqlx::{Row, SqlitePool};
use tracing::debug;

use super::types::{Task, TaskCreateInput, TaskUpdateInput};
use crate::storage::StorageError;
use crate::task_types::TaskType;

pub struct TaskStorage {
    pool: SqlitePool,
}

impl TaskStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all tasks with their type, ordered by id
    pub async fn list_tasks(&self) -> Result<Vec<Task>, StorageError> {
        debug!("Fetching all tasks");

        let rows = sqlx::query(
            r#"
            SELECT
                t.*,
                tt.id as task_type_id,
                tt.name as task_type_name
            FROM tasks t
            LEFT JOIN task_types tt ON tt.id = t.type_id
            ORDER BY t.id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        let tasks = rows
            .iter()
            .map(|row| self.row_to_task(row))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(tasks)
    }

    /// Get a single task by ID
    pub async fn get_task(&self, task_id: i64) -> Result<Task, StorageError> {
        debug!("Fetching task: {}", task_id);

        let row = sqlx::query(
            r#"
            SELECT
                t.*,
                tt.id as task_type_id,
                tt.name as task_type_name
            FROM tasks t
            LEFT JOIN task_types tt ON tt.id = t.type_id
            WHERE t.id = ?
            "#,
        )
        .bind(task_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        match row {
            Some(r) => self.row_to_task(&r),
            None => Err(StorageError::NotFound("task")),
        }
    }

    /// Create a new task. The date must not lie in the future; type and
    /// tag start out unset regardless of the input payload.
    pub async fn create_task(&self, input: TaskCreateInput) -> Result<Task, StorageError> {
        if input.date > Utc::now() {
            return Err(StorageError::FutureDate(input.date));
        }

        debug!("Creating task: {}", input.name);

        let result = sqlx::query(
            r#"
            INSERT INTO tasks (name, description, date)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.date)
        .execute(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        self.get_task(result.last_insert_rowid()).await
    }

    /// Update a task's name, description, and date. Type and tag are
    /// untouched; they change through their own operations.
    pub async fn update_task(
        &self,
        task_id: i64,
        input: TaskUpdateInput,
    ) -> Result<Task, StorageError> {
        // The date rule applies before the row is even looked up.
        if input.date > Utc::now() {
            return Err(StorageError::FutureDate(input.date));
        }

        debug!("Updating task: {}", task_id);

        let result = sqlx::query(
            r#"
            UPDATE tasks
            SET name = ?, description = ?, date = ?
            WHERE id = ?
            "#,
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.date)
        .bind(task_id)
        .execute(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound("task"));
        }

        self.get_task(task_id).await
    }

    /// Assign a task type to a task. Both must exist; the checks and the
    /// update run in one transaction.
    pub async fn assign_type(&self, task_id: i64, type_id: i64) -> Result<Task, StorageError> {
        debug!("Assigning type {} to task {}", type_id, task_id);

        let mut tx = self.pool.begin().await.map_err(StorageError::Sqlx)?;

        let task: Option<i64> = sqlx::query_scalar("SELECT id FROM tasks WHERE id = ?")
            .bind(task_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(StorageError::Sqlx)?;
        if task.is_none() {
            return Err(StorageError::NotFound("task"));
        }

        let task_type: Option<i64> = sqlx::query_scalar("SELECT id FROM task_types WHERE id = ?")
            .bind(type_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(StorageError::Sqlx)?;
        if task_type.is_none() {
            return Err(StorageError::NotFound("task type"));
        }

        sqlx::query("UPDATE tasks SET type_id = ? WHERE id = ?")
            .bind(type_id)
            .bind(task_id)
            .execute(&mut *tx)
            .await
            .map_err(StorageError::Sqlx)?;

        tx.commit().await.map_err(StorageError::Sqlx)?;

        self.get_task(task_id).await
    }

    /// Delete a task by ID. Deleting an absent id is a no-op.
    pub async fn delete_task(&self, task_id: i64) -> Result<(), StorageError> {
        debug!("Deleting task: {}", task_id);

        sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(task_id)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        Ok(())
    }

    /// Delete all tasks
    pub async fn delete_all_tasks(&self) -> Result<(), StorageError> {
        debug!("Deleting all tasks");

        sqlx::query("DELETE FROM tasks")
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        Ok(())
    }

    /// List tasks falling on a calendar day, from 00:00:00 through
    /// 23:59:59 inclusive.
    pub async fn list_tasks_on_date(&self, day: NaiveDate) -> Result<Vec<Task>, StorageError> {
        let start = day.and_time(NaiveTime::MIN).and_utc();
        let end = start + Duration::days(1) - Duration::seconds(1);
        self.list_tasks_in_range(start, end).await
    }

    /// List tasks whose date falls within the closed interval
    /// [start, end], ordered by type id descending. Tasks without both a
    /// type and a tag are excluded.
    pub async fn list_tasks_in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Task>, StorageError> {
        debug!("Fetching tasks between {} and {}", start, end);

        let rows = sqlx::query(
            r#"
            SELECT
                t.*,
                tt.id as task_type_id,
                tt.name as task_type_name
            FROM tasks t
            INNER JOIN task_types tt ON tt.id = t.type_id
            INNER JOIN tags tg ON tg.id = t.tag_id
            WHERE t.date BETWEEN ? AND ?
            ORDER BY tt.id DESC
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        let tasks = rows
            .iter()
            .map(|row| self.row_to_task(row))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(tasks)
    }

    /// Convert a database row to a Task
    fn row_to_task(&self, row: &sqlx::sqlite::SqliteRow) -> Result<Task, StorageError> {
        let task_type = match row.try_get::<Option<i64>, _>("task_type_id")? {
            Some(id) => Some(TaskType {
                id,
                name: row.try_get("task_type_name")?,
            }),
            None => None,
        };

        Ok(Task {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            date: row.try_get("date")?,
            task_type,
            tag_id: row.try_get("tag_id")?,
        })
    }
}
