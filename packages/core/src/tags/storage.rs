// ABOUTME: Tag storage layer using SQLite
// ABOUTME: Handles CRUD, task attachment, and eager task loading for tags

use sqlx::{Row, SqlitePool};
use tracing::debug;

use super::types::{Tag, TagCreateInput, TagUpdateInput};
use crate::storage::StorageError;
use crate::task_types::TaskType;
use crate::tasks::Task;

pub struct TagStorage {
    pool: SqlitePool,
}

impl TagStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all tags with their task collections
    pub async fn list_tags(&self) -> Result<Vec<Tag>, StorageError> {
        debug!("Fetching all tags");

        let rows = sqlx::query("SELECT * FROM tags ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        let mut tags = Vec::new();
        for row in rows {
            let id: i64 = row.try_get("id")?;
            tags.push(Tag {
                id,
                name: row.try_get("name")?,
                tasks: self.tasks_for_tag(id).await?,
            });
        }

        Ok(tags)
    }

    /// List tags that have at least one task attached
    pub async fn list_tags_with_tasks(&self) -> Result<Vec<Tag>, StorageError> {
        debug!("Fetching tags with tasks");

        let rows = sqlx::query(
            r#"
            SELECT * FROM tags tg
            WHERE EXISTS (SELECT 1 FROM tasks t WHERE t.tag_id = tg.id)
            ORDER BY tg.id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        let mut tags = Vec::new();
        for row in rows {
            let id: i64 = row.try_get("id")?;
            tags.push(Tag {
                id,
                name: row.try_get("name")?,
                tasks: self.tasks_for_tag(id).await?,
            });
        }

        Ok(tags)
    }

    /// Get a single tag by ID with its task collection
    pub async fn get_tag(&self, tag_id: i64) -> Result<Tag, StorageError> {
        debug!("Fetching tag: {}", tag_id);

        let row = sqlx::query("SELECT * FROM tags WHERE id = ?")
            .bind(tag_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        match row {
            Some(r) => {
                let id: i64 = r.try_get("id")?;
                Ok(Tag {
                    id,
                    name: r.try_get("name")?,
                    tasks: self.tasks_for_tag(id).await?,
                })
            }
            None => Err(StorageError::NotFound("tag")),
        }
    }

    /// Create a new tag with an empty task collection
    pub async fn create_tag(&self, input: TagCreateInput) -> Result<Tag, StorageError> {
        debug!("Creating tag: {}", input.name);

        let result = sqlx::query("INSERT INTO tags (name) VALUES (?)")
            .bind(&input.name)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        self.get_tag(result.last_insert_rowid()).await
    }

    /// Rename a tag
    pub async fn update_tag(&self, tag_id: i64, input: TagUpdateInput) -> Result<Tag, StorageError> {
        debug!("Updating tag: {}", tag_id);

        let result = sqlx::query("UPDATE tags SET name = ? WHERE id = ?")
            .bind(&input.name)
            .bind(tag_id)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound("tag"));
        }

        self.get_tag(tag_id).await
    }

    /// Attach a task to a tag. A task belongs to at most one tag, so
    /// attaching moves it from any tag it was on. Attaching a task that
    /// is already on the tag changes nothing.
    pub async fn attach_task(&self, tag_id: i64, task_id: i64) -> Result<Tag, StorageError> {
        debug!("Attaching task {} to tag {}", task_id, tag_id);

        let mut tx = self.pool.begin().await.map_err(StorageError::Sqlx)?;

        let tag: Option<i64> = sqlx::query_scalar("SELECT id FROM tags WHERE id = ?")
            .bind(tag_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(StorageError::Sqlx)?;
        if tag.is_none() {
            return Err(StorageError::NotFound("tag"));
        }

        let task: Option<i64> = sqlx::query_scalar("SELECT id FROM tasks WHERE id = ?")
            .bind(task_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(StorageError::Sqlx)?;
        if task.is_none() {
            return Err(StorageError::NotFound("task"));
        }

        sqlx::query("UPDATE tasks SET tag_id = ? WHERE id = ?")
            .bind(tag_id)
            .bind(task_id)
            .execute(&mut *tx)
            .await
            .map_err(StorageError::Sqlx)?;

        tx.commit().await.map_err(StorageError::Sqlx)?;

        self.get_tag(tag_id).await
    }

    /// Detach a task from a tag. The task itself survives. Detaching a
    /// task that is not on the tag leaves everything unchanged.
    pub async fn detach_task(&self, tag_id: i64, task_id: i64) -> Result<Tag, StorageError> {
        debug!("Detaching task {} from tag {}", task_id, tag_id);

        let mut tx = self.pool.begin().await.map_err(StorageError::Sqlx)?;

        let tag: Option<i64> = sqlx::query_scalar("SELECT id FROM tags WHERE id = ?")
            .bind(tag_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(StorageError::Sqlx)?;
        if tag.is_none() {
            return Err(StorageError::NotFound("tag"));
        }

        let task: Option<i64> = sqlx::query_scalar("SELECT id FROM tasks WHERE id = ?")
            .bind(task_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(StorageError::Sqlx)?;
        if task.is_none() {
            return Err(StorageError::NotFound("task"));
        }

        sqlx::query("UPDATE tasks SET tag_id = NULL WHERE id = ? AND tag_id = ?")
            .bind(task_id)
            .bind(tag_id)
            .execute(&mut *tx)
            .await
            .map_err(StorageError::Sqlx)?;

        tx.commit().await.map_err(StorageError::Sqlx)?;

        self.get_tag(tag_id).await
    }

    /// Delete a tag. Tasks that pointed at it lose their tag reference
    /// in the same transaction; the tasks themselves are kept. Deleting
    /// an absent id is a no-op.
    pub async fn delete_tag(&self, tag_id: i64) -> Result<(), StorageError> {
        debug!("Deleting tag: {}", tag_id);

        let mut tx = self.pool.begin().await.map_err(StorageError::Sqlx)?;

        sqlx::query("UPDATE tasks SET tag_id = NULL WHERE tag_id = ?")
            .bind(tag_id)
            .execute(&mut *tx)
            .await
            .map_err(StorageError::Sqlx)?;

        sqlx::query("DELETE FROM tags WHERE id = ?")
            .bind(tag_id)
            .execute(&mut *tx)
            .await
            .map_err(StorageError::Sqlx)?;

        tx.commit().await.map_err(StorageError::Sqlx)?;

        Ok(())
    }

    /// Delete all tags, clearing every task's tag reference
    pub async fn delete_all_tags(&self) -> Result<(), StorageError> {
        debug!("Deleting all tags");

        let mut tx = self.pool.begin().await.map_err(StorageError::Sqlx)?;

        sqlx::query("UPDATE tasks SET tag_id = NULL WHERE tag_id IS NOT NULL")
            .execute(&mut *tx)
            .await
            .map_err(StorageError::Sqlx)?;

        sqlx::query("DELETE FROM tags")
            .execute(&mut *tx)
            .await
            .map_err(StorageError::Sqlx)?;

        tx.commit().await.map_err(StorageError::Sqlx)?;

        Ok(())
    }

    /// Fetch the tasks attached to a tag, with their types
    async fn tasks_for_tag(&self, tag_id: i64) -> Result<Vec<Task>, StorageError> {
        let rows = sqlx::query(
            r#"
            SELECT
                t.*,
                tt.id as task_type_id,
                tt.name as task_type_name
            FROM tasks t
            LEFT JOIN task_types tt ON tt.id = t.type_id
            WHERE t.tag_id = ?
            ORDER BY t.id
            "#,
        )
        .bind(tag_id)
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
