//! PostgreSQL-backed `TodoStore`.
//! Each call acquires one pooled connection; the guard hands it back to the pool on drop.

use super::{TodoStore, TODO_TABLE};
use crate::error::AppError;
use crate::model::Todo;
use async_trait::async_trait;
use sqlx::PgPool;

const COLUMNS: &str = "id, title, description, completed";

#[derive(Clone)]
pub struct PgTodoStore {
    pool: PgPool,
}

impl PgTodoStore {
    pub fn new(pool: PgPool) -> Self {
        PgTodoStore { pool }
    }
}

#[async_trait]
impl TodoStore for PgTodoStore {
    async fn insert(&self, title: &str, description: &str, completed: bool) -> Result<Todo, AppError> {
        let sql = format!(
            "INSERT INTO {} (title, description, completed) VALUES ($1, $2, $3) RETURNING {}",
            TODO_TABLE, COLUMNS
        );
        tracing::debug!(sql = %sql, title, completed, "query");
        let mut conn = self.pool.acquire().await?;
        let row = sqlx::query_as::<_, Todo>(&sql)
            .bind(title)
            .bind(description)
            .bind(completed)
            .fetch_one(&mut *conn)
            .await?;
        Ok(row)
    }

    async fn get(&self, id: i64) -> Result<Option<Todo>, AppError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", COLUMNS, TODO_TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let mut conn = self.pool.acquire().await?;
        let row = sqlx::query_as::<_, Todo>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row)
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Todo>, AppError> {
        let sql = format!(
            "SELECT {} FROM {} ORDER BY id ASC OFFSET $1 LIMIT $2",
            COLUMNS, TODO_TABLE
        );
        tracing::debug!(sql = %sql, offset, limit, "query");
        let mut conn = self.pool.acquire().await?;
        let rows = sqlx::query_as::<_, Todo>(&sql)
            .bind(offset)
            .bind(limit)
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows)
    }

    async fn update(
        &self,
        id: i64,
        title: &str,
        description: &str,
        completed: bool,
    ) -> Result<Option<Todo>, AppError> {
        let sql = format!(
            "UPDATE {} SET title = $2, description = $3, completed = $4 WHERE id = $1 RETURNING {}",
            TODO_TABLE, COLUMNS
        );
        tracing::debug!(sql = %sql, id, title, completed, "query");
        let mut conn = self.pool.acquire().await?;
        let row = sqlx::query_as::<_, Todo>(&sql)
            .bind(id)
            .bind(title)
            .bind(description)
            .bind(completed)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row)
    }

    async fn set_completed(&self, id: i64, completed: bool) -> Result<Option<Todo>, AppError> {
        let sql = format!(
            "UPDATE {} SET completed = $2 WHERE id = $1 RETURNING {}",
            TODO_TABLE, COLUMNS
        );
        tracing::debug!(sql = %sql, id, completed, "query");
        let mut conn = self.pool.acquire().await?;
        let row = sqlx::query_as::<_, Todo>(&sql)
            .bind(id)
            .bind(completed)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row)
    }

    async fn delete(&self, id: i64) -> Result<Option<Todo>, AppError> {
        let sql = format!("DELETE FROM {} WHERE id = $1 RETURNING {}", TODO_TABLE, COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let mut conn = self.pool.acquire().await?;
        let row = sqlx::query_as::<_, Todo>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
