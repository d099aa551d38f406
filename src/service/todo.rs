//! TodoService: the five todo operations over a `TodoStore`.

use crate::error::AppError;
use crate::model::{ListParams, Todo, TodoInput};
use crate::service::RequestValidator;
use crate::store::TodoStore;

pub struct TodoService;

impl TodoService {
    /// Insert a new todo; the store assigns the id.
    pub async fn create(store: &dyn TodoStore, input: &TodoInput) -> Result<Todo, AppError> {
        RequestValidator::validate(input)?;
        let todo = store
            .insert(&input.title, &input.description, input.completed)
            .await?;
        tracing::info!(id = todo.id, "todo created");
        Ok(todo)
    }

    /// Page through todos in id order.
    pub async fn list(store: &dyn TodoStore, params: ListParams) -> Result<Vec<Todo>, AppError> {
        store.list(i64::from(params.skip), i64::from(params.limit)).await
    }

    pub async fn get(store: &dyn TodoStore, id: i64) -> Result<Todo, AppError> {
        store.get(id).await?.ok_or(AppError::NotFound(id))
    }

    /// Full replacement of title, description and completed. Never creates a row.
    pub async fn update(store: &dyn TodoStore, id: i64, input: &TodoInput) -> Result<Todo, AppError> {
        RequestValidator::validate(input)?;
        let todo = store
            .update(id, &input.title, &input.description, input.completed)
            .await?
            .ok_or(AppError::NotFound(id))?;
        tracing::info!(id, "todo updated");
        Ok(todo)
    }

    /// Sets completed to true; calling it again is a no-op that still returns the row.
    pub async fn complete(store: &dyn TodoStore, id: i64) -> Result<Todo, AppError> {
        let todo = store
            .set_completed(id, true)
            .await?
            .ok_or(AppError::NotFound(id))?;
        tracing::info!(id, "todo completed");
        Ok(todo)
    }

    /// Remove the todo and return the values it had.
    pub async fn delete(store: &dyn TodoStore, id: i64) -> Result<Todo, AppError> {
        let todo = store.delete(id).await?.ok_or(AppError::NotFound(id))?;
        tracing::info!(id, "todo deleted");
        Ok(todo)
    }
}
