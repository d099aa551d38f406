//! In-process `TodoStore` for router tests.

use super::TodoStore;
use crate::error::AppError;
use crate::model::Todo;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct MemoryTodoStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: i64,
    rows: BTreeMap<i64, Todo>,
}

#[async_trait]
impl TodoStore for MemoryTodoStore {
    async fn insert(&self, title: &str, description: &str, completed: bool) -> Result<Todo, AppError> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let todo = Todo {
            id: inner.next_id,
            title: title.to_string(),
            description: description.to_string(),
            completed,
        };
        inner.rows.insert(todo.id, todo.clone());
        Ok(todo)
    }

    async fn get(&self, id: i64) -> Result<Option<Todo>, AppError> {
        Ok(self.inner.lock().unwrap().rows.get(&id).cloned())
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Todo>, AppError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .rows
            .values()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        id: i64,
        title: &str,
        description: &str,
        completed: bool,
    ) -> Result<Option<Todo>, AppError> {
        let mut inner = self.inner.lock().unwrap();
        Ok(inner.rows.get_mut(&id).map(|todo| {
            todo.title = title.to_string();
            todo.description = description.to_string();
            todo.completed = completed;
            todo.clone()
        }))
    }

    async fn set_completed(&self, id: i64, completed: bool) -> Result<Option<Todo>, AppError> {
        let mut inner = self.inner.lock().unwrap();
        Ok(inner.rows.get_mut(&id).map(|todo| {
            todo.completed = completed;
            todo.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<Option<Todo>, AppError> {
        Ok(self.inner.lock().unwrap().rows.remove(&id))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
