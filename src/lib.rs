//! Todo API: CRUD REST backend for todo items stored in PostgreSQL.

pub mod app;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod openapi;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use app::build_router;
pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use model::{ListParams, Todo, TodoInput};
pub use service::TodoService;
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_todo_table, PgTodoStore, TodoStore};
