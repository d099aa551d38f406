//! Todo CRUD routes. `/todos` and `/todos/` resolve to the same handlers.

use crate::handlers::todo::{complete, create, delete as delete_handler, list, update};
use crate::state::AppState;
use axum::{routing::get, routing::put, Router};

pub fn todo_routes(state: AppState) -> Router {
    Router::new()
        .route("/todos/", get(list).post(create))
        .route("/todos", get(list).post(create))
        .route("/todos/:id", put(update).delete(delete_handler))
        .route("/todos/:id/complete", put(complete))
        .with_state(state)
}
