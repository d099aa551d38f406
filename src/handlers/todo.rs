//! Todo handlers: create, list, update, complete, delete.

use crate::error::{AppError, ErrorBody};
use crate::extractors::{ApiJson, ApiPath, ApiQuery};
use crate::model::{ListParams, Todo, TodoInput};
use crate::service::TodoService;
use crate::state::AppState;
use axum::{extract::State, Json};

#[utoipa::path(
    post,
    path = "/todos/",
    request_body = TodoInput,
    responses(
        (status = 200, description = "Created todo", body = Todo),
        (status = 400, description = "Malformed JSON body", body = ErrorBody),
        (status = 422, description = "Empty title or description", body = ErrorBody)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<TodoInput>,
) -> Result<Json<Todo>, AppError> {
    let todo = TodoService::create(state.store.as_ref(), &body).await?;
    Ok(Json(todo))
}

#[utoipa::path(
    get,
    path = "/todos/",
    params(ListParams),
    responses(
        (status = 200, description = "Todos ordered by id", body = Vec<Todo>),
        (status = 400, description = "Negative or non-numeric skip/limit", body = ErrorBody)
    )
)]
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListParams>,
) -> Result<Json<Vec<Todo>>, AppError> {
    let todos = TodoService::list(state.store.as_ref(), params).await?;
    Ok(Json(todos))
}

#[utoipa::path(
    put,
    path = "/todos/{id}",
    params(("id" = i64, Path, description = "Todo id")),
    request_body = TodoInput,
    responses(
        (status = 200, description = "Updated todo", body = Todo),
        (status = 400, description = "Non-numeric id or malformed JSON body", body = ErrorBody),
        (status = 404, description = "Todo not found", body = ErrorBody),
        (status = 422, description = "Empty title or description", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(body): ApiJson<TodoInput>,
) -> Result<Json<Todo>, AppError> {
    let todo = TodoService::update(state.store.as_ref(), id, &body).await?;
    Ok(Json(todo))
}

#[utoipa::path(
    put,
    path = "/todos/{id}/complete",
    params(("id" = i64, Path, description = "Todo id")),
    responses(
        (status = 200, description = "Todo marked completed", body = Todo),
        (status = 404, description = "Todo not found", body = ErrorBody)
    )
)]
pub async fn complete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Todo>, AppError> {
    let todo = TodoService::complete(state.store.as_ref(), id).await?;
    Ok(Json(todo))
}

#[utoipa::path(
    delete,
    path = "/todos/{id}",
    params(("id" = i64, Path, description = "Todo id")),
    responses(
        (status = 200, description = "Deleted todo as it was before removal", body = Todo),
        (status = 404, description = "Todo not found", body = ErrorBody)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Todo>, AppError> {
    let todo = TodoService::delete(state.store.as_ref(), id).await?;
    Ok(Json(todo))
}
