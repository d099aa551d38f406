//! OpenAPI document for the todo routes, served at `/openapi.json`.

use crate::error::{ErrorBody, ErrorDetail};
use crate::handlers::todo;
use crate::model::{Todo, TodoInput};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(todo::create, todo::list, todo::update, todo::complete, todo::delete),
    components(schemas(Todo, TodoInput, ErrorBody, ErrorDetail)),
    tags((name = "todos", description = "Todo CRUD"))
)]
pub struct ApiDoc;
