//! Todo record and request payloads.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Default page size for `GET /todos/`.
pub const DEFAULT_LIMIT: u32 = 100;

/// A persisted todo item. `id` is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

/// Body for create and full-replacement update.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct TodoInput {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

/// Pagination for the list endpoint.
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Number of records to skip.
    #[serde(default, alias = "offset")]
    #[param(minimum = 0)]
    pub skip: u32,
    /// Maximum number of records to return.
    #[serde(default = "default_limit")]
    #[param(minimum = 0)]
    pub limit: u32,
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

impl Default for ListParams {
    fn default() -> Self {
        ListParams {
            skip: 0,
            limit: default_limit(),
        }
    }
}
