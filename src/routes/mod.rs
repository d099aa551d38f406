//! Router assembly: operational routes, todo routes, OpenAPI document.

mod common;
mod todo;

pub use common::common_routes;
pub use todo::todo_routes;
