//! TodoService: todo operations with validation and not-found mapping.

mod todo;
mod validation;
pub use todo::TodoService;
pub use validation::RequestValidator;
