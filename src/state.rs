//! Shared application state for all routes.

use crate::store::TodoStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TodoStore>,
}

impl AppState {
    pub fn new<S: TodoStore + 'static>(store: S) -> Self {
        AppState {
            store: Arc::new(store),
        }
    }
}
