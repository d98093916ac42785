use std::sync::Arc;

use crate::domain::repositories::UrlStore;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UrlStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn UrlStore>) -> Self {
        Self { store }
    }
}
