use std::sync::Arc;

use crate::auth::ApiKey;
use crate::database::DocumentStore;

/// Dependencies shared by every handler, built once at startup
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub api_key: ApiKey,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>, api_key: ApiKey) -> Self {
        Self { store, api_key }
    }
}
