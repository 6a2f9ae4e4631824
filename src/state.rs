use crate::store::ProfileStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: ProfileStore,
}

impl AppState {
    pub fn new(store: ProfileStore) -> Self {
        Self { store }
    }
}
