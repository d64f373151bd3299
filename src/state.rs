use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::repository::{InMemoryStore, OrmStore, Store};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
}

impl AppState {
    pub fn new(store: impl Store + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn with_orm(orm: DatabaseConnection) -> Self {
        Self::new(OrmStore::new(orm))
    }

    pub fn in_memory(store: InMemoryStore) -> Self {
        Self::new(store)
    }
}
