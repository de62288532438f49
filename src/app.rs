//! App Core for SiteManager.
//!
//! Central struct holding the shared store handle and both managers. The UI
//! layer receives this object and reaches state through its typed fields
//! instead of threading individual values and setters around.

use std::sync::Arc;

use crate::managers::auth_manager::AuthManager;
use crate::managers::collection_manager::CollectionManager;
use crate::store::{LocalStore, StorageBackend};
use crate::types::errors::StorageError;

/// Central application struct wiring the store and managers together.
pub struct App {
    pub store: Option<Arc<dyn StorageBackend>>,
    pub collections: CollectionManager,
    pub auth: AuthManager,
}

impl App {
    /// Creates an App over a persistent store at the given path.
    ///
    /// All state slices hydrate from the store during construction.
    pub fn new(store_path: &str) -> Result<Self, StorageError> {
        let store = LocalStore::open(store_path)
            .map_err(|e| StorageError::DatabaseError(e.to_string()))?;
        Ok(Self::with_store(Arc::new(store)))
    }

    /// Creates an App over an in-memory SQLite store (tests and demos).
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let store = LocalStore::open_in_memory()
            .map_err(|e| StorageError::DatabaseError(e.to_string()))?;
        Ok(Self::with_store(Arc::new(store)))
    }

    /// Creates an App over an already-opened backend.
    pub fn with_store(store: Arc<dyn StorageBackend>) -> Self {
        Self {
            collections: CollectionManager::new(store.clone()),
            auth: AuthManager::new(store.clone()),
            store: Some(store),
        }
    }

    /// Creates an App with no persistent store: every state slice degrades
    /// to pure in-memory behavior.
    pub fn detached() -> Self {
        Self {
            store: None,
            collections: CollectionManager::detached(),
            auth: AuthManager::detached(),
        }
    }
}
