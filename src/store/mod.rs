//! SiteManager storage layer.
//!
//! Provides the string-keyed, string-valued store that all application state
//! persists through, plus the typed [`StoredValue`] binding on top of it.
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use sitemanager::store::{LocalStore, StorageBackend, StoredValue};
//!
//! // Open a persistent store
//! let store: Arc<dyn StorageBackend> =
//!     Arc::new(LocalStore::open("sitemanager.db").expect("failed to open store"));
//!
//! // Bind a typed value to a key; hydrates from the store, writes back on change
//! let mut counter = StoredValue::new(store, "demo-counter", 0u32);
//! let next = *counter.get() + 1;
//! counter.set(next);
//! ```

pub mod backend;
pub mod binding;
pub mod connection;
pub mod migrations;

pub use backend::{MemoryStore, StorageBackend};
pub use binding::StoredValue;
pub use connection::LocalStore;
