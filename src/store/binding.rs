//! Keyed store binding.
//!
//! [`StoredValue`] associates a typed state value with a storage key: it
//! hydrates from the store on construction and writes back on every change,
//! so callers mutate plain in-memory state and persistence happens
//! transparently.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::backend::StorageBackend;
use crate::codec;

/// A typed value bound to a storage key.
///
/// On construction the key is read and decoded; a missing key or a decode
/// failure substitutes the caller's default (decode failures are logged,
/// never propagated). Every mutation re-encodes the value and writes it back
/// under the same key, fire-and-forget. A binding built with
/// [`StoredValue::detached`] has no backend and behaves as plain in-memory
/// state.
pub struct StoredValue<T> {
    key: String,
    store: Option<Arc<dyn StorageBackend>>,
    value: T,
}

impl<T> StoredValue<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Creates a binding over `store`, hydrating from `key`.
    ///
    /// The hydrated (or defaulted) value is written back immediately so the
    /// stored form is normalized even on first load.
    pub fn new(store: Arc<dyn StorageBackend>, key: &str, default: T) -> Self {
        let value = match store.get(key) {
            Ok(Some(raw)) => match codec::decode(&raw) {
                Ok(value) => value,
                Err(e) => {
                    log::error!("Error reading '{}' from local store: {}", key, e);
                    default
                }
            },
            Ok(None) => default,
            Err(e) => {
                log::error!("Error reading '{}' from local store: {}", key, e);
                default
            }
        };

        let binding = Self {
            key: key.to_string(),
            store: Some(store),
            value,
        };
        binding.write_back();
        binding
    }

    /// Creates a binding with no backend: reads and writes are skipped and
    /// the value lives purely in memory.
    pub fn detached(key: &str, default: T) -> Self {
        Self {
            key: key.to_string(),
            store: None,
            value: default,
        }
    }

    /// Current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replaces the value and persists it.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.write_back();
    }

    /// Mutates the value in place and persists it.
    pub fn update<F: FnOnce(&mut T)>(&mut self, f: F) {
        f(&mut self.value);
        self.write_back();
    }

    /// The storage key this binding writes under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether a persistent backend is attached.
    pub fn is_persistent(&self) -> bool {
        self.store.is_some()
    }

    fn write_back(&self) {
        let Some(store) = &self.store else {
            return;
        };
        match codec::encode(&self.value) {
            Ok(raw) => {
                if let Err(e) = store.set(&self.key, &raw) {
                    log::warn!("Error writing '{}' to local store: {}", self.key, e);
                }
            }
            Err(e) => {
                log::warn!("Error encoding '{}' for local store: {}", self.key, e);
            }
        }
    }
}
