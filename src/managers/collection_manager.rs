//! Collection Manager for SiteManager.
//!
//! CRUD operations for website lists and the site entries inside them,
//! persisted write-through via keyed [`StoredValue`] bindings.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::store::{StorageBackend, StoredValue};
use crate::types::entry::{ListEntry, SiteEntry};
use crate::types::errors::CollectionError;

/// Storage key for the list collection.
pub const LISTS_KEY: &str = "sitemanager-lists";
/// Storage key for the site collection.
pub const SITES_KEY: &str = "sitemanager-sites";
/// Storage key for the active list selection.
pub const ACTIVE_LIST_KEY: &str = "sitemanager-activeListId";

/// Category assigned to sites added without one.
pub const DEFAULT_CATEGORY: &str = "General";

/// Trait defining list and site collection operations.
pub trait CollectionManagerTrait {
    fn add_list(&mut self, name: &str) -> Result<String, CollectionError>;
    fn remove_list(&mut self, id: &str) -> Result<(), CollectionError>;
    fn add_site(&mut self, name: &str, url: &str, category: &str) -> Result<String, CollectionError>;
    fn remove_site(&mut self, id: &str) -> Result<(), CollectionError>;
    fn set_active_list(&mut self, id: &str) -> Result<(), CollectionError>;
    fn lists(&self) -> &[ListEntry];
    fn sites(&self) -> &[SiteEntry];
    fn sites_in_list(&self, list_id: &str) -> Vec<&SiteEntry>;
    fn active_list_id(&self) -> Option<&str>;
    fn active_list(&self) -> Option<&ListEntry>;
}

/// Collection manager holding lists, sites, and the active list selection,
/// each bound to its own storage key.
pub struct CollectionManager {
    lists: StoredValue<Vec<ListEntry>>,
    sites: StoredValue<Vec<SiteEntry>>,
    active_list_id: StoredValue<Option<String>>,
}

impl CollectionManager {
    /// Creates a manager over the given store, hydrating all three slices.
    pub fn new(store: Arc<dyn StorageBackend>) -> Self {
        Self {
            lists: StoredValue::new(store.clone(), LISTS_KEY, Vec::new()),
            sites: StoredValue::new(store.clone(), SITES_KEY, Vec::new()),
            active_list_id: StoredValue::new(store, ACTIVE_LIST_KEY, None),
        }
    }

    /// Creates a manager with no persistent store (pure in-memory behavior).
    pub fn detached() -> Self {
        Self {
            lists: StoredValue::detached(LISTS_KEY, Vec::new()),
            sites: StoredValue::detached(SITES_KEY, Vec::new()),
            active_list_id: StoredValue::detached(ACTIVE_LIST_KEY, None),
        }
    }

    /// Current time truncated to millisecond precision.
    ///
    /// Storage keeps milliseconds, so truncating up front keeps in-memory
    /// state identical to its persisted form.
    fn now() -> DateTime<Utc> {
        let now = Utc::now();
        Utc.timestamp_millis_opt(now.timestamp_millis())
            .single()
            .unwrap_or(now)
    }

    /// Accepts only absolute http/https URLs with a non-empty host part.
    fn is_valid_url(url: &str) -> bool {
        let rest = if let Some(r) = url.strip_prefix("https://") {
            r
        } else if let Some(r) = url.strip_prefix("http://") {
            r
        } else {
            return false;
        };
        let host = rest.split('/').next().unwrap_or("");
        !host.is_empty() && !host.chars().any(|c| c.is_whitespace())
    }

    fn find_list_index(&self, id: &str) -> Option<usize> {
        self.lists.get().iter().position(|l| l.id == id)
    }

    fn find_site_index(&self, id: &str) -> Option<usize> {
        self.sites.get().iter().position(|s| s.id == id)
    }
}

impl CollectionManagerTrait for CollectionManager {
    /// Adds a new list. Returns the generated list ID.
    ///
    /// The first list created becomes the active list if none is selected.
    fn add_list(&mut self, name: &str) -> Result<String, CollectionError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CollectionError::EmptyName);
        }

        let id = Uuid::new_v4().to_string();
        let entry = ListEntry {
            id: id.clone(),
            name: name.to_string(),
            created_at: Self::now(),
        };
        self.lists.update(|lists| lists.push(entry));

        if self.active_list_id.get().is_none() {
            self.active_list_id.set(Some(id.clone()));
        }

        Ok(id)
    }

    /// Removes a list by ID, cascade-deleting its sites.
    ///
    /// If the removed list was active, the selection moves to the first
    /// remaining list, or to none when no list remains.
    fn remove_list(&mut self, id: &str) -> Result<(), CollectionError> {
        let idx = self
            .find_list_index(id)
            .ok_or_else(|| CollectionError::ListNotFound(id.to_string()))?;

        self.lists.update(|lists| {
            lists.remove(idx);
        });
        self.sites.update(|sites| sites.retain(|s| s.list_id != id));

        if self.active_list_id.get().as_deref() == Some(id) {
            let next = self.lists.get().first().map(|l| l.id.clone());
            self.active_list_id.set(next);
        }

        Ok(())
    }

    /// Adds a site to the active list. Returns the generated site ID.
    fn add_site(
        &mut self,
        name: &str,
        url: &str,
        category: &str,
    ) -> Result<String, CollectionError> {
        let list_id = self
            .active_list_id
            .get()
            .clone()
            .ok_or(CollectionError::NoActiveList)?;

        let name = name.trim();
        if name.is_empty() {
            return Err(CollectionError::EmptyName);
        }

        let url = url.trim();
        if !Self::is_valid_url(url) {
            return Err(CollectionError::InvalidUrl(url.to_string()));
        }

        let category = category.trim();
        let category = if category.is_empty() {
            DEFAULT_CATEGORY.to_string()
        } else {
            category.to_string()
        };

        let id = Uuid::new_v4().to_string();
        let entry = SiteEntry {
            id: id.clone(),
            name: name.to_string(),
            url: url.to_string(),
            category,
            created_at: Self::now(),
            list_id,
        };
        self.sites.update(|sites| sites.push(entry));

        Ok(id)
    }

    /// Removes a site by ID.
    fn remove_site(&mut self, id: &str) -> Result<(), CollectionError> {
        let idx = self
            .find_site_index(id)
            .ok_or_else(|| CollectionError::SiteNotFound(id.to_string()))?;
        self.sites.update(|sites| {
            sites.remove(idx);
        });
        Ok(())
    }

    /// Selects an existing list as the active one.
    fn set_active_list(&mut self, id: &str) -> Result<(), CollectionError> {
        if self.find_list_index(id).is_none() {
            return Err(CollectionError::ListNotFound(id.to_string()));
        }
        self.active_list_id.set(Some(id.to_string()));
        Ok(())
    }

    fn lists(&self) -> &[ListEntry] {
        self.lists.get()
    }

    fn sites(&self) -> &[SiteEntry] {
        self.sites.get()
    }

    fn sites_in_list(&self, list_id: &str) -> Vec<&SiteEntry> {
        self.sites
            .get()
            .iter()
            .filter(|s| s.list_id == list_id)
            .collect()
    }

    fn active_list_id(&self) -> Option<&str> {
        self.active_list_id.get().as_deref()
    }

    fn active_list(&self) -> Option<&ListEntry> {
        let id = self.active_list_id.get().as_deref()?;
        self.lists.get().iter().find(|l| l.id == id)
    }
}
