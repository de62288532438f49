//! Auth Manager for SiteManager.
//!
//! The simulated client-only login gate as an explicitly constructed session
//! object: construction hydrates the persisted flag and email, `login` sets
//! them, `logout` clears them. There is no credential checking — the gate
//! only records who asked to be let in.

use std::sync::Arc;

use crate::store::{StorageBackend, StoredValue};
use crate::types::auth::AuthState;
use crate::types::errors::AuthError;

/// Storage key for the logged-in flag.
pub const LOGGED_IN_KEY: &str = "sitemanager-isLoggedIn";
/// Storage key for the user email.
pub const USER_EMAIL_KEY: &str = "sitemanager-userEmail";

/// Trait defining the login gate interface.
pub trait AuthManagerTrait {
    fn login(&mut self, email: &str) -> Result<(), AuthError>;
    fn logout(&mut self);
    fn is_logged_in(&self) -> bool;
    fn user_email(&self) -> Option<&str>;
    fn state(&self) -> AuthState;
}

/// Session object backing the login gate.
pub struct AuthManager {
    logged_in: StoredValue<bool>,
    email: StoredValue<Option<String>>,
}

impl AuthManager {
    /// Creates the session, hydrating the persisted login state.
    pub fn new(store: Arc<dyn StorageBackend>) -> Self {
        Self {
            logged_in: StoredValue::new(store.clone(), LOGGED_IN_KEY, false),
            email: StoredValue::new(store, USER_EMAIL_KEY, None),
        }
    }

    /// Creates a session with no persistent store.
    pub fn detached() -> Self {
        Self {
            logged_in: StoredValue::detached(LOGGED_IN_KEY, false),
            email: StoredValue::detached(USER_EMAIL_KEY, None),
        }
    }
}

impl AuthManagerTrait for AuthManager {
    /// Marks the session as logged in and records the email.
    fn login(&mut self, email: &str) -> Result<(), AuthError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(AuthError::EmptyEmail);
        }
        self.logged_in.set(true);
        self.email.set(Some(email.to_string()));
        Ok(())
    }

    /// Clears the session, in memory and in the store.
    fn logout(&mut self) {
        self.logged_in.set(false);
        self.email.set(None);
    }

    fn is_logged_in(&self) -> bool {
        *self.logged_in.get()
    }

    fn user_email(&self) -> Option<&str> {
        self.email.get().as_deref()
    }

    fn state(&self) -> AuthState {
        AuthState {
            logged_in: *self.logged_in.get(),
            email: self.email.get().clone(),
        }
    }
}
