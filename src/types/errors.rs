use std::fmt;

// === StorageError ===

/// Errors related to the keyed storage layer.
#[derive(Debug)]
pub enum StorageError {
    /// The underlying store could not be read or written.
    DatabaseError(String),
    /// A value failed to serialize or deserialize.
    SerializationError(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::DatabaseError(msg) => write!(f, "Storage database error: {}", msg),
            StorageError::SerializationError(msg) => {
                write!(f, "Storage serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for StorageError {}

// === CollectionError ===

/// Errors related to list and site collection operations.
#[derive(Debug)]
pub enum CollectionError {
    /// List with the given ID was not found.
    ListNotFound(String),
    /// Site with the given ID was not found.
    SiteNotFound(String),
    /// The provided name was empty or whitespace-only.
    EmptyName,
    /// The provided URL is not an absolute http/https URL.
    InvalidUrl(String),
    /// No list is currently selected to add the site to.
    NoActiveList,
}

impl fmt::Display for CollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionError::ListNotFound(id) => write!(f, "List not found: {}", id),
            CollectionError::SiteNotFound(id) => write!(f, "Site not found: {}", id),
            CollectionError::EmptyName => write!(f, "Please enter a name"),
            CollectionError::InvalidUrl(url) => {
                write!(f, "Invalid URL (include http:// or https://): {}", url)
            }
            CollectionError::NoActiveList => write!(f, "No list selected"),
        }
    }
}

impl std::error::Error for CollectionError {}

// === AuthError ===

/// Errors related to the simulated login gate.
#[derive(Debug)]
pub enum AuthError {
    /// The provided email was empty or whitespace-only.
    EmptyEmail,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::EmptyEmail => write!(f, "Please enter an email address"),
        }
    }
}

impl std::error::Error for AuthError {}

// === RoiError ===

/// Errors related to the ROI calculator.
#[derive(Debug)]
pub enum RoiError {
    /// One of the inputs was not a finite number.
    InvalidInput(String),
    /// The initial investment was zero.
    ZeroInvestment,
}

impl fmt::Display for RoiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoiError::InvalidInput(field) => {
                write!(f, "Please enter a valid number for {}", field)
            }
            RoiError::ZeroInvestment => write!(f, "Initial investment cannot be zero"),
        }
    }
}

impl std::error::Error for RoiError {}
