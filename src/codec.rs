//! JSON codec for persisted state.
//!
//! The storage layer only holds strings, so date-typed fields cross the
//! boundary as ISO-8601 text. The [`iso_millis`] adapter pins the written
//! form to millisecond precision (`YYYY-MM-DDTHH:MM:SS.sssZ`) and decoding
//! is schema-driven: only fields typed `DateTime<Utc>` are parsed back into
//! dates, so a plain string that happens to look like a timestamp is left
//! untouched.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::types::errors::StorageError;

/// Serializes a value to its persisted JSON form.
pub fn encode<T: Serialize>(value: &T) -> Result<String, StorageError> {
    serde_json::to_string(value).map_err(|e| StorageError::SerializationError(e.to_string()))
}

/// Deserializes a value from its persisted JSON form.
pub fn decode<T: DeserializeOwned>(raw: &str) -> Result<T, StorageError> {
    serde_json::from_str(raw).map_err(|e| StorageError::SerializationError(e.to_string()))
}

/// Serde adapter for `DateTime<Utc>` fields.
///
/// Writes `2024-01-01T00:00:00.000Z` (always three fractional digits);
/// accepts any RFC 3339 timestamp on read. Sub-millisecond precision is
/// truncated on write.
///
/// Usage: `#[serde(with = "codec::iso_millis")]`.
pub mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
