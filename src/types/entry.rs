use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::codec::iso_millis;

/// A named collection of websites.
///
/// Field names are camelCase on the wire so persisted blobs stay compatible
/// with earlier versions of the stored data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEntry {
    pub id: String,
    pub name: String,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
}

/// A single website entry belonging to a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteEntry {
    pub id: String,
    pub name: String,
    pub url: String,
    pub category: String,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
    /// Id of the owning `ListEntry`.
    pub list_id: String,
}
