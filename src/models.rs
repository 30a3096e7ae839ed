//! Listing payload types.

use chrono::NaiveDateTime;
use serde::Deserialize;

/// One row of a container listing.
///
/// `last_modified` carries no zone marker on the wire; the service reports
/// UTC wall-clock time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ObjectEntry {
    pub name: String,
    pub bytes: u64,
    pub hash: String,
    pub content_type: String,
    pub last_modified: NaiveDateTime,
}

/// Server-side filters for a container listing.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Only keys starting with this prefix.
    pub prefix: Option<String>,
    /// Keys strictly after this one; pass the last name of a page to fetch
    /// the next.
    pub marker: Option<String>,
    /// Cap on returned entries.
    pub limit: Option<u32>,
}
