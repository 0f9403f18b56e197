//! Record identifiers for places, trips and checklist items
//!
//! IDs are lowercase ULIDs: time-ordered, 26 characters, safe to mint on any
//! device without coordination. IDs read back from disk are accepted as long
//! as they are non-empty lowercase alphanumerics (hyphens allowed), so older
//! blobs with UUID-style ids still load. Input is trimmed and lowercased
//! before validation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MapdError, Result};

/// Stable identifier of a stored record
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordId(String);

impl RecordId {
    /// Length of a freshly generated id
    pub const GENERATED_LEN: usize = 26;

    /// Create a RecordId from a raw string (with validation)
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        Self::validate(&id)?;
        Ok(RecordId(id))
    }

    fn validate(id: &str) -> Result<()> {
        let valid = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase() || c == '-');
        if valid {
            Ok(())
        } else {
            Err(MapdError::InvalidRecordId { id: id.to_string() })
        }
    }

    /// Generate a new ULID-based ID
    pub fn generate() -> Self {
        RecordId(ulid::Ulid::new().to_string().to_lowercase())
    }

    /// Get the ID string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::generate()
    }
}

impl FromStr for RecordId {
    type Err = MapdError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s.trim().to_lowercase())
    }
}

impl TryFrom<String> for RecordId {
    type Error = MapdError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> String {
        id.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
