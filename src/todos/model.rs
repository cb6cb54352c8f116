//! Todo data model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single todo record.
///
/// Serialized with camelCase keys; the wire shape and the persisted JSON
/// document are identical.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    /// Unique ID. Assigned by the store, never reused while the store lives.
    pub id: u64,
    /// Short title. Stored trimmed, never empty.
    pub title: String,
    /// Free-form detail text. Stored trimmed, may be empty.
    pub description: String,
    /// Whether the item is done.
    pub completed: bool,
    /// When the todo was created.
    pub created_at: DateTime<Utc>,
    /// When the todo was last changed.
    pub updated_at: DateTime<Utc>,
}

impl TodoItem {
    /// Create a new todo. Both timestamps come from the same instant.
    pub fn new(id: u64, title: impl Into<String>, description: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: title.into(),
            description: description.into(),
            completed: false,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Fields a partial update may change. `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateFields {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}
