//! User domain model.
//!
//! # Responsibility
//! - Define the record shape shared by repository and service layers.
//!
//! # Invariants
//! - `id` is `None` until storage assigns one on save.
//! - Once assigned, `id` never changes; only `name` and `email` mutate.

use serde::{Deserialize, Serialize};

/// Storage-assigned identifier, monotonically increasing per table.
pub type UserId = i64;

/// A user record.
///
/// Instances are detached copies of persisted rows; mutating one has no
/// effect on storage until it is passed back to a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<UserId>,
    /// Display name. Free text, not validated.
    pub name: String,
    /// Contact email. Free text, not validated and not unique.
    pub email: String,
}

impl User {
    /// Creates an unsaved user without an identifier.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Creates a user carrying an already-assigned identifier.
    pub fn with_id(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            email: email.into(),
        }
    }

    /// Returns whether storage has assigned an identifier to this record.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
