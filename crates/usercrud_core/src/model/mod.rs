//! Domain model for user records.
//!
//! # Invariants
//! - A user is identified solely by its storage-assigned `UserId`.
//! - Deletion is a hard delete; there is no tombstone state.

pub mod user;
