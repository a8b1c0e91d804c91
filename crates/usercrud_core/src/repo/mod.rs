//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the user data access contract (`UserRepository`).
//! - Isolate SQLite query details from service orchestration.
//! - Provide an in-memory implementation for storage-free callers.
//!
//! # Invariants
//! - Only `get_user` reports `NotFound`; update/delete on a missing id are
//!   silent no-ops.
//! - Every operation issues exactly one statement or query.
//! - `SqliteUserRepository` borrows a `!Sync` connection: it serves one
//!   thread at a time and cannot be shared across threads.

pub mod memory_repo;
pub mod user_repo;
