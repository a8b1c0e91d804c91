//! SQLite storage bootstrap for the user table.
//!
//! # Responsibility
//! - Open and configure SQLite connections for usercrud core.
//! - Ensure the `users` schema exists before any data access.
//!
//! # Invariants
//! - Schema creation is idempotent; reopening an initialized file is safe.
//! - Core code must not read/write user rows before bootstrap succeeds.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;
pub mod schema;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Storage backend error.
///
/// Returned by `open_db*` as the initialization failure, and wrapped by the
/// repository layer when a statement fails.
#[derive(Debug)]
pub enum DbError {
    /// The storage location could not be opened or created.
    Open(rusqlite::Error),
    /// The `users` schema could not be created.
    Schema(rusqlite::Error),
    Sqlite(rusqlite::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open(err) => write!(f, "failed to open database: {err}"),
            Self::Schema(err) => write!(f, "failed to create schema: {err}"),
            Self::Sqlite(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Open(err) | Self::Schema(err) | Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
