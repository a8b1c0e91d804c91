//! `users` table definition.

use super::{DbError, DbResult};
use rusqlite::Connection;

/// Name of the single table owned by the storage backend.
pub const USERS_TABLE: &str = "users";

const CREATE_USERS_SQL: &str = "CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    email TEXT
);";

/// Creates the `users` table when it does not exist yet.
pub fn ensure_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(CREATE_USERS_SQL)
        .map_err(DbError::Schema)
}

/// Returns whether the `users` table is present on `conn`.
pub fn users_table_exists(conn: &Connection) -> DbResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [USERS_TABLE],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
