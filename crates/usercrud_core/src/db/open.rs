//! Connection bootstrap utilities for SQLite.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections.
//! - Configure the connection and create the schema before returning it.
//!
//! # Invariants
//! - Returned connections always have the `users` table.

use super::schema::ensure_schema;
use super::{DbError, DbResult};
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens (or creates) a SQLite database file and ensures the schema exists.
///
/// # Errors
/// - `DbError::Open` when the file cannot be opened.
/// - `DbError::Schema` when the `users` table cannot be created.
///
/// # Side effects
/// - Emits `db_open` logging events with duration and status.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode=file");

    let conn = Connection::open(path).map_err(DbError::Open);
    finish_open(conn, "file", started_at)
}

/// Opens a private in-memory SQLite database with the schema applied.
pub fn open_db_in_memory() -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode=memory");

    let conn = Connection::open_in_memory().map_err(DbError::Open);
    finish_open(conn, "memory", started_at)
}

fn finish_open(
    conn: DbResult<Connection>,
    mode: &str,
    started_at: Instant,
) -> DbResult<Connection> {
    let result = conn.and_then(|conn| {
        bootstrap_connection(&conn)?;
        Ok(conn)
    });

    match &result {
        Ok(_) => info!(
            "event=db_open module=db status=ok mode={} duration_ms={}",
            mode,
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=db_open module=db status=error mode={} duration_ms={} error_code={} error={}",
            mode,
            started_at.elapsed().as_millis(),
            error_code(err),
            err
        ),
    }

    result
}

fn bootstrap_connection(conn: &Connection) -> DbResult<()> {
    conn.busy_timeout(BUSY_TIMEOUT)?;
    ensure_schema(conn)
}

fn error_code(err: &DbError) -> &'static str {
    match err {
        DbError::Open(_) => "db_open_failed",
        DbError::Schema(_) => "db_schema_failed",
        DbError::Sqlite(_) => "db_bootstrap_failed",
    }
}
