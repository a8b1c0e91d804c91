//! User repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `users` table.
//! - Translate rows to `User` records and records to statement parameters.
//!
//! # Invariants
//! - Inserts ignore any caller-supplied id; storage assigns it.
//! - Logs carry ids and row counts only, never names or emails.

use crate::db::DbError;
use crate::model::user::{User, UserId};
use log::debug;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const USER_SELECT_SQL: &str = "SELECT id, name, email FROM users";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for user persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// No row matches the requested id.
    NotFound(UserId),
    /// An insert, update or delete statement failed at the backend.
    Write(DbError),
    /// A select query failed at the backend.
    Read(DbError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "user not found: {id}"),
            Self::Write(err) => write!(f, "user write failed: {err}"),
            Self::Read(err) => write!(f, "user read failed: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Write(err) | Self::Read(err) => Some(err),
        }
    }
}

/// Repository interface for user CRUD operations.
pub trait UserRepository {
    /// Loads the user with `id`, failing with `RepoError::NotFound` if absent.
    fn get_user(&self, id: UserId) -> RepoResult<User>;
    /// Loads every user in storage order. Empty table yields an empty vec.
    fn get_all_users(&self) -> RepoResult<Vec<User>>;
    /// Inserts `user` and returns a copy carrying the assigned id.
    fn save_user(&self, user: &User) -> RepoResult<User>;
    /// Overwrites name/email of the row matching `user.id`; no-op if none.
    fn update_user(&self, user: &User) -> RepoResult<()>;
    /// Deletes the row matching `id`; no-op if none.
    fn delete_user(&self, id: UserId) -> RepoResult<()>;
}

/// SQLite-backed user repository.
pub struct SqliteUserRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUserRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl UserRepository for SqliteUserRepository<'_> {
    fn get_user(&self, id: UserId) -> RepoResult<User> {
        let mut stmt = self
            .conn
            .prepare(&format!("{USER_SELECT_SQL} WHERE id = ?1;"))
            .map_err(read_error)?;

        let mut rows = stmt.query([id]).map_err(read_error)?;
        match rows.next().map_err(read_error)? {
            Some(row) => parse_user_row(row).map_err(read_error),
            None => {
                debug!("event=user_get module=repo status=not_found id={id}");
                Err(RepoError::NotFound(id))
            }
        }
    }

    fn get_all_users(&self) -> RepoResult<Vec<User>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{USER_SELECT_SQL};"))
            .map_err(read_error)?;
        let mut rows = stmt.query([]).map_err(read_error)?;
        let mut users = Vec::new();

        while let Some(row) = rows.next().map_err(read_error)? {
            users.push(parse_user_row(row).map_err(read_error)?);
        }

        debug!(
            "event=user_list module=repo status=ok count={}",
            users.len()
        );
        Ok(users)
    }

    fn save_user(&self, user: &User) -> RepoResult<User> {
        self.conn
            .execute(
                "INSERT INTO users (name, email) VALUES (?1, ?2);",
                params![user.name.as_str(), user.email.as_str()],
            )
            .map_err(write_error)?;

        let id = self.conn.last_insert_rowid();
        debug!("event=user_save module=repo status=ok id={id}");
        Ok(User::with_id(id, user.name.clone(), user.email.clone()))
    }

    fn update_user(&self, user: &User) -> RepoResult<()> {
        let changed = self
            .conn
            .execute(
                "UPDATE users SET name = ?1, email = ?2 WHERE id = ?3;",
                params![user.name.as_str(), user.email.as_str(), user.id],
            )
            .map_err(write_error)?;

        debug!(
            "event=user_update module=repo status=ok id={:?} changed={changed}",
            user.id
        );
        Ok(())
    }

    fn delete_user(&self, id: UserId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM users WHERE id = ?1;", [id])
            .map_err(write_error)?;

        debug!("event=user_delete module=repo status=ok id={id} changed={changed}");
        Ok(())
    }
}

// The columns are nullable but `User` fields are not: a NULL written by an
// outside tool is a read error rather than an empty string.
fn parse_user_row(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User::with_id(
        row.get("id")?,
        row.get::<_, String>("name")?,
        row.get::<_, String>("email")?,
    ))
}

fn read_error(err: rusqlite::Error) -> RepoError {
    RepoError::Read(DbError::Sqlite(err))
}

fn write_error(err: rusqlite::Error) -> RepoError {
    RepoError::Write(DbError::Sqlite(err))
}
