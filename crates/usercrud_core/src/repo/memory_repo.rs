//! In-memory user repository.
//!
//! Mirrors the SQLite contract (monotonic ids starting at 1, silent
//! update/delete on missing ids) without touching storage. Intended for
//! service-level tests and ephemeral runs.

use crate::model::user::{User, UserId};
use crate::repo::user_repo::{RepoError, RepoResult, UserRepository};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct Store {
    rows: BTreeMap<UserId, User>,
    last_id: UserId,
}

/// `UserRepository` backed by a mutex-guarded ordered map.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    store: Mutex<Store>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users.
    pub fn len(&self) -> usize {
        self.lock().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, Store> {
        // A panicked writer cannot leave a half-applied row behind.
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl UserRepository for InMemoryUserRepository {
    fn get_user(&self, id: UserId) -> RepoResult<User> {
        self.lock()
            .rows
            .get(&id)
            .cloned()
            .ok_or(RepoError::NotFound(id))
    }

    fn get_all_users(&self) -> RepoResult<Vec<User>> {
        Ok(self.lock().rows.values().cloned().collect())
    }

    fn save_user(&self, user: &User) -> RepoResult<User> {
        let mut store = self.lock();
        store.last_id += 1;
        let id = store.last_id;
        let saved = User::with_id(id, user.name.clone(), user.email.clone());
        store.rows.insert(id, saved.clone());
        Ok(saved)
    }

    fn update_user(&self, user: &User) -> RepoResult<()> {
        let mut store = self.lock();
        if let Some(existing) = user.id.and_then(|id| store.rows.get_mut(&id)) {
            existing.name = user.name.clone();
            existing.email = user.email.clone();
        }
        Ok(())
    }

    fn delete_user(&self, id: UserId) -> RepoResult<()> {
        self.lock().rows.remove(&id);
        Ok(())
    }
}
