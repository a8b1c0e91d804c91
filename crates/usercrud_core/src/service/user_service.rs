//! User use-case service.
//!
//! # Responsibility
//! - Provide CRUD entry points for core callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Adds no business rules; repository errors are returned unchanged.
//! - Service layer remains storage-agnostic and holds no mutable state.

use crate::model::user::{User, UserId};
use crate::repo::user_repo::{RepoResult, UserRepository};

/// Use-case service wrapper for user CRUD operations.
pub struct UserService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Borrows the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Gets one user by ID. Fails with `RepoError::NotFound` if absent.
    pub fn get_user(&self, id: UserId) -> RepoResult<User> {
        self.repo.get_user(id)
    }

    /// Lists all users.
    pub fn get_all_users(&self) -> RepoResult<Vec<User>> {
        self.repo.get_all_users()
    }

    /// Creates a user from name and email.
    ///
    /// # Contract
    /// - Input is not validated; any text is accepted.
    /// - Returns the stored record with its assigned ID.
    pub fn create_user(
        &self,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> RepoResult<User> {
        self.repo.save_user(&User::new(name, email))
    }

    /// Replaces name and email of an existing user.
    ///
    /// # Contract
    /// - Reads the user first, so a missing ID fails with
    ///   `RepoError::NotFound` (unlike raw `UserRepository::update_user`).
    /// - Read and write are separate statements; a concurrent delete
    ///   between them is not detected.
    pub fn update_user(
        &self,
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> RepoResult<()> {
        let mut user = self.repo.get_user(id)?;
        user.name = name.into();
        user.email = email.into();
        self.repo.update_user(&user)
    }

    /// Deletes a user by ID. Missing IDs are not an error.
    pub fn delete_user(&self, id: UserId) -> RepoResult<()> {
        self.repo.delete_user(id)
    }
}
