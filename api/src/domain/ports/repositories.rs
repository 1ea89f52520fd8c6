//! Repository and transaction port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;
use futures_util::future::BoxFuture;

use crate::domain::entities::{User, UserId, UserUpdate};
use crate::error::DomainError;

/// Repository for User entities
///
/// Every failure is reported as a [`DomainError`] kind; implementations
/// must never surface raw storage errors.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user. Fails with `IdInUse`/`UsernameInUse`/`EmailInUse`
    /// on a uniqueness collision, `NotNullable` when a mandatory field was
    /// blank at the storage layer, `Internal` otherwise.
    async fn create(&self, user: &User) -> Result<(), DomainError>;

    /// Fetch all live users. Ordering is implementation-defined.
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;

    /// Fetch a user by id. Fails with `NotFound` if absent.
    async fn find_by_id(&self, id: &UserId) -> Result<User, DomainError>;

    /// Apply a partial update by id. Fails with `NotFound` when no record
    /// was affected; a collision introduced by the update classifies the
    /// same way as in `create`.
    async fn update(&self, changes: &UserUpdate) -> Result<(), DomainError>;

    /// Delete a user by id. Fails with `NotFound` when no record was
    /// affected.
    async fn delete(&self, id: &UserId) -> Result<(), DomainError>;
}

/// A unit of work: a closure run against a repository handle bound to the
/// active transaction. Its return value is surfaced by
/// [`TransactionPort::execute`] on commit.
pub type UnitOfWork<T> = Box<
    dyn for<'a> FnOnce(&'a (dyn UserRepository + 'a)) -> BoxFuture<'a, Result<T, DomainError>>
        + Send,
>;

/// Transaction boundary for repository operations
///
/// Contract: if the unit of work returns an error, the transaction is
/// fully rolled back and that same error is returned unchanged. If it
/// returns `Ok`, the transaction commits. A commit or rollback that fails
/// for reasons unrelated to the domain error surfaces as
/// `TransactionFailed` instead.
#[async_trait]
pub trait TransactionPort: Send + Sync {
    async fn execute<T: Send + 'static>(&self, work: UnitOfWork<T>) -> Result<T, DomainError>;
}
