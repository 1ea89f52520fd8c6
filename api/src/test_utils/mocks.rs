//! Mock implementations of port traits
//!
//! In-memory implementations that enforce the same invariants as the real
//! store (id/username/email uniqueness, not-found on absent ids) so
//! service tests observe the same error kinds. The transaction manager
//! emulates rollback by snapshotting the store before the unit of work
//! and restoring it on failure.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::entities::{User, UserId, UserUpdate};
use crate::domain::ports::{TransactionPort, UnitOfWork, UserRepository};
use crate::error::DomainError;

// ============================================================================
// In-Memory User Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a user for testing
    pub fn with_user(self, user: User) -> Self {
        self.users.write().unwrap().insert(user.id, user);
        self
    }

    pub fn snapshot(&self) -> HashMap<UserId, User> {
        self.users.read().unwrap().clone()
    }

    pub fn restore(&self, snapshot: HashMap<UserId, User>) {
        *self.users.write().unwrap() = snapshot;
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> Result<(), DomainError> {
        let mut users = self.users.write().unwrap();

        if users.contains_key(&user.id) {
            return Err(DomainError::IdInUse);
        }
        if users.values().any(|u| u.username == user.username) {
            return Err(DomainError::UsernameInUse);
        }
        if users.values().any(|u| u.email == user.email) {
            return Err(DomainError::EmailInUse);
        }

        users.insert(user.id, user.clone());
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().unwrap();
        Ok(users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<User, DomainError> {
        let users = self.users.read().unwrap();
        users.get(id).cloned().ok_or(DomainError::NotFound)
    }

    async fn update(&self, changes: &UserUpdate) -> Result<(), DomainError> {
        let mut users = self.users.write().unwrap();

        if !users.contains_key(&changes.id) {
            return Err(DomainError::NotFound);
        }
        if let Some(username) = &changes.username {
            if users
                .values()
                .any(|u| u.id != changes.id && &u.username == username)
            {
                return Err(DomainError::UsernameInUse);
            }
        }
        if let Some(email) = &changes.email {
            if users
                .values()
                .any(|u| u.id != changes.id && &u.email == email)
            {
                return Err(DomainError::EmailInUse);
            }
        }

        let user = users.get_mut(&changes.id).expect("checked above");
        if let Some(name) = &changes.name {
            user.name = name.clone();
        }
        if let Some(username) = &changes.username {
            user.username = username.clone();
        }
        if let Some(email) = &changes.email {
            user.email = email.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: &UserId) -> Result<(), DomainError> {
        let mut users = self.users.write().unwrap();
        users.remove(id).map(|_| ()).ok_or(DomainError::NotFound)
    }
}

// ============================================================================
// In-Memory Transaction Manager
// ============================================================================

/// Transaction port over the in-memory repository.
///
/// `failing` simulates a store that executes the unit of work but cannot
/// commit it.
pub struct InMemoryTransactionManager {
    repo: Arc<InMemoryUserRepository>,
    fail_commit: bool,
}

impl InMemoryTransactionManager {
    pub fn new(repo: Arc<InMemoryUserRepository>) -> Self {
        Self {
            repo,
            fail_commit: false,
        }
    }

    pub fn failing(repo: Arc<InMemoryUserRepository>) -> Self {
        Self {
            repo,
            fail_commit: true,
        }
    }
}

#[async_trait]
impl TransactionPort for InMemoryTransactionManager {
    async fn execute<T: Send + 'static>(&self, work: UnitOfWork<T>) -> Result<T, DomainError> {
        let snapshot = self.repo.snapshot();
        let result = work(self.repo.as_ref()).await;

        match result {
            Ok(value) if !self.fail_commit => Ok(value),
            Ok(_) => {
                self.repo.restore(snapshot);
                Err(DomainError::TransactionFailed(
                    "simulated commit failure".to_string(),
                ))
            }
            Err(err) => {
                self.repo.restore(snapshot);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_user, test_user_named};

    #[tokio::test]
    async fn unit_of_work_commits_on_ok() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let tx = InMemoryTransactionManager::new(repo.clone());
        let user = test_user();
        let id = user.id;

        tx.execute::<()>(Box::new(move |r| {
            Box::pin(async move { r.create(&user).await })
        }))
        .await
        .unwrap();

        assert!(repo.find_by_id(&id).await.is_ok());
    }

    #[tokio::test]
    async fn failed_unit_of_work_rolls_back_every_write() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let tx = InMemoryTransactionManager::new(repo.clone());
        let first = test_user_named("first");
        let second = test_user_named("second");
        let (first_id, second_id) = (first.id, second.id);

        // Two successful writes, then a failure: none may remain visible.
        let result = tx
            .execute::<()>(Box::new(move |r| {
                Box::pin(async move {
                    r.create(&first).await?;
                    r.create(&second).await?;
                    Err(DomainError::Internal("forced failure".to_string()))
                })
            }))
            .await;

        assert!(matches!(result, Err(DomainError::Internal(_))));
        assert_eq!(
            repo.find_by_id(&first_id).await,
            Err(DomainError::NotFound)
        );
        assert_eq!(
            repo.find_by_id(&second_id).await,
            Err(DomainError::NotFound)
        );
    }

    #[tokio::test]
    async fn domain_error_passes_through_unchanged() {
        let repo = Arc::new(InMemoryUserRepository::new().with_user(test_user()));
        let tx = InMemoryTransactionManager::new(repo.clone());
        let duplicate = repo.find_all().await.unwrap().remove(0);
        let mut copy = duplicate.clone();
        copy.id = UserId::generate();

        let result = tx
            .execute::<()>(Box::new(move |r| {
                Box::pin(async move { r.create(&copy).await })
            }))
            .await;

        assert_eq!(result, Err(DomainError::UsernameInUse));
    }

    #[tokio::test]
    async fn commit_failure_rolls_back_and_reports_transaction_failed() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let tx = InMemoryTransactionManager::failing(repo.clone());
        let user = test_user();
        let id = user.id;

        let result = tx
            .execute::<()>(Box::new(move |r| {
                Box::pin(async move { r.create(&user).await })
            }))
            .await;

        assert!(matches!(result, Err(DomainError::TransactionFailed(_))));
        assert_eq!(repo.find_by_id(&id).await, Err(DomainError::NotFound));
    }
}
