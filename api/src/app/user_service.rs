//! User service
//!
//! Orchestrates the user CRUD use cases: identifier generation, the
//! transaction boundary around every mutation, and the translation of
//! domain errors into application errors for the HTTP layer.

use std::sync::Arc;

use crate::domain::entities::{CreateUser, User, UserId, UserUpdate};
use crate::domain::ports::{TransactionPort, UserRepository};
use crate::error::AppError;

/// Service for managing users
pub struct UserService<R, T>
where
    R: UserRepository,
    T: TransactionPort,
{
    repo: Arc<R>,
    tx: Arc<T>,
}

impl<R, T> UserService<R, T>
where
    R: UserRepository,
    T: TransactionPort,
{
    pub fn new(repo: Arc<R>, tx: Arc<T>) -> Self {
        Self { repo, tx }
    }

    /// Create a new user.
    ///
    /// The identifier is generated here, never by the caller or the store,
    /// and the insert runs as its own unit of work.
    pub async fn create(&self, request: CreateUser) -> Result<User, AppError> {
        let user = User {
            id: UserId::generate(),
            name: request.name,
            username: request.username,
            email: request.email,
        };

        let created = self
            .tx
            .execute::<User>(Box::new(move |repo| {
                Box::pin(async move {
                    repo.create(&user).await?;
                    Ok(user)
                })
            }))
            .await?;

        Ok(created)
    }

    /// Fetch all users. Read-only, so no transaction is opened.
    pub async fn find_all(&self) -> Result<Vec<User>, AppError> {
        Ok(self.repo.find_all().await?)
    }

    /// Fetch a single user by id.
    pub async fn find_by_id(&self, id: &UserId) -> Result<User, AppError> {
        Ok(self.repo.find_by_id(id).await?)
    }

    /// Apply a partial update and return the resulting record.
    ///
    /// The update and the re-read run inside one unit of work, so the
    /// returned record is the committed post-update row.
    pub async fn update(&self, changes: UserUpdate) -> Result<User, AppError> {
        let updated = self
            .tx
            .execute::<User>(Box::new(move |repo| {
                Box::pin(async move {
                    repo.update(&changes).await?;
                    repo.find_by_id(&changes.id).await
                })
            }))
            .await?;

        Ok(updated)
    }

    /// Delete a user by id.
    pub async fn delete(&self, id: UserId) -> Result<(), AppError> {
        self.tx
            .execute::<()>(Box::new(move |repo| {
                Box::pin(async move { repo.delete(&id).await })
            }))
            .await?;

        Ok(())
    }
}
