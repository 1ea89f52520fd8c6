//! PostgreSQL adapter for UserRepository
//!
//! Two implementations share the same query functions: the pool-wide
//! [`PostgresUserRepository`] and the [`TransactionUserRepository`] view
//! that the transaction manager hands to a unit of work. Every driver
//! failure goes through the classifier in `error_map` before it crosses
//! the repository port.

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    QueryFilter, Set,
};

use crate::adapters::postgres::error_map::classify_db_err;
use crate::domain::entities::{User, UserId, UserUpdate};
use crate::domain::ports::UserRepository;
use crate::entity::users;
use crate::error::DomainError;

/// PostgreSQL implementation of UserRepository, bound to the pool.
pub struct PostgresUserRepository {
    db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: &User) -> Result<(), DomainError> {
        insert_user(&self.db, user).await
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        select_all(&self.db).await
    }

    async fn find_by_id(&self, id: &UserId) -> Result<User, DomainError> {
        select_by_id(&self.db, id).await
    }

    async fn update(&self, changes: &UserUpdate) -> Result<(), DomainError> {
        update_user(&self.db, changes).await
    }

    async fn delete(&self, id: &UserId) -> Result<(), DomainError> {
        delete_user(&self.db, id).await
    }
}

/// Repository view scoped to an open transaction.
///
/// Constructed by the transaction manager for each unit of work; distinct
/// from the pool-wide repository so statements issued through it share the
/// transaction's connection.
pub(crate) struct TransactionUserRepository<'t> {
    txn: &'t DatabaseTransaction,
}

impl<'t> TransactionUserRepository<'t> {
    pub(crate) fn new(txn: &'t DatabaseTransaction) -> Self {
        Self { txn }
    }
}

#[async_trait]
impl UserRepository for TransactionUserRepository<'_> {
    async fn create(&self, user: &User) -> Result<(), DomainError> {
        insert_user(self.txn, user).await
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        select_all(self.txn).await
    }

    async fn find_by_id(&self, id: &UserId) -> Result<User, DomainError> {
        select_by_id(self.txn, id).await
    }

    async fn update(&self, changes: &UserUpdate) -> Result<(), DomainError> {
        update_user(self.txn, changes).await
    }

    async fn delete(&self, id: &UserId) -> Result<(), DomainError> {
        delete_user(self.txn, id).await
    }
}

async fn insert_user<C: ConnectionTrait>(conn: &C, user: &User) -> Result<(), DomainError> {
    let model = users::ActiveModel {
        id: Set(user.id.0),
        name: Set(user.name.clone()),
        username: Set(user.username.clone()),
        email: Set(user.email.clone()),
    };

    users::Entity::insert(model)
        .exec(conn)
        .await
        .map_err(classify_db_err)?;

    Ok(())
}

async fn select_all<C: ConnectionTrait>(conn: &C) -> Result<Vec<User>, DomainError> {
    let models = users::Entity::find()
        .all(conn)
        .await
        .map_err(classify_db_err)?;

    Ok(models.into_iter().map(|m| m.into()).collect())
}

async fn select_by_id<C: ConnectionTrait>(conn: &C, id: &UserId) -> Result<User, DomainError> {
    let model = users::Entity::find_by_id(id.0)
        .one(conn)
        .await
        .map_err(classify_db_err)?;

    model.map(|m| m.into()).ok_or(DomainError::NotFound)
}

async fn update_user<C: ConnectionTrait>(
    conn: &C,
    changes: &UserUpdate,
) -> Result<(), DomainError> {
    // Nothing to apply: degenerate to an existence check so the caller
    // still gets NotFound for a missing id.
    if !changes.has_changes() {
        select_by_id(conn, &changes.id).await?;
        return Ok(());
    }

    let mut model = users::ActiveModel::default();
    if let Some(name) = &changes.name {
        model.name = Set(name.clone());
    }
    if let Some(username) = &changes.username {
        model.username = Set(username.clone());
    }
    if let Some(email) = &changes.email {
        model.email = Set(email.clone());
    }

    let result = users::Entity::update_many()
        .set(model)
        .filter(users::Column::Id.eq(changes.id.0))
        .exec(conn)
        .await
        .map_err(classify_db_err)?;

    // No driver error does not mean the record existed.
    if result.rows_affected == 0 {
        return Err(DomainError::NotFound);
    }

    Ok(())
}

async fn delete_user<C: ConnectionTrait>(conn: &C, id: &UserId) -> Result<(), DomainError> {
    let result = users::Entity::delete_by_id(id.0)
        .exec(conn)
        .await
        .map_err(classify_db_err)?;

    if result.rows_affected == 0 {
        return Err(DomainError::NotFound);
    }

    Ok(())
}
