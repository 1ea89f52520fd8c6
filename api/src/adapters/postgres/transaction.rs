//! PostgreSQL implementation of the transaction port.
//!
//! Wraps SeaORM's native transaction closure: the unit of work runs
//! against a repository view bound to the open transaction, commits when
//! it returns `Ok`, rolls back when it returns an error.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, TransactionError, TransactionTrait};

use crate::adapters::postgres::user_repo::TransactionUserRepository;
use crate::domain::ports::{TransactionPort, UnitOfWork};
use crate::error::DomainError;

/// Executes units of work atomically against the user repository.
pub struct PostgresTransactionManager {
    db: DatabaseConnection,
}

impl PostgresTransactionManager {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TransactionPort for PostgresTransactionManager {
    async fn execute<T: Send + 'static>(&self, work: UnitOfWork<T>) -> Result<T, DomainError> {
        let outcome = self
            .db
            .transaction::<_, T, DomainError>(move |txn| {
                Box::pin(async move {
                    let repo = TransactionUserRepository::new(txn);
                    work(&repo).await
                })
            })
            .await;

        match outcome {
            Ok(value) => Ok(value),
            // The unit of work failed; the rollback already happened and
            // the domain error passes through unchanged.
            Err(TransactionError::Transaction(err)) => Err(err),
            // The store itself failed to begin, commit or roll back.
            Err(TransactionError::Connection(err)) => {
                tracing::error!("Transaction could not be completed: {}", err);
                Err(DomainError::TransactionFailed(err.to_string()))
            }
        }
    }
}
