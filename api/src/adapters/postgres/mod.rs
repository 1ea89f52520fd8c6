//! PostgreSQL adapters
//!
//! Implementations of the repository and transaction ports using SeaORM
//! and PostgreSQL, plus the driver-error classification they share.

mod error_map;
pub mod transaction;
pub mod user_repo;

#[cfg(test)]
mod integration_tests;

pub use transaction::PostgresTransactionManager;
pub use user_repo::PostgresUserRepository;
