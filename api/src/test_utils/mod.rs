//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Why manual mocks instead of mockall?
//! - the in-memory store has to enforce the uniqueness invariants and
//!   emulate rollback, which is behavior, not canned return values
//! - manual mocks are more explicit and easier to debug
//!
//! Note: E2E tests through axum would need a generic AppState to accept
//! mock repositories. Service-layer tests plus the ignored PostgreSQL
//! integration tests cover the same surface.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
