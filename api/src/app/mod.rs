//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports, and own the
//! transaction boundary for every mutating operation.

pub mod user_service;

pub use user_service::UserService;
