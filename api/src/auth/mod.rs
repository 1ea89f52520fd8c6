//! Authentication middleware

pub mod basic;

pub use basic::basic_auth_middleware;
