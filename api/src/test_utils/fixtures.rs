//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{CreateUser, User, UserId};

/// Create a test user with default values
pub fn test_user() -> User {
    User {
        id: UserId::generate(),
        name: "Test User".to_string(),
        username: "testuser".to_string(),
        email: "test.user@example.com".to_string(),
    }
}

/// Create a test user with a specific username (email derived from it)
pub fn test_user_named(username: &str) -> User {
    User {
        id: UserId::generate(),
        name: format!("Test {}", username),
        username: username.to_string(),
        email: format!("{}@example.com", username),
    }
}

/// The create request used by the documented scenario tests
pub fn jane_doe_request() -> CreateUser {
    CreateUser {
        name: "Jane Doe".to_string(),
        username: "janedoe123".to_string(),
        email: "jane.doe@example.com".to_string(),
    }
}
