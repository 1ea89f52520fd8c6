//! User domain entity
//!
//! The single resource this service manages, plus its request projections.

use std::sync::{Mutex, OnceLock};

use serde::{Deserialize, Serialize};
use uuid::{ContextV7, Timestamp, Uuid};

/// Unique identifier for a user.
///
/// A UUIDv7: millisecond timestamp prefix plus random bits, so identifiers
/// generated in temporal order also sort lexically in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

// Shared counter context keeps ids generated within the same millisecond
// ordered as well.
static V7_CONTEXT: OnceLock<Mutex<ContextV7>> = OnceLock::new();

impl UserId {
    /// Generate a fresh time-ordered identifier.
    pub fn generate() -> Self {
        let context = V7_CONTEXT.get_or_init(|| Mutex::new(ContextV7::new()));
        Self(Uuid::new_v7(Timestamp::now(context)))
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for UserId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A user record. `username` and `email` are unique across all live
/// records; every field is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub username: String,
    pub email: String,
}

/// Data needed to create a new user. The identifier is assigned by the
/// application service, never by the caller or the store.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    pub username: String,
    pub email: String,
}

/// Partial update for an existing user. `None` fields are left unchanged.
#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub id: UserId,
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
}

impl UserUpdate {
    /// True if at least one field would change.
    pub fn has_changes(&self) -> bool {
        self.name.is_some() || self.username.is_some() || self.email.is_some()
    }
}
