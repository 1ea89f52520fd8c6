//! SeaORM entities
//!
//! Database-side table models, kept separate from the domain entities in
//! `domain::entities`.

pub mod users;
