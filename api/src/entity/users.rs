//! User database entity for SeaORM.
//!
//! Maps the `users` table: uuid primary key (`users_pkey`), not-null
//! columns, unique indexes `idx_username` and `idx_email`. The constraint
//! names are what the persistence error classifier keys on.

use sea_orm::entity::prelude::*;

use crate::domain::entities::{User, UserId};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: UserId(model.id),
            name: model.name,
            username: model.username,
            email: model.email,
        }
    }
}
