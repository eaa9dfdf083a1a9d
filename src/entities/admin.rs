//! Admin entity - Users granted permission to edit values via `/set`.
//!
//! The owner is configured at deploy time and never appears in this table;
//! the unique constraint on `user_id` is the backstop against duplicate
//! grants.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Admin database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "admins")]
pub struct Model {
    /// Unique identifier for the grant
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Discord user ID of the granted admin
    #[sea_orm(unique)]
    pub user_id: String,
    /// Discord user ID of whoever granted the entry (always the owner)
    pub added_by: String,
    /// When the grant was created
    pub created_at: DateTime,
}

/// Admins have no relations to other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
