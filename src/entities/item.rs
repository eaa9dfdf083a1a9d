//! Item entity - One row per skin in the shared value list.
//!
//! Categories (`gun`) are stored lower-cased so that exact-match queries can
//! serve as case-insensitive lookups; skin names keep their display casing
//! and are compared case-insensitively in [`crate::core::items`].

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Item database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "items")]
pub struct Model {
    /// Unique identifier for the item
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Weapon or item type the skin belongs to (e.g. "ak47", "karambit"),
    /// always stored lower-case
    pub gun: String,
    /// Skin name with original casing (e.g. "Glo", "Ace")
    pub skin_name: String,
    /// Base value; the only numeric value field
    pub base_value: Option<f64>,
    /// DG value
    pub dg_value: Option<String>,
    /// CK value
    pub ck_value: Option<String>,
    /// Upgrade value
    pub upg_value: Option<String>,
    /// Free-text status (e.g. "rising", "stable")
    pub status: Option<String>,
    /// Thumbnail shown in lookup embeds and catalog cards
    pub image_url: Option<String>,
    /// When any value field was last modified
    pub updated_at: DateTime,
}

/// Items have no relations to other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
