//! Autocomplete suggestion cache.
//!
//! A refreshable snapshot of gun names and per-gun skin names, consulted
//! only by the autocomplete handlers. The cache is advisory: it may lag the
//! store until the next refresh and is never consulted by the core
//! operations, which always read the store directly.

use crate::{
    entities::{Item, item},
    errors::Result,
};
use sea_orm::{DatabaseConnection, EntityTrait, QuerySelect};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// Snapshot of suggestion lists built from the items table.
#[derive(Debug, Default)]
pub struct SuggestionData {
    /// All known gun names, lower-case, sorted
    pub guns: Vec<String>,
    /// Skin names per gun, display casing, sorted
    pub skins_by_gun: HashMap<String, Vec<String>>,
}

/// Shared handle to the suggestion snapshot.
pub type SuggestionCache = Arc<RwLock<SuggestionData>>;

/// Rebuilds the suggestion snapshot from the items table.
///
/// Rows with a blank gun or skin name are skipped; they cannot be suggested
/// or resolved anyway.
///
/// # Errors
/// Returns an error if the store query fails; the previous snapshot is kept.
pub async fn refresh_suggestions(db: &DatabaseConnection, cache: &SuggestionCache) -> Result<()> {
    let rows: Vec<(String, String)> = Item::find()
        .select_only()
        .column(item::Column::Gun)
        .column(item::Column::SkinName)
        .into_tuple()
        .all(db)
        .await?;

    let mut by_gun: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for (gun, skin) in rows {
        let gun = gun.trim().to_lowercase();
        let skin = skin.trim().to_string();
        if gun.is_empty() || skin.is_empty() {
            continue;
        }
        by_gun.entry(gun).or_default().insert(skin);
    }

    let data = SuggestionData {
        guns: by_gun.keys().cloned().collect(),
        skins_by_gun: by_gun
            .into_iter()
            .map(|(gun, skins)| (gun, skins.into_iter().collect()))
            .collect(),
    };

    let mut writer = cache.write().await;
    info!(
        guns = data.guns.len(),
        skins = data.skins_by_gun.values().map(Vec::len).sum::<usize>(),
        "suggestion cache refreshed"
    );
    *writer = data;
    Ok(())
}
