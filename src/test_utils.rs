//! Shared test utilities for the value-list bot.
//!
//! Item creation is out of scope for the bot itself (the table is
//! pre-seeded), so tests insert rows directly through the entities.

use crate::{
    entities::{admin, item},
    errors::Result,
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

/// Owner id used across tests.
pub const TEST_OWNER_ID: &str = "100000000000000001";

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Inserts a test item with sensible defaults (base 100, no text values).
pub async fn insert_test_item(
    db: &DatabaseConnection,
    gun: &str,
    skin_name: &str,
) -> Result<item::Model> {
    insert_item_with_values(db, gun, skin_name, Some(100.0), None, None).await
}

/// Inserts a test item with custom value fields.
pub async fn insert_item_with_values(
    db: &DatabaseConnection,
    gun: &str,
    skin_name: &str,
    base_value: Option<f64>,
    status: Option<&str>,
    image_url: Option<&str>,
) -> Result<item::Model> {
    let item = item::ActiveModel {
        gun: Set(gun.to_string()),
        skin_name: Set(skin_name.to_string()),
        base_value: Set(base_value),
        dg_value: Set(None),
        ck_value: Set(None),
        upg_value: Set(None),
        status: Set(status.map(ToString::to_string)),
        image_url: Set(image_url.map(ToString::to_string)),
        updated_at: Set(chrono::Utc::now().naive_utc()),
        ..Default::default()
    };
    item.insert(db).await.map_err(Into::into)
}

/// Inserts an admin row directly, bypassing access control.
pub async fn insert_test_admin(db: &DatabaseConnection, user_id: &str) -> Result<admin::Model> {
    let entry = admin::ActiveModel {
        user_id: Set(user_id.to_string()),
        added_by: Set(TEST_OWNER_ID.to_string()),
        created_at: Set(chrono::Utc::now().naive_utc()),
        ..Default::default()
    };
    entry.insert(db).await.map_err(Into::into)
}
