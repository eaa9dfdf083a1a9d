//! Item lookup and the set-value protocol.
//!
//! [`resolve`] turns a free-text (gun, skin) pair into the unique stored
//! item; [`set_value`] chains authorization, coercion, resolution and the
//! single-row update, reporting every outcome as a [`SetOutcome`] variant
//! for the command layer to render.

use crate::{
    core::{
        access,
        fields::{self, Coercion, FieldDescriptor, FieldValue},
    },
    entities::{Item, item},
    errors::Result,
};
use sea_orm::{prelude::*, sea_query::Expr};
use tracing::warn;

/// Result of a set-value request.
#[derive(Debug)]
pub enum SetOutcome {
    /// The update was applied
    Updated {
        /// The item as resolved before the update
        item: item::Model,
        /// The field that was written
        field: &'static FieldDescriptor,
        /// The value that was written
        value: FieldValue,
    },
    /// The caller is neither the owner nor an admin
    NotAuthorized,
    /// No item matches the (gun, skin) pair
    ItemNotFound,
    /// The field key matches no descriptor
    InvalidField,
    /// The raw input cannot be coerced for the field
    InvalidValue {
        /// The matched field descriptor, for error reporting
        field: &'static FieldDescriptor,
    },
    /// The store did not confirm a one-row update
    UpdateFailed,
}

/// Resolves a free-text (gun, skin) pair to the stored item.
///
/// Both inputs are trimmed; the gun is lower-cased to match the stored form
/// and the skin name is compared case-insensitively against the candidates
/// in that gun. Empty inputs never match and never reach the store. Should
/// duplicate skin names exist under one gun (a data-quality defect), the
/// first candidate in store iteration order wins.
///
/// # Errors
/// Returns an error if the candidate query fails.
pub async fn resolve(
    db: &DatabaseConnection,
    gun_input: &str,
    skin_input: &str,
) -> Result<Option<item::Model>> {
    let gun = gun_input.trim().to_lowercase();
    let skin = skin_input.trim().to_lowercase();
    if gun.is_empty() || skin.is_empty() {
        return Ok(None);
    }

    let candidates = Item::find()
        .filter(item::Column::Gun.eq(gun.as_str()))
        .all(db)
        .await?;

    Ok(candidates
        .into_iter()
        .find(|candidate| candidate.skin_name.trim().to_lowercase() == skin))
}

/// Sets one value field on one item, end to end.
///
/// Steps gate each other in order: authorization, coercion, resolution,
/// then the single-row update. Earlier failures never reach the store
/// write, and coercion runs before resolution so a malformed field name is
/// reported without a store round trip.
///
/// # Errors
/// Returns an error if a read against the store fails. Write failures are
/// reported as [`SetOutcome::UpdateFailed`], not as errors.
pub async fn set_value(
    db: &DatabaseConnection,
    owner_id: &str,
    caller_id: &str,
    gun_input: &str,
    skin_input: &str,
    field_key: &str,
    raw_value: &str,
) -> Result<SetOutcome> {
    if !access::is_authorized(db, owner_id, caller_id).await {
        return Ok(SetOutcome::NotAuthorized);
    }

    let (field, value) = match fields::coerce(field_key, raw_value) {
        Coercion::Value { field, value } => (field, value),
        Coercion::InvalidField => return Ok(SetOutcome::InvalidField),
        Coercion::InvalidValue { field } => return Ok(SetOutcome::InvalidValue { field }),
    };

    let Some(item) = resolve(db, gun_input, skin_input).await? else {
        return Ok(SetOutcome::ItemNotFound);
    };

    apply_update(db, item, field, value).await
}

/// Applies the single-row update and refreshes the last-modified timestamp.
///
/// The store must confirm exactly one affected row; a quiet no-op on a
/// stale or missing id is reported as `UpdateFailed`, never assumed to have
/// succeeded.
async fn apply_update(
    db: &DatabaseConnection,
    item: item::Model,
    field: &'static FieldDescriptor,
    value: FieldValue,
) -> Result<SetOutcome> {
    let now = chrono::Utc::now().naive_utc();
    let result = Item::update_many()
        .col_expr(field.column, Expr::value(value.to_db_value()))
        .col_expr(item::Column::UpdatedAt, Expr::value(sea_orm::Value::from(now)))
        .filter(item::Column::Id.eq(item.id))
        .exec(db)
        .await;

    match result {
        Ok(update) if update.rows_affected == 1 => Ok(SetOutcome::Updated { item, field, value }),
        Ok(update) => {
            warn!(
                item_id = item.id,
                field = field.key,
                rows_affected = update.rows_affected,
                "set_value update affected no rows"
            );
            Ok(SetOutcome::UpdateFailed)
        }
        Err(e) => {
            warn!(
                item_id = item.id,
                field = field.key,
                error = %e,
                "set_value update failed"
            );
            Ok(SetOutcome::UpdateFailed)
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::{
        TEST_OWNER_ID, insert_item_with_values, insert_test_admin, insert_test_item, setup_test_db,
    };
    use sea_orm::{DatabaseBackend, MockDatabase, Set};

    #[tokio::test]
    async fn test_resolve_is_case_insensitive() -> Result<()> {
        let db = setup_test_db().await?;
        let seeded = insert_test_item(&db, "ak47", "Glo").await?;

        for (gun, skin) in [
            ("ak47", "Glo"),
            ("AK47", "glo"),
            ("Ak47", "GLO"),
            ("  ak47  ", "  glo  "),
        ] {
            let found = resolve(&db, gun, skin).await?;
            assert_eq!(found.as_ref().map(|i| i.id), Some(seeded.id), "{gun}/{skin}");
        }
        // Stored casing is preserved for display
        assert_eq!(resolve(&db, "AK47", "GLO").await?.unwrap().skin_name, "Glo");
        Ok(())
    }

    #[tokio::test]
    async fn test_resolve_no_match() -> Result<()> {
        let db = setup_test_db().await?;
        insert_test_item(&db, "ak47", "Glo").await?;

        assert!(resolve(&db, "ak47", "Ace").await?.is_none());
        assert!(resolve(&db, "awp", "Glo").await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_resolve_empty_inputs_skip_the_store() {
        // A mock with no prepared results errors on any query, so Ok(None)
        // proves the store was never reached.
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();
        assert!(resolve(&db, "", "Glo").await.unwrap().is_none());
        assert!(resolve(&db, "ak47", "   ").await.unwrap().is_none());
        assert!(resolve(&db, "  ", "").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_resolve_duplicate_names_first_wins() -> Result<()> {
        let db = setup_test_db().await?;
        let first = insert_test_item(&db, "ak47", "Glo").await?;
        insert_test_item(&db, "ak47", "glo").await?;

        let found = resolve(&db, "ak47", "GLO").await?.unwrap();
        assert_eq!(found.id, first.id);
        Ok(())
    }

    #[tokio::test]
    async fn test_set_value_by_owner() -> Result<()> {
        let db = setup_test_db().await?;
        let old = chrono::Utc::now().naive_utc() - chrono::Duration::days(30);
        let stale = item::ActiveModel {
            gun: Set("ak47".to_string()),
            skin_name: Set("Glo".to_string()),
            base_value: Set(Some(900.0)),
            updated_at: Set(old),
            ..Default::default()
        };
        let stale = stale.insert(&db).await?;

        let outcome = set_value(&db, TEST_OWNER_ID, TEST_OWNER_ID, "ak47", "Glo", "base", "1500")
            .await?;
        let SetOutcome::Updated { item, field, value } = outcome else {
            panic!("expected Updated, got {outcome:?}");
        };
        assert_eq!(item.id, stale.id);
        assert_eq!(field.key, "base");
        assert_eq!(value, FieldValue::Integer(1500));

        let reread = Item::find_by_id(stale.id).one(&db).await?.unwrap();
        assert_eq!(reread.base_value, Some(1500.0));
        assert!(reread.updated_at > old, "timestamp must be refreshed");
        Ok(())
    }

    #[tokio::test]
    async fn test_set_value_by_admin() -> Result<()> {
        let db = setup_test_db().await?;
        insert_test_item(&db, "awp", "Dragon").await?;
        let admin_id = "200000000000000002";
        insert_test_admin(&db, admin_id).await?;

        let outcome =
            set_value(&db, TEST_OWNER_ID, admin_id, "awp", "dragon", "status", "rising").await?;
        assert!(matches!(outcome, SetOutcome::Updated { .. }));
        Ok(())
    }

    #[tokio::test]
    async fn test_set_value_unauthorized_leaves_item_untouched() -> Result<()> {
        let db = setup_test_db().await?;
        let seeded = insert_item_with_values(&db, "ak47", "Glo", Some(900.0), None, None).await?;

        let outcome = set_value(
            &db,
            TEST_OWNER_ID,
            "300000000000000003",
            "ak47",
            "Glo",
            "base",
            "1500",
        )
        .await?;
        assert!(matches!(outcome, SetOutcome::NotAuthorized));

        let reread = Item::find_by_id(seeded.id).one(&db).await?.unwrap();
        assert_eq!(reread.base_value, Some(900.0));
        assert_eq!(reread.updated_at, seeded.updated_at);
        Ok(())
    }

    #[tokio::test]
    async fn test_set_value_unknown_field_skips_the_store() {
        // Owner authorization short-circuits without a query, and the field
        // check runs before the item lookup, so the mock is never queried.
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();
        let outcome = set_value(&db, TEST_OWNER_ID, TEST_OWNER_ID, "ak47", "Glo", "price", "1500")
            .await
            .unwrap();
        assert!(matches!(outcome, SetOutcome::InvalidField));
    }

    #[tokio::test]
    async fn test_set_value_invalid_number() -> Result<()> {
        let db = setup_test_db().await?;
        insert_test_item(&db, "ak47", "Glo").await?;

        let outcome =
            set_value(&db, TEST_OWNER_ID, TEST_OWNER_ID, "ak47", "Glo", "base", "cheap").await?;
        assert!(matches!(
            outcome,
            SetOutcome::InvalidValue { field } if field.key == "base"
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_set_value_item_not_found() -> Result<()> {
        let db = setup_test_db().await?;
        let outcome =
            set_value(&db, TEST_OWNER_ID, TEST_OWNER_ID, "ak47", "Glo", "base", "1500").await?;
        assert!(matches!(outcome, SetOutcome::ItemNotFound));
        Ok(())
    }

    #[tokio::test]
    async fn test_set_value_clears_text_field() -> Result<()> {
        let db = setup_test_db().await?;
        let seeded =
            insert_item_with_values(&db, "karambit", "Fade", None, Some("rising"), None).await?;

        let outcome =
            set_value(&db, TEST_OWNER_ID, TEST_OWNER_ID, "karambit", "fade", "status", " ")
                .await?;
        assert!(matches!(outcome, SetOutcome::Updated { .. }));

        let reread = Item::find_by_id(seeded.id).one(&db).await?.unwrap();
        assert_eq!(reread.status, None, "empty input must store NULL");
        Ok(())
    }

    #[tokio::test]
    async fn test_update_on_missing_id_reports_failure() -> Result<()> {
        let db = setup_test_db().await?;
        // A model whose row does not exist: the store quietly affects zero
        // rows, which must not be reported as success.
        let ghost = item::Model {
            id: 999,
            gun: "ak47".to_string(),
            skin_name: "Ghost".to_string(),
            base_value: None,
            dg_value: None,
            ck_value: None,
            upg_value: None,
            status: None,
            image_url: None,
            updated_at: chrono::Utc::now().naive_utc(),
        };
        let field = fields::lookup_field("base").unwrap();
        let outcome = apply_update(&db, ghost, field, FieldValue::Integer(1)).await?;
        assert!(matches!(outcome, SetOutcome::UpdateFailed));
        Ok(())
    }
}
