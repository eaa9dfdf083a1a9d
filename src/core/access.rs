//! Access control - decides who may edit values and manages the admin set.
//!
//! There are two kinds of authorized principal: the owner, whose id is fixed
//! in configuration, and admins, stored as rows granted (and revoked) by the
//! owner. The owner is never stored in the admin table. A store failure
//! during an authorization check is treated as "not authorized" - these
//! checks fail closed, never open.

use crate::{
    entities::{Admin, admin},
    errors::Result,
};
use sea_orm::{QueryOrder, Set, SqlErr, prelude::*};
use tracing::warn;

/// Result of a grant request.
#[derive(Debug)]
pub enum GrantOutcome {
    /// The target is now an admin
    Granted(admin::Model),
    /// The target is the owner, who is always authorized; nothing stored
    AlreadyOwner,
    /// The target was already in the admin set; nothing stored
    AlreadyAdmin,
    /// The caller is not the owner; no state change
    Denied,
}

/// Result of a revoke request.
#[derive(Debug, PartialEq, Eq)]
pub enum RevokeOutcome {
    /// The target's grant was removed
    Revoked,
    /// The target was not in the admin set
    NotAnAdmin,
    /// The caller is not the owner; no state change
    Denied,
}

/// Result of an admin listing request.
#[derive(Debug)]
pub enum ListOutcome {
    /// All admin entries, oldest grant first
    Admins(Vec<admin::Model>),
    /// The caller is not the owner
    Denied,
}

/// Returns true iff the principal is the owner or appears in the admin set.
///
/// A failed admin lookup (connection error, missing table) counts as not
/// authorized; the failure is logged, never surfaced as authorization.
pub async fn is_authorized(db: &DatabaseConnection, owner_id: &str, principal_id: &str) -> bool {
    if principal_id == owner_id {
        return true;
    }
    let found = Admin::find()
        .filter(admin::Column::UserId.eq(principal_id))
        .one(db)
        .await;
    match found {
        Ok(entry) => entry.is_some(),
        Err(e) => {
            warn!(
                principal_id,
                error = %e,
                "admin lookup failed; treating principal as not authorized"
            );
            false
        }
    }
}

/// Grants admin rights to `target_id`. Owner only.
///
/// Granting the owner is a no-op (`AlreadyOwner`); granting an existing
/// admin is idempotent (`AlreadyAdmin`). The unique constraint on `user_id`
/// is the backstop against concurrent duplicate grants, so a constraint
/// violation from the store also reports `AlreadyAdmin`.
///
/// # Errors
/// Returns an error if the insert fails for any reason other than a
/// uniqueness violation.
pub async fn grant(
    db: &DatabaseConnection,
    owner_id: &str,
    caller_id: &str,
    target_id: &str,
) -> Result<GrantOutcome> {
    if caller_id != owner_id {
        return Ok(GrantOutcome::Denied);
    }
    if target_id == owner_id {
        return Ok(GrantOutcome::AlreadyOwner);
    }

    let entry = admin::ActiveModel {
        user_id: Set(target_id.to_string()),
        added_by: Set(caller_id.to_string()),
        created_at: Set(chrono::Utc::now().naive_utc()),
        ..Default::default()
    };
    match entry.insert(db).await {
        Ok(model) => Ok(GrantOutcome::Granted(model)),
        Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            Ok(GrantOutcome::AlreadyAdmin)
        }
        Err(e) => Err(e.into()),
    }
}

/// Revokes admin rights from `target_id`. Owner only.
///
/// Revoking an id that is not in the admin set reports `NotAnAdmin`, not an
/// error.
///
/// # Errors
/// Returns an error if the delete fails.
pub async fn revoke(
    db: &DatabaseConnection,
    owner_id: &str,
    caller_id: &str,
    target_id: &str,
) -> Result<RevokeOutcome> {
    if caller_id != owner_id {
        return Ok(RevokeOutcome::Denied);
    }

    let result = Admin::delete_many()
        .filter(admin::Column::UserId.eq(target_id))
        .exec(db)
        .await?;
    if result.rows_affected > 0 {
        Ok(RevokeOutcome::Revoked)
    } else {
        Ok(RevokeOutcome::NotAnAdmin)
    }
}

/// Lists all admin entries, oldest grant first. Owner only.
///
/// # Errors
/// Returns an error if the query fails.
pub async fn list_admins(
    db: &DatabaseConnection,
    owner_id: &str,
    caller_id: &str,
) -> Result<ListOutcome> {
    if caller_id != owner_id {
        return Ok(ListOutcome::Denied);
    }

    let entries = Admin::find()
        .order_by_asc(admin::Column::CreatedAt)
        .all(db)
        .await?;
    Ok(ListOutcome::Admins(entries))
}
