//! Saving goal data model.

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

/// Represents a saving goal record from the database.
///
/// `current_amount` is expected to stay at or below `target_amount` for a
/// sane goal, but this is not enforced anywhere. Goals are read-only at
/// the API boundary in this version.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingGoal {
    pub id: Uuid,

    /// Owning user
    pub user_id: Uuid,

    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub editable: bool,
}
