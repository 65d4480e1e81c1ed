//! Loan data model.

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

/// Represents a loan record from the database.
///
/// `emi_amount` is the periodic installment. `remaining_amount` is
/// expected to stay at or below `total_amount`, not enforced. Loans are
/// read-only at the API boundary in this version; no interest or
/// amortization is computed here.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub id: Uuid,

    /// Owning user
    pub user_id: Uuid,

    /// Free-form label: "Home Loan", "Car Loan", ...
    pub loan_type: String,

    pub total_amount: Decimal,
    pub emi_amount: Decimal,
    pub remaining_amount: Decimal,
}
