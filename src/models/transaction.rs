//! Transaction data model.
//!
//! Transactions are immutable once written. No external endpoint creates
//! them; rows arrive through the startup fixture generator, and the API
//! only lists them.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

/// Represents a transaction record from the database.
///
/// # Semantics
///
/// - `transaction_type` is "credit" or "debit"; the sign of the movement
///   is implied by the type, never by the sign of `amount`
/// - `date` is the event time, distinct from row creation
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,

    /// Owning account
    pub account_id: Uuid,

    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub transaction_type: String,

    pub amount: Decimal,

    /// Free-form label: "Food", "Shopping", "Bills", ...
    pub category: String,

    pub description: Option<String>,

    pub date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn transaction_json_shape() {
        let transaction = Transaction {
            id: Uuid::nil(),
            account_id: Uuid::nil(),
            transaction_type: "debit".to_string(),
            amount: dec!(42.50),
            category: "Food".to_string(),
            description: Some("Grocery shopping".to_string()),
            date: Utc::now(),
        };
        let value = serde_json::to_value(transaction).expect("serializes");
        let obj = value.as_object().expect("object");

        assert_eq!(obj["type"], "debit");
        assert!(obj.contains_key("accountId"));
        assert!(obj.contains_key("date"));
    }
}
