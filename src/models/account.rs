//! Account data models and API request/response types.
//!
//! This module defines:
//! - `Account`: Database entity representing a linked bank account
//! - `CreateAccountRequest`: Request body for creating accounts
//! - `LinkAccountRequest`: Request body for the link/unlink operation
//! - `AccountResponse`: Response view enriched with the bank's name

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::bank::Bank;

/// Represents an account record from the database.
///
/// # Database Table
///
/// Maps to the `accounts` table. Each account:
/// - Belongs to exactly one user (via `user_id`)
/// - References exactly one bank (via `bank_id`)
///
/// Both references are real foreign keys, so rows with dangling ids are
/// rejected at insert time.
///
/// # Monetary Fields
///
/// `balance`, `loan_amount` and `loan_paid` are `Decimal` values mapped
/// to NUMERIC columns. The loan fields are only populated when the
/// account represents a loan-backed product.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Account {
    /// Unique identifier for this account
    pub id: Uuid,

    /// Owning user
    pub user_id: Uuid,

    /// Referenced bank from the catalog
    pub bank_id: Uuid,

    pub account_number: String,

    /// Account label: "savings", "checking", "current", ...
    ///
    /// An open set, not enum-enforced; clients may introduce new labels.
    #[sqlx(rename = "type")]
    pub account_type: String,

    pub balance: Decimal,

    /// Whether the account is actively synced/usable. Unlinked accounts
    /// stay visible but are not treated as active.
    pub is_linked: bool,

    pub loan_amount: Option<Decimal>,
    pub loan_paid: Option<Decimal>,

    /// Timestamp when the account was created. Immutable.
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a new account.
///
/// # JSON Example
///
/// ```json
/// {
///   "userId": "550e8400-e29b-41d4-a716-446655440000",
///   "bankId": "660e8400-e29b-41d4-a716-446655440001",
///   "accountNumber": "ACC00000101",
///   "type": "savings",
///   "balance": "1500.00"
/// }
/// ```
///
/// # Defaults
///
/// - `balance`: 0
/// - `isLinked`: false
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    pub user_id: Uuid,
    pub bank_id: Uuid,
    pub account_number: String,

    #[serde(rename = "type")]
    pub account_type: String,

    #[serde(default)]
    pub balance: Decimal,

    #[serde(default)]
    pub is_linked: bool,

    pub loan_amount: Option<Decimal>,
    pub loan_paid: Option<Decimal>,
}

/// Request body for PATCH /accounts/{id}/link.
///
/// ```json
/// { "isLinked": true }
/// ```
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkAccountRequest {
    pub is_linked: bool,
}

/// Response body for account endpoints: the account joined with the
/// display name of its bank.
///
/// `bankName` is null when the referenced bank no longer exists; the
/// lookup failure never fails the overall call.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "770e8400-e29b-41d4-a716-446655440002",
///   "userId": "550e8400-e29b-41d4-a716-446655440000",
///   "bankId": "660e8400-e29b-41d4-a716-446655440001",
///   "bankName": "Chase",
///   "accountNumber": "ACC00000101",
///   "type": "savings",
///   "balance": "1500.00",
///   "isLinked": false,
///   "createdAt": "2025-12-20T10:00:00Z"
/// }
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub bank_id: Uuid,
    pub bank_name: Option<String>,
    pub account_number: String,

    #[serde(rename = "type")]
    pub account_type: String,

    pub balance: Decimal,
    pub is_linked: bool,
    pub loan_amount: Option<Decimal>,
    pub loan_paid: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

impl AccountResponse {
    /// Build the enriched view from an account and its (possibly missing)
    /// bank.
    pub fn enriched(account: Account, bank: Option<Bank>) -> Self {
        Self {
            id: account.id,
            user_id: account.user_id,
            bank_id: account.bank_id,
            bank_name: bank.map(|b| b.name),
            account_number: account.account_number,
            account_type: account.account_type,
            balance: account.balance,
            is_linked: account.is_linked,
            loan_amount: account.loan_amount,
            loan_paid: account.loan_paid,
            created_at: account.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_account() -> Account {
        Account {
            id: Uuid::nil(),
            user_id: Uuid::nil(),
            bank_id: Uuid::nil(),
            account_number: "ACC00000101".to_string(),
            account_type: "savings".to_string(),
            balance: dec!(1500.00),
            is_linked: false,
            loan_amount: None,
            loan_paid: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn enriched_view_carries_bank_name() {
        let bank = Bank {
            id: Uuid::nil(),
            name: "Chase".to_string(),
            icon: Some("Landmark".to_string()),
        };
        let response = AccountResponse::enriched(sample_account(), Some(bank));
        assert_eq!(response.bank_name.as_deref(), Some("Chase"));
    }

    #[test]
    fn enriched_view_tolerates_missing_bank() {
        let response = AccountResponse::enriched(sample_account(), None);
        assert!(response.bank_name.is_none());
    }

    #[test]
    fn account_response_json_shape() {
        let value = serde_json::to_value(AccountResponse::enriched(sample_account(), None))
            .expect("serializes");
        let obj = value.as_object().expect("object");

        assert!(obj.contains_key("type"));
        assert!(obj.contains_key("bankName"));
        assert!(obj.contains_key("isLinked"));
        assert!(obj.contains_key("accountNumber"));
    }

    #[test]
    fn create_request_defaults_balance_and_link_flag() {
        let request: CreateAccountRequest = serde_json::from_str(
            r#"{
                "userId": "550e8400-e29b-41d4-a716-446655440000",
                "bankId": "660e8400-e29b-41d4-a716-446655440001",
                "accountNumber": "ACC00000101",
                "type": "checking"
            }"#,
        )
        .expect("deserializes");
        assert_eq!(request.balance, Decimal::ZERO);
        assert!(!request.is_linked);
    }
}
