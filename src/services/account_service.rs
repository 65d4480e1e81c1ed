//! Account ledger service.
//!
//! This service handles:
//! - Account listing scoped by owner
//! - Account creation (foreign keys checked by the database)
//! - The link/unlink flag flip
//! - Enrichment: joining an account with its bank's display name
//!
//! # Enrichment Cost
//!
//! Enrichment performs one bank lookup per account, not a batch join.
//! A user owns a handful of accounts at most, so N stays small; callers
//! should not push unbounded lists through `enrich`.

use crate::{
    db::DbPool,
    error::{self, AppError},
    models::{
        account::{Account, AccountResponse, CreateAccountRequest},
        bank::Bank,
    },
};
use uuid::Uuid;

/// List all accounts owned by a user, newest first.
///
/// The "absent userId means an empty list" scoping rule lives in the
/// handler; this function always receives a concrete owner.
pub async fn list_by_user(pool: &DbPool, user_id: Uuid) -> Result<Vec<Account>, AppError> {
    let accounts = sqlx::query_as::<_, Account>(
        r#"
        SELECT *
        FROM accounts
        WHERE user_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(accounts)
}

/// Create a new account.
///
/// The insert trusts the caller's `user_id` and `bank_id` only as far as
/// the foreign-key constraints do: a dangling reference is rejected by
/// the engine and surfaces as a 400 here.
pub async fn create(pool: &DbPool, request: CreateAccountRequest) -> Result<Account, AppError> {
    let account = sqlx::query_as::<_, Account>(
        r#"
        INSERT INTO accounts (user_id, bank_id, account_number, type, balance, is_linked, loan_amount, loan_paid)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(request.user_id)
    .bind(request.bank_id)
    .bind(request.account_number)
    .bind(request.account_type)
    .bind(request.balance)
    .bind(request.is_linked)
    .bind(request.loan_amount)
    .bind(request.loan_paid)
    .fetch_one(pool)
    .await
    .map_err(|err| {
        if error::is_foreign_key_violation(&err) {
            AppError::InvalidRequest("Unknown userId or bankId".to_string())
        } else {
            err.into()
        }
    })?;

    Ok(account)
}

/// Set the `is_linked` flag on an account.
///
/// # Errors
///
/// - `AccountNotFound`: no account with that id
pub async fn link(pool: &DbPool, account_id: Uuid, is_linked: bool) -> Result<Account, AppError> {
    let account = sqlx::query_as::<_, Account>(
        r#"
        UPDATE accounts
        SET is_linked = $1
        WHERE id = $2
        RETURNING *
        "#,
    )
    .bind(is_linked)
    .bind(account_id)
    .fetch_optional(pool)
    .await?
    .ok_or(AppError::AccountNotFound)?;

    Ok(account)
}

/// Join an account with its referenced bank to build the response view.
///
/// A missing bank yields `bankName: null`; it never fails the call.
pub async fn enrich(pool: &DbPool, account: Account) -> Result<AccountResponse, AppError> {
    let bank = sqlx::query_as::<_, Bank>("SELECT * FROM banks WHERE id = $1")
        .bind(account.bank_id)
        .fetch_optional(pool)
        .await?;

    Ok(AccountResponse::enriched(account, bank))
}
