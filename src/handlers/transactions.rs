//! Transaction HTTP handler.
//!
//! Transactions are read-only at the API boundary: rows are written by
//! the startup fixture generator, never by clients.

use crate::{db::DbPool, error::AppError, models::transaction::Transaction};
use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use uuid::Uuid;

/// Query parameters for GET /transactions.
#[derive(Debug, Deserialize)]
pub struct ListTransactionsQuery {
    #[serde(rename = "accountId")]
    pub account_id: Option<Uuid>,
}

/// List transactions, optionally filtered by account.
///
/// # Endpoint
///
/// `GET /transactions?accountId=<uuid>`
///
/// # Scoping Rule
///
/// Unlike the owner-scoped listings, an absent `accountId` returns every
/// transaction in the store. With `accountId` present, only that
/// account's transactions are returned. Newest first in both cases.
pub async fn list_transactions(
    State(pool): State<DbPool>,
    Query(query): Query<ListTransactionsQuery>,
) -> Result<Json<Vec<Transaction>>, AppError> {
    let transactions = match query.account_id {
        Some(account_id) => {
            sqlx::query_as::<_, Transaction>(
                "SELECT * FROM transactions WHERE account_id = $1 ORDER BY date DESC",
            )
            .bind(account_id)
            .fetch_all(&pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, Transaction>("SELECT * FROM transactions ORDER BY date DESC")
                .fetch_all(&pool)
                .await?
        }
    };

    Ok(Json(transactions))
}
