//! Account HTTP handlers.
//!
//! This module implements the account-related API endpoints:
//! - GET /accounts?userId= - List a user's accounts, enriched with bank names
//! - POST /accounts - Create a new account
//! - PATCH /accounts/{id}/link - Flip the linked flag

use crate::{
    db::DbPool,
    error::AppError,
    models::account::{AccountResponse, CreateAccountRequest, LinkAccountRequest},
    services::account_service,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use uuid::Uuid;

/// Query parameters for GET /accounts.
#[derive(Debug, Deserialize)]
pub struct ListAccountsQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<Uuid>,
}

/// List accounts for a user, each enriched with its bank's name.
///
/// # Endpoint
///
/// `GET /accounts?userId=<uuid>`
///
/// # Scoping Rule
///
/// An absent `userId` returns an empty list, not every account and not
/// an error. Listing is always owner-scoped.
///
/// # Response (200 OK)
///
/// ```json
/// [
///   {
///     "id": "770e8400-...",
///     "userId": "550e8400-...",
///     "bankId": "660e8400-...",
///     "bankName": "Chase",
///     "accountNumber": "ACC00000101",
///     "type": "savings",
///     "balance": "1500.00",
///     "isLinked": true,
///     "createdAt": "2025-12-20T10:00:00Z"
///   }
/// ]
/// ```
pub async fn list_accounts(
    State(pool): State<DbPool>,
    Query(query): Query<ListAccountsQuery>,
) -> Result<Json<Vec<AccountResponse>>, AppError> {
    let Some(user_id) = query.user_id else {
        return Ok(Json(Vec::new()));
    };

    let accounts = account_service::list_by_user(&pool, user_id).await?;

    // One bank lookup per account; N is small per user
    let mut responses = Vec::with_capacity(accounts.len());
    for account in accounts {
        responses.push(account_service::enrich(&pool, account).await?);
    }

    Ok(Json(responses))
}

/// Create a new account.
///
/// # Endpoint
///
/// `POST /accounts`
///
/// # Response
///
/// - **Success (201 Created)**: the created account, enriched
/// - **Error (400)**: `userId` or `bankId` references nothing
/// - **Error (500)**: database error
pub async fn create_account(
    State(pool): State<DbPool>,
    Json(request): Json<CreateAccountRequest>,
) -> Result<impl IntoResponse, AppError> {
    let account = account_service::create(&pool, request).await?;
    let response = account_service::enrich(&pool, account).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Set the linked flag on an account.
///
/// # Endpoint
///
/// `PATCH /accounts/{id}/link`
///
/// # Request Body
///
/// ```json
/// { "isLinked": true }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: the updated account, enriched
/// - **Error (404)**: no account with that id
pub async fn link_account(
    State(pool): State<DbPool>,
    Path(account_id): Path<Uuid>,
    Json(request): Json<LinkAccountRequest>,
) -> Result<Json<AccountResponse>, AppError> {
    let account = account_service::link(&pool, account_id, request.is_linked).await?;
    let response = account_service::enrich(&pool, account).await?;

    Ok(Json(response))
}
