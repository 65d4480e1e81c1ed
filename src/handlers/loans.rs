//! Loan HTTP handler.

use crate::{db::DbPool, error::AppError, models::loan::Loan};
use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use uuid::Uuid;

/// Query parameters for GET /loans.
#[derive(Debug, Deserialize)]
pub struct ListLoansQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<Uuid>,
}

/// List a user's loans.
///
/// # Endpoint
///
/// `GET /loans?userId=<uuid>`
///
/// An absent `userId` returns an empty list, mirroring the account
/// listing's scoping rule.
pub async fn list_loans(
    State(pool): State<DbPool>,
    Query(query): Query<ListLoansQuery>,
) -> Result<Json<Vec<Loan>>, AppError> {
    let Some(user_id) = query.user_id else {
        return Ok(Json(Vec::new()));
    };

    let loans = sqlx::query_as::<_, Loan>("SELECT * FROM loans WHERE user_id = $1")
        .bind(user_id)
        .fetch_all(&pool)
        .await?;

    Ok(Json(loans))
}
