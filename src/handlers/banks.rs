//! Bank catalog HTTP handler.

use crate::{db::DbPool, error::AppError, models::bank::Bank};
use axum::{Json, extract::State};

/// List every bank in the catalog, in storage order.
///
/// # Endpoint
///
/// `GET /banks`
///
/// # Response (200 OK)
///
/// ```json
/// [
///   { "id": "660e8400-...", "name": "Chase", "icon": "Landmark" },
///   { "id": "770e8400-...", "name": "Citi", "icon": "Globe" }
/// ]
/// ```
pub async fn list_banks(State(pool): State<DbPool>) -> Result<Json<Vec<Bank>>, AppError> {
    let banks = sqlx::query_as::<_, Bank>("SELECT * FROM banks")
        .fetch_all(&pool)
        .await?;

    Ok(Json(banks))
}
