//! Saving goal HTTP handler.

use crate::{db::DbPool, error::AppError, models::saving_goal::SavingGoal};
use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use uuid::Uuid;

/// Query parameters for GET /saving-goals.
#[derive(Debug, Deserialize)]
pub struct ListSavingGoalsQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<Uuid>,
}

/// List a user's saving goals.
///
/// # Endpoint
///
/// `GET /saving-goals?userId=<uuid>`
///
/// An absent `userId` returns an empty list, mirroring the account
/// listing's scoping rule.
pub async fn list_saving_goals(
    State(pool): State<DbPool>,
    Query(query): Query<ListSavingGoalsQuery>,
) -> Result<Json<Vec<SavingGoal>>, AppError> {
    let Some(user_id) = query.user_id else {
        return Ok(Json(Vec::new()));
    };

    let goals = sqlx::query_as::<_, SavingGoal>("SELECT * FROM saving_goals WHERE user_id = $1")
        .bind(user_id)
        .fetch_all(&pool)
        .await?;

    Ok(Json(goals))
}
