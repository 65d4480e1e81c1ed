//! User HTTP handlers.
//!
//! This module implements the user-facing API endpoints:
//! - POST /users - Register a new user
//! - GET /users/{id} - Get a user by id
//! - POST /login - Check credentials and return the user
//! - GET /users/{id}/dashboard - Dashboard container for a user

use crate::{
    db::DbPool,
    error::AppError,
    models::user::{CreateUserRequest, DashboardResponse, LoginRequest, UserResponse},
    services::user_service,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

/// Register a new user.
///
/// # Endpoint
///
/// `POST /users`
///
/// # Request Body
///
/// ```json
/// {
///   "fullName": "Ann Lee",
///   "mobile": "5551234567",
///   "email": "ann@example.com",
///   "password": "pw1"
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: the created user with server-assigned
///   id, derived username and applied defaults
/// - **Error (400)**: a user with this mobile number already exists
/// - **Error (500)**: database error
///
/// The mobile number is pre-checked for a friendly conflict message; the
/// UNIQUE constraint behind [`user_service::create_user`] remains the
/// authoritative guard, so a concurrent duplicate registration still maps
/// to the same 400.
pub async fn create_user(
    State(pool): State<DbPool>,
    Json(request): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    if user_service::get_user_by_mobile(&pool, &request.mobile)
        .await?
        .is_some()
    {
        return Err(AppError::MobileAlreadyRegistered);
    }

    let user = user_service::create_user(&pool, request).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Get a user by id.
///
/// # Endpoint
///
/// `GET /users/{id}`
///
/// # Response
///
/// - **Success (200 OK)**: the user
/// - **Error (404)**: no user with that id
pub async fn get_user(
    State(pool): State<DbPool>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<UserResponse>, AppError> {
    let user = user_service::get_user_by_id(&pool, user_id)
        .await?
        .ok_or(AppError::UserNotFound)?;

    Ok(Json(user.into()))
}

/// Log a user in.
///
/// # Endpoint
///
/// `POST /login`
///
/// # Request Body
///
/// ```json
/// {
///   "mobile_number": "5551234567",
///   "password": "pw1"
/// }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: the authenticated user
/// - **Error (400)**: mobile number or password missing from the request
/// - **Error (401)**: credentials invalid; the response is identical for
///   an unknown mobile and a wrong password
///
/// Field presence is checked before the user directory is touched.
pub async fn login(
    State(pool): State<DbPool>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let (Some(mobile), Some(password)) = (request.mobile_number, request.password) else {
        return Err(AppError::InvalidRequest(
            "Mobile number and password are required".to_string(),
        ));
    };

    if !user_service::authenticate(&pool, &mobile, &password).await? {
        return Err(AppError::InvalidCredentials);
    }

    let user = user_service::get_user_by_mobile(&pool, &mobile)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    Ok(Json(user.into()))
}

/// Dashboard for a user.
///
/// # Endpoint
///
/// `GET /users/{id}/dashboard`
///
/// # Response (200 OK)
///
/// ```json
/// { "user": { ... } }
/// ```
///
/// Returns the user wrapped in a keyed container. This is the seam where
/// account/transaction/goal/loan summaries will be aggregated later; for
/// now it carries only the user.
pub async fn get_dashboard(
    State(pool): State<DbPool>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<DashboardResponse>, AppError> {
    let user = user_service::get_user_by_id(&pool, user_id)
        .await?
        .ok_or(AppError::UserNotFound)?;

    Ok(Json(DashboardResponse { user: user.into() }))
}
