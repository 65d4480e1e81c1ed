//! User directory service.
//!
//! This service handles:
//! - User registration defaults (username derivation, currency)
//! - Credential hashing and verification
//! - User lookup by id and by mobile number
//!
//! # Uniqueness Guarantee
//!
//! Mobile uniqueness is enforced by the UNIQUE constraint on the users
//! table. Creation is a single INSERT, so two concurrent registrations
//! with the same mobile cannot both succeed; the loser's constraint
//! violation is mapped to a conflict error here.

use chrono::Utc;

use crate::{
    auth,
    db::DbPool,
    error::{self, AppError},
    models::user::{CreateUserRequest, User},
};
use uuid::Uuid;

/// Derive a username from the full name: spaces become underscores.
///
/// Falls back to a time-based placeholder when no full name is available.
pub fn derive_username(full_name: Option<&str>) -> String {
    match full_name {
        Some(name) if !name.trim().is_empty() => name.replace(' ', "_"),
        _ => format!("user_{}", Utc::now().timestamp_millis()),
    }
}

/// Create a new user.
///
/// # Process
///
/// 1. Apply defaults: username (derived from the full name when absent),
///    currency "USD", fingerprint disabled, profile incomplete
/// 2. Generate a fresh salt and hash the password
/// 3. Insert in a single statement, letting the UNIQUE(mobile) constraint
///    arbitrate duplicates
///
/// # Errors
///
/// - `MobileAlreadyRegistered`: a user with this mobile already exists
/// - `Database`: any other database error
pub async fn create_user(pool: &DbPool, request: CreateUserRequest) -> Result<User, AppError> {
    let username = request
        .username
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| derive_username(request.full_name.as_deref()));
    let currency = request.currency.unwrap_or_else(|| "USD".to_string());
    let fingerprint_enabled = request.fingerprint_enabled.unwrap_or(false);

    let salt = auth::generate_salt();
    let password_hash = auth::hash_password(&request.password, &salt);

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (
            username,
            password_hash,
            password_salt,
            full_name,
            email,
            mobile,
            city,
            country,
            monthly_budget,
            currency,
            app_pin,
            fingerprint_enabled,
            is_profile_complete
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, false)
        RETURNING *
        "#,
    )
    .bind(username)
    .bind(password_hash)
    .bind(&salt)
    .bind(request.full_name)
    .bind(request.email)
    .bind(request.mobile)
    .bind(request.city)
    .bind(request.country)
    .bind(request.monthly_budget)
    .bind(currency)
    .bind(request.app_pin)
    .bind(fingerprint_enabled)
    .fetch_one(pool)
    .await
    .map_err(|err| {
        if error::is_unique_violation(&err) {
            AppError::MobileAlreadyRegistered
        } else {
            err.into()
        }
    })?;

    Ok(user)
}

/// Look up a user by id. Absence is reported as `None`, not an error;
/// the handler decides whether that maps to a 404.
pub async fn get_user_by_id(pool: &DbPool, user_id: Uuid) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

    Ok(user)
}

/// Look up a user by mobile number.
pub async fn get_user_by_mobile(pool: &DbPool, mobile: &str) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE mobile = $1")
        .bind(mobile)
        .fetch_optional(pool)
        .await?;

    Ok(user)
}

/// Check login credentials.
///
/// Returns true iff a user with the mobile number exists and the salted
/// hash of the supplied password matches the stored hash. Callers get a
/// single boolean, so "no such user" and "wrong password" are
/// indistinguishable from the outside.
pub async fn authenticate(pool: &DbPool, mobile: &str, password: &str) -> Result<bool, AppError> {
    let user = get_user_by_mobile(pool, mobile).await?;

    Ok(user
        .map(|u| auth::verify_password(password, &u.password_salt, &u.password_hash))
        .unwrap_or(false))
}

/// Total number of registered users.
///
/// Only consulted by the startup seeder to decide whether this is a
/// first run.
pub async fn count_users(pool: &DbPool) -> Result<i64, AppError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_derived_from_full_name() {
        assert_eq!(derive_username(Some("Ann Lee")), "Ann_Lee");
        assert_eq!(
            derive_username(Some("veerendra vishwakarma")),
            "veerendra_vishwakarma"
        );
    }

    #[test]
    fn username_without_spaces_is_unchanged() {
        assert_eq!(derive_username(Some("solo")), "solo");
    }

    #[test]
    fn missing_full_name_falls_back_to_placeholder() {
        assert!(derive_username(None).starts_with("user_"));
        assert!(derive_username(Some("  ")).starts_with("user_"));
    }
}
