//! User data models and API request/response types.
//!
//! This module defines:
//! - `User`: Database entity representing a registered user
//! - `CreateUserRequest`: Request body for registration
//! - `LoginRequest`: Request body for login
//! - `UserResponse`: Response body returned to clients (no credentials)
//! - `DashboardResponse`: Keyed container returned by the dashboard endpoint

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a user record from the database.
///
/// # Database Table
///
/// Maps to the `users` table. The mobile number is unique per user,
/// enforced by a database constraint.
///
/// # Credential Storage
///
/// `password_hash` and `password_salt` hold a salted SHA-256 digest.
/// The plaintext password is never persisted, and this struct is never
/// serialized directly; responses go through [`UserResponse`].
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique identifier for this user
    pub id: Uuid,

    /// Display/login name, derived from the full name when not supplied
    pub username: String,

    /// Hex-encoded SHA-256 of salt + password
    pub password_hash: String,

    /// Hex-encoded random salt, one per user
    pub password_salt: String,

    pub full_name: Option<String>,
    pub email: Option<String>,

    /// Mobile number, the login identifier. Unique.
    pub mobile: String,

    pub city: Option<String>,
    pub country: Option<String>,

    /// Self-declared monthly budget
    pub monthly_budget: Option<Decimal>,

    /// Currency code (ISO 4217, 3 letters), defaults to "USD"
    pub currency: String,

    /// Optional in-app PIN set during profile completion
    pub app_pin: Option<String>,

    pub fingerprint_enabled: bool,
    pub is_profile_complete: bool,

    /// Timestamp when the user registered. Immutable.
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a new user.
///
/// # JSON Example
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
/// # Defaults
///
/// - `username`: derived from `fullName` with spaces replaced by
///   underscores; a time-based placeholder if `fullName` is also absent
/// - `currency`: "USD"
/// - `fingerprintEnabled`: false
/// - profile completeness always starts false
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub username: Option<String>,

    /// Plaintext password, hashed before storage and dropped afterwards
    pub password: String,

    pub full_name: Option<String>,
    pub email: Option<String>,
    pub mobile: String,
    pub city: Option<String>,
    pub country: Option<String>,
    pub monthly_budget: Option<Decimal>,
    pub currency: Option<String>,
    pub app_pin: Option<String>,
    pub fingerprint_enabled: Option<bool>,
}

/// Request body for login.
///
/// Field names match the client contract exactly (`mobile_number`, not
/// camelCase). Both fields are optional at the deserialization layer so
/// a missing field produces a 400 with a clear message instead of a
/// framework rejection.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub mobile_number: Option<String>,
    pub password: Option<String>,
}

/// Response body for user endpoints.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "550e8400-e29b-41d4-a716-446655440000",
///   "username": "Ann_Lee",
///   "fullName": "Ann Lee",
///   "mobile": "5551234567",
///   "currency": "USD",
///   "fingerprintEnabled": false,
///   "isProfileComplete": false,
///   "createdAt": "2025-12-20T10:00:00Z"
/// }
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub mobile: String,
    pub city: Option<String>,
    pub country: Option<String>,
    pub monthly_budget: Option<Decimal>,
    pub currency: String,
    pub app_pin: Option<String>,
    pub fingerprint_enabled: bool,
    pub is_profile_complete: bool,
    pub created_at: DateTime<Utc>,
}

/// Convert database User to API UserResponse.
///
/// This transformation drops `password_hash` and `password_salt`.
impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            full_name: user.full_name,
            email: user.email,
            mobile: user.mobile,
            city: user.city,
            country: user.country,
            monthly_budget: user.monthly_budget,
            currency: user.currency,
            app_pin: user.app_pin,
            fingerprint_enabled: user.fingerprint_enabled,
            is_profile_complete: user.is_profile_complete,
            created_at: user.created_at,
        }
    }
}

/// Response body for the dashboard endpoint.
///
/// Currently carries only the user record in a keyed container. This is
/// the aggregation point where account/transaction/goal/loan summaries
/// would be merged later, so it stays a named struct instead of returning
/// the user payload bare.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub user: UserResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: Uuid::nil(),
            username: "Ann_Lee".to_string(),
            password_hash: "deadbeef".to_string(),
            password_salt: "cafe".to_string(),
            full_name: Some("Ann Lee".to_string()),
            email: Some("ann@example.com".to_string()),
            mobile: "5551234567".to_string(),
            city: None,
            country: None,
            monthly_budget: None,
            currency: "USD".to_string(),
            app_pin: None,
            fingerprint_enabled: false,
            is_profile_complete: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn user_response_uses_camel_case_and_drops_credentials() {
        let value =
            serde_json::to_value(UserResponse::from(sample_user())).expect("serializes");
        let obj = value.as_object().expect("object");

        assert!(obj.contains_key("fullName"));
        assert!(obj.contains_key("fingerprintEnabled"));
        assert!(obj.contains_key("isProfileComplete"));
        assert!(obj.contains_key("createdAt"));
        // No credential material in any spelling
        assert!(!obj.keys().any(|k| k.to_lowercase().contains("password")));
        assert!(!obj.keys().any(|k| k.to_lowercase().contains("salt")));
        assert!(!obj.keys().any(|k| k.to_lowercase().contains("hash")));
    }

    #[test]
    fn dashboard_response_wraps_user_under_key() {
        let response = DashboardResponse {
            user: sample_user().into(),
        };
        let value = serde_json::to_value(response).expect("serializes");
        assert_eq!(value["user"]["username"], "Ann_Lee");
    }

    #[test]
    fn login_request_accepts_client_field_names() {
        let request: LoginRequest =
            serde_json::from_str(r#"{"mobile_number":"5551234567","password":"pw1"}"#)
                .expect("deserializes");
        assert_eq!(request.mobile_number.as_deref(), Some("5551234567"));
        assert_eq!(request.password.as_deref(), Some("pw1"));

        // Missing fields deserialize as None; the handler turns them into 400
        let partial: LoginRequest = serde_json::from_str(r#"{}"#).expect("deserializes");
        assert!(partial.mobile_number.is_none());
        assert!(partial.password.is_none());
    }

    #[test]
    fn create_user_request_accepts_camel_case() {
        let request: CreateUserRequest = serde_json::from_str(
            r#"{"fullName":"Ann Lee","mobile":"5551234567","password":"pw1","monthlyBudget":"2500.00"}"#,
        )
        .expect("deserializes");
        assert_eq!(request.full_name.as_deref(), Some("Ann Lee"));
        assert!(request.monthly_budget.is_some());
        assert!(request.username.is_none());
    }
}
