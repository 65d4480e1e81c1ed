//! Bank catalog model.
//!
//! Banks are static reference data: seeded once at startup, read-only
//! afterwards. Accounts reference them by id; nothing owns them.

use serde::Serialize;
use uuid::Uuid;

/// Represents a bank record from the database.
///
/// `icon` is a symbolic name the client maps to an icon asset
/// (e.g. "Landmark", "Globe"), not an image URL.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bank {
    pub id: Uuid,
    pub name: String,
    pub icon: Option<String>,
}
