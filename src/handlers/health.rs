//! Health check endpoint for service monitoring.

/// Health check handler.
///
/// # Endpoint
///
/// `GET /health`
///
/// Returns the literal body `OK` with status 200. Kept as a plain
/// liveness probe; it deliberately does not touch the database.
pub async fn health_check() -> &'static str {
    "OK"
}
