//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, etc.)
//! 2. Performs business logic (database queries, validation)
//! 3. Returns HTTP response (JSON, status code)

/// Account endpoints (list, create, link)
pub mod accounts;
/// Bank catalog endpoint
pub mod banks;
/// Liveness endpoint
pub mod health;
/// Loan listing endpoint
pub mod loans;
/// Saving goal listing endpoint
pub mod saving_goals;
/// Transaction listing endpoint
pub mod transactions;
/// User registration, lookup, login and dashboard endpoints
pub mod users;
