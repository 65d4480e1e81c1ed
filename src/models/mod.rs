//! Data models representing database entities.
//!
//! This module contains all data structures that map to database tables,
//! plus the request/response types exchanged with clients.

/// User model and auth request/response types
pub mod user;
/// Bank catalog model
pub mod bank;
/// Account model and enriched response view
pub mod account;
/// Transaction model
pub mod transaction;
/// Saving goal model
pub mod saving_goal;
/// Loan model
pub mod loan;
