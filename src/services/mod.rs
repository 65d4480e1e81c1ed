//! Business logic services.
//!
//! Services contain core business logic separated from HTTP handlers.
//! They own the multi-step operations: applying registration defaults,
//! credential hashing and checking, and account enrichment.

pub mod account_service;
pub mod user_service;
