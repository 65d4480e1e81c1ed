//! Personal Finance Tracker - Main Application Entry Point
//!
//! This is a REST API server backing a personal-finance client. It stores users,
//! their linked bank accounts, transactions, saving goals and loans, and exposes
//! them through stateless JSON endpoints.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx (async queries)
//! - **Credentials**: salted SHA-256 password hashing
//! - **Format**: JSON requests/responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create database connection pool
//! 3. Run database migrations
//! 4. Seed the bank catalog (idempotent) and, on a first run, demo data
//! 5. Build HTTP router with routes and middleware
//! 6. Start server on configured port

mod auth;
mod config;
mod db;
mod error;
mod handlers;
mod models;
mod seed;
mod services;

use rand::{SeedableRng, rngs::StdRng};
use tracing_subscriber::EnvFilter;

use axum::{
    Router,
    routing::{get, patch, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Create database pool
    let pool = db::create_pool(&config.database_url).await?;
    tracing::info!("Database pool created");

    // Run migrations
    db::run_migrations(&pool).await?;
    tracing::info!("Database migrations complete");

    // Load the static bank catalog; a second start never duplicates rows
    seed::seed_banks(&pool).await?;

    // First run only: generate demo users, accounts, transactions, goals
    // and loans with an explicitly seeded RNG
    if services::user_service::count_users(&pool).await? == 0 {
        let mut rng = StdRng::seed_from_u64(config.demo_seed);
        seed::seed_demo_data(&pool, &mut rng).await?;
    }

    // Build the router. Every endpoint is stateless and independently
    // dispatched; the pool is the only shared resource.
    let app = Router::new()
        // Account endpoints
        .route("/accounts", get(handlers::accounts::list_accounts))
        .route("/accounts", post(handlers::accounts::create_account))
        .route(
            "/accounts/{id}/link",
            patch(handlers::accounts::link_account),
        )
        // Bank catalog
        .route("/banks", get(handlers::banks::list_banks))
        // Read-only trackers
        .route("/loans", get(handlers::loans::list_loans))
        .route(
            "/saving-goals",
            get(handlers::saving_goals::list_saving_goals),
        )
        .route(
            "/transactions",
            get(handlers::transactions::list_transactions),
        )
        // User endpoints
        .route("/users", post(handlers::users::create_user))
        .route("/users/{id}", get(handlers::users::get_user))
        .route("/users/{id}/dashboard", get(handlers::users::get_dashboard))
        .route("/login", post(handlers::users::login))
        // Liveness probe
        .route("/health", get(handlers::health::health_check))
        // The browser client runs on a different origin
        .layer(CorsLayer::permissive())
        // Add distributed tracing middleware for observability
        .layer(TraceLayer::new_for_http())
        // Share database pool with all handlers via State extraction
        .with_state(pool);

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // Start serving HTTP requests
    // This blocks forever, handling requests concurrently with tokio
    axum::serve(listener, app).await?;

    Ok(())
}
