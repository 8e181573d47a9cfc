//! Account Ledger Service
//!
//! An in-memory bank-account ledger served over HTTP. Customers open an
//! account keyed by their cpf, then deposit, withdraw, and read their
//! balance and statement. Nothing is persisted; state lives for the
//! lifetime of the process.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Storage**: a lock-guarded in-memory customer directory
//! - **Identification**: trusted identity header (default `cpf`), resolved by middleware
//! - **Format**: JSON requests/responses

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Build the HTTP router with all routes and middleware.
pub fn router(state: AppState) -> Router {
    // Routes that act on the customer named by the identity header
    let customer_routes = Router::new()
        .route(
            "/account",
            get(handlers::accounts::get_account)
                .put(handlers::accounts::update_account)
                .delete(handlers::accounts::delete_account),
        )
        .route("/statement", get(handlers::statements::get_statement))
        .route(
            "/statement/date",
            get(handlers::statements::get_statement_by_date),
        )
        .route("/deposit", post(handlers::transactions::deposit))
        .route("/withdraw", post(handlers::transactions::withdraw))
        .route("/balance", get(handlers::transactions::get_balance))
        // Unknown customers never reach the handlers
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::identify::identify_customer,
        ));

    Router::new()
        // Public routes
        .route("/health", get(handlers::health::health_check))
        .route("/account", post(handlers::accounts::create_account))
        .merge(customer_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
