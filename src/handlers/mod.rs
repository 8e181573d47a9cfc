//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, query string, identity)
//! 2. Runs directory or ledger logic under the directory lock
//! 3. Returns HTTP response (JSON, status code)

/// Account management endpoints
pub mod accounts;
/// Liveness endpoint
pub mod health;
/// Statement listing endpoints
pub mod statements;
/// Deposit, withdrawal and balance endpoints
pub mod transactions;
