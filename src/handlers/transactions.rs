//! Ledger HTTP handlers.
//!
//! This module implements the money-moving endpoints:
//! - POST /deposit - Add a credit to the identified customer
//! - POST /withdraw - Add a debit if the balance covers it
//! - GET /balance - Current balance

use axum::{
    Extension, Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::Utc;

use crate::{
    error::AppError,
    middleware::identify::Identity,
    models::statement::{DepositRequest, WithdrawRequest},
    services::ledger_service,
    state::AppState,
};

/// Deposit into the identified customer's account.
///
/// # Request Body
///
/// ```json
/// { "description": "Salary", "amount": 1500 }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: empty body
pub async fn deposit(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    payload: Result<Json<DepositRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(request) = payload?;

    let mut directory = state.directory.write().await;
    let customer = directory
        .find_by_tax_id_mut(&identity.cpf)
        .ok_or(AppError::CustomerNotFound)?;

    ledger_service::deposit(customer, request.amount, request.description, Utc::now());

    Ok(StatusCode::CREATED)
}

/// Withdraw from the identified customer's account.
///
/// # Validation
///
/// - Balance must be at least `amount`
///
/// The write guard is held across the balance check and the append.
pub async fn withdraw(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    payload: Result<Json<WithdrawRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(request) = payload?;

    let mut directory = state.directory.write().await;
    let customer = directory
        .find_by_tax_id_mut(&identity.cpf)
        .ok_or(AppError::CustomerNotFound)?;

    ledger_service::withdraw(customer, request.amount, Utc::now())?;

    Ok(StatusCode::CREATED)
}

pub async fn get_balance(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<f64>, AppError> {
    let directory = state.directory.read().await;
    let customer = directory
        .find_by_tax_id(&identity.cpf)
        .ok_or(AppError::CustomerNotFound)?;

    Ok(Json(ledger_service::compute_balance(&customer.statement)))
}
