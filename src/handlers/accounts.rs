//! Account management HTTP handlers.
//!
//! This module implements the account-related API endpoints:
//! - POST /account - Open a new account
//! - GET /account - Get the identified customer
//! - PUT /account - Rename the identified customer
//! - DELETE /account - Close the identified customer's account

use axum::{
    Extension, Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{
    error::AppError,
    middleware::identify::Identity,
    models::customer::{CreateAccountRequest, Customer, UpdateAccountRequest},
    state::AppState,
};

/// Open a new account.
///
/// # Endpoint
///
/// `POST /account`
///
/// # Request Body
///
/// ```json
/// { "cpf": "12345678900", "name": "Alice" }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: echoes the request body
/// - **Error (400)**: cpf already registered, or malformed body
pub async fn create_account(
    State(state): State<AppState>,
    payload: Result<Json<CreateAccountRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateAccountRequest>), AppError> {
    let Json(request) = payload?;

    state
        .directory
        .write()
        .await
        .insert(request.cpf.clone(), request.name.clone())?;

    Ok((StatusCode::CREATED, Json(request)))
}

/// Get the identified customer, statement included.
///
/// # Endpoint
///
/// `GET /account` with the `cpf` header
pub async fn get_account(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<Customer>, AppError> {
    let directory = state.directory.read().await;
    let customer = directory
        .find_by_tax_id(&identity.cpf)
        .ok_or(AppError::CustomerNotFound)?;

    Ok(Json(customer.clone()))
}

/// Rename the identified customer.
///
/// # Endpoint
///
/// `PUT /account` with the `cpf` header
///
/// # Response
///
/// - **Success (201 Created)**: the updated customer record
pub async fn update_account(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    payload: Result<Json<UpdateAccountRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Customer>), AppError> {
    let Json(request) = payload?;

    let mut directory = state.directory.write().await;
    let customer = directory.update_name(&identity.cpf, request.name)?;

    Ok((StatusCode::CREATED, Json(customer.clone())))
}

/// Close the identified customer's account.
///
/// # Endpoint
///
/// `DELETE /account` with the `cpf` header
///
/// # Response
///
/// - **Success (200 OK)**: the customers that remain, in insertion order
pub async fn delete_account(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<Vec<Customer>>, AppError> {
    let mut directory = state.directory.write().await;

    // Resolved by the middleware but may have been removed since
    if directory.find_by_tax_id(&identity.cpf).is_none() {
        return Err(AppError::CustomerNotFound);
    }
    directory.remove(&identity.cpf)?;

    let remaining = directory.list().into_iter().cloned().collect();
    Ok(Json(remaining))
}
