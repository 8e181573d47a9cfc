//! Statement HTTP handlers.
//!
//! - GET /statement - Full statement of the identified customer
//! - GET /statement/date?date=YYYY-MM-DD - Entries created on one day

use axum::{
    Extension, Json,
    extract::{Query, State, rejection::QueryRejection},
};
use chrono::Local;

use crate::{
    error::AppError,
    middleware::identify::Identity,
    models::statement::{StatementDateQuery, StatementEntry},
    services::ledger_service,
    state::AppState,
};

pub async fn get_statement(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<Vec<StatementEntry>>, AppError> {
    let directory = state.directory.read().await;
    let customer = directory
        .find_by_tax_id(&identity.cpf)
        .ok_or(AppError::CustomerNotFound)?;

    Ok(Json(customer.statement.clone()))
}

/// Statement entries created on `date`, in the server's local time zone.
///
/// A day without entries yields an empty array, not an error.
pub async fn get_statement_by_date(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    query: Result<Query<StatementDateQuery>, QueryRejection>,
) -> Result<Json<Vec<StatementEntry>>, AppError> {
    let Query(query) = query?;

    let directory = state.directory.read().await;
    let customer = directory
        .find_by_tax_id(&identity.cpf)
        .ok_or(AppError::CustomerNotFound)?;

    Ok(Json(ledger_service::filter_by_date(
        &customer.statement,
        query.date,
        &Local,
    )))
}
