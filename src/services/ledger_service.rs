//! Ledger service - balance computation and statement entries.
//!
//! This service handles:
//! - Folding a statement into a balance
//! - Recording deposits (credits) and withdrawals (debits)
//! - Filtering a statement by calendar day
//!
//! Every function works on a customer the caller already resolved and holds
//! exclusively, so the balance check in `withdraw` and the append that follows
//! cannot interleave with another request.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::{
    error::AppError,
    models::{customer::Customer, statement::StatementEntry},
};

/// Balance of a statement: credits minus debits, folded in insertion order.
pub fn compute_balance(statement: &[StatementEntry]) -> f64 {
    statement
        .iter()
        .fold(0.0, |balance, entry| balance + entry.signed_amount())
}

/// Record a deposit.
///
/// The amount is taken as given; zero and negative values are not rejected.
pub fn deposit(
    customer: &mut Customer,
    amount: f64,
    description: Option<String>,
    at: DateTime<Utc>,
) {
    customer
        .statement
        .push(StatementEntry::credit(amount, description, at));
    tracing::debug!(cpf = %customer.cpf, amount, "credit recorded");
}

/// Record a withdrawal if the balance covers it.
///
/// # Errors
///
/// - `InsufficientFunds`: balance is below `amount`; the statement is left untouched
pub fn withdraw(customer: &mut Customer, amount: f64, at: DateTime<Utc>) -> Result<(), AppError> {
    let balance = compute_balance(&customer.statement);

    if balance < amount {
        tracing::warn!(cpf = %customer.cpf, balance, amount, "withdrawal rejected");
        return Err(AppError::InsufficientFunds);
    }

    customer.statement.push(StatementEntry::debit(amount, at));
    tracing::debug!(cpf = %customer.cpf, amount, "debit recorded");

    Ok(())
}

/// Entries created on `date`, in statement order.
///
/// The calendar day of each entry is read in `zone`; the HTTP layer passes
/// the server's local zone.
pub fn filter_by_date<Tz: TimeZone>(
    statement: &[StatementEntry],
    date: NaiveDate,
    zone: &Tz,
) -> Vec<StatementEntry> {
    statement
        .iter()
        .filter(|entry| entry.created_at().with_timezone(zone).date_naive() == date)
        .cloned()
        .collect()
}
