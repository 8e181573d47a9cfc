//! Statement entry model and ledger request types.
//!
//! This module defines:
//! - `StatementEntry`: one credit or debit in a customer's statement
//! - `DepositRequest` / `WithdrawRequest`: request bodies for ledger operations
//! - `StatementDateQuery`: query string for the date-filtered statement

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single entry in a customer's statement.
///
/// Credits come from deposits and may carry a description. Debits come from
/// withdrawals and never do.
///
/// # JSON Example
///
/// ```json
/// {
///   "type": "credit",
///   "description": "Salary",
///   "amount": 1500.0,
///   "created_at": "2025-12-20T10:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StatementEntry {
    Credit {
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        amount: f64,
        created_at: DateTime<Utc>,
    },
    Debit {
        amount: f64,
        created_at: DateTime<Utc>,
    },
}

impl StatementEntry {
    pub fn credit(amount: f64, description: Option<String>, created_at: DateTime<Utc>) -> Self {
        StatementEntry::Credit {
            description,
            amount,
            created_at,
        }
    }

    pub fn debit(amount: f64, created_at: DateTime<Utc>) -> Self {
        StatementEntry::Debit { amount, created_at }
    }

    pub fn amount(&self) -> f64 {
        match self {
            StatementEntry::Credit { amount, .. } | StatementEntry::Debit { amount, .. } => *amount,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            StatementEntry::Credit { created_at, .. } | StatementEntry::Debit { created_at, .. } => {
                *created_at
            }
        }
    }

    /// Amount with the sign it contributes to the balance.
    pub fn signed_amount(&self) -> f64 {
        match self {
            StatementEntry::Credit { amount, .. } => *amount,
            StatementEntry::Debit { amount, .. } => -amount,
        }
    }
}

/// Request body for `POST /deposit`.
///
/// ```json
/// { "description": "Salary", "amount": 1500 }
/// ```
#[derive(Debug, Deserialize)]
pub struct DepositRequest {
    pub description: Option<String>,
    pub amount: f64,
}

/// Request body for `POST /withdraw`.
#[derive(Debug, Deserialize)]
pub struct WithdrawRequest {
    pub amount: f64,
}

/// Query string for `GET /statement/date?date=YYYY-MM-DD`.
#[derive(Debug, Deserialize)]
pub struct StatementDateQuery {
    pub date: NaiveDate,
}
