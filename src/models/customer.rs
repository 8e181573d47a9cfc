//! Customer data model and account request types.
//!
//! This module defines:
//! - `Customer`: a directory record with its statement
//! - `CreateAccountRequest`: request body for opening an account
//! - `UpdateAccountRequest`: request body for renaming an account

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::statement::StatementEntry;

/// A customer record held in the directory.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "550e8400-e29b-41d4-a716-446655440000",
///   "cpf": "12345678900",
///   "name": "Alice",
///   "statement": []
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Customer {
    /// Assigned at creation, never changes
    pub id: Uuid,

    /// Tax identifier, unique across the directory
    pub cpf: String,

    pub name: String,

    /// Append-only, in creation order
    pub statement: Vec<StatementEntry>,
}

impl Customer {
    pub fn new(cpf: String, name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            cpf,
            name,
            statement: Vec::new(),
        }
    }
}

/// Request body for `POST /account`.
///
/// Serialized back as-is in the 201 response.
///
/// ```json
/// { "cpf": "12345678900", "name": "Alice" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAccountRequest {
    pub cpf: String,
    pub name: String,
}

/// Request body for `PUT /account`.
#[derive(Debug, Deserialize)]
pub struct UpdateAccountRequest {
    pub name: String,
}
