//! Data models for customers and their statements.
//!
//! This module contains the in-memory records and the request/response bodies
//! exchanged over HTTP.

/// Customer record and account requests
pub mod customer;
/// Statement entries and ledger requests
pub mod statement;
