//! Business logic services.
//!
//! Services contain the core logic separated from HTTP handlers: the
//! customer directory and the ledger operations over a customer's statement.

pub mod customer_service;
pub mod ledger_service;
