//! HTTP middleware components.
//!
//! Middleware are functions that run before route handlers.
//! They can short-circuit requests (reject unknown customers) or
//! attach context the handlers extract later.

/// Customer identification middleware
pub mod identify;
