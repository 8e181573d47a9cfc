//! Shared application state.
//!
//! The customer directory is the only process-wide data. It sits behind an
//! async `RwLock`: lookups share a read guard, every mutation takes the write
//! guard for its whole check-then-append sequence.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    middleware::identify::{HeaderIdentity, IdentityResolver},
    services::customer_service::CustomerDirectory,
};

/// Type alias for the lock-guarded directory handle.
pub type SharedDirectory = Arc<RwLock<CustomerDirectory>>;

/// State cloned into every handler and middleware.
#[derive(Clone)]
pub struct AppState {
    pub directory: SharedDirectory,
    pub identity: Arc<dyn IdentityResolver>,
}

impl AppState {
    pub fn new(identity: impl IdentityResolver + 'static) -> Self {
        Self {
            directory: Arc::new(RwLock::new(CustomerDirectory::new())),
            identity: Arc::new(identity),
        }
    }

    /// State that identifies customers by the default `cpf` header.
    pub fn with_cpf_header() -> Self {
        Self::new(HeaderIdentity::cpf())
    }
}
