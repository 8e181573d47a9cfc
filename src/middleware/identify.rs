//! Customer identification middleware.
//!
//! This middleware intercepts every account-scoped request to:
//! 1. Extract the caller's cpf through the configured `IdentityResolver`
//! 2. Verify a customer with that cpf exists in the directory
//! 3. Inject an `Identity` into the request
//! 4. Reject unknown callers with HTTP 400 before the handler runs

use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderName, header::InvalidHeaderName},
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, state::AppState};

/// Identity attached to requests that passed identification.
///
/// Only the cpf is carried. Handlers re-resolve the customer against the
/// directory under its lock, so a record is never held across requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub cpf: String,
}

/// Source of the caller's tax id.
///
/// The default implementation trusts a plain header. A resolver that checks
/// real credentials can replace it without touching the ledger.
pub trait IdentityResolver: Send + Sync {
    fn resolve(&self, headers: &HeaderMap) -> Option<String>;
}

/// Reads the cpf verbatim from a request header.
#[derive(Debug, Clone)]
pub struct HeaderIdentity {
    header: HeaderName,
}

impl HeaderIdentity {
    pub fn new(header: HeaderName) -> Self {
        Self { header }
    }

    pub fn cpf() -> Self {
        Self::new(HeaderName::from_static("cpf"))
    }

    /// Build from a configured header name.
    pub fn from_name(name: &str) -> Result<Self, InvalidHeaderName> {
        HeaderName::from_bytes(name.as_bytes()).map(Self::new)
    }
}

impl IdentityResolver for HeaderIdentity {
    fn resolve(&self, headers: &HeaderMap) -> Option<String> {
        // Any UTF-8 value, not only visible ASCII
        headers
            .get(&self.header)
            .and_then(|value| String::from_utf8(value.as_bytes().to_vec()).ok())
    }
}

/// Identification middleware function.
///
/// # Returns
///
/// - `Ok(Response)` if the customer exists (calls next handler)
/// - `Err(AppError::CustomerNotFound)` if the cpf is missing or unknown
pub async fn identify_customer(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let cpf = state
        .identity
        .resolve(request.headers())
        .ok_or(AppError::CustomerNotFound)?;

    let known = state.directory.read().await.find_by_tax_id(&cpf).is_some();
    if !known {
        tracing::warn!(cpf = %cpf, "identification failed");
        return Err(AppError::CustomerNotFound);
    }

    // Handlers extract this using Extension<Identity>
    request.extensions_mut().insert(Identity { cpf });

    Ok(next.run(request).await)
}
