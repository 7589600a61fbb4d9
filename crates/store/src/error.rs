//! Store error types.

use sei_client::ClientError;
use thiserror::Error;

/// Errors raised by the query stores.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying client call failed.
    #[error("query {op} failed: {source}")]
    Query {
        op: &'static str,
        #[source]
        source: ClientError,
    },

    /// A request could not be serialized into a cache key.
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}

impl StoreError {
    pub(crate) fn query(op: &'static str) -> impl FnOnce(ClientError) -> Self {
        move |source| Self::Query { op, source }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Log a failed subscription replay and keep the first failure for the
/// caller. Used by the refresh passes, which must not let one broken
/// subscription starve the rest.
pub(crate) fn fold_refresh_failure(first: &mut Option<StoreError>, err: StoreError) {
    tracing::warn!(error = %err, "subscription refresh failed");
    if first.is_none() {
        *first = Some(err);
    }
}
