//! Error type for storage backends.

use thiserror::Error;

/// All errors that can be returned by a storage backend.
///
/// Legitimate absence of data is NOT an error: lookups return
/// `Ok(None)` when no record exists. A `StoreError` always means the
/// backend itself failed, so callers never mistake an outage for "no
/// record" and never mint a default full-wage result from one.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend could not be reached.
    #[error("store backend unavailable: {message}")]
    Unavailable {
        /// A description of the connectivity failure.
        message: String,
    },

    /// The backend reported an error while serving the request.
    #[error("store backend error: {message}")]
    Backend {
        /// A description of the backend failure.
        message: String,
    },
}
