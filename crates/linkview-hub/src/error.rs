//! Error types for linkview-hub
//!
//! Registration is the only fallible surface. Broadcast delivery and
//! translation are infallible: an untranslatable dataset is a sentinel
//! (`None` from the translator), never an error.

use thiserror::Error;

/// Result type for linkview-hub operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in linkview-hub
#[derive(Debug, Error)]
pub enum Error {
    /// The hub's client registry is at capacity
    ///
    /// The registry is left unchanged; the violated limit is carried so
    /// callers can report it.
    #[error("client registry is full ({limit} clients)")]
    ClientLimitReached {
        /// The configured capacity that was hit
        limit: usize,
    },

    /// The client handle is not registered with this hub
    #[error("client is not registered with this hub")]
    ClientNotFound,

    /// The client's dataset is already attached to a different hub
    ///
    /// A dataset reports through at most one hub. Re-registering against
    /// the same hub is fine; moving a dataset between hubs requires
    /// detaching it first.
    #[error("dataset \"{label}\" is already attached to another hub")]
    DatasetAlreadyAttached {
        /// Label of the conflicting dataset
        label: String,
    },
}

// Compile-time check that Error is Send + Sync for thread-safe error propagation.
// This function is never called but will fail to compile if the bound is not satisfied.
fn _assert_error_send_sync<T: Send + Sync>() {}
fn _error_is_send_sync() {
    _assert_error_send_sync::<Error>();
}
