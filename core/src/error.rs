//! Error types for the book store client.
//!
//! # Design
//! `EmptyBookId` gets a dedicated variant because it is the one failure the
//! client raises before any request exists (update/delete preconditions).
//! Store rejections (HTTP 400) are separated from other unexpected statuses
//! so callers can tell "the store refused these fields" from "something went
//! wrong on the wire"; both retain the raw status and body for debugging.
//!
//! `Transport` is constructed by the host when the round-trip itself fails
//! (connection refused, timeout) and fed back through the controller's
//! `finish_*` methods.

use thiserror::Error;

/// Errors raised while building requests for, or interpreting responses
/// from, the book store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Update or delete was invoked with an empty `book_id`; no request was
    /// built and the store was never contacted.
    #[error("book_id must not be empty")]
    EmptyBookId,

    /// The store rejected the request contents (HTTP 400).
    #[error("store rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The store returned an unexpected non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The request round-trip could not complete. Reported by the host.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

/// The three failure classes the controller reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Client-side check failed; the store was never called.
    Precondition,
    /// The store rejected the field contents.
    Validation,
    /// The request could not complete or its response was unusable.
    Transport,
}

impl StoreError {
    pub fn kind(&self) -> FailureKind {
        match self {
            StoreError::EmptyBookId => FailureKind::Precondition,
            StoreError::Rejected { .. } => FailureKind::Validation,
            StoreError::Http { .. }
            | StoreError::Transport(_)
            | StoreError::Deserialization(_)
            | StoreError::Serialization(_) => FailureKind::Transport,
        }
    }
}
