//! Error types for the Targets / Todo client.
//!
//! # Design
//! Every failure of a round trip is a [`TransportError`]: the connection
//! failed, the server answered non-2xx, or a body could not be
//! (de)serialized. The reducer treats all variants the same way (log, leave
//! state untouched); the variants exist so callers and tests can tell them
//! apart. Errors are `Clone` because they travel inside actions.

use thiserror::Error;

/// A failed request/response round trip.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request never produced a response.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The server returned a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Decode(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Encode(String),
}

/// Errors returned by [`Store`](crate::Store) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The action produced no request, e.g. `save` with no record open for
    /// editing.
    #[error("no request was sent")]
    NothingSent,
}
