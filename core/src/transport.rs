//! The I/O seam between the core and its host.

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};

/// Executes one HTTP round trip.
///
/// Implementations return `Ok` for any response the server produced,
/// whatever its status; status interpretation belongs to
/// [`ApiClient`](crate::ApiClient). `Err` is reserved for requests that got
/// no response at all and should use [`TransportError::Connection`].
///
/// One attempt per call. No retries, no timeouts.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}
