//! Wire types for the forwarder proxy API.

use serde::Deserialize;

/// A mail forwarder record as returned by `GET /api/list/{domain}`.
///
/// Only the fields this client consumes are typed; unrecognized fields
/// in the response are ignored during deserialization.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Forwarder {
    /// Full forwarder address (`alias@domain`).
    pub email: String,
    /// Destination addresses the alias forwards to.
    #[serde(default)]
    pub destinations: Vec<String>,
    /// Alias local part.
    #[serde(default)]
    pub alias: String,
}

/// Error body returned by the proxy on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    /// Human-readable error message.
    pub error: String,
}
