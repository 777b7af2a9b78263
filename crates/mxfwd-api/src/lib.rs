//! API client library for mxfwd.
//!
//! Provides a client for the MXRoute forwarder proxy REST API.

/// Forwarder proxy API client.
pub mod forwarders;
