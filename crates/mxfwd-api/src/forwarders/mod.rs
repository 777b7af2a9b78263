//! Forwarder proxy API client module.
//!
//! Handles HTTP requests to the proxy's `/api/list` and `/api/delete`
//! endpoints with bearer-token authentication.

mod api;
mod client;
mod types;

#[allow(clippy::module_name_repetitions)]
pub use api::{ForwarderApi, LocalForwarderApi};
#[allow(clippy::module_name_repetitions)]
pub use client::{ForwarderClient, ForwarderClientBuilder};
pub use types::{ApiErrorResponse, Forwarder};
