//! `ForwarderApi` trait definition.
#![allow(clippy::future_not_send)]

use anyhow::Result;

use super::types::Forwarder;

/// Forwarder proxy API trait.
///
/// Abstracts API operations for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(ForwarderApi: Send)]
pub trait LocalForwarderApi {
    /// Lists the forwarders configured for a domain.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the bearer credential
    /// is rejected, or the response body cannot be decoded.
    async fn list_forwarders(&self, domain: &str) -> Result<Vec<Forwarder>>;

    /// Deletes a forwarder by its full email address.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the proxy reports
    /// the deletion failed.
    async fn delete_forwarder(&self, email: &str) -> Result<()>;
}
