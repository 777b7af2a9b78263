//! `ForwarderClient` - forwarder proxy API client implementation.

use anyhow::{Context, Result, bail};
use reqwest::{Client, Method, Response};
use tracing::instrument;
use url::Url;

use super::api::LocalForwarderApi;
use super::types::{ApiErrorResponse, Forwarder};

/// Forwarder proxy API client.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct ForwarderClient {
    /// HTTP client.
    http_client: Client,
    /// Base URL of the proxy deployment.
    base_url: Url,
    /// Bearer API token.
    api_token: String,
}

/// Builder for `ForwarderClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct ForwarderClientBuilder {
    base_url: Option<Url>,
    api_token: Option<String>,
    user_agent: Option<String>,
}

impl ForwarderClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            api_token: None,
            user_agent: None,
        }
    }

    /// Sets the proxy base URL (required; there is no universal default).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API bearer token (required).
    #[must_use]
    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Sets the User-Agent (required).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - `base_url` is not set.
    /// - `api_token` is not set.
    /// - `user_agent` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<ForwarderClient> {
        let base_url = self.base_url.context("base_url is required")?;
        let api_token = self.api_token.context("api_token is required")?;
        let user_agent = self.user_agent.context("user_agent is required")?;

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .gzip(true)
            .build()
            .context("failed to build HTTP client")?;

        Ok(ForwarderClient {
            http_client,
            base_url,
            api_token,
        })
    }
}

impl ForwarderClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> ForwarderClientBuilder {
        ForwarderClientBuilder::new()
    }

    /// Builds a request URL by appending percent-encoded path segments.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| anyhow::anyhow!("base URL cannot be a base: {}", self.base_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Sends a request with Bearer auth and maps error statuses.
    ///
    /// A 401 is reported as an invalid credential; any other non-2xx
    /// surfaces the `error` field of the JSON body when it parses, the
    /// raw body otherwise.
    #[instrument(skip_all)]
    async fn send(&self, method: Method, url: Url) -> Result<Response> {
        tracing::debug!(%method, %url, "forwarder API request");

        let response = self
            .http_client
            .request(method, url.clone())
            .bearer_auth(&self.api_token)
            .send()
            .await
            .with_context(|| format!("request failed: {url}"))?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            bail!("Unauthorized: invalid API token");
        }

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("<failed to read body>"));
            if let Ok(error_response) = serde_json::from_str::<ApiErrorResponse>(&body) {
                bail!(
                    "forwarder API error (HTTP {}): {}",
                    status,
                    error_response.error,
                );
            }
            bail!("forwarder API error (HTTP {status}): {body}");
        }

        Ok(response)
    }
}

impl LocalForwarderApi for ForwarderClient {
    #[instrument(skip_all)]
    async fn list_forwarders(&self, domain: &str) -> Result<Vec<Forwarder>> {
        let url = self.endpoint(&["api", "list", domain])?;
        let response = self.send(Method::GET, url).await?;

        let body = response
            .text()
            .await
            .with_context(|| format!("failed to read response body: list/{domain}"))?;
        serde_json::from_str(&body)
            .with_context(|| format!("failed to decode forwarder list: list/{domain}"))
    }

    #[instrument(skip_all)]
    async fn delete_forwarder(&self, email: &str) -> Result<()> {
        let url = self.endpoint(&["api", "delete", email])?;
        self.send(Method::DELETE, url).await?;
        Ok(())
    }
}
