// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for the clock.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;

use crate::error::ProtocolError;
use crate::protocol::{Endpoint, Protocol, Response};

// ============================================================================
// HttpConfig
// ============================================================================

/// Connection parameters for a clock reachable over HTTP.
///
/// # Examples
///
/// ```
/// use nixie_lib::protocol::HttpConfig;
/// use std::time::Duration;
///
/// let config = HttpConfig::new("nixie.local")
///     .with_port(8080)
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(config.base_url(), "http://nixie.local:8080");
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    host: String,
    port: u16,
    use_https: bool,
    timeout: Duration,
}

impl HttpConfig {
    /// Default HTTP port.
    pub const DEFAULT_PORT: u16 = 80;
    /// Default HTTPS port.
    pub const DEFAULT_HTTPS_PORT: u16 = 443;
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a configuration for the given hostname or IP address.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            use_https: false,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Enables HTTPS.
    ///
    /// If the port is still the HTTP default it becomes 443.
    #[must_use]
    pub fn with_https(mut self) -> Self {
        self.use_https = true;
        if self.port == Self::DEFAULT_PORT {
            self.port = Self::DEFAULT_HTTPS_PORT;
        }
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns whether HTTPS is enabled.
    #[must_use]
    pub fn use_https(&self) -> bool {
        self.use_https
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the base URL from this configuration.
    #[must_use]
    pub fn base_url(&self) -> String {
        let scheme = if self.use_https { "https" } else { "http" };
        let port_suffix = if (self.use_https && self.port == Self::DEFAULT_HTTPS_PORT)
            || (!self.use_https && self.port == Self::DEFAULT_PORT)
        {
            String::new()
        } else {
            format!(":{}", self.port)
        };
        format!("{scheme}://{}{port_suffix}", self.host)
    }

    /// Creates an [`HttpClient`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the host is empty or the HTTP client cannot be
    /// created.
    pub fn into_client(self) -> Result<HttpClient, ProtocolError> {
        if self.host.trim().is_empty() {
            return Err(ProtocolError::InvalidAddress("host is required".to_string()));
        }
        let base_url = self.base_url();
        HttpClient::with_base_url(base_url, self.timeout)
    }
}

// ============================================================================
// HttpClient
// ============================================================================

/// HTTP client for the clock's JSON API.
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: Client,
}

impl HttpClient {
    /// Creates a client for a host, or for a full `http(s)://` base URL.
    ///
    /// # Errors
    ///
    /// Returns error if the host is empty or the HTTP client cannot be
    /// created.
    pub fn new(host: impl Into<String>) -> Result<Self, ProtocolError> {
        let host = host.into();
        if host.trim().is_empty() {
            return Err(ProtocolError::InvalidAddress("host is required".to_string()));
        }
        let base_url = if host.starts_with("http://") || host.starts_with("https://") {
            host.trim_end_matches('/').to_string()
        } else {
            format!("http://{host}")
        };
        Self::with_base_url(base_url, HttpConfig::DEFAULT_TIMEOUT)
    }

    fn with_base_url(base_url: String, timeout: Duration) -> Result<Self, ProtocolError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(Self { base_url, client })
    }

    /// Returns the base URL of the clock.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    async fn read_response(response: reqwest::Response) -> Result<Response, ProtocolError> {
        let status = response.status();
        let body = response.text().await.map_err(ProtocolError::Http)?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), body = %body, "Clock rejected request");
            return Err(ProtocolError::ConnectionFailed(format!(
                "HTTP {} - {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        tracing::debug!(body = %body, "Received HTTP response");

        Ok(Response::new(body))
    }
}

impl Protocol for HttpClient {
    async fn get(&self, endpoint: Endpoint) -> Result<Response, ProtocolError> {
        let url = self.url(endpoint);

        tracing::debug!(url = %url, "Sending HTTP GET");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ProtocolError::Http)?;

        Self::read_response(response).await
    }

    async fn post(&self, endpoint: Endpoint, body: String) -> Result<Response, ProtocolError> {
        let url = self.url(endpoint);

        tracing::debug!(url = %url, body = %body, "Sending HTTP POST");

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(ProtocolError::Http)?;

        Self::read_response(response).await
    }
}
