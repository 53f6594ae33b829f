//! HTTP client for the BLS timeseries endpoint.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use thiserror::Error;

use blspull_types::YearWindow;

use crate::wire::ApiRequest;

/// Default endpoint of the public BLS timeseries API.
pub const DEFAULT_ENDPOINT: &str = "https://api.bls.gov/publicAPI/v2/timeseries/data/";

/// Configuration for the fetch client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Endpoint URL for the timeseries API.
    pub endpoint: String,
    /// Request timeout. No retries are performed; a caller that wants a
    /// different bound wraps the call at this boundary.
    pub timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("blspull/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Errors that can occur while issuing the request.
#[derive(Error, Debug)]
pub enum RequestError {
    /// Transport-level failure (connect, timeout, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("server returned status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// The request payload could not be encoded.
    #[error("failed to encode request payload: {0}")]
    Encode(#[from] serde_json::Error),
}

/// HTTP client issuing the single POST per fetch cycle.
#[derive(Debug, Clone)]
pub struct BlsClient {
    client: Client,
    config: ClientConfig,
}

impl BlsClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Requests the given series over a year window, returning the raw
    /// response body.
    ///
    /// Interpreting the body is the parser's job; keeping the transport and
    /// the shape check separate lets a malformed 200-response surface as
    /// `MalformedResponse` rather than a transport failure.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    pub async fn fetch_window(
        &self,
        series_ids: Vec<&str>,
        window: YearWindow,
    ) -> Result<String, RequestError> {
        let payload = serde_json::to_string(&ApiRequest::new(series_ids, window))?;

        let response = self
            .client
            .post(&self.config.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RequestError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("blspull/"));
    }

    #[tokio::test]
    async fn test_client_creation() {
        let client = BlsClient::with_defaults();
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        // Port 9 (discard) is closed on loopback; the connection is refused
        // locally without touching the network.
        let config = ClientConfig {
            endpoint: "http://127.0.0.1:9/timeseries/data/".to_string(),
            timeout: Duration::from_secs(2),
            ..Default::default()
        };
        let client = BlsClient::new(config).unwrap();

        let result = client
            .fetch_window(vec!["LNS14000000"], YearWindow::ending(2024))
            .await;
        assert!(matches!(result, Err(RequestError::Http(_))));
    }
}
