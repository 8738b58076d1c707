//! HTTP transport used by [`Client`](crate::Client) to issue GET requests.

use std::future::Future;
use std::time::Duration;

use url::Url;

/// Default request timeout for [`HttpTransport`].
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors reported by a [`Transport`].
#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    /// The request could not be sent or its body could not be read.
    #[error("Request failed")]
    RequestFailed,
    /// The server answered with a non-success status, with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
}

/// Performs a single GET request and returns the raw response body.
///
/// Implementations make one attempt: no retries, no request body.
pub trait Transport {
    fn get(&self, url: &Url) -> impl Future<Output = Result<String, TransportError>> + Send;
}

/// [`Transport`] backed by `reqwest`.
///
/// Each request builds a fresh `reqwest::Client` carrying the crate's user
/// agent and the configured timeout.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    timeout: Duration,
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Overrides the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &Url) -> Result<String, TransportError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("bitly_api/", env!("CARGO_PKG_VERSION")))
            .timeout(self.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                TransportError::RequestFailed
            })?;
        let resp = client.get(url.clone()).send().await.map_err(|e| {
            tracing::error!("Failed to get resource: {}", e.without_url());
            TransportError::RequestFailed
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e.without_url());
            TransportError::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(TransportError::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        Ok(body)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    match body.char_indices().nth(MAX) {
        None => body.to_string(),
        Some((idx, _)) => format!("{}...[truncated]", &body[..idx]),
    }
}
