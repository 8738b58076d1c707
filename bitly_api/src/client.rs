//! HTTP client for the bit.ly v2 REST API.

use serde_json::Value;
use url::Url;

use crate::{
    query::{InfoQuery, LinkRef, Query, ShortenQuery},
    transport::{HttpTransport, Transport},
    types::{Envelope, ResultsMap},
    Error,
};

/// API version sent with every request unless overridden.
pub const DEFAULT_VERSION: &str = "2.0.1";

/// Production API host.
pub const DEFAULT_BASE_URL: &str = "http://api.bit.ly";

/// Client for the bit.ly API.
///
/// Holds the account login, API key and protocol version; these never
/// change after construction. Each operation performs exactly one GET
/// through the [`Transport`] and decodes the reply into an [`Envelope`].
/// Remote failures come back as [`Error`] values carrying that envelope.
pub struct Client<T = HttpTransport> {
    login: String,
    api_key: String,
    version: String,
    /// Base URL for the API. Defaults to [`DEFAULT_BASE_URL`].
    base_api_url: String,
    transport: T,
}

impl Client<HttpTransport> {
    /// Creates a client pointing at the production API.
    pub fn new(login: &str, api_key: &str) -> Self {
        Self::with_transport(login, api_key, HttpTransport::new())
    }
}

impl<T: Transport> Client<T> {
    /// Creates a client that sends its requests through `transport`.
    pub fn with_transport(login: &str, api_key: &str, transport: T) -> Self {
        Self {
            login: login.to_string(),
            api_key: api_key.to_string(),
            version: DEFAULT_VERSION.to_string(),
            base_api_url: DEFAULT_BASE_URL.to_string(),
            transport,
        }
    }

    /// Overrides the protocol version tag.
    pub fn with_version(mut self, version: &str) -> Self {
        self.version = version.to_string();
        self
    }

    /// Overrides the base URL. Used for testing with wiremock.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_api_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Shortens `long_url`, returning the short URL.
    ///
    /// The result is looked up under the exact string supplied, without
    /// any normalization.
    pub async fn shorten(&self, long_url: &str) -> Result<String, Error> {
        let query = ShortenQuery::new(long_url);
        let envelope = self.call("/shorten", Some(&query)).await?;
        extract_field(envelope, query.long_url(), "shortUrl")
    }

    /// Expands a short URL (`http://bit.ly/<hash>`) or bare hash to its long URL.
    pub async fn expand(&self, input: &str) -> Result<String, Error> {
        let link = LinkRef::parse(input);
        let envelope = self.call("/expand", Some(&link)).await?;
        extract_field(envelope, link.lookup_key(), "longUrl")
    }

    /// Fetches metadata for a short URL or hash.
    ///
    /// Returns the whole `results` map, which may cover more hashes than the
    /// one asked for.
    pub async fn info(&self, input: &str) -> Result<ResultsMap, Error> {
        self.info_query(&InfoQuery::new(input)).await
    }

    /// Like [`Client::info`], but asks the service for only the given keys
    /// (e.g. `htmlTitle`, `thumbnail`).
    pub async fn info_with_keys(&self, input: &str, keys: &[&str]) -> Result<ResultsMap, Error> {
        self.info_query(&InfoQuery::new(input).with_keys(keys)).await
    }

    async fn info_query(&self, query: &InfoQuery) -> Result<ResultsMap, Error> {
        let envelope = self.call("/info", Some(query)).await?;
        extract_results_map(envelope)
    }

    /// Fetches click and referrer statistics for a short URL or hash.
    pub async fn stats(&self, input: &str) -> Result<ResultsMap, Error> {
        let link = LinkRef::parse(input);
        let envelope = self.call("/stats", Some(&link)).await?;
        extract_results_map(envelope)
    }

    /// Fetches the service's catalog of error codes and messages.
    pub async fn errors(&self) -> Result<Value, Error> {
        let envelope = self.call::<LinkRef>("/errors", None).await?;
        match envelope.results() {
            Some(results) => Ok(results.clone()),
            None => Err(Error::MissingField {
                field: "results".to_string(),
                envelope,
            }),
        }
    }

    fn get_url<Q: Query>(&self, path: &str, query: Option<&Q>) -> Result<Url, Error> {
        let mut url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidBaseUrl(e)
        })?;
        url.query_pairs_mut().append_pair("version", &self.version);
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    /// Builds the URL, sends it and checks the envelope's error code.
    async fn call<Q: Query>(&self, path: &str, query: Option<&Q>) -> Result<Envelope, Error> {
        let url = self.get_url(path, query)?;
        let envelope = self.process(self.request(url).await.as_deref());

        if envelope.is_empty() {
            return Err(Error::NoData);
        }
        if !envelope.is_success() {
            tracing::debug!(
                "{} returned error code {:?}: {}",
                path,
                envelope.error_code(),
                envelope.error_message().unwrap_or("")
            );
            return Err(Error::Api(envelope));
        }
        Ok(envelope)
    }

    /// Appends the credentials and performs the GET. A transport failure is
    /// logged and reported as `None`.
    async fn request(&self, url: Url) -> Option<String> {
        tracing::debug!("GET {}", url);
        let mut url = url;
        url.query_pairs_mut()
            .append_pair("login", &self.login)
            .append_pair("apiKey", &self.api_key);

        match self.transport.get(&url).await {
            Ok(body) => Some(body),
            Err(e) => {
                tracing::error!("Request to {} failed: {}", url.path(), e);
                None
            }
        }
    }

    fn process(&self, data: Option<&str>) -> Envelope {
        Envelope::decode(data)
    }
}

fn extract_field(envelope: Envelope, key: &str, field: &str) -> Result<String, Error> {
    match envelope.result_field(key, field) {
        Some(value) => Ok(value.to_string()),
        None => Err(Error::MissingField {
            field: format!("results.{}.{}", key, field),
            envelope,
        }),
    }
}

fn extract_results_map(envelope: Envelope) -> Result<ResultsMap, Error> {
    match envelope.results_map() {
        Some(results) => Ok(results.clone()),
        None => Err(Error::MissingField {
            field: "results".to_string(),
            envelope,
        }),
    }
}
