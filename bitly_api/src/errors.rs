//! Error types for the API client.

use crate::types::Envelope;

/// Failure outcome of a client operation.
///
/// None of these are raised for remote failures in the exceptional sense:
/// every variant that came back from the service carries the decoded
/// envelope so callers can branch on its status code.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The transport failed or the body could not be decoded, so there is
    /// no envelope to inspect.
    #[error("No data returned")]
    NoData,
    /// The service reported a non-zero (or missing) error code.
    #[error("API error {}: {}", display_code(.0), display_message(.0))]
    Api(Envelope),
    /// The envelope reported success but lacked the expected results path.
    #[error("Response is missing `{field}`")]
    MissingField { field: String, envelope: Envelope },
    /// The configured base URL is not a valid URL.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

impl Error {
    /// The decoded envelope behind this failure, if the service replied.
    pub fn envelope(&self) -> Option<&Envelope> {
        match self {
            Self::Api(envelope) | Self::MissingField { envelope, .. } => Some(envelope),
            Self::NoData | Self::InvalidBaseUrl(_) => None,
        }
    }

    /// The apparent status code of the failure. Never `Some(0)` except for
    /// [`Error::MissingField`], where the service did report success.
    pub fn status_code(&self) -> Option<i64> {
        self.envelope().and_then(Envelope::error_code)
    }

    /// Consumes the error, returning the envelope or an empty one when the
    /// service never replied.
    pub fn into_envelope(self) -> Envelope {
        match self {
            Self::Api(envelope) | Self::MissingField { envelope, .. } => envelope,
            Self::NoData | Self::InvalidBaseUrl(_) => Envelope::default(),
        }
    }
}

fn display_code(envelope: &Envelope) -> String {
    match envelope.error_code() {
        Some(code) => code.to_string(),
        None => "?".to_string(),
    }
}

fn display_message(envelope: &Envelope) -> &str {
    envelope.error_message().unwrap_or("")
}
