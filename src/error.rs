use reqwest::StatusCode;
use thiserror::Error;

/// Boxed error produced by an [`HttpClient`](crate::http::HttpClient)
/// implementation when a request never produced a response.
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// Every failure surfaced by the crate.
///
/// Nothing is logged or swallowed on the way up: converters, flows and the
/// API surface hand these straight to the caller, and nothing here is retried.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed JSON, a token shape the converter did not expect, or a
    /// failure raised by a converter while reading or writing.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A wire token (or flag value) outside the known set.
    #[error("invalid {kind} value: {value}")]
    InvalidEnumValue { kind: &'static str, value: String },

    /// A string that does not match the pattern its context requires.
    #[error("`{value}` does not match the expected {expected} format")]
    Format {
        value: String,
        expected: &'static str,
    },

    /// A conversion direction that is intentionally not implemented.
    #[error("{0} is not supported")]
    NotSupported(&'static str),

    /// The accounts service rejected a token request.
    #[error("authorization failed ({status}): {error}: {description}")]
    Authorization {
        status: StatusCode,
        error: String,
        description: String,
    },

    /// The Web API answered with a regular error object.
    #[error("request failed ({status}): {message}")]
    Api { status: StatusCode, message: String },

    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),

    #[error("operation cancelled")]
    Cancelled,

    #[error("transport error: {0}")]
    Transport(#[source] TransportError),

    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn invalid_enum(kind: &'static str, value: impl Into<String>) -> Self {
        Error::InvalidEnumValue {
            kind,
            value: value.into(),
        }
    }
}

/// A convenient Result type alias for operations that may fail.
pub type Res<T> = std::result::Result<T, Error>;
