//! Error type shared by the news client and the text featurizer.
//!
//! Boundary operations (`fetch_*`, `featurize`) never hand these to the
//! caller: they log them and return `None`. The `try_*` variants surface
//! them unchanged for callers that want the diagnostic.

use thiserror::Error;

/// Everything that can go wrong while searching or featurizing.
#[derive(Debug, Error)]
pub enum Error {
    /// Network failure, TLS failure, timeout, or body read error.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx HTTP status whose body was not a service error envelope.
    #[error("unexpected HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    /// The service answered with `"status": "error"`.
    #[error("news service error [{code}]: {message}")]
    Api { code: String, message: String },

    /// The envelope decoded but the expected list field was absent.
    #[error("response envelope has no `{0}` field")]
    MissingField(&'static str),

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Rejected before any request was sent.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// One of the text analyzers failed.
    #[error("{analyzer} failed: {message}")]
    Analyzer {
        analyzer: &'static str,
        message: String,
    },

    #[error("config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid base url: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn analyzer(analyzer: &'static str, message: impl Into<String>) -> Self {
        Error::Analyzer {
            analyzer,
            message: message.into(),
        }
    }

    pub fn invalid_query(message: impl Into<String>) -> Self {
        Error::InvalidQuery(message.into())
    }

    /// Short machine-friendly name used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Transport(_) => "transport",
            Error::Status { .. } => "status",
            Error::Api { .. } => "api",
            Error::MissingField(_) => "missing_field",
            Error::Decode(_) => "decode",
            Error::InvalidQuery(_) => "invalid_query",
            Error::Analyzer { .. } => "analyzer",
            Error::Config(_) => "config",
            Error::Io(_) => "io",
            Error::Url(_) => "url",
        }
    }
}
