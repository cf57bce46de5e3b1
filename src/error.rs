use crate::types::HttpResponse;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for client setup and configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Classified fetch failure handed to the failure callback.
///
/// The variant set is closed: classification logic matches on it
/// exhaustively. Each variant carries a human-readable `description`
/// seeded with a fallback template ending in the `dump: -` marker;
/// diagnostic context is appended after that marker and never replaces
/// the base text.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("{description}")]
    RequestEncoding { description: String },

    #[error("{description}")]
    ResponseDecoding { description: String },

    #[error("{description}")]
    MissingData { description: String },

    #[error("{description}")]
    MissingNetwork { description: String },

    #[error("{description}")]
    BadStatusCode {
        code: u16,
        response: HttpResponse,
        description: String,
    },

    #[error("{description}")]
    Unknown { description: String },
}

impl FetchError {
    /// Request could not be serialized or encoded
    pub fn request_encoding() -> Self {
        Self::RequestEncoding {
            description: "failed to encode outgoing request, dump: -".to_string(),
        }
    }

    /// Response body could not be deserialized
    pub fn response_decoding() -> Self {
        Self::ResponseDecoding {
            description: "failed to decode response body, dump: -".to_string(),
        }
    }

    /// Transport succeeded but the response carried no body
    pub fn missing_data() -> Self {
        Self::MissingData {
            description: "response contained no body, dump: -".to_string(),
        }
    }

    /// Pre-flight connectivity check determined no network is available
    pub fn missing_network() -> Self {
        Self::MissingNetwork {
            description: "no network connection available, dump: -".to_string(),
        }
    }

    /// Body present but the status code indicates failure; keeps the raw
    /// response for diagnostics
    pub fn bad_status_code(code: u16, response: HttpResponse) -> Self {
        Self::BadStatusCode {
            code,
            response,
            description: format!("bad response status code {}, dump: -", code),
        }
    }

    /// Fallback for unclassified transport failures
    pub fn unknown() -> Self {
        Self::Unknown {
            description: "unclassified transport failure, dump: -".to_string(),
        }
    }

    /// The status code carried by a `BadStatusCode` error
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::BadStatusCode { code, .. } => Some(*code),
            _ => None,
        }
    }

    fn description_mut(&mut self) -> &mut String {
        match self {
            Self::RequestEncoding { description }
            | Self::ResponseDecoding { description }
            | Self::MissingData { description }
            | Self::MissingNetwork { description }
            | Self::BadStatusCode { description, .. }
            | Self::Unknown { description } => description,
        }
    }
}

/// Capability contract every error type used with the result processor
/// must satisfy: a readable description that diagnostic dumps can be
/// appended to.
pub trait Diagnosable {
    /// Current human-readable description
    fn description(&self) -> &str;

    /// Append a diagnostic dump to the description. Appends only; the
    /// existing text stays in place as a prefix.
    fn append_dump(&mut self, dump: &str);

    /// Consuming form of [`append_dump`](Self::append_dump)
    fn with_dump(mut self, dump: &str) -> Self
    where
        Self: Sized,
    {
        self.append_dump(dump);
        self
    }
}

impl Diagnosable for FetchError {
    fn description(&self) -> &str {
        match self {
            Self::RequestEncoding { description }
            | Self::ResponseDecoding { description }
            | Self::MissingData { description }
            | Self::MissingNetwork { description }
            | Self::BadStatusCode { description, .. }
            | Self::Unknown { description } => description,
        }
    }

    fn append_dump(&mut self, dump: &str) {
        let description = self.description_mut();
        description.push(' ');
        description.push_str(dump);
    }
}

/// Transport-level failure cause reported by an executor.
///
/// The cause set mirrors what classification rules can distinguish:
/// DNS/connect-style failures, payload decode failures, and everything
/// else.
#[derive(Debug, Clone, Error)]
pub enum TransportCause {
    #[error("could not resolve host: {0}")]
    UnresolvedHost(String),

    #[error("malformed response payload: {0}")]
    MalformedPayload(String),

    #[error("transport failure: {0}")]
    Other(String),
}

impl From<reqwest::Error> for TransportCause {
    fn from(error: reqwest::Error) -> Self {
        if error.is_connect() {
            Self::UnresolvedHost(error.to_string())
        } else if error.is_decode() {
            Self::MalformedPayload(error.to_string())
        } else {
            Self::Other(error.to_string())
        }
    }
}

/// Errors raised while setting up a client or loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl ConfigError {
    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
