use crate::error::TransportCause;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Description of a single network call.
///
/// Opaque to the classification pipeline; it is passed through to the
/// executor and echoed into diagnostic dumps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchRequest {
    /// HTTP method (GET, POST, etc.)
    pub method: String,
    /// Absolute request URL
    pub url: String,
    /// Request headers
    pub headers: Option<HashMap<String, String>>,
    /// Request body
    pub body: Option<String>,
}

impl FetchRequest {
    /// Create a request with an explicit method
    pub fn new<S: Into<String>>(method: S, url: S) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            headers: None,
            body: None,
        }
    }

    /// Create a GET request
    pub fn get<S: Into<String>>(url: S) -> Self {
        Self::new("GET".to_string(), url.into())
    }

    /// Create a POST request with a body
    pub fn post<S: Into<String>>(url: S, body: S) -> Self {
        let mut request = Self::new("POST".to_string(), url.into());
        request.body = Some(body.into());
        request
    }

    /// Add a single header
    pub fn with_header<S: Into<String>>(mut self, name: S, value: S) -> Self {
        self.headers
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Replace the request body
    pub fn with_body<S: Into<String>>(mut self, body: S) -> Self {
        self.body = Some(body.into());
        self
    }
}

impl fmt::Display for FetchRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.url)
    }
}

/// HTTP response data with metadata.
///
/// `body` holds the raw response text and is `None` when the transport
/// delivered an empty body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub url: String,
    pub body: Option<String>,
}

impl HttpResponse {
    /// Create a new HTTP response
    pub fn new(
        status: u16,
        headers: HashMap<String, String>,
        url: String,
        body: Option<String>,
    ) -> Self {
        Self {
            status,
            headers,
            url,
            body,
        }
    }

    /// Check if the response indicates success (2xx status code)
    pub fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Check if the response indicates an error (non-2xx status code)
    pub fn is_error(&self) -> bool {
        !self.is_success()
    }

    /// Check if the response carried a body
    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }
}

/// Raw result of one executor run, before classification.
///
/// `body` is the decoded payload; it is `None` when the transport
/// delivered no body at all.
#[derive(Debug, Clone)]
pub enum RawOutcome<R> {
    /// The request never produced a response
    Failure { cause: TransportCause },
    /// The transport delivered a response, possibly with a decoded body
    Response {
        response: HttpResponse,
        body: Option<R>,
    },
}

impl<R> RawOutcome<R> {
    /// Create a transport-failure outcome
    pub fn failure(cause: TransportCause) -> Self {
        Self::Failure { cause }
    }

    /// Create a response outcome
    pub fn response(response: HttpResponse, body: Option<R>) -> Self {
        Self::Response { response, body }
    }
}
