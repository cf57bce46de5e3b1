use crate::config::ClientConfig;
use crate::error::TransportCause;
use crate::types::FetchRequest;
use reqwest::{Client, Method, Request};
use std::collections::HashMap;
use url::Url;

/// Builds reqwest requests from fetch descriptions
#[derive(Clone)]
pub struct RequestBuilder {
    client: Client,
    default_headers: Option<HashMap<String, String>>,
}

impl RequestBuilder {
    /// Create a new request builder
    pub fn new(client: Client, config: &ClientConfig) -> Self {
        Self {
            client,
            default_headers: config.headers.clone(),
        }
    }

    /// Build an HTTP request from a fetch description. Failures are
    /// reported as transport causes so the caller can classify them like
    /// any other outcome.
    pub fn build_request(&self, request: &FetchRequest) -> Result<Request, TransportCause> {
        let url = Url::parse(&request.url)
            .map_err(|e| TransportCause::Other(format!("invalid URL {}: {}", request.url, e)))?;

        let method = Method::from_bytes(request.method.as_bytes()).map_err(|_| {
            TransportCause::Other(format!("invalid HTTP method: {}", request.method))
        })?;

        let mut builder = self.client.request(method, url);

        // Per-request headers override configured defaults
        if let Some(defaults) = &self.default_headers {
            for (name, value) in defaults {
                builder = builder.header(name.as_str(), value.as_str());
            }
        }
        if let Some(headers) = &request.headers {
            for (name, value) in headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
        }

        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        builder.build().map_err(TransportCause::from)
    }
}
