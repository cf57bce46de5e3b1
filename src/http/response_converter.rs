use crate::error::TransportCause;
use crate::types::{HttpResponse, RawOutcome};
use reqwest::Response;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// Converts reqwest responses into raw fetch outcomes
#[derive(Clone)]
pub struct ResponseConverter;

impl ResponseConverter {
    /// Create a new response converter
    pub fn new() -> Self {
        Self
    }

    /// Convert a reqwest response, decoding the body when one is present.
    ///
    /// An empty body yields a bodyless outcome; a non-empty body that
    /// fails to decode yields a transport failure with a decode cause.
    pub async fn convert_response<R: DeserializeOwned>(&self, response: Response) -> RawOutcome<R> {
        let status = response.status().as_u16();
        let url = response.url().to_string();

        let mut headers = HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(value_str) = value.to_str() {
                headers.insert(name.to_string(), value_str.to_string());
            }
        }

        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => return RawOutcome::failure(TransportCause::from(e)),
        };

        if text.trim().is_empty() {
            return RawOutcome::response(HttpResponse::new(status, headers, url, None), None);
        }

        let response = HttpResponse::new(status, headers, url, Some(text.clone()));
        match serde_json::from_str::<R>(&text) {
            Ok(body) => RawOutcome::response(response, Some(body)),
            Err(e) => RawOutcome::failure(TransportCause::MalformedPayload(format!(
                "{} in body from {}",
                e, response.url
            ))),
        }
    }
}

impl Default for ResponseConverter {
    fn default() -> Self {
        Self::new()
    }
}
