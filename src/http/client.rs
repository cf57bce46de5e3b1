use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{RequestBuilder, ResponseConverter};
use crate::traits::Executor;
use crate::types::{FetchRequest, RawOutcome};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Default executor backed by a reqwest client
#[derive(Clone)]
pub struct ReqwestExecutor {
    client: Client,
    request_builder: RequestBuilder,
    response_converter: ResponseConverter,
}

impl ReqwestExecutor {
    /// Create an executor with default configuration
    pub fn new() -> Result<Self> {
        Self::from_config(&ClientConfig::default())
    }

    /// Create an executor from client configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let timeout = config.timeout_seconds.unwrap_or(30);
        let follow_redirects = config.follow_redirects.unwrap_or(true);

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout))
            .redirect(if follow_redirects {
                reqwest::redirect::Policy::default()
            } else {
                reqwest::redirect::Policy::none()
            })
            .build()?;

        let request_builder = RequestBuilder::new(client.clone(), config);

        Ok(Self {
            client,
            request_builder,
            response_converter: ResponseConverter::new(),
        })
    }
}

impl<R> Executor<R> for ReqwestExecutor
where
    R: DeserializeOwned + Send,
{
    async fn execute(&self, request: &FetchRequest) -> RawOutcome<R> {
        let outgoing = match self.request_builder.build_request(request) {
            Ok(outgoing) => outgoing,
            Err(cause) => return RawOutcome::failure(cause),
        };

        tracing::debug!(method = %request.method, url = %request.url, "executing request");

        match self.client.execute(outgoing).await {
            Ok(response) => self.response_converter.convert_response(response).await,
            Err(e) => RawOutcome::failure(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_executor_creation() {
        assert!(ReqwestExecutor::new().is_ok());
    }

    #[test]
    fn test_executor_creation_with_config() {
        let config = ClientConfig::new()
            .with_timeout_seconds(60)
            .with_follow_redirects(false);
        assert!(ReqwestExecutor::from_config(&config).is_ok());
    }

    #[test]
    fn test_executor_rejects_invalid_config() {
        let config = ClientConfig::new().with_timeout_seconds(0);
        assert!(ReqwestExecutor::from_config(&config).is_err());
    }
}
