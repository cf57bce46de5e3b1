//! HTTP Fetch - asynchronous network-fetch abstraction
//!
//! This crate wraps a request/response HTTP client, normalizes success
//! and failure outcomes into a small closed error taxonomy, and delivers
//! the classified outcome through caller-supplied success/failure
//! callbacks. Every classification step is independently overridable.

// Core modules
pub mod config;
pub mod error;
pub mod types;

// Seams for custom transports and connectivity checks
pub mod traits;

// Main functionality modules
pub mod fetcher;
pub mod http;
pub mod processing;

// Re-export main types for convenience
pub use config::ClientConfig;
pub use error::{ConfigError, Diagnosable, FetchError, Result, TransportCause};
pub use fetcher::{DefaultFetchClient, FetchClient};
pub use http::ReqwestExecutor;
pub use processing::{
    FailureRule, NetworkErrorRule, NoDataRule, ResponseRule, ResultProcessing,
};
pub use traits::{ConnectivityProbe, Executor};
pub use types::{FetchRequest, HttpResponse, RawOutcome};

/// Execute a single fetch with a default client and the standard
/// classification rules
pub async fn fetch_json<R>(
    request: FetchRequest,
    success: impl FnOnce(R),
    failure: impl FnOnce(FetchError),
) -> Result<()>
where
    R: serde::de::DeserializeOwned + Send,
{
    let client = FetchClient::new()?;
    client.fetch(request, success, failure).await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test that the main types wire together
    #[test]
    fn test_module_imports() {
        let request = FetchRequest::get("http://api.example.com/health");
        assert_eq!(request.method, "GET");

        let processing: ResultProcessing<FetchError> = ResultProcessing::default();
        assert!(!processing.has_network_error_rule());
    }

    /// Test that error types work correctly
    #[test]
    fn test_error_types() {
        let error = FetchError::missing_data();
        assert!(error.to_string().contains("no body"));

        let error = ConfigError::invalid_config("test error");
        assert!(error.to_string().contains("Invalid configuration"));
    }

    /// Test that a client can be built from configuration
    #[test]
    fn test_client_creation() {
        let config = ClientConfig::new().with_timeout_seconds(5);
        assert!(FetchClient::from_config(&config).is_ok());
    }
}
