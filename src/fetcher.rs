use crate::config::ClientConfig;
use crate::error::{Diagnosable, FetchError, Result};
use crate::http::ReqwestExecutor;
use crate::processing::ResultProcessing;
use crate::traits::{ConnectivityProbe, Executor};
use crate::types::FetchRequest;
use std::sync::Arc;

/// Type alias for the most common concrete fetch client
pub type DefaultFetchClient = FetchClient<ReqwestExecutor>;

/// Fetch orchestrator: runs the pre-flight gate, invokes the executor,
/// classifies the outcome, and dispatches exactly one of the two
/// caller-supplied callbacks.
///
/// Holds no per-call state; one client can serve any number of
/// concurrent fetches, each independent of the others.
pub struct FetchClient<X> {
    executor: Arc<X>,
    connectivity: Option<Arc<dyn ConnectivityProbe>>,
}

impl FetchClient<ReqwestExecutor> {
    /// Create a client with the default executor and configuration
    pub fn new() -> Result<Self> {
        Ok(Self::with_executor(ReqwestExecutor::new()?))
    }

    /// Create a client with the default executor built from configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Ok(Self::with_executor(ReqwestExecutor::from_config(config)?))
    }
}

impl<X> FetchClient<X> {
    /// Create a client around an explicitly constructed executor
    pub fn with_executor(executor: X) -> Self {
        Self {
            executor: Arc::new(executor),
            connectivity: None,
        }
    }

    /// Configure a connectivity probe consulted before each fetch issued
    /// with the standard rules
    pub fn with_connectivity_probe(mut self, probe: impl ConnectivityProbe + 'static) -> Self {
        self.connectivity = Some(Arc::new(probe));
        self
    }

    /// Fetch with the standard classification rules over the default
    /// taxonomy. If a connectivity probe is configured it gates the call,
    /// reporting `MissingNetwork` before the executor runs.
    pub async fn fetch<R>(
        &self,
        request: FetchRequest,
        success: impl FnOnce(R),
        failure: impl FnOnce(FetchError),
    ) where
        X: Executor<R>,
    {
        let processing = match &self.connectivity {
            Some(probe) => ResultProcessing::with_connectivity(Arc::clone(probe)),
            None => ResultProcessing::standard(),
        };
        self.fetch_with(request, processing, success, failure).await
    }

    /// Fetch with caller-supplied classification rules and error type
    pub async fn fetch_with<R, E>(
        &self,
        request: FetchRequest,
        processing: ResultProcessing<E>,
        success: impl FnOnce(R),
        failure: impl FnOnce(E),
    ) where
        X: Executor<R>,
        E: Diagnosable,
    {
        match self.run(&request, &processing).await {
            Ok(payload) => {
                tracing::debug!(method = %request.method, url = %request.url, "fetch succeeded");
                success(payload);
            }
            Err(error) => {
                tracing::warn!(
                    method = %request.method,
                    url = %request.url,
                    error = error.description(),
                    "fetch failed"
                );
                failure(error);
            }
        }
    }

    /// Pre-flight, execute, classify. Produces exactly one terminal value
    /// per call; a pre-flight error returns without touching the executor.
    async fn run<R, E>(
        &self,
        request: &FetchRequest,
        processing: &ResultProcessing<E>,
    ) -> std::result::Result<R, E>
    where
        X: Executor<R>,
    {
        if let Some(error) = processing.preflight() {
            return Err(error);
        }

        let outcome = self.executor.execute(request).await;
        processing.classify(request, outcome)
    }
}
