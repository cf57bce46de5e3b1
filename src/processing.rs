use crate::error::{Diagnosable, FetchError, TransportCause};
use crate::traits::ConnectivityProbe;
use crate::types::{FetchRequest, HttpResponse, RawOutcome};
use std::sync::Arc;

/// Rule mapping a transport failure to a concrete error
pub type FailureRule<E> = Arc<dyn Fn(&FetchRequest, &TransportCause) -> E + Send + Sync>;

/// Rule mapping a bodyless response to a concrete error
pub type NoDataRule<E> = Arc<dyn Fn(&FetchRequest, &HttpResponse) -> E + Send + Sync>;

/// Rule inspecting a response that does carry a body; `None` approves it
pub type ResponseRule<E> = Arc<dyn Fn(&FetchRequest, &HttpResponse) -> Option<E> + Send + Sync>;

/// Pre-flight rule; an error here short-circuits before the executor runs
pub type NetworkErrorRule<E> = Arc<dyn Fn() -> Option<E> + Send + Sync>;

/// Classification rules turning one raw outcome into exactly one
/// classified outcome.
///
/// The four rules are independently overridable; the bundle itself holds
/// no per-call state and is cheap to clone, so one instance can serve
/// any number of concurrent fetches.
pub struct ResultProcessing<E> {
    on_failure: FailureRule<E>,
    on_no_data: NoDataRule<E>,
    on_response: ResponseRule<E>,
    determine_network_error: Option<NetworkErrorRule<E>>,
}

impl<E> Clone for ResultProcessing<E> {
    fn clone(&self) -> Self {
        Self {
            on_failure: Arc::clone(&self.on_failure),
            on_no_data: Arc::clone(&self.on_no_data),
            on_response: Arc::clone(&self.on_response),
            determine_network_error: self.determine_network_error.clone(),
        }
    }
}

impl<E> ResultProcessing<E> {
    /// Create a rule bundle from scratch, with no pre-flight rule
    pub fn new(
        on_failure: impl Fn(&FetchRequest, &TransportCause) -> E + Send + Sync + 'static,
        on_no_data: impl Fn(&FetchRequest, &HttpResponse) -> E + Send + Sync + 'static,
        on_response: impl Fn(&FetchRequest, &HttpResponse) -> Option<E> + Send + Sync + 'static,
    ) -> Self {
        Self {
            on_failure: Arc::new(on_failure),
            on_no_data: Arc::new(on_no_data),
            on_response: Arc::new(on_response),
            determine_network_error: None,
        }
    }

    /// Replace the transport-failure rule
    pub fn with_on_failure(
        mut self,
        rule: impl Fn(&FetchRequest, &TransportCause) -> E + Send + Sync + 'static,
    ) -> Self {
        self.on_failure = Arc::new(rule);
        self
    }

    /// Replace the missing-body rule
    pub fn with_on_no_data(
        mut self,
        rule: impl Fn(&FetchRequest, &HttpResponse) -> E + Send + Sync + 'static,
    ) -> Self {
        self.on_no_data = Arc::new(rule);
        self
    }

    /// Replace the response-approval rule
    pub fn with_on_response(
        mut self,
        rule: impl Fn(&FetchRequest, &HttpResponse) -> Option<E> + Send + Sync + 'static,
    ) -> Self {
        self.on_response = Arc::new(rule);
        self
    }

    /// Install a pre-flight rule consulted before the executor runs
    pub fn with_network_error_rule(
        mut self,
        rule: impl Fn() -> Option<E> + Send + Sync + 'static,
    ) -> Self {
        self.determine_network_error = Some(Arc::new(rule));
        self
    }

    pub fn has_network_error_rule(&self) -> bool {
        self.determine_network_error.is_some()
    }

    /// Run the pre-flight rule, if one is configured. `Some` means the
    /// fetch must short-circuit without touching the executor.
    pub fn preflight(&self) -> Option<E> {
        self.determine_network_error.as_ref().and_then(|rule| rule())
    }

    /// Convert one raw outcome into exactly one classified outcome.
    ///
    /// Decision order: transport failure, then missing body, then
    /// response approval. A response with a body can still fail; the two
    /// failure paths stay distinct.
    pub fn classify<R>(
        &self,
        request: &FetchRequest,
        outcome: RawOutcome<R>,
    ) -> std::result::Result<R, E> {
        match outcome {
            RawOutcome::Failure { cause } => Err((self.on_failure)(request, &cause)),
            RawOutcome::Response {
                response,
                body: None,
            } => Err((self.on_no_data)(request, &response)),
            RawOutcome::Response {
                response,
                body: Some(body),
            } => match (self.on_response)(request, &response) {
                None => Ok(body),
                Some(error) => Err(error),
            },
        }
    }
}

impl ResultProcessing<FetchError> {
    /// Standard rules over the default taxonomy, without a connectivity
    /// check
    pub fn standard() -> Self {
        Self::standard_with_network_rule(None)
    }

    /// Standard rules wired to a connectivity probe. The probe feeds the
    /// pre-flight gate and the unresolved-host branch of `on_failure`;
    /// it reports `MissingNetwork` when connectivity is absent.
    pub fn with_connectivity(probe: Arc<dyn ConnectivityProbe>) -> Self {
        let rule: NetworkErrorRule<FetchError> = Arc::new(move || match probe.check() {
            Some(false) => Some(FetchError::missing_network()),
            _ => None,
        });
        Self::standard_with_network_rule(Some(rule))
    }

    fn standard_with_network_rule(network_rule: Option<NetworkErrorRule<FetchError>>) -> Self {
        let failure_network_rule = network_rule.clone();
        let on_failure: FailureRule<FetchError> = Arc::new(move |request, cause| {
            // An unresolved host counts as network-related only when a
            // connectivity rule is configured; without one it stays Unknown.
            let error = match cause {
                TransportCause::UnresolvedHost(_) => match &failure_network_rule {
                    Some(rule) => rule().unwrap_or_else(FetchError::request_encoding),
                    None => FetchError::unknown(),
                },
                TransportCause::MalformedPayload(_) => FetchError::response_decoding(),
                TransportCause::Other(_) => FetchError::unknown(),
            };
            error.with_dump(&format!("{} while fetching {}", cause, request))
        });

        let on_no_data: NoDataRule<FetchError> = Arc::new(|request, response| {
            FetchError::missing_data().with_dump(&format!(
                "status {} from {} while fetching {}",
                response.status, response.url, request
            ))
        });

        let on_response: ResponseRule<FetchError> = Arc::new(|_request, response| {
            if response.is_success() {
                None
            } else {
                Some(FetchError::bad_status_code(
                    response.status,
                    response.clone(),
                ))
            }
        });

        Self {
            on_failure,
            on_no_data,
            on_response,
            determine_network_error: network_rule,
        }
    }
}

impl Default for ResultProcessing<FetchError> {
    fn default() -> Self {
        Self::standard()
    }
}
