use crate::types::{FetchRequest, RawOutcome};
use std::future::Future;

/// Trait for request execution implementations.
///
/// An executor owns the transport: it takes a request description and
/// asynchronously produces a raw outcome. It never fails with a Rust
/// error; transport problems are reported as `RawOutcome::Failure`.
pub trait Executor<R>: Send + Sync {
    /// Execute a single request
    fn execute(&self, request: &FetchRequest) -> impl Future<Output = RawOutcome<R>> + Send;
}

/// Synchronous connectivity probe consulted before a fetch is issued.
///
/// `Some(true)` means connected, `Some(false)` means offline, `None`
/// means the probe could not determine connectivity.
pub trait ConnectivityProbe: Send + Sync {
    fn check(&self) -> Option<bool>;
}

impl<F> ConnectivityProbe for F
where
    F: Fn() -> Option<bool> + Send + Sync,
{
    fn check(&self) -> Option<bool> {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closures_are_probes() {
        let offline = || Some(false);
        assert_eq!(offline.check(), Some(false));

        let unknown = || None;
        assert_eq!(unknown.check(), None);
    }
}
