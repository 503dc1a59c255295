use async_trait::async_trait;
use rdns_router_application::UpstreamResolver;
use rdns_router_domain::{Request, Response, ResponseKind, RouterError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Scripted upstream for router/picker/racer tests. Grounded in the
/// teacher's `MockDnsResolver` — configurable outcome instead of a real
/// socket, with a call counter tests can assert against.
pub struct MockUpstream {
    name: Arc<str>,
    outcome: Outcome,
    calls: AtomicUsize,
}

enum Outcome {
    Ok(ResponseKind),
    Err,
    /// Succeeds after a delay, used to test racing (the slower resolver
    /// loses even though it eventually would have succeeded).
    DelayThenOk(std::time::Duration),
}

impl MockUpstream {
    pub fn always_ok(name: &str) -> Self {
        Self {
            name: Arc::from(name),
            outcome: Outcome::Ok(ResponseKind::Resolved),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn always_err(name: &str) -> Self {
        Self {
            name: Arc::from(name),
            outcome: Outcome::Err,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn delayed_ok(name: &str, delay: std::time::Duration) -> Self {
        Self {
            name: Arc::from(name),
            outcome: Outcome::DelayThenOk(delay),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UpstreamResolver for MockUpstream {
    async fn resolve(&self, _request: &Request) -> Result<Response, RouterError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            Outcome::Ok(kind) => Ok(Response {
                kind: *kind,
                message: Arc::from(Vec::new().into_boxed_slice()),
            }),
            Outcome::Err => Err(RouterError::UpstreamError {
                server: self.name.to_string(),
                source: Box::new(std::io::Error::new(
                    std::io::ErrorKind::ConnectionRefused,
                    "mock failure",
                )),
            }),
            Outcome::DelayThenOk(delay) => {
                tokio::time::sleep(*delay).await;
                Ok(Response {
                    kind: ResponseKind::Resolved,
                    message: Arc::from(Vec::new().into_boxed_slice()),
                })
            }
        }
    }

    fn display(&self) -> Arc<str> {
        Arc::clone(&self.name)
    }
}
