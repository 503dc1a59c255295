use super::client_router::ClientRouter;
use super::picker;
use super::status::UpstreamStatus;
use rdns_router_domain::{Request, Response, RouterError};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::debug;

/// Entry point for a single query (§4.4, C5). Fans out to two candidates
/// and returns whichever answers first; the loser keeps running in the
/// background so its failure, if any, still updates its `UpstreamStatus`
/// (§5 — it is abandoned, not cancelled).
pub struct ParallelRacer {
    router: ClientRouter,
}

impl ParallelRacer {
    pub fn new(router: ClientRouter) -> Self {
        Self { router }
    }

    pub async fn resolve(&self, request: &Request) -> Result<Response, RouterError> {
        let candidates = self.router.resolvers_for(request).await;

        if candidates.len() == 1 {
            let only = &candidates[0];
            debug!(resolver = %only.upstream.display(), "delegating to sole resolver");
            return resolve_one(only, request).await;
        }

        let (r1, r2) = picker::pick_two(&candidates);
        debug!(
            r1 = %r1.upstream.display(),
            r2 = %r2.upstream.display(),
            "using resolvers for race"
        );

        let (tx, mut rx) = mpsc::channel(2);
        spawn_leg(Arc::clone(&r1), request.clone(), tx.clone());
        spawn_leg(Arc::clone(&r2), request.clone(), tx);

        let mut errors = Vec::with_capacity(2);
        while let Some(outcome) = rx.recv().await {
            match outcome {
                Ok((name, response)) => {
                    debug!(resolver = %name, "using response from resolver");
                    return Ok(response);
                }
                Err((name, err)) => {
                    debug!(resolver = %name, error = %err, "resolution failed from resolver");
                    errors.push(format!("{name}: {err}"));
                    if errors.len() == 2 {
                        break;
                    }
                }
            }
        }

        Err(RouterError::RaceExhausted {
            a: r1.upstream.display().to_string(),
            b: r2.upstream.display().to_string(),
            errors,
        })
    }
}

async fn resolve_one(
    status: &Arc<UpstreamStatus>,
    request: &Request,
) -> Result<Response, RouterError> {
    let result = status.upstream.resolve(request).await;
    if result.is_err() {
        status.record_failure();
    }
    result
}

type LegResult = Result<(Arc<str>, Response), (Arc<str>, RouterError)>;

fn spawn_leg(status: Arc<UpstreamStatus>, request: Request, tx: mpsc::Sender<LegResult>) {
    tokio::spawn(async move {
        let name = status.upstream.display();
        let outcome = status.upstream.resolve(&request).await;
        let _ = match outcome {
            Ok(response) => tx.send(Ok((name, response))).await,
            Err(err) => {
                status.record_failure();
                tx.send(Err((name, err))).await
            }
        };
    });
}
