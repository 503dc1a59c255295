use super::client_router::{ClientRouter, DEFAULT_GROUP_NAME};
use super::control_state::ControlState;
use super::racer::ParallelRacer;
use super::status::UpstreamStatus;
use crate::transport::UdpUpstream;
use rdns_router_application::{ControlStatePort, UpstreamResolver};
use rdns_router_domain::{Config, Request, RouterError, Upstream};
use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;
use tracing::warn;

/// Everything a running process needs: the query path and the control
/// surface that gates it. `control` is also handed to a second, independent
/// `ControlState` by the caller for the parallel client-DNS-resolver surface
/// (§9 — the two control surfaces are distinct instances sharing this type).
pub struct Router {
    pub racer: ParallelRacer,
    pub control: Arc<ControlState>,
    descriptions: Vec<String>,
}

impl Router {
    /// One line per configured group, listing its upstreams (§11 —
    /// reinstated `Configuration()` introspection). Used for a startup
    /// banner; never consulted by the query path.
    pub fn describe(&self) -> &[String] {
        &self.descriptions
    }
}

/// Builds the routing table from configuration, optionally probing each
/// upstream with a canary query (§4.6, C7).
pub async fn build(config: &Config) -> Result<Router, RouterError> {
    let all_group_names: Vec<Arc<str>> = config
        .upstream_groups
        .iter()
        .map(|g| Arc::<str>::from(g.name.as_str()))
        .filter(|name| name.as_ref() != DEFAULT_GROUP_NAME)
        .collect();
    let control = Arc::new(ControlState::new(all_group_names));

    let mut resolvers_per_client = HashMap::new();
    let mut descriptions = Vec::with_capacity(config.upstream_groups.len());

    for group in &config.upstream_groups {
        let mut statuses = Vec::with_capacity(group.servers.len());
        let mut failed = 0usize;

        for raw in &group.servers {
            let upstream = match Upstream::from_str(raw) {
                Ok(u) => u,
                Err(err) => {
                    warn!(group = %group.name, %err, "upstream group: failed to construct upstream");
                    failed += 1;
                    continue;
                }
            };

            let addr = match socket_addr_of(&upstream) {
                Ok(addr) => addr,
                Err(err) => {
                    warn!(group = %group.name, %err, "upstream group: failed to construct upstream");
                    failed += 1;
                    continue;
                }
            };

            let resolver: Arc<dyn UpstreamResolver> = Arc::new(UdpUpstream::new(upstream, addr));

            if config.bootstrap.is_active() {
                match probe(resolver.as_ref()).await {
                    Ok(()) => statuses.push(Arc::new(UpstreamStatus::new(resolver))),
                    Err(err) => {
                        warn!(group = %group.name, %err, "upstream group: test resolve of upstream server failed");
                        failed += 1;
                        statuses.push(Arc::new(UpstreamStatus::new_marked_failed(resolver)));
                    }
                }
            } else {
                statuses.push(Arc::new(UpstreamStatus::new(resolver)));
            }
        }

        if config.bootstrap.start_verify_upstream
            && !group.servers.is_empty()
            && failed == group.servers.len()
        {
            return Err(RouterError::ConstructionFailure(format!(
                "unable to reach any DNS resolvers configured for resolver group {}",
                group.name
            )));
        }

        let servers = statuses
            .iter()
            .map(|s| s.upstream.display())
            .collect::<Vec<_>>()
            .join(", ");
        descriptions.push(format!("{}: {servers}", group.name));

        resolvers_per_client.insert(Arc::<str>::from(group.name.as_str()), statuses);
    }

    match resolvers_per_client.get(DEFAULT_GROUP_NAME) {
        Some(default) if !default.is_empty() => {}
        _ => {
            return Err(RouterError::ConstructionFailure(format!(
                "no external DNS resolvers configured as default upstream resolvers. \
                 Please configure at least one under '{DEFAULT_GROUP_NAME}' configuration name"
            )));
        }
    }

    let control_port: Arc<dyn ControlStatePort> = control.clone();
    let router = ClientRouter::new(resolvers_per_client, control_port);

    Ok(Router {
        racer: ParallelRacer::new(router),
        control,
        descriptions,
    })
}

/// Upstream hostname bootstrap is an external collaborator (§1); only
/// literal IPs are accepted here.
fn socket_addr_of(upstream: &Upstream) -> Result<SocketAddr, RouterError> {
    let ip = IpAddr::from_str(&upstream.host).map_err(|_| {
        RouterError::ConstructionFailure(format!(
            "upstream host '{}' is not a literal IP address",
            upstream.host
        ))
    })?;
    Ok(SocketAddr::new(ip, upstream.port))
}

/// `A github.com.` canary query (§4.6 step 2). The wire codec is out of
/// scope (§1), so this is an opaque placeholder message — real deployments
/// plug in the actual query builder here.
const CANARY_QUERY: &[u8] = b"\x00\x00\x01\x00\x00\x01\x00\x00\x00\x00\x00\x00\x06github\x03com\x00\x00\x01\x00\x01";

async fn probe(resolver: &dyn UpstreamResolver) -> Result<(), RouterError> {
    let request = Request::new(
        IpAddr::from_str("0.0.0.0").unwrap(),
        Vec::new(),
        Arc::from(CANARY_QUERY),
    );
    let response = resolver.resolve(&request).await?;
    if !response.is_resolved() {
        return Err(RouterError::UpstreamError {
            server: resolver.display().to_string(),
            source: Box::new(std::io::Error::other("probe response was not RESOLVED")),
        });
    }
    Ok(())
}
