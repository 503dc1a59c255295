use serde::{Deserialize, Serialize};

/// One `[[upstream_groups]]` table: a named bucket of upstreams and the
/// client identifiers routed to it (§2 `ResolversPerClient`, §3
/// `ClientGroupName`). `name` doubles as a client-name pattern, a literal
/// client IP, or a CIDR — the Client Router decides which at lookup time.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamGroupConfig {
    pub name: String,
    pub servers: Vec<String>,
}
