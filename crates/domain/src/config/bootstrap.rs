use serde::{Deserialize, Serialize};

/// Controls hostname bootstrapping and the upstream health probe (§4.6, §6).
///
/// `skip_upstream_check = true` is the `skipUpstreamCheck` sentinel from the
/// spec: construction neither resolves upstream hostnames nor probes them.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BootstrapConfig {
    #[serde(default)]
    pub skip_upstream_check: bool,

    #[serde(default)]
    pub start_verify_upstream: bool,
}

impl BootstrapConfig {
    pub fn is_active(&self) -> bool {
        !self.skip_upstream_check
    }
}
