use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The `groups` argument to `Disable` (§4.5). An empty selection means
/// "every configured group" — modeled explicitly so callers can't confuse
/// "disable nothing" with "disable everything", which the wire format
/// (an empty query-string parameter) otherwise can't distinguish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisableGroups {
    All,
    Only(Vec<Arc<str>>),
}

/// `Status()` response shape (§4.5, §6).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ControlStatusSnapshot {
    pub enabled: bool,
    #[serde(rename = "disabledGroups")]
    pub disabled_groups: Vec<Arc<str>>,
    #[serde(rename = "autoEnableInSec")]
    pub auto_enable_in_sec: u64,
}
