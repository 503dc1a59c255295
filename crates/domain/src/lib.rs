//! Domain layer: the data model for the resolver-routing core.
//!
//! No I/O, no async runtime dependency — the rest of the workspace builds
//! on these types.

pub mod config;
pub mod control;
pub mod errors;
pub mod request;
pub mod response;
pub mod upstream;

pub use config::{
    BootstrapConfig, CliOverrides, Config, ConfigError, LoggingConfig, ServerConfig,
    UpstreamGroupConfig,
};
pub use control::{ControlStatusSnapshot, DisableGroups};
pub use errors::RouterError;
pub use request::Request;
pub use response::{Response, ResponseKind};
pub use upstream::{Upstream, UpstreamProtocol};
