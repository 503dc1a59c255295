//! Configuration, organized by concern the way the teacher's config module
//! is (`server`, `logging`, `bootstrap`, `upstream`), loaded once at start.

pub mod bootstrap;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;
pub mod upstream_group;

pub use bootstrap::BootstrapConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use upstream_group::UpstreamGroupConfig;
