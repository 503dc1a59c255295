use super::{BootstrapConfig, ConfigError, LoggingConfig, ServerConfig, UpstreamGroupConfig};
use serde::{Deserialize, Serialize};

pub const DEFAULT_GROUP_NAME: &str = "default";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub bootstrap: BootstrapConfig,

    #[serde(default)]
    pub upstream_groups: Vec<UpstreamGroupConfig>,
}

/// CLI-flag overrides layered on top of the file config, à la the teacher's
/// `CliOverrides` (`cli/src/bootstrap/config.rs`).
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub bind_address: Option<String>,
}

impl Config {
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                    path: path.to_string(),
                    source,
                })?;
                toml::from_str(&text)?
            }
            None => Config::default(),
        };

        if let Some(bind) = overrides.bind_address {
            config.server.bind_address = bind;
        }

        Ok(config)
    }

    /// Shape validation only (§6). The "at least one default upstream"
    /// invariant (§3, §4.6) is enforced by the router constructor, which
    /// also needs to attempt connecting upstreams and can't be checked from
    /// config alone.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.bind_address.parse::<std::net::SocketAddr>().is_err() {
            return Err(ConfigError::Invalid(format!(
                "invalid server bind address '{}'",
                self.server.bind_address
            )));
        }

        for group in &self.upstream_groups {
            if group.servers.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "group '{}' has no servers configured",
                    group.name
                )));
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            bootstrap: BootstrapConfig::default(),
            upstream_groups: vec![UpstreamGroupConfig {
                name: DEFAULT_GROUP_NAME.to_string(),
                servers: vec!["udp:1.1.1.1:53".to_string(), "udp:8.8.8.8:53".to_string()],
            }],
        }
    }
}
