use rdns_router_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(config_path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(config_path, overrides)?;
    config.validate()?;

    info!(
        config_file = config_path.unwrap_or("default"),
        bind = %config.server.bind_address,
        groups = config.upstream_groups.len(),
        "configuration loaded"
    );

    Ok(config)
}
