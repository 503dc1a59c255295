use rdns_router_api::{AppState, ControlSurface};
use rdns_router_application::{
    ControlStatePort, DisableControlUseCase, EnableControlUseCase, StatusControlUseCase,
};
use rdns_router_domain::Config;
use rdns_router_infrastructure::{ControlState, Router as CoreRouter};
use std::sync::Arc;

/// The wired-up core plus the control-plane state built for it (§9: two
/// independent `ControlState` instances, one per control surface, sharing
/// the same implementation).
pub struct Application {
    pub core: CoreRouter,
    pub state: AppState,
}

pub async fn build(config: &Config) -> anyhow::Result<Application> {
    let core = rdns_router_infrastructure::build(config).await?;
    let blocking = ControlState::new(non_default_group_names(config));

    let state = AppState {
        blocking: surface(Arc::new(blocking)),
        dns_resolver: surface(core.control.clone()),
    };

    Ok(Application { core, state })
}

fn surface(control: Arc<ControlState>) -> ControlSurface {
    let port: Arc<dyn ControlStatePort> = control;
    ControlSurface {
        enable: Arc::new(EnableControlUseCase::new(port.clone())),
        disable: Arc::new(DisableControlUseCase::new(port.clone())),
        status: Arc::new(StatusControlUseCase::new(port)),
    }
}

fn non_default_group_names(config: &Config) -> Vec<Arc<str>> {
    config
        .upstream_groups
        .iter()
        .map(|g| Arc::<str>::from(g.name.as_str()))
        .filter(|name| name.as_ref() != "default")
        .collect()
}
