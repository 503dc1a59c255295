use crate::ports::ControlStatePort;
use rdns_router_domain::{DisableGroups, RouterError};
use std::sync::Arc;
use std::time::Duration;

pub struct DisableControlUseCase {
    state: Arc<dyn ControlStatePort>,
}

impl DisableControlUseCase {
    pub fn new(state: Arc<dyn ControlStatePort>) -> Self {
        Self { state }
    }

    pub async fn execute(
        &self,
        duration: Duration,
        groups: DisableGroups,
    ) -> Result<(), RouterError> {
        self.state.disable(duration, groups).await
    }
}
