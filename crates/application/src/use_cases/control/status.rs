use crate::ports::ControlStatePort;
use rdns_router_domain::ControlStatusSnapshot;
use std::sync::Arc;

pub struct StatusControlUseCase {
    state: Arc<dyn ControlStatePort>,
}

impl StatusControlUseCase {
    pub fn new(state: Arc<dyn ControlStatePort>) -> Self {
        Self { state }
    }

    pub async fn execute(&self) -> ControlStatusSnapshot {
        self.state.status().await
    }
}
