use crate::ports::ControlStatePort;
use std::sync::Arc;

pub struct EnableControlUseCase {
    state: Arc<dyn ControlStatePort>,
}

impl EnableControlUseCase {
    pub fn new(state: Arc<dyn ControlStatePort>) -> Self {
        Self { state }
    }

    pub async fn execute(&self) {
        self.state.enable().await;
    }
}
