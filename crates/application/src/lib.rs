//! Application layer: ports the infrastructure crate implements, and the
//! control-plane use cases built on top of them.

pub mod ports;
pub mod use_cases;

pub use ports::{ControlStatePort, UpstreamResolver};
pub use use_cases::control::{DisableControlUseCase, EnableControlUseCase, StatusControlUseCase};
