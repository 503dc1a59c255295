//! Infrastructure layer: concrete upstream transports and the router that
//! implements the application layer's ports.

pub mod router;
pub mod transport;

pub use router::{build, ClientRouter, ControlState, ParallelRacer, Router, UpstreamStatus};
