//! The routing and selection core (§2, C2–C7): upstream status tracking,
//! client-to-candidate routing, weighted picking, the parallel race, and the
//! enable/disable control state, wired together by the constructor.

pub mod builder;
pub mod client_router;
pub mod control_state;
pub mod picker;
pub mod racer;
pub mod status;

pub use builder::{build, Router};
pub use client_router::ClientRouter;
pub use control_state::ControlState;
pub use racer::ParallelRacer;
pub use status::UpstreamStatus;
