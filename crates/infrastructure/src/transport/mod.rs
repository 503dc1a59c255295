//! Concrete `UpstreamResolver` implementations. Wire-format parsing and the
//! DoT/DoH/DoQ transports are out of scope — only the plain UDP path is
//! implemented, enough to drive the health probe and real queries end to end.

pub mod udp;

#[cfg(test)]
pub mod mock;

pub use udp::UdpUpstream;
