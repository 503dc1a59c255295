use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Transport a configured upstream speaks. The transport implementation
/// itself is an external collaborator (§1); this enum only identifies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpstreamProtocol {
    Udp,
    Tcp,
    Tls,
    Https,
}

impl fmt::Display for UpstreamProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Udp => "udp",
            Self::Tcp => "tcp",
            Self::Tls => "tls",
            Self::Https => "https",
        };
        f.write_str(s)
    }
}

/// A configuration record identifying one resolver. Immutable once
/// constructed (§3).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Upstream {
    pub protocol: UpstreamProtocol,
    pub host: String,
    pub port: u16,
}

impl Upstream {
    pub fn new(protocol: UpstreamProtocol, host: impl Into<String>, port: u16) -> Self {
        Self {
            protocol,
            host: host.into(),
            port,
        }
    }

    /// Human-readable form used in logs, grounded on the teacher's
    /// `Display` impl for `DnsProtocol` (`forwarding`/`load_balancer` debug
    /// lines all print the upstream this way).
    pub fn display(&self) -> Arc<str> {
        Arc::from(format!("{}://{}:{}", self.protocol, self.host, self.port).as_str())
    }
}

impl fmt::Display for Upstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}:{}", self.protocol, self.host, self.port)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid upstream '{0}'")]
pub struct ParseUpstreamError(String);

impl FromStr for Upstream {
    type Err = ParseUpstreamError;

    /// Parses `proto:host:port`, e.g. `udp:1.1.1.1:53`, `tls:dns.quad9.net:853`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let (proto, host, port) = match (parts.next(), parts.next(), parts.next()) {
            (Some(p), Some(h), Some(port)) => (p, h, port),
            _ => return Err(ParseUpstreamError(s.to_string())),
        };

        let protocol = match proto {
            "udp" => UpstreamProtocol::Udp,
            "tcp" => UpstreamProtocol::Tcp,
            "tls" => UpstreamProtocol::Tls,
            "https" => UpstreamProtocol::Https,
            _ => return Err(ParseUpstreamError(s.to_string())),
        };

        let port: u16 = port
            .parse()
            .map_err(|_| ParseUpstreamError(s.to_string()))?;

        Ok(Self::new(protocol, host, port))
    }
}
