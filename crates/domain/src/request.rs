use std::net::IpAddr;
use std::sync::Arc;

/// An incoming DNS query annotated with the originating client's identity
/// (§3). `message` is the opaque wire-format DNS query; the codec that
/// produces and reads it is an external collaborator (§1).
#[derive(Debug, Clone)]
pub struct Request {
    pub client_ip: IpAddr,
    pub client_names: Vec<Arc<str>>,
    pub message: Arc<[u8]>,
}

impl Request {
    pub fn new(client_ip: IpAddr, client_names: Vec<Arc<str>>, message: Arc<[u8]>) -> Self {
        Self {
            client_ip,
            client_names,
            message,
        }
    }
}
