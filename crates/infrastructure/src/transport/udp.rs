use async_trait::async_trait;
use hickory_proto::op::{Message, ResponseCode};
use rdns_router_application::UpstreamResolver;
use rdns_router_domain::{Request, Response, ResponseKind, RouterError, Upstream};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::debug;

const MAX_UDP_RESPONSE_SIZE: usize = 4096;
const QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Plain UDP forwarding to a single upstream server. One socket per query —
/// query volume and latency under load are out of scope here (§1); this
/// exists to give the router and the health probe something real to drive.
pub struct UdpUpstream {
    upstream: Upstream,
    server_addr: SocketAddr,
}

impl UdpUpstream {
    pub fn new(upstream: Upstream, server_addr: SocketAddr) -> Self {
        Self {
            upstream,
            server_addr,
        }
    }

    async fn query(&self, message_bytes: &[u8]) -> std::io::Result<Vec<u8>> {
        let bind_addr: SocketAddr = if self.server_addr.is_ipv4() {
            "0.0.0.0:0".parse().unwrap()
        } else {
            "[::]:0".parse().unwrap()
        };
        let socket = UdpSocket::bind(bind_addr).await?;
        socket.send_to(message_bytes, self.server_addr).await?;

        let mut buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];
        let (len, from) = socket.recv_from(&mut buf).await?;
        if from.ip() != self.server_addr.ip() {
            debug!(expected = %self.server_addr, received_from = %from, "UDP response from unexpected source");
        }
        buf.truncate(len);
        Ok(buf)
    }
}

#[async_trait]
impl UpstreamResolver for UdpUpstream {
    async fn resolve(&self, request: &Request) -> Result<Response, RouterError> {
        let raw = tokio::time::timeout(QUERY_TIMEOUT, self.query(&request.message))
            .await
            .map_err(|_| RouterError::UpstreamError {
                server: self.display().to_string(),
                source: Box::new(std::io::Error::new(
                    std::io::ErrorKind::TimedOut,
                    "upstream query timed out",
                )),
            })?
            .map_err(|err| RouterError::UpstreamError {
                server: self.display().to_string(),
                source: Box::new(err),
            })?;

        let kind = match Message::from_vec(&raw) {
            Ok(message) => match message.response_code {
                ResponseCode::NoError => ResponseKind::Resolved,
                ResponseCode::NXDomain => ResponseKind::NxDomain,
                ResponseCode::ServFail | ResponseCode::Refused | ResponseCode::NotImp => {
                    ResponseKind::ServerFailure
                }
                _ => ResponseKind::Other,
            },
            Err(_) => ResponseKind::Other,
        };

        Ok(Response {
            kind,
            message: Arc::from(raw.into_boxed_slice()),
        })
    }

    fn display(&self) -> Arc<str> {
        self.upstream.display()
    }
}
