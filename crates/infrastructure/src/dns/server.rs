use super::packet_dump::hex_dump;
use super::wire::MessageAssembler;
use ferrous_echo_domain::MAX_MESSAGE_SIZE;
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::UdpSocket;
use tracing::{debug, error, info, trace, warn};

/// Turns one inbound datagram into at most one outbound datagram.
#[derive(Debug, Clone)]
pub struct DnsServerHandler {
    assembler: MessageAssembler,
    dump_packets: bool,
}

impl DnsServerHandler {
    pub fn new(assembler: MessageAssembler, dump_packets: bool) -> Self {
        Self {
            assembler,
            dump_packets,
        }
    }

    /// Returns the response bytes, or `None` when the datagram is dropped.
    pub fn handle_datagram(&self, datagram: &[u8], peer: SocketAddr) -> Option<Vec<u8>> {
        debug!(client = %peer, bytes = datagram.len(), "DNS query received");
        if self.dump_packets {
            trace!(client = %peer, "request:\n{}", hex_dump(datagram));
        }

        match self.assembler.assemble(datagram) {
            Ok(response) => {
                if self.dump_packets {
                    trace!(client = %peer, "response:\n{}", hex_dump(response.as_bytes()));
                }
                Some(response.into_bytes())
            }
            Err(e) => {
                warn!(client = %peer, error = %e, "Dropping malformed datagram");
                None
            }
        }
    }
}

/// Serves datagrams on `socket` until `shutdown` resolves.
///
/// Each datagram is answered before the next one is read.
pub async fn serve_udp<F>(socket: UdpSocket, handler: DnsServerHandler, shutdown: F)
where
    F: Future<Output = ()>,
{
    let mut recv_buf = [0u8; MAX_MESSAGE_SIZE];
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                info!("DNS server shutting down");
                break;
            }
            result = socket.recv_from(&mut recv_buf) => {
                let (n, peer) = match result {
                    Ok(received) => received,
                    Err(e) => {
                        error!(error = %e, "UDP recv error");
                        continue;
                    }
                };

                let Some(response) = handler.handle_datagram(&recv_buf[..n], peer) else {
                    continue;
                };

                match socket.send_to(&response, peer).await {
                    Ok(sent) => debug!(client = %peer, bytes = sent, "DNS response sent"),
                    Err(e) => error!(client = %peer, error = %e, "Failed to send response"),
                }
            }
        }
    }
}
