#![allow(dead_code)]
use ferrous_echo_infrastructure::dns::{serve_udp, DnsServerHandler, MessageAssembler};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// `serve_udp` running on an ephemeral loopback port.
pub struct TestEchoServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl TestEchoServer {
    pub async fn start() -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;
        let handler = DnsServerHandler::new(MessageAssembler::default(), false);

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let task = tokio::spawn(serve_udp(socket, handler, async move {
            let _ = shutdown_rx.await;
        }));

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
            task,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Sends `query` and waits briefly for a reply.
    pub async fn exchange(&self, client: &UdpSocket, query: &[u8]) -> Option<Vec<u8>> {
        client.send_to(query, self.addr).await.ok()?;
        let mut buf = vec![0u8; 512];
        match tokio::time::timeout(Duration::from_millis(500), client.recv_from(&mut buf)).await {
            Ok(Ok((len, _))) => {
                buf.truncate(len);
                Some(buf)
            }
            _ => None,
        }
    }

    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        let _ = self.task.await;
    }
}
