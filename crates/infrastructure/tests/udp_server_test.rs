use ferrous_echo_infrastructure::dns::{DnsServerHandler, MessageAssembler};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;

mod helpers;
use helpers::{QueryBuilder, TestEchoServer};

fn peer() -> SocketAddr {
    "127.0.0.1:40000".parse().unwrap()
}

#[test]
fn test_handler_answers_valid_query() {
    let handler = DnsServerHandler::new(MessageAssembler::default(), true);
    let query = QueryBuilder::new(0x4242).question("example.com").build();

    let response = handler.handle_datagram(&query, peer()).unwrap();
    assert_eq!(&response[..2], &[0x42, 0x42]);
    assert_eq!(&response[4..8], &[0x00, 0x01, 0x00, 0x01]);
}

#[test]
fn test_handler_drops_malformed_datagram() {
    let handler = DnsServerHandler::new(MessageAssembler::default(), false);

    assert!(handler.handle_datagram(&[0x00, 0x01], peer()).is_none());
    let dangling = QueryBuilder::new(1).pointer_question(200).build();
    assert!(handler.handle_datagram(&dangling, peer()).is_none());
}

#[tokio::test]
async fn test_udp_round_trip() {
    let server = TestEchoServer::start().await.unwrap();
    let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();

    let query = QueryBuilder::new(0x1234).question("codecrafters.io").build();
    let response = server.exchange(&client, &query).await.unwrap();

    assert_eq!(&response[..4], &[0x12, 0x34, 0x80, 0x00]);
    assert_eq!(&response[response.len() - 4..], &[8, 8, 8, 8]);

    server.shutdown().await;
}

#[tokio::test]
async fn test_server_survives_malformed_datagram() {
    let server = TestEchoServer::start().await.unwrap();
    let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();

    assert!(server.exchange(&client, &[0xde, 0xad]).await.is_none());

    let query = QueryBuilder::new(0x0777).question("abc.com").build();
    let response = server.exchange(&client, &query).await.unwrap();
    assert_eq!(&response[..2], &[0x07, 0x77]);

    server.shutdown().await;
}

#[tokio::test]
async fn test_server_stops_on_shutdown() {
    let server = TestEchoServer::start().await.unwrap();
    let addr = server.addr();

    tokio::time::timeout(Duration::from_secs(2), server.shutdown())
        .await
        .unwrap();

    // Port is free again once the loop has returned
    let rebound = UdpSocket::bind(addr).await;
    assert!(rebound.is_ok());
}
