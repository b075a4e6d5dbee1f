pub mod packet_dump;
pub mod server;
pub mod wire;

pub use server::{serve_udp, DnsServerHandler};
pub use wire::{AssembledResponse, MessageAssembler};
