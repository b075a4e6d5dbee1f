//! Ferrous Echo Infrastructure Layer
//!
//! Wire codec for the echo server plus the per-datagram handler that sits
//! between the codec and the UDP socket.
pub mod dns;
