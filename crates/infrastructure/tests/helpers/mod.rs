#![allow(dead_code)]
pub mod builders;
pub mod echo_server;

pub use builders::QueryBuilder;
pub use echo_server::TestEchoServer;
