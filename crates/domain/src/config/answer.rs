use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// The synthesized `A` record returned for every question.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct AnswerConfig {
    #[serde(default = "default_ttl")]
    pub ttl: u32,

    #[serde(default = "default_address")]
    pub address: Ipv4Addr,
}

impl Default for AnswerConfig {
    fn default() -> Self {
        Self {
            ttl: default_ttl(),
            address: default_address(),
        }
    }
}

fn default_ttl() -> u32 {
    60
}

fn default_address() -> Ipv4Addr {
    Ipv4Addr::new(8, 8, 8, 8)
}
