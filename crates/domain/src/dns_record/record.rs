use super::{RecordClass, RecordType};
use crate::dns_name::DomainName;
use std::net::Ipv4Addr;

/// A resource record as written to the answer section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: DomainName,
    pub rtype: u16,
    pub class: u16,
    pub ttl: u32,
    pub rdata: Vec<u8>,
}

impl ResourceRecord {
    /// An `IN A` record pointing `name` at `address`.
    pub fn a(name: DomainName, ttl: u32, address: Ipv4Addr) -> Self {
        Self {
            name,
            rtype: RecordType::A.code(),
            class: RecordClass::IN.code(),
            ttl,
            rdata: address.octets().to_vec(),
        }
    }

    pub fn rdlength(&self) -> u16 {
        self.rdata.len() as u16
    }

    /// Name, type, class, TTL, RDLENGTH, then the resource data.
    pub fn wire_len(&self) -> usize {
        self.name.wire_len() + 2 + 2 + 4 + 2 + self.rdata.len()
    }
}
