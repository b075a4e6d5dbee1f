use crate::dns_name::DomainName;
use crate::dns_record::{RecordClass, RecordType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: DomainName,
    pub qtype: u16,
    pub qclass: u16,
}

impl Question {
    pub fn new(name: DomainName, qtype: u16, qclass: u16) -> Self {
        Self {
            name,
            qtype,
            qclass,
        }
    }

    /// The only question shape this server ever writes: `A` in class `IN`.
    pub fn a_in(name: DomainName) -> Self {
        Self::new(name, RecordType::A.code(), RecordClass::IN.code())
    }

    /// Name, then 2 bytes of type and 2 bytes of class.
    pub fn wire_len(&self) -> usize {
        self.name.wire_len() + 4
    }
}
