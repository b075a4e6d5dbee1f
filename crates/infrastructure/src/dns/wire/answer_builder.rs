//! Answer Section Builder

use super::response_buffer::ResponseBuffer;
use ferrous_echo_domain::{AnswerConfig, CodecError, DomainName, Header, ResourceRecord};
use std::net::Ipv4Addr;

/// Writes one synthesized `A` record per question name.
#[derive(Debug, Clone)]
pub struct AnswerSectionBuilder {
    ttl: u32,
    address: Ipv4Addr,
}

impl AnswerSectionBuilder {
    pub fn new(config: &AnswerConfig) -> Self {
        Self {
            ttl: config.ttl,
            address: config.address,
        }
    }

    pub fn record_for(&self, name: &DomainName) -> ResourceRecord {
        ResourceRecord::a(name.clone(), self.ttl, self.address)
    }

    /// Appends the record for `name`, bumps the answer count and rewrites the
    /// header at the front of `buffer`.
    ///
    /// The header in the buffer always matches the records present: a record
    /// that does not fit is neither written nor counted.
    pub fn write_answer(
        &self,
        buffer: &mut ResponseBuffer,
        header: &mut Header,
        name: &DomainName,
    ) -> Result<usize, CodecError> {
        let written = buffer.append(&encode_record(&self.record_for(name)))?;
        header.answer_count += 1;
        buffer.write_header(header);
        Ok(written)
    }
}

impl Default for AnswerSectionBuilder {
    fn default() -> Self {
        Self::new(&AnswerConfig::default())
    }
}

pub fn encode_record(record: &ResourceRecord) -> Vec<u8> {
    let mut entry = Vec::with_capacity(record.wire_len());
    record.name.write_wire(&mut entry);
    entry.extend_from_slice(&record.rtype.to_be_bytes());
    entry.extend_from_slice(&record.class.to_be_bytes());
    entry.extend_from_slice(&record.ttl.to_be_bytes());
    entry.extend_from_slice(&record.rdlength().to_be_bytes());
    entry.extend_from_slice(&record.rdata);
    entry
}
