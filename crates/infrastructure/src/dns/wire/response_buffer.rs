use super::header_codec;
use ferrous_echo_domain::{CodecError, Header, HEADER_LEN, MAX_MESSAGE_SIZE};

/// Fixed-capacity output buffer for one response.
///
/// The first 12 bytes are reserved for the header and rewritten with
/// [`ResponseBuffer::write_header`]. Sections are appended whole: an entry
/// that does not fit is rejected without touching the buffer.
#[derive(Debug, Clone)]
pub struct ResponseBuffer {
    bytes: Vec<u8>,
    capacity: usize,
}

impl ResponseBuffer {
    pub fn new() -> Self {
        Self::with_capacity(MAX_MESSAGE_SIZE)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut bytes = Vec::with_capacity(capacity.max(HEADER_LEN));
        bytes.resize(HEADER_LEN, 0);
        Self { bytes, capacity }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.bytes.len())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn write_header(&mut self, header: &Header) {
        self.bytes[..HEADER_LEN].copy_from_slice(&header_codec::encode(header));
    }

    /// Appends `entry` if it fits, returning the number of bytes written.
    pub fn append(&mut self, entry: &[u8]) -> Result<usize, CodecError> {
        let needed = self.bytes.len() + entry.len();
        if needed > self.capacity {
            return Err(CodecError::BufferCapacityExceeded {
                needed,
                capacity: self.capacity,
            });
        }
        self.bytes.extend_from_slice(entry);
        Ok(entry.len())
    }
}

impl Default for ResponseBuffer {
    fn default() -> Self {
        Self::new()
    }
}
