use thiserror::Error;

/// Failures raised while decoding a query or encoding its response.
///
/// Everything except [`CodecError::UnsupportedOpcode`] is structural: the
/// request/response cycle is aborted and no response is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Malformed header: message is {len} bytes, header needs 12")]
    MalformedHeader { len: usize },

    #[error("Label of length {length} at offset {offset} runs past the end of the message")]
    InvalidLabelLength { offset: usize, length: usize },

    #[error("Compression pointer at offset {pointer_offset} references offset {target} with no recorded label")]
    DanglingPointer { pointer_offset: usize, target: usize },

    #[error("Compression pointer at offset {pointer_offset} loops back into its own name at offset {target}")]
    PointerLoop { pointer_offset: usize, target: usize },

    #[error("Reserved label tag {tag:#04x} at offset {offset}")]
    ReservedLabelTag { offset: usize, tag: u8 },

    #[error("Response needs {needed} bytes, buffer capacity is {capacity}")]
    BufferCapacityExceeded { needed: usize, capacity: usize },

    #[error("Unsupported opcode: {0}")]
    UnsupportedOpcode(u8),

    #[error("Name starting before offset {offset} is not terminated")]
    TruncatedName { offset: usize },

    #[error("Question at offset {offset} is missing its type and class")]
    TruncatedQuestion { offset: usize },

    #[error("Datagram of {len} bytes exceeds the {capacity}-byte message buffer")]
    OversizedDatagram { len: usize, capacity: usize },
}

impl CodecError {
    /// Returns `false` only for errors the codec recovers from locally.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, CodecError::UnsupportedOpcode(_))
    }
}
