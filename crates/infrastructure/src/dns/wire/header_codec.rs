//! Header Codec
//!
//! Converts the 12-byte wire header to and from [`Header`]. Every 16-bit
//! field travels big-endian; [`Header`] holds host-order values.

use ferrous_echo_domain::{
    CodecError, Header, HeaderFlags, ResponseCode, HEADER_LEN, OPCODE_QUERY,
};

/// Decodes a header. Any 12 bytes form a structurally valid header.
pub fn decode(raw: &[u8; HEADER_LEN]) -> Header {
    let word = |i: usize| u16::from_be_bytes([raw[i], raw[i + 1]]);
    Header {
        id: word(0),
        flags: HeaderFlags::from_bits(word(2)),
        question_count: word(4),
        answer_count: word(6),
        authority_count: word(8),
        additional_count: word(10),
    }
}

/// Decodes the header at the start of a whole message.
pub fn decode_message_header(message: &[u8]) -> Result<Header, CodecError> {
    let raw: &[u8; HEADER_LEN] = message
        .get(..HEADER_LEN)
        .and_then(|prefix| prefix.try_into().ok())
        .ok_or(CodecError::MalformedHeader { len: message.len() })?;
    Ok(decode(raw))
}

pub fn encode(header: &Header) -> [u8; HEADER_LEN] {
    let mut raw = [0u8; HEADER_LEN];
    let words = [
        header.id,
        header.flags.bits(),
        header.question_count,
        header.answer_count,
        header.authority_count,
        header.additional_count,
    ];
    for (chunk, word) in raw.chunks_exact_mut(2).zip(words) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    raw
}

/// Only standard queries are implemented.
pub fn check_opcode(opcode: u8) -> Result<(), CodecError> {
    if opcode == OPCODE_QUERY {
        Ok(())
    } else {
        Err(CodecError::UnsupportedOpcode(opcode))
    }
}

pub fn response_code_for(opcode: u8) -> ResponseCode {
    match check_opcode(opcode) {
        Ok(()) => ResponseCode::NoError,
        Err(_) => ResponseCode::NotImp,
    }
}

/// Derives the response header from a request header.
///
/// Id, opcode, AA, TC, RD and RA are echoed. QR is set, Z is cleared and the
/// response code follows [`response_code_for`]. All section counts start at
/// zero; the section builders raise them as records are written.
pub fn response_header(request: &Header) -> Header {
    let mut flags = request.flags;
    flags.set_response(true);
    flags.set_reserved(0);
    flags.set_response_code(response_code_for(flags.opcode()));

    Header {
        id: request.id,
        flags,
        ..Header::default()
    }
}
