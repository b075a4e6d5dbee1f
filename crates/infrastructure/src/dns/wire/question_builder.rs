//! Question Section Builder

use super::response_buffer::ResponseBuffer;
use ferrous_echo_domain::{CodecError, DomainName, Header, Question};

/// Appends `name` as an `A`/`IN` question and bumps the question count.
///
/// Names are written uncompressed. Returns the number of bytes written.
pub fn write_question(
    buffer: &mut ResponseBuffer,
    header: &mut Header,
    name: &DomainName,
) -> Result<usize, CodecError> {
    let question = Question::a_in(name.clone());
    let written = buffer.append(&encode_question(&question))?;
    header.question_count += 1;
    Ok(written)
}

pub fn encode_question(question: &Question) -> Vec<u8> {
    let mut entry = Vec::with_capacity(question.wire_len());
    question.name.write_wire(&mut entry);
    entry.extend_from_slice(&question.qtype.to_be_bytes());
    entry.extend_from_slice(&question.qclass.to_be_bytes());
    entry
}
