//! Message Assembler
//!
//! Runs one request/response cycle:
//!
//! ```text
//! Received -> HeaderDecoded -> NamesExtracted -> QuestionsWritten -> AnswersWritten -> Sent
//! ```
//!
//! Each stage consumes the previous one, so no stage can be skipped. `Sent`
//! belongs to the caller: it receives the finished [`AssembledResponse`]. A
//! structural error aborts the cycle; nothing is repaired here.

use super::answer_builder::AnswerSectionBuilder;
use super::header_codec;
use super::name_decompression::extract_question_names;
use super::question_builder::write_question;
use super::response_buffer::ResponseBuffer;
use ferrous_echo_domain::{
    AnswerConfig, CodecError, DomainName, Header, HEADER_LEN, MAX_MESSAGE_SIZE,
};
use tracing::{debug, warn};

/// A finished response, ready to go out as a single datagram.
#[derive(Debug, Clone)]
pub struct AssembledResponse {
    pub header: Header,
    pub names: Vec<DomainName>,
    /// Bytes of the header plus the question section.
    pub question_section_end: usize,
    bytes: Vec<u8>,
}

impl AssembledResponse {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn question_section(&self) -> &[u8] {
        &self.bytes[HEADER_LEN..self.question_section_end]
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

#[derive(Debug, Clone, Default)]
pub struct MessageAssembler {
    answers: AnswerSectionBuilder,
}

impl MessageAssembler {
    pub fn new(config: &AnswerConfig) -> Self {
        Self {
            answers: AnswerSectionBuilder::new(config),
        }
    }

    pub fn assemble(&self, datagram: &[u8]) -> Result<AssembledResponse, CodecError> {
        let answered = Received::new(datagram)?
            .decode_header()?
            .extract_names()?
            .write_questions()?
            .write_answers(&self.answers)?;
        Ok(answered.finish())
    }
}

struct Received<'a> {
    datagram: &'a [u8],
}

struct HeaderDecoded<'a> {
    request: Header,
    response: Header,
    region: &'a [u8],
}

struct NamesExtracted {
    response: Header,
    names: Vec<DomainName>,
}

struct QuestionsWritten {
    response: Header,
    names: Vec<DomainName>,
    buffer: ResponseBuffer,
}

struct AnswersWritten {
    response: Header,
    names: Vec<DomainName>,
    buffer: ResponseBuffer,
    question_section_end: usize,
}

impl<'a> Received<'a> {
    fn new(datagram: &'a [u8]) -> Result<Self, CodecError> {
        if datagram.len() > MAX_MESSAGE_SIZE {
            return Err(CodecError::OversizedDatagram {
                len: datagram.len(),
                capacity: MAX_MESSAGE_SIZE,
            });
        }
        Ok(Self { datagram })
    }

    fn decode_header(self) -> Result<HeaderDecoded<'a>, CodecError> {
        let request = header_codec::decode_message_header(self.datagram)?;
        debug!(header = %request, "Decoded request header");

        if let Err(e) = header_codec::check_opcode(request.flags.opcode()) {
            warn!(id = request.id, error = %e, "Answering with NOTIMP");
        }

        Ok(HeaderDecoded {
            request,
            response: header_codec::response_header(&request),
            region: &self.datagram[HEADER_LEN..],
        })
    }
}

impl HeaderDecoded<'_> {
    fn extract_names(self) -> Result<NamesExtracted, CodecError> {
        let names =
            extract_question_names(self.region, usize::from(self.request.question_count))?;
        debug!(
            id = self.request.id,
            count = names.len(),
            names = ?names.iter().map(ToString::to_string).collect::<Vec<_>>(),
            "Extracted question names"
        );
        Ok(NamesExtracted {
            response: self.response,
            names,
        })
    }
}

impl NamesExtracted {
    fn write_questions(self) -> Result<QuestionsWritten, CodecError> {
        let mut response = self.response;
        let mut buffer = ResponseBuffer::new();
        for name in &self.names {
            write_question(&mut buffer, &mut response, name)?;
        }
        buffer.write_header(&response);

        Ok(QuestionsWritten {
            response,
            names: self.names,
            buffer,
        })
    }
}

impl QuestionsWritten {
    fn write_answers(self, answers: &AnswerSectionBuilder) -> Result<AnswersWritten, CodecError> {
        let mut response = self.response;
        let mut buffer = self.buffer;
        let question_section_end = buffer.len();
        for name in &self.names {
            answers.write_answer(&mut buffer, &mut response, name)?;
        }

        Ok(AnswersWritten {
            response,
            names: self.names,
            buffer,
            question_section_end,
        })
    }
}

impl AnswersWritten {
    fn finish(self) -> AssembledResponse {
        debug!(header = %self.response, bytes = self.buffer.len(), "Assembled response");
        AssembledResponse {
            header: self.response,
            names: self.names,
            question_section_end: self.question_section_end,
            bytes: self.buffer.into_bytes(),
        }
    }
}
