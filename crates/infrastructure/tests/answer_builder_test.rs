use ferrous_echo_domain::{CodecError, DomainName, Header};
use ferrous_echo_infrastructure::dns::wire::question_builder::write_question;
use ferrous_echo_infrastructure::dns::wire::{header_codec, AnswerSectionBuilder, ResponseBuffer};

fn header_in(buffer: &ResponseBuffer) -> Header {
    header_codec::decode_message_header(buffer.as_bytes()).unwrap()
}

#[test]
fn test_answer_layout_and_header_refresh() {
    let mut buffer = ResponseBuffer::new();
    let mut header = Header::new(0x1234);
    let name: DomainName = "abc.com".parse().unwrap();

    write_question(&mut buffer, &mut header, &name).unwrap();
    let written = AnswerSectionBuilder::default()
        .write_answer(&mut buffer, &mut header, &name)
        .unwrap();

    assert_eq!(written, 9 + 14);
    assert_eq!(
        &buffer.as_bytes()[12 + 13..],
        b"\x03abc\x03com\x00\x00\x01\x00\x01\x00\x00\x00\x3c\x00\x04\x08\x08\x08\x08"
    );
    let on_wire = header_in(&buffer);
    assert_eq!(on_wire.answer_count, 1);
    assert_eq!(on_wire.question_count, 1);
}

#[test]
fn test_overflow_never_counts_an_unwritten_answer() {
    let name: DomainName = "example.com".parse().unwrap();
    // header + 1 question (17) + 1 answer (27) fits, a second answer does not
    let mut buffer = ResponseBuffer::with_capacity(12 + 17 + 27 + 20);
    let mut header = Header::new(1);
    let builder = AnswerSectionBuilder::default();

    write_question(&mut buffer, &mut header, &name).unwrap();
    builder.write_answer(&mut buffer, &mut header, &name).unwrap();
    let len_before = buffer.len();

    let err = builder
        .write_answer(&mut buffer, &mut header, &name)
        .unwrap_err();

    assert_eq!(
        err,
        CodecError::BufferCapacityExceeded {
            needed: len_before + 27,
            capacity: 76
        }
    );
    assert_eq!(buffer.len(), len_before);
    assert_eq!(header.answer_count, 1);
    assert_eq!(header_in(&buffer).answer_count, 1);
}

#[test]
fn test_buffer_remaining_tracks_writes() {
    let mut buffer = ResponseBuffer::new();
    assert_eq!(buffer.remaining(), 500);
    buffer.append(&[0u8; 100]).unwrap();
    assert_eq!(buffer.remaining(), 400);
    assert_eq!(buffer.capacity(), 512);
}
