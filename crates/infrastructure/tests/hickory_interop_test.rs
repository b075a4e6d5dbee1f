use ferrous_echo_infrastructure::dns::MessageAssembler;
use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::{DNSClass, Name, RData, RecordType};
use hickory_proto::serialize::binary::BinEncodable;
use std::net::Ipv4Addr;
use std::str::FromStr;

mod helpers;
use helpers::QueryBuilder;

fn hickory_query(id: u16, names: &[&str]) -> Vec<u8> {
    let mut message = Message::new();
    message.set_id(id);
    message.set_recursion_desired(true);
    for name in names {
        message.add_query(Query::query(Name::from_str(name).unwrap(), RecordType::A));
    }
    message.to_vec().unwrap()
}

#[test]
fn test_response_parses_as_dns_message() {
    let query = QueryBuilder::new(0x1234).question("codecrafters.io").build();
    let response = MessageAssembler::default().assemble(&query).unwrap();

    let parsed = Message::from_vec(response.as_bytes()).unwrap();

    assert_eq!(parsed.id(), 0x1234);
    assert_eq!(parsed.message_type(), MessageType::Response);
    assert_eq!(parsed.op_code(), OpCode::Query);
    assert_eq!(parsed.response_code(), ResponseCode::NoError);
    assert_eq!(parsed.queries().len(), 1);
    assert_eq!(parsed.queries()[0].name().to_utf8(), "codecrafters.io.");
    assert_eq!(parsed.queries()[0].query_type(), RecordType::A);

    let answer = &parsed.answers()[0];
    assert_eq!(answer.name().to_utf8(), "codecrafters.io.");
    assert_eq!(answer.ttl(), 60);
    assert_eq!(answer.record_type(), RecordType::A);
    assert_eq!(answer.dns_class(), DNSClass::IN);
    assert!(matches!(
        answer.data(),
        Some(RData::A(a)) if a.0 == Ipv4Addr::new(8, 8, 8, 8)
    ));
}

#[test]
fn test_answers_hickory_query_with_compressed_names() {
    let query = hickory_query(0xBEEF, &["www.example.com.", "mail.example.com."]);
    // "mail" plus a pointer back into the first name
    let uncompressed = 12 + (17 + 4) + (18 + 4);
    assert!(query.len() < uncompressed);

    let response = MessageAssembler::default().assemble(&query).unwrap();
    let parsed = Message::from_vec(response.as_bytes()).unwrap();

    assert_eq!(parsed.id(), 0xBEEF);
    assert!(parsed.recursion_desired());
    let queried: Vec<String> = parsed.queries().iter().map(|q| q.name().to_utf8()).collect();
    assert_eq!(queried, vec!["www.example.com.", "mail.example.com."]);
    let answered: Vec<String> = parsed.answers().iter().map(|r| r.name().to_utf8()).collect();
    assert_eq!(answered, queried);
}

#[test]
fn test_hickory_query_with_edns_stops_at_question_count() {
    let mut message = Message::new();
    message.set_id(3);
    message.add_query(Query::query(
        Name::from_str("example.org.").unwrap(),
        RecordType::A,
    ));
    message.set_edns(hickory_proto::op::Edns::new());
    let query = message.to_vec().unwrap();

    let response = MessageAssembler::default().assemble(&query).unwrap();
    let parsed = Message::from_vec(response.as_bytes()).unwrap();

    assert_eq!(parsed.queries().len(), 1);
    assert_eq!(parsed.answers().len(), 1);
    assert!(parsed.extensions().is_none());
}
