//! Ferrous Echo Domain Layer
pub mod config;
pub mod dns_header;
pub mod dns_name;
pub mod dns_question;
pub mod dns_record;
pub mod errors;

pub use config::{AnswerConfig, CliOverrides, Config, ConfigError, LoggingConfig, ServerConfig};
pub use dns_header::{Header, HeaderFlags, ResponseCode, HEADER_LEN, MAX_MESSAGE_SIZE, OPCODE_QUERY};
pub use dns_name::{DomainName, Label, MAX_LABEL_LEN};
pub use dns_question::Question;
pub use dns_record::{RecordClass, RecordType, ResourceRecord};
pub use errors::CodecError;
