pub mod answer_builder;
pub mod compression_dictionary;
pub mod header_codec;
pub mod message_assembler;
pub mod name_decompression;
pub mod question_builder;
pub mod response_buffer;

pub use answer_builder::AnswerSectionBuilder;
pub use compression_dictionary::CompressionDictionary;
pub use message_assembler::{AssembledResponse, MessageAssembler};
pub use name_decompression::extract_question_names;
pub use response_buffer::ResponseBuffer;
