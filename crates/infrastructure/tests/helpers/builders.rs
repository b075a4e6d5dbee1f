#![allow(dead_code)]
use ferrous_echo_domain::HeaderFlags;

/// Builds raw query datagrams byte by byte.
pub struct QueryBuilder {
    id: u16,
    flags: HeaderFlags,
    question_count: Option<u16>,
    questions: u16,
    body: Vec<u8>,
}

impl QueryBuilder {
    pub fn new(id: u16) -> Self {
        Self {
            id,
            flags: HeaderFlags::default(),
            question_count: None,
            questions: 0,
            body: Vec::new(),
        }
    }

    pub fn opcode(mut self, opcode: u8) -> Self {
        self.flags.set_opcode(opcode);
        self
    }

    pub fn recursion_desired(mut self, value: bool) -> Self {
        self.flags.set_recursion_desired(value);
        self
    }

    /// Uncompressed `A`/`IN` question for a dotted name.
    pub fn question(mut self, domain: &str) -> Self {
        for label in domain.split('.').filter(|l| !l.is_empty()) {
            self.body.push(label.len() as u8);
            self.body.extend_from_slice(label.as_bytes());
        }
        self.body.push(0x00);
        self.body.extend_from_slice(&[0x00, 0x01, 0x00, 0x01]);
        self.questions += 1;
        self
    }

    /// Question whose name is a single compression pointer.
    pub fn pointer_question(mut self, target: u16) -> Self {
        self.body.extend_from_slice(&(0xC000 | target).to_be_bytes());
        self.body.extend_from_slice(&[0x00, 0x01, 0x00, 0x01]);
        self.questions += 1;
        self
    }

    /// Appends bytes verbatim without counting a question.
    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(bytes);
        self
    }

    /// Overrides QDCOUNT instead of counting the questions added.
    pub fn question_count(mut self, count: u16) -> Self {
        self.question_count = Some(count);
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(12 + self.body.len());
        buf.extend_from_slice(&self.id.to_be_bytes());
        buf.extend_from_slice(&self.flags.bits().to_be_bytes());
        buf.extend_from_slice(&self.question_count.unwrap_or(self.questions).to_be_bytes());
        buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);
        buf.extend_from_slice(&self.body);
        buf
    }
}
