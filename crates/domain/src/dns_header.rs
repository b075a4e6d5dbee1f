use std::fmt;

/// Size of the fixed DNS header in bytes.
pub const HEADER_LEN: usize = 12;

/// Hard capacity of inbound and outbound messages (non-EDNS UDP limit).
pub const MAX_MESSAGE_SIZE: usize = 512;

/// Opcode of a standard query, the only kind this server understands.
pub const OPCODE_QUERY: u8 = 0;

const QR_SHIFT: u16 = 15;
const OPCODE_SHIFT: u16 = 11;
const AA_SHIFT: u16 = 10;
const TC_SHIFT: u16 = 9;
const RD_SHIFT: u16 = 8;
const RA_SHIFT: u16 = 7;
const Z_SHIFT: u16 = 4;
const RCODE_SHIFT: u16 = 0;

const OPCODE_MASK: u16 = 0xF;
const Z_MASK: u16 = 0x7;
const RCODE_MASK: u16 = 0xF;

/// The bit-packed flag word of the header.
///
/// Layout, most significant bit first:
///
/// ```text
/// | QR | OPCODE (4) | AA | TC | RD | RA | Z (3) | RCODE (4) |
/// ```
///
/// Every setter is a read-modify-write on the word: it touches only the bits
/// of its own sub-field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HeaderFlags(u16);

impl HeaderFlags {
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    pub const fn bits(&self) -> u16 {
        self.0
    }

    pub fn is_response(&self) -> bool {
        self.bit(QR_SHIFT)
    }

    pub fn set_response(&mut self, value: bool) {
        self.set_bit(QR_SHIFT, value);
    }

    pub fn opcode(&self) -> u8 {
        self.field(OPCODE_SHIFT, OPCODE_MASK)
    }

    pub fn set_opcode(&mut self, opcode: u8) {
        self.set_field(OPCODE_SHIFT, OPCODE_MASK, opcode);
    }

    pub fn is_authoritative(&self) -> bool {
        self.bit(AA_SHIFT)
    }

    pub fn set_authoritative(&mut self, value: bool) {
        self.set_bit(AA_SHIFT, value);
    }

    pub fn is_truncated(&self) -> bool {
        self.bit(TC_SHIFT)
    }

    pub fn set_truncated(&mut self, value: bool) {
        self.set_bit(TC_SHIFT, value);
    }

    pub fn recursion_desired(&self) -> bool {
        self.bit(RD_SHIFT)
    }

    pub fn set_recursion_desired(&mut self, value: bool) {
        self.set_bit(RD_SHIFT, value);
    }

    pub fn recursion_available(&self) -> bool {
        self.bit(RA_SHIFT)
    }

    pub fn set_recursion_available(&mut self, value: bool) {
        self.set_bit(RA_SHIFT, value);
    }

    /// The 3-bit Z field, which must be zero in responses.
    pub fn reserved(&self) -> u8 {
        self.field(Z_SHIFT, Z_MASK)
    }

    pub fn set_reserved(&mut self, value: u8) {
        self.set_field(Z_SHIFT, Z_MASK, value);
    }

    pub fn rcode(&self) -> u8 {
        self.field(RCODE_SHIFT, RCODE_MASK)
    }

    pub fn set_rcode(&mut self, rcode: u8) {
        self.set_field(RCODE_SHIFT, RCODE_MASK, rcode);
    }

    pub fn response_code(&self) -> Option<ResponseCode> {
        ResponseCode::from_code(self.rcode())
    }

    pub fn set_response_code(&mut self, code: ResponseCode) {
        self.set_rcode(code.code());
    }

    fn bit(&self, shift: u16) -> bool {
        (self.0 >> shift) & 0x1 == 1
    }

    fn set_bit(&mut self, shift: u16, value: bool) {
        if value {
            self.0 |= 1 << shift;
        } else {
            self.0 &= !(1 << shift);
        }
    }

    fn field(&self, shift: u16, mask: u16) -> u8 {
        ((self.0 >> shift) & mask) as u8
    }

    fn set_field(&mut self, shift: u16, mask: u16, value: u8) {
        self.0 &= !(mask << shift);
        self.0 |= (u16::from(value) & mask) << shift;
    }
}

/// Response codes (RFC 1035 §4.1.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    NoError,
    FormErr,
    ServFail,
    NxDomain,
    NotImp,
    Refused,
}

impl ResponseCode {
    pub fn code(&self) -> u8 {
        match self {
            ResponseCode::NoError => 0,
            ResponseCode::FormErr => 1,
            ResponseCode::ServFail => 2,
            ResponseCode::NxDomain => 3,
            ResponseCode::NotImp => 4,
            ResponseCode::Refused => 5,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(ResponseCode::NoError),
            1 => Some(ResponseCode::FormErr),
            2 => Some(ResponseCode::ServFail),
            3 => Some(ResponseCode::NxDomain),
            4 => Some(ResponseCode::NotImp),
            5 => Some(ResponseCode::Refused),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::FormErr => "FORMERR",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::NxDomain => "NXDOMAIN",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::Refused => "REFUSED",
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The 12-byte message header, held in host byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Header {
    pub id: u16,
    pub flags: HeaderFlags,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
}

impl Header {
    pub fn new(id: u16) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags = &self.flags;
        write!(
            f,
            "id={} qr={} opcode={} aa={} tc={} rd={} ra={} z={} rcode={} \
             qdcount={} ancount={} nscount={} arcount={}",
            self.id,
            u8::from(flags.is_response()),
            flags.opcode(),
            u8::from(flags.is_authoritative()),
            u8::from(flags.is_truncated()),
            u8::from(flags.recursion_desired()),
            u8::from(flags.recursion_available()),
            flags.reserved(),
            flags.rcode(),
            self.question_count,
            self.answer_count,
            self.authority_count,
            self.additional_count,
        )
    }
}
