//! Name Decompression Engine
//!
//! Scans the bytes that follow the header and pulls out one domain name per
//! question, resolving RFC 1035 §4.1.4 compression pointers against labels
//! seen earlier in the same message.

use super::compression_dictionary::CompressionDictionary;
use ferrous_echo_domain::{CodecError, DomainName, Label, HEADER_LEN};
use tracing::trace;

const TAG_MASK: u8 = 0b1100_0000;
const LABEL_TAG: u8 = 0b0000_0000;
const POINTER_TAG: u8 = 0b1100_0000;
const POINTER_HIGH_MASK: u8 = 0b0011_1111;

/// QTYPE + QCLASS following every question name.
const QUESTION_FIELDS_LEN: usize = 4;

/// Extracts up to `max_names` question names from `region`, the part of the
/// message after the 12-byte header.
///
/// Offsets in errors and in the compression dictionary are absolute, i.e.
/// measured from the start of the message.
pub fn extract_question_names(
    region: &[u8],
    max_names: usize,
) -> Result<Vec<DomainName>, CodecError> {
    NameScanner::new(region).scan(max_names)
}

struct NameScanner<'a> {
    region: &'a [u8],
    dictionary: CompressionDictionary,
    names: Vec<DomainName>,
    current: DomainName,
    /// Absolute offset of the first label of `current`.
    current_start: Option<usize>,
}

impl<'a> NameScanner<'a> {
    fn new(region: &'a [u8]) -> Self {
        Self {
            region,
            dictionary: CompressionDictionary::new(),
            names: Vec::new(),
            current: DomainName::root(),
            current_start: None,
        }
    }

    fn scan(mut self, max_names: usize) -> Result<Vec<DomainName>, CodecError> {
        let mut idx = 0;

        while idx < self.region.len() && self.names.len() < max_names {
            let octet = self.region[idx];
            idx = match octet & TAG_MASK {
                LABEL_TAG if octet == 0 => {
                    self.finish_name();
                    self.skip_question_fields(idx + 1)?
                }
                LABEL_TAG => self.read_label(idx, octet as usize)?,
                POINTER_TAG => {
                    self.read_pointer(idx)?;
                    self.skip_question_fields(idx + 2)?
                }
                _ => {
                    return Err(CodecError::ReservedLabelTag {
                        offset: absolute(idx),
                        tag: octet,
                    })
                }
            };
        }

        if let Some(start) = self.current_start {
            return Err(CodecError::TruncatedName { offset: start });
        }

        Ok(self.names)
    }

    fn read_label(&mut self, idx: usize, length: usize) -> Result<usize, CodecError> {
        let offset = absolute(idx);
        let end = idx + 1 + length;
        let bytes = self
            .region
            .get(idx + 1..end)
            .ok_or(CodecError::InvalidLabelLength { offset, length })?;
        let label =
            Label::new(bytes).map_err(|_| CodecError::InvalidLabelLength { offset, length })?;

        self.dictionary.record_label(offset, label.clone());
        self.current_start.get_or_insert(offset);
        self.current.push(label);
        Ok(end)
    }

    fn read_pointer(&mut self, idx: usize) -> Result<(), CodecError> {
        let pointer_offset = absolute(idx);
        let low = *self
            .region
            .get(idx + 1)
            .ok_or(CodecError::TruncatedName {
                offset: self.current_start.unwrap_or(pointer_offset),
            })?;
        let target = (usize::from(self.region[idx] & POINTER_HIGH_MASK) << 8) | usize::from(low);

        if let Some(start) = self.current_start {
            if (start..pointer_offset).contains(&target) {
                return Err(CodecError::PointerLoop {
                    pointer_offset,
                    target,
                });
            }
        }
        if target >= pointer_offset {
            return Err(CodecError::DanglingPointer {
                pointer_offset,
                target,
            });
        }

        let suffix = self
            .dictionary
            .resolve(target)
            .ok_or(CodecError::DanglingPointer {
                pointer_offset,
                target,
            })?;
        trace!(
            pointer_offset,
            target,
            suffix = %suffix,
            entries = self.dictionary.len(),
            "Resolved compression pointer"
        );

        self.dictionary.record_pointer(pointer_offset, suffix.clone());
        self.current.append(&suffix);
        self.finish_name();
        Ok(())
    }

    fn finish_name(&mut self) {
        let name = std::mem::take(&mut self.current);
        trace!(name = %name, "Extracted question name");
        self.names.push(name);
        self.current_start = None;
    }

    fn skip_question_fields(&self, idx: usize) -> Result<usize, CodecError> {
        let end = idx + QUESTION_FIELDS_LEN;
        if end > self.region.len() {
            return Err(CodecError::TruncatedQuestion {
                offset: absolute(idx),
            });
        }
        Ok(end)
    }
}

fn absolute(region_idx: usize) -> usize {
    region_idx + HEADER_LEN
}
