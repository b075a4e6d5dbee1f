//! Compression dictionary
//!
//! Maps absolute message offsets to what was found there while scanning the
//! question section, so that compression pointers can be resolved against
//! names already seen.

use ferrous_echo_domain::{DomainName, Label, MAX_MESSAGE_SIZE};
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
struct Entry {
    /// Labels contributed by this entry alone.
    suffix: DomainName,
    /// Bytes this entry occupies in the message.
    span: usize,
    /// A pointer entry already ends at the root; nothing follows it.
    terminal: bool,
}

/// Raw per-offset entries, expanded on demand into complete name suffixes.
#[derive(Debug, Clone, Default)]
pub struct CompressionDictionary {
    entries: BTreeMap<usize, Entry>,
}

impl CompressionDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records a single label found at `offset`.
    pub fn record_label(&mut self, offset: usize, label: Label) {
        let span = label.wire_len();
        self.entries.insert(
            offset,
            Entry {
                suffix: DomainName::from_labels(vec![label]),
                span,
                terminal: false,
            },
        );
    }

    /// Records the resolved suffix of a 2-byte pointer found at `offset`.
    ///
    /// A name written as labels followed by a pointer can then itself be the
    /// target of a later pointer and still expand to the full name.
    pub fn record_pointer(&mut self, offset: usize, resolved: DomainName) {
        self.entries.insert(
            offset,
            Entry {
                suffix: resolved,
                span: 2,
                terminal: true,
            },
        );
    }

    /// Expands every entry into the complete suffix starting at its offset.
    ///
    /// An entry at offset `o` is extended by the entry at `o + span`, and so
    /// on, until no entry follows or a pointer entry ends the chain. Spans
    /// are never zero so the walk only moves forward; it is additionally
    /// capped at the message size.
    pub fn expand(&self) -> BTreeMap<usize, DomainName> {
        self.entries
            .keys()
            .filter_map(|&offset| self.expand_from(offset).map(|name| (offset, name)))
            .collect()
    }

    /// Resolves a pointer target against the expanded dictionary.
    pub fn resolve(&self, target: usize) -> Option<DomainName> {
        self.expand().remove(&target)
    }

    fn expand_from(&self, offset: usize) -> Option<DomainName> {
        let first = self.entries.get(&offset)?;
        let mut name = first.suffix.clone();
        if first.terminal {
            return Some(name);
        }

        let mut next = offset + first.span;
        for _ in 0..MAX_MESSAGE_SIZE {
            let Some(entry) = self.entries.get(&next) else {
                break;
            };
            name.append(&entry.suffix);
            if entry.terminal {
                break;
            }
            next += entry.span;
        }
        Some(name)
    }
}
