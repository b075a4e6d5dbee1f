use std::fmt;
use std::str::FromStr;

/// Longest label a length octet can describe (its top two bits are the tag).
pub const MAX_LABEL_LEN: usize = 63;

/// One non-empty segment of a domain name, stored without its length octet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Label(Vec<u8>);

impl Label {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, String> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err("Empty label".to_string());
        }
        if bytes.len() > MAX_LABEL_LEN {
            return Err(format!(
                "Label of {} bytes exceeds {} bytes",
                bytes.len(),
                MAX_LABEL_LEN
            ));
        }
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Encoded size: length octet plus label bytes.
    pub fn wire_len(&self) -> usize {
        1 + self.0.len()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            if b.is_ascii_graphic() && b != b'.' && b != b'\\' {
                write!(f, "{}", b as char)?;
            } else {
                write!(f, "\\{:03}", b)?;
            }
        }
        Ok(())
    }
}

/// A fully expanded domain name: an ordered list of labels followed by the
/// implicit root label. Compression pointers never survive decoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DomainName {
    labels: Vec<Label>,
}

impl DomainName {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn from_labels(labels: Vec<Label>) -> Self {
        Self { labels }
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn push(&mut self, label: Label) {
        self.labels.push(label);
    }

    /// Appends every label of `suffix` after the labels already present.
    pub fn append(&mut self, suffix: &DomainName) {
        self.labels.extend_from_slice(&suffix.labels);
    }

    /// Encoded size without compression, including the root octet.
    pub fn wire_len(&self) -> usize {
        self.labels.iter().map(Label::wire_len).sum::<usize>() + 1
    }

    /// Writes the uncompressed wire form: length-prefixed labels, then `0`.
    pub fn write_wire(&self, out: &mut Vec<u8>) {
        for label in &self.labels {
            out.push(label.len() as u8);
            out.extend_from_slice(label.as_bytes());
        }
        out.push(0);
    }

    pub fn to_wire(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.wire_len());
        self.write_wire(&mut out);
        out
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.labels.is_empty() {
            return f.write_str(".");
        }
        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", label)?;
        }
        Ok(())
    }
}

impl FromStr for DomainName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.strip_suffix('.').unwrap_or(s);
        if trimmed.is_empty() {
            return Ok(Self::root());
        }
        let labels = trimmed
            .split('.')
            .map(|part| {
                Label::new(part.as_bytes())
                    .map_err(|e| format!("Invalid domain name '{}': {}", s, e))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { labels })
    }
}
