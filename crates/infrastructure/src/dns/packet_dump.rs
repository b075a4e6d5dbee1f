//! Hex/ASCII rendering of raw datagrams for trace logs.

use std::fmt::Write;

const BYTES_PER_ROW: usize = 16;

/// Renders `bytes` as rows of `offset  hex bytes  |ascii|`.
///
/// Bytes outside the printable ASCII range are shown as `.` in the gutter.
pub fn hex_dump(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 4 + 16);
    for (row, chunk) in bytes.chunks(BYTES_PER_ROW).enumerate() {
        if row > 0 {
            out.push('\n');
        }
        let _ = write!(out, "{:04x}  ", row * BYTES_PER_ROW);
        for i in 0..BYTES_PER_ROW {
            match chunk.get(i) {
                Some(b) => {
                    let _ = write!(out, "{:02x} ", b);
                }
                None => out.push_str("   "),
            }
        }
        out.push(' ');
        out.push('|');
        out.extend(chunk.iter().map(|&b| {
            if b.is_ascii_graphic() || b == b' ' {
                b as char
            } else {
                '.'
            }
        }));
        out.push('|');
    }
    out
}
