//! Inverse of [`crate::unescape`]: render bytes as a string literal body.

use std::fmt::Write;

/// Escape `bytes` so that `unescape(&escape(bytes)) == bytes`.
///
/// Printable ASCII is kept, common control characters use their short
/// escapes, and every other byte becomes `\xNN`. The result is safe inside
/// either quote style.
pub fn escape(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &b in bytes {
        match b {
            b'\\' => out.push_str("\\\\"),
            b'"' => out.push_str("\\\""),
            b'\'' => out.push_str("\\'"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\t' => out.push_str("\\t"),
            0x20..=0x7E => out.push(char::from(b)),
            _ => {
                let _ = write!(out, "\\x{b:02x}");
            }
        }
    }
    out
}
