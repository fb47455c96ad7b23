//! String literal decoding.
//!
//! Converts the text between a literal's quotes into the runtime byte
//! string. Escapes follow the C convention:
//!
//! | Escape | Byte(s) |
//! |---|---|
//! | `\a` `\b` `\f` `\n` `\r` `\t` `\v` | 0x07 0x08 0x0C 0x0A 0x0D 0x09 0x0B |
//! | `\\` `\"` `\'` | the escaped character |
//! | `\xNN` | exactly two hex digits |
//! | `\N` `\NN` `\NNN` | one to three octal digits, at most 255 |
//! | `\uNNNN` `\UNNNNNNNN` | Unicode scalar value, encoded as UTF-8 |
//!
//! Anything else is an error; nothing is passed through literally.

use std::str::Chars;

use thiserror::Error;

/// Why a string literal could not be decoded.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UnescapeError {
    #[error("invalid escape sequence '\\{0}'")]
    UnknownEscape(char),
    #[error("hexadecimal digit expected in '\\x' escape")]
    InvalidHexEscape,
    #[error("octal escape '\\{0:o}' too large")]
    OctalOutOfRange(u32),
    #[error("invalid unicode escape")]
    InvalidUnicodeEscape,
    #[error("unfinished escape sequence")]
    TrailingBackslash,
}

/// Decode the body of a string literal.
pub fn unescape(raw: &str) -> Result<Vec<u8>, UnescapeError> {
    let mut out = Vec::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            push_char(&mut out, c);
            continue;
        }
        let esc = chars.next().ok_or(UnescapeError::TrailingBackslash)?;
        match esc {
            'a' => out.push(0x07),
            'b' => out.push(0x08),
            'f' => out.push(0x0C),
            'n' => out.push(b'\n'),
            'r' => out.push(b'\r'),
            't' => out.push(b'\t'),
            'v' => out.push(0x0B),
            '\\' => out.push(b'\\'),
            '"' => out.push(b'"'),
            '\'' => out.push(b'\''),
            'x' => {
                let value = read_hex(&mut chars, 2).ok_or(UnescapeError::InvalidHexEscape)?;
                out.push(low_byte(value));
            }
            'u' => push_scalar(&mut out, &mut chars, 4)?,
            'U' => push_scalar(&mut out, &mut chars, 8)?,
            '0'..='7' => {
                let value = read_octal(esc, &mut chars);
                if value > 0xFF {
                    return Err(UnescapeError::OctalOutOfRange(value));
                }
                out.push(low_byte(value));
            }
            other => return Err(UnescapeError::UnknownEscape(other)),
        }
    }

    Ok(out)
}

#[inline]
fn push_char(out: &mut Vec<u8>, c: char) {
    let mut buf = [0u8; 4];
    out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
}

#[inline]
fn low_byte(value: u32) -> u8 {
    u8::try_from(value & 0xFF).unwrap_or(u8::MAX)
}

/// Read exactly `count` hex digits.
fn read_hex(chars: &mut Chars<'_>, count: usize) -> Option<u32> {
    let mut value = 0u32;
    for _ in 0..count {
        let digit = chars.next()?.to_digit(16)?;
        value = (value << 4) | digit;
    }
    Some(value)
}

/// Read up to two more octal digits after `first`.
fn read_octal(first: char, chars: &mut Chars<'_>) -> u32 {
    let mut value = first.to_digit(8).unwrap_or(0);
    for _ in 0..2 {
        let mut lookahead = chars.clone();
        match lookahead.next().and_then(|c| c.to_digit(8)) {
            Some(digit) => {
                value = value * 8 + digit;
                *chars = lookahead;
            }
            None => break,
        }
    }
    value
}

fn push_scalar(
    out: &mut Vec<u8>,
    chars: &mut Chars<'_>,
    count: usize,
) -> Result<(), UnescapeError> {
    let c = read_hex(chars, count)
        .and_then(char::from_u32)
        .ok_or(UnescapeError::InvalidUnicodeEscape)?;
    push_char(out, c);
    Ok(())
}
