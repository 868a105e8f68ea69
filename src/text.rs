//! Text encodings used throughout ID3v2 frame bodies.

use std::char::decode_utf16;

use crate::error::{Error, Result};

/// One of the four text encodings selectable by the encoding byte that
/// leads most ID3v2 frame bodies.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Encoding {
    /// ISO-8859-1 (Latin1), one byte per character.
    Latin1,
    /// UTF-16 with a leading byte-order mark. Absent a BOM, treated as
    /// little-endian.
    Utf16,
    /// UTF-16 big-endian, no BOM.
    Utf16Be,
    /// UTF-8.
    Utf8,
}

impl Encoding {
    /// Maps an ID3v2 encoding selector byte to its `Encoding`.
    pub fn parse(byte: u8) -> Result<Self> {
        match byte {
            0 => Ok(Encoding::Latin1),
            1 => Ok(Encoding::Utf16),
            2 => Ok(Encoding::Utf16Be),
            3 => Ok(Encoding::Utf8),
            _ => Err(Error::Malformed(format!("bad encoding byte {:#04x}", byte))),
        }
    }

    /// The width of this encoding's NUL terminator: one byte for the
    /// single-byte encodings, two for the UTF-16 variants (which must be
    /// aligned on a 16-bit boundary).
    pub fn nul_size(self) -> usize {
        match self {
            Encoding::Latin1 | Encoding::Utf8 => 1,
            Encoding::Utf16 | Encoding::Utf16Be => 2,
        }
    }
}

/// Decodes `bytes` as `encoding`, returning the empty string for empty input.
pub fn decode(bytes: &[u8], encoding: Encoding) -> Result<String> {
    if bytes.is_empty() {
        return Ok(String::new());
    }

    match encoding {
        Encoding::Latin1 => Ok(decode_latin1(bytes)),
        Encoding::Utf8 => String::from_utf8(bytes.to_vec())
            .map_err(|_| Error::Malformed("invalid utf-8".to_string())),
        Encoding::Utf16 => decode_utf16_bom(bytes),
        Encoding::Utf16Be => decode_utf16_be(bytes),
    }
}

fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

fn decode_utf16_bom(bytes: &[u8]) -> Result<String> {
    match bytes {
        [0xFF, 0xFE, rest @ ..] => decode_utf16_le(rest),
        [0xFE, 0xFF, rest @ ..] => decode_utf16_be(rest),
        // No BOM present: default to little-endian.
        rest => decode_utf16_le(rest),
    }
}

fn decode_utf16_le(bytes: &[u8]) -> Result<String> {
    decode_utf16_units(bytes, u16::from_le_bytes)
}

fn decode_utf16_be(bytes: &[u8]) -> Result<String> {
    decode_utf16_units(bytes, u16::from_be_bytes)
}

fn decode_utf16_units(bytes: &[u8], from_bytes: fn([u8; 2]) -> u16) -> Result<String> {
    if bytes.len() % 2 != 0 {
        return Err(Error::Malformed("odd-length utf-16 data".to_string()));
    }

    let units = bytes
        .chunks_exact(2)
        .map(|pair| from_bytes([pair[0], pair[1]]));

    decode_utf16(units)
        .collect::<std::result::Result<String, _>>()
        .map_err(|_| Error::Malformed("invalid utf-16".to_string()))
}
