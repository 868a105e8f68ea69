//! `BUF`/`RBUF`: recommended buffer size.

use crate::core::ByteReader;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferRecommendationFrame {
    pub buffer_size: u32,
    pub embedded_info: bool,
    pub offset_to_next_tag: Option<u64>,
}

pub fn parse_buffer_recommendation(reader: &mut ByteReader) -> Result<BufferRecommendationFrame> {
    let buffer_size = reader.int(3)? as u32;
    let embed_byte = reader.byte()?;

    if embed_byte & !0x01 != 0 {
        return Err(Error::Malformed(format!(
            "illegal embedded-info byte {:#04x}",
            embed_byte
        )));
    }

    let offset_to_next_tag = if reader.has_more() {
        Some(reader.int_to_end())
    } else {
        None
    };

    Ok(BufferRecommendationFrame {
        buffer_size,
        embedded_info: embed_byte & 0x01 != 0,
        offset_to_next_tag,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_buffer_recommendation() {
        let mut bytes = vec![0x00, 0x10, 0x00, 0x01];
        bytes.extend_from_slice(&[0, 0, 0, 0, 2, 0]);
        let mut r = ByteReader::new(&bytes);
        let frame = parse_buffer_recommendation(&mut r).unwrap();
        assert_eq!(frame.buffer_size, 0x00_1000);
        assert!(frame.embedded_info);
        assert_eq!(frame.offset_to_next_tag, Some(512));
    }

    #[test]
    fn rejects_illegal_embed_byte_bits() {
        let bytes = [0x00, 0x10, 0x00, 0x02];
        let mut r = ByteReader::new(&bytes);
        assert!(parse_buffer_recommendation(&mut r).is_err());
    }
}
