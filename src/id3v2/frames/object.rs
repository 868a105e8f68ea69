//! `GEO`/`GEOB`: encapsulated (generic) binary objects.

use crate::core::ByteReader;
use crate::error::Result;
use crate::text::Encoding;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncapsulatedObjectFrame {
    pub encoding: Encoding,
    /// Always ISO-8859-1, regardless of `encoding`.
    pub mime_type: String,
    /// Decoded with `encoding`, same as `description`.
    pub filename: String,
    pub description: String,
    pub data: Vec<u8>,
}

pub fn parse_object(reader: &mut ByteReader) -> Result<EncapsulatedObjectFrame> {
    let encoding = Encoding::parse(reader.byte()?)?;
    let mime_type = reader.string_until_null(Encoding::Latin1)?;
    let filename = reader.string_until_null(encoding)?;
    let description = reader.string_until_null(encoding)?;
    let data = reader.bytes_to_end().to_vec();

    Ok(EncapsulatedObjectFrame { encoding, mime_type, filename, description, data })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_object_frame() {
        let mut bytes = vec![0x00];
        bytes.extend_from_slice(b"text/plain\0");
        bytes.extend_from_slice(b"notes.txt\0");
        bytes.extend_from_slice(b"liner notes\0");
        bytes.extend_from_slice(b"contents");

        let mut r = ByteReader::new(&bytes);
        let frame = parse_object(&mut r).unwrap();
        assert_eq!(frame.mime_type, "text/plain");
        assert_eq!(frame.filename, "notes.txt");
        assert_eq!(frame.description, "liner notes");
        assert_eq!(frame.data, b"contents");
    }
}
