//! `MLL`/`MLLT`: the MPEG location lookup table.

use crate::core::ByteReader;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MpegLookupFrame {
    pub frames_between_ref: u16,
    pub bytes_between_ref: u32,
    pub ms_between_ref: u32,
    pub bits_for_byte_dev: u8,
    pub bits_for_ms_dev: u8,
    pub data: Vec<u8>,
}

/// Fields are read from the start of the body, not from a fixed offset
/// into it.
pub fn parse_mpeg_lookup(reader: &mut ByteReader) -> Result<MpegLookupFrame> {
    let frames_between_ref = reader.int(2)? as u16;
    let bytes_between_ref = reader.int(3)? as u32;
    let ms_between_ref = reader.int(3)? as u32;
    let bits_for_byte_dev = reader.byte()?;
    let bits_for_ms_dev = reader.byte()?;
    let data = reader.bytes_to_end().to_vec();

    Ok(MpegLookupFrame {
        frames_between_ref,
        bytes_between_ref,
        ms_between_ref,
        bits_for_byte_dev,
        bits_for_ms_dev,
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_fields_from_body_start() {
        let mut bytes = vec![0x01, 0x00]; // frames_between_ref = 256
        bytes.extend_from_slice(&[0x00, 0x01, 0x00]); // bytes_between_ref
        bytes.extend_from_slice(&[0x00, 0x00, 0x64]); // ms_between_ref
        bytes.push(4); // bits_for_byte_dev
        bytes.push(4); // bits_for_ms_dev
        bytes.extend_from_slice(&[0xAA]);

        let mut r = ByteReader::new(&bytes);
        let frame = parse_mpeg_lookup(&mut r).unwrap();
        assert_eq!(frame.frames_between_ref, 256);
        assert_eq!(frame.bytes_between_ref, 0x0100);
        assert_eq!(frame.ms_between_ref, 0x64);
        assert_eq!(frame.bits_for_byte_dev, 4);
        assert_eq!(frame.data, vec![0xAA]);
    }
}
