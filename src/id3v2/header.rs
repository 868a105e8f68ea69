//! Tag header, extended header, and frame header parsing — the bits
//! that differ between ID3v2.2, v2.3, and v2.4.

use crate::core::ByteReader;
use crate::error::{Error, Result};
use crate::version::Version;

/// The fixed ten-byte tag header shared by all three ID3v2 dialects,
/// after the version byte has identified which one applies.
pub struct TagHeader {
    pub flags: u8,
    pub tag_size: u32,
}

/// Set bit `7` of the tag header flags byte: the whole tag body is
/// unsynchronised.
pub const FLAG_UNSYNC: u8 = 0x80;
/// Set bit `6`: an extended header follows the tag header (v2.3/v2.4).
pub const FLAG_EXT_HEADER: u8 = 0x40;
/// Set bit `5`: the tag is marked experimental (v2.3/v2.4, informational
/// only).
pub const FLAG_EXPERIMENTAL: u8 = 0x20;
/// Set bit `4`: a footer follows the frames (v2.4 only, informational
/// only).
pub const FLAG_FOOTER: u8 = 0x10;

/// Validates the tag header flags byte for `version`, rejecting any
/// reserved bit being set, and reads the synch-safe `tag_size`.
pub fn parse_tag_header(reader: &mut ByteReader, version: Version) -> Result<TagHeader> {
    let flags = reader.byte()?;

    let allowed = match version {
        Version::V2_2 => FLAG_UNSYNC,
        Version::V2_3 => FLAG_UNSYNC | FLAG_EXT_HEADER | FLAG_EXPERIMENTAL,
        Version::V2_4 => FLAG_UNSYNC | FLAG_EXT_HEADER | FLAG_EXPERIMENTAL | FLAG_FOOTER,
        Version::V1 | Version::V1_1 => unreachable!("ID3v1 has no v2 header"),
    };

    if flags & !allowed != 0 {
        return Err(Error::MalformedHeader(format!(
            "reserved flag bits set: {:#04x}",
            flags & !allowed
        )));
    }

    let tag_size = reader.synchsafe_int(4)?;

    Ok(TagHeader { flags, tag_size })
}

/// The ID3v2.3 extended header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtHeaderV3 {
    pub size: u32,
    pub flags: u16,
    pub padding_size: u32,
    pub frame_crc: Option<u32>,
}

/// Parses the ID3v2.3 extended header. Only bit `0x8000` of `ext_flags`
/// is permitted; any other bit set is `Malformed`.
pub fn parse_ext_header_v3(reader: &mut ByteReader) -> Result<ExtHeaderV3> {
    let size = reader.int(4)? as u32;
    let flags = reader.int(2)? as u16;

    if flags & !0x8000 != 0 {
        return Err(Error::Malformed(format!(
            "illegal extended header flags {:#06x}",
            flags
        )));
    }

    let padding_size = reader.int(4)? as u32;
    let frame_crc = if flags & 0x8000 != 0 {
        Some(reader.int(4)? as u32)
    } else {
        None
    };

    Ok(ExtHeaderV3 { size, flags, padding_size, frame_crc })
}

/// The ID3v2.4 extended header: the core does not interpret individual
/// flag-data blocks, only the declared flag byte and an opaque view of
/// whatever data follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtHeaderV4 {
    pub size: u32,
    pub flags: u8,
    pub data: Vec<u8>,
}

/// Parses the ID3v2.4 extended header.
pub fn parse_ext_header_v4(reader: &mut ByteReader) -> Result<ExtHeaderV4> {
    let size = reader.synchsafe_int(4)?;
    let flag_byte_count = reader.byte()?;

    if flag_byte_count != 1 {
        return Err(Error::Malformed(format!(
            "unsupported extended header flag byte count {}",
            flag_byte_count
        )));
    }

    let flags = reader.byte()?;

    // `size` includes the 4-byte size field, the flag byte count, and
    // the flags byte itself (6 bytes total) plus whatever flag-data
    // blocks the set flag bits imply; the core does not decode those
    // blocks, it just hands back the remaining bytes as an opaque view.
    let consumed = 6;
    let data = if (size as usize) > consumed {
        reader.bytes(size as usize - consumed)?.to_vec()
    } else {
        Vec::new()
    };

    Ok(ExtHeaderV4 { size, flags, data })
}

/// Either version's extended header, surfaced on `Id3v2Tag`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtHeader {
    V3(ExtHeaderV3),
    V4(ExtHeaderV4),
}

/// Per-frame flags, modelled as a closed set of named fields rather than
/// a literal bit-to-payload map: a field is `Some`/`true` exactly when
/// its bit is set in the raw flag word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameFlags {
    pub tag_alter_preserve: bool,
    pub file_alter_preserve: bool,
    pub read_only: bool,
    pub compressed: bool,
    pub unsync: bool,
    pub decompressed_size: Option<u32>,
    pub encryption_method: Option<u8>,
    pub group_id: Option<u8>,
    pub data_length_indicator: Option<u32>,
}

/// A parsed frame header: the identifier, the declared body size (with
/// any flag-payload bytes already subtracted), and the frame's flags.
pub struct FrameHeader {
    pub label: String,
    pub body_size: usize,
    pub flags: FrameFlags,
}

/// Reads a v2.2 frame header: 3-byte label, 3-byte plain big-endian
/// size, no flags.
pub fn parse_frame_header_v22(reader: &mut ByteReader) -> Result<Option<FrameHeader>> {
    let label_bytes = reader.bytes(3)?;
    if label_bytes == [0, 0, 0] {
        return Ok(None);
    }

    let label = ascii_label(label_bytes)?;
    let body_size = reader.int(3)? as usize;

    Ok(Some(FrameHeader { label, body_size, flags: FrameFlags::default() }))
}

/// Reads a v2.3 frame header: 4-byte label, 4-byte plain big-endian
/// size, 2-byte flags whose payload bytes count toward `body_size`.
pub fn parse_frame_header_v23(reader: &mut ByteReader) -> Result<Option<FrameHeader>> {
    let label_bytes = reader.bytes(4)?;
    if label_bytes == [0, 0, 0, 0] {
        return Ok(None);
    }

    let label = ascii_label(label_bytes)?;
    let mut body_size = reader.int(4)? as usize;
    let raw_flags = reader.int(2)? as u16;

    let mut flags = FrameFlags {
        tag_alter_preserve: raw_flags & 0x8000 != 0,
        file_alter_preserve: raw_flags & 0x4000 != 0,
        read_only: raw_flags & 0x2000 != 0,
        ..FrameFlags::default()
    };

    if raw_flags & !0xE0E0 != 0 {
        return Err(Error::Malformed(format!(
            "illegal v2.3 frame flags {:#06x}",
            raw_flags
        )));
    }

    if raw_flags & 0x0080 != 0 {
        flags.compressed = true;
        flags.decompressed_size = Some(reader.int(4)? as u32);
        body_size = body_size.saturating_sub(4);
    }

    if raw_flags & 0x0040 != 0 {
        flags.encryption_method = Some(reader.byte()?);
        body_size = body_size.saturating_sub(1);
    }

    if raw_flags & 0x0020 != 0 {
        flags.group_id = Some(reader.byte()?);
        body_size = body_size.saturating_sub(1);
    }

    Ok(Some(FrameHeader { label, body_size, flags }))
}

/// Reads a v2.4 frame header: 4-byte label, 4-byte synch-safe size,
/// 2-byte flags whose payload bytes count toward `body_size`.
pub fn parse_frame_header_v24(reader: &mut ByteReader) -> Result<Option<FrameHeader>> {
    let label_bytes = reader.bytes(4)?;
    if label_bytes == [0, 0, 0, 0] {
        return Ok(None);
    }

    let label = ascii_label(label_bytes)?;
    let mut body_size = reader.synchsafe_int(4)? as usize;
    let raw_flags = reader.int(2)? as u16;

    if raw_flags & !0x704F != 0 {
        return Err(Error::Malformed(format!(
            "illegal v2.4 frame flags {:#06x}",
            raw_flags
        )));
    }

    let mut flags = FrameFlags {
        tag_alter_preserve: raw_flags & 0x4000 != 0,
        file_alter_preserve: raw_flags & 0x2000 != 0,
        read_only: raw_flags & 0x1000 != 0,
        compressed: raw_flags & 0x0008 != 0,
        unsync: raw_flags & 0x0002 != 0,
        ..FrameFlags::default()
    };

    if raw_flags & 0x0040 != 0 {
        flags.group_id = Some(reader.byte()?);
        body_size = body_size.saturating_sub(1);
    }

    if raw_flags & 0x0004 != 0 {
        flags.encryption_method = Some(reader.byte()?);
        body_size = body_size.saturating_sub(1);
    }

    if raw_flags & 0x0001 != 0 {
        flags.data_length_indicator = Some(reader.synchsafe_int(4)?);
        body_size = body_size.saturating_sub(4);
    }

    Ok(Some(FrameHeader { label, body_size, flags }))
}

fn ascii_label(bytes: &[u8]) -> Result<String> {
    if !bytes.iter().all(|&b| b.is_ascii_uppercase() || b.is_ascii_digit()) {
        return Err(Error::Malformed(format!("invalid frame label {:?}", bytes)));
    }
    Ok(bytes.iter().map(|&b| b as char).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_v22_tag_header() {
        let bytes = [0x00, 0x00, 0x00, 0x1A];
        let mut r = ByteReader::new(&bytes);
        // flags byte consumed separately in real call sites; emulate here
        let mut with_flags = vec![0x80];
        with_flags.extend_from_slice(&bytes);
        let mut r2 = ByteReader::new(&with_flags);
        let header = parse_tag_header(&mut r2, Version::V2_2).unwrap();
        assert_eq!(header.flags, 0x80);
        assert_eq!(header.tag_size, 26);
        let _ = &mut r;
    }

    #[test]
    fn rejects_reserved_v22_flag_bits() {
        let bytes = [0x40, 0x00, 0x00, 0x00, 0x00];
        let mut r = ByteReader::new(&bytes);
        assert!(parse_tag_header(&mut r, Version::V2_2).is_err());
    }

    #[test]
    fn parses_v3_extended_header() {
        // ext_size=6, flags=0x8000, padding_size=100, frame_crc=0xDEADBEEF
        let mut bytes = vec![0x00, 0x00, 0x00, 0x06, 0x80, 0x00, 0x00, 0x00, 0x00, 0x64];
        bytes.extend_from_slice(&0xDEADBEEFu32.to_be_bytes());
        let mut r = ByteReader::new(&bytes);
        let ext = parse_ext_header_v3(&mut r).unwrap();
        assert_eq!(ext.padding_size, 100);
        assert_eq!(ext.frame_crc, Some(0xDEADBEEF));
    }

    #[test]
    fn rejects_illegal_v3_ext_flags() {
        let bytes = [0x00, 0x00, 0x00, 0x06, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00];
        let mut r = ByteReader::new(&bytes);
        assert!(parse_ext_header_v3(&mut r).is_err());
    }

    #[test]
    fn parses_v4_extended_header_with_trailing_data() {
        let bytes = [0x00, 0x00, 0x00, 0x08, 0x01, 0x40, 0xAB, 0xCD];
        let mut r = ByteReader::new(&bytes);
        let ext = parse_ext_header_v4(&mut r).unwrap();
        assert_eq!(ext.flags, 0x40);
        assert_eq!(ext.data, vec![0xAB, 0xCD]);
    }

    #[test]
    fn parses_v22_frame_header() {
        let bytes = [b'T', b'T', b'2', 0x00, 0x00, 0x05, b'h', b'e', b'l', b'l', b'o'];
        let mut r = ByteReader::new(&bytes);
        let header = parse_frame_header_v22(&mut r).unwrap().unwrap();
        assert_eq!(header.label, "TT2");
        assert_eq!(header.body_size, 5);
    }

    #[test]
    fn v22_padding_sentinel_yields_none() {
        let bytes = [0, 0, 0];
        let mut r = ByteReader::new(&bytes);
        assert!(parse_frame_header_v22(&mut r).unwrap().is_none());
    }

    #[test]
    fn parses_v23_frame_header_with_group_id_flag() {
        let mut bytes = vec![b'T', b'I', b'T', b'2'];
        bytes.extend_from_slice(&6u32.to_be_bytes());
        bytes.extend_from_slice(&0x0020u16.to_be_bytes());
        bytes.push(0x07); // group id
        bytes.extend_from_slice(b"hello");

        let mut r = ByteReader::new(&bytes);
        let header = parse_frame_header_v23(&mut r).unwrap().unwrap();
        assert_eq!(header.label, "TIT2");
        assert_eq!(header.flags.group_id, Some(0x07));
        assert_eq!(header.body_size, 5);
    }

    #[test]
    fn parses_v24_frame_header_with_data_length_indicator() {
        let mut bytes = vec![b'T', b'I', b'T', b'2'];
        bytes.extend_from_slice(&[0x00, 0x00, 0x00, 0x0A]); // synchsafe size = 10
        bytes.extend_from_slice(&0x0001u16.to_be_bytes());
        bytes.extend_from_slice(&[0x00, 0x00, 0x00, 0x05]); // dli synchsafe = 5
        bytes.extend_from_slice(b"hello");

        let mut r = ByteReader::new(&bytes);
        let header = parse_frame_header_v24(&mut r).unwrap().unwrap();
        assert_eq!(header.label, "TIT2");
        assert_eq!(header.flags.data_length_indicator, Some(5));
        assert_eq!(header.body_size, 6);
    }
}
