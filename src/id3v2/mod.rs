//! ID3v2.2, v2.3, and v2.4: the header/extended-header/frame-sequence
//! tag dialects that precede the audio data in most MP3 files.

pub mod frames;
pub mod header;

use indexmap::IndexMap;

use crate::core::ByteReader;
use crate::error::{Error, Result};
use crate::unsync;
use crate::version::Version;
use crate::{DiagnosticSink, ParseOptions};

use frames::{decode_body, Frame};
use header::{
    parse_ext_header_v3, parse_ext_header_v4, parse_frame_header_v22, parse_frame_header_v23,
    parse_frame_header_v24, parse_tag_header, ExtHeader, FLAG_EXT_HEADER, FLAG_UNSYNC,
};

/// A decoded ID3v2.2, v2.3, or v2.4 tag.
#[derive(Debug, Clone, PartialEq)]
pub struct Id3v2Tag {
    pub version: Version,
    pub flags: u8,
    pub ext_header: Option<ExtHeader>,
    pub frames: IndexMap<String, Vec<Frame>>,
}

/// Parses an ID3v2.x tag from the start of `bytes`.
pub fn parse(
    bytes: &[u8],
    version: Version,
    options: ParseOptions,
    sink: &mut dyn DiagnosticSink,
) -> Result<Id3v2Tag> {
    let mut reader = ByteReader::new(bytes);

    if reader.bytes(3)? != b"ID3" {
        return Err(Error::MissingIdentifier);
    }

    let major = reader.byte()?;
    let revision = reader.byte()?;
    let expected_major = match version {
        Version::V2_2 => 2,
        Version::V2_3 => 3,
        Version::V2_4 => 4,
        Version::V1 | Version::V1_1 => unreachable!("ID3v1 has no v2 dispatcher"),
    };

    if major != expected_major {
        return Err(Error::UnsupportedVersion { major, revision });
    }

    let header = parse_tag_header(&mut reader, version)?;
    let tag_size = header.tag_size as usize;
    let body_start = reader.pos();

    let mut body = reader.bytes(tag_size)?.to_vec();
    let whole_tag_unsynced = header.flags & FLAG_UNSYNC != 0;
    if whole_tag_unsynced {
        body = unsync::resync(&body);
    }

    let mut body_reader = ByteReader::new(&body);

    let has_ext_header = header.flags & FLAG_EXT_HEADER != 0;
    let ext_header = if has_ext_header {
        Some(match version {
            Version::V2_3 => ExtHeader::V3(parse_ext_header_v3(&mut body_reader)?),
            Version::V2_4 => ExtHeader::V4(parse_ext_header_v4(&mut body_reader)?),
            Version::V2_2 => {
                return Err(Error::MalformedHeader(
                    "ID3v2.2 has no extended header".to_string(),
                ))
            }
            Version::V1 | Version::V1_1 => unreachable!(),
        })
    } else {
        None
    };

    let frames = read_frames(&mut body_reader, version, whole_tag_unsynced, options, sink)?;

    // Invariant: the cursor advances exactly 10 + tag_size regardless of
    // how much of the frame sequence was actually consumed — padding
    // and truncated-but-well-formed frame sequences both end here.
    let _ = body_start;

    Ok(Id3v2Tag { version, flags: header.flags, ext_header, frames })
}

fn read_frames(
    reader: &mut ByteReader,
    version: Version,
    whole_tag_unsynced: bool,
    options: ParseOptions,
    sink: &mut dyn DiagnosticSink,
) -> Result<IndexMap<String, Vec<Frame>>> {
    let mut frames: IndexMap<String, Vec<Frame>> = IndexMap::new();

    loop {
        if reader.remaining() < version.label_len() {
            break;
        }

        let header = match version {
            Version::V2_2 => parse_frame_header_v22(reader)?,
            Version::V2_3 => parse_frame_header_v23(reader)?,
            Version::V2_4 => parse_frame_header_v24(reader)?,
            Version::V1 | Version::V1_1 => unreachable!(),
        };

        let header = match header {
            Some(header) => header,
            None => break, // padding sentinel
        };

        if reader.remaining() < header.body_size {
            return Err(Error::Underflow {
                needed: header.body_size,
                available: reader.remaining(),
            });
        }

        let body_bytes = reader.bytes(header.body_size)?;

        let resynced;
        let body_bytes = if version == Version::V2_4 && header.flags.unsync && !whole_tag_unsynced
        {
            resynced = unsync::resync(body_bytes);
            resynced.as_slice()
        } else {
            body_bytes
        };

        let mut body_reader = ByteReader::new(body_bytes);

        match decode_body(&header.label, version, &mut body_reader) {
            Ok(Some(body)) => {
                let frame = Frame { label: header.label.clone(), flags: Some(header.flags), body };
                frames.entry(header.label).or_default().push(frame);
            }
            Ok(None) => {
                log::trace!("skipping unknown frame {:?}", header.label);
                sink.unknown_frame(&header.label);
            }
            Err(err) => {
                if options.lenient {
                    log::warn!("dropping malformed frame {:?}: {}", header.label, err);
                    sink.frame_dropped(&header.label, &err);
                } else {
                    return Err(err);
                }
            }
        }
    }

    Ok(frames)
}
