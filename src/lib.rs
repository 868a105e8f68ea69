//! A byte-level ID3v1/ID3v2 metadata tag decoder.
//!
//! This crate parses the descriptive header/footer blocks embedded in
//! MP3 files — ID3v1, ID3v1.1, ID3v2.2, ID3v2.3, and ID3v2.4 — out of an
//! in-memory byte slice. It does not locate tags within a file, write
//! tags back out, or interpret frame payloads beyond their structural
//! shape (no image decoding, no decryption, no decompression).

#![forbid(unsafe_code)]

#[macro_use]
mod core;

pub mod error;
pub mod id3v1;
pub mod id3v2;
pub mod sink;
pub mod text;
mod unsync;
pub mod version;

pub use error::{Error, Result};
pub use sink::{DiagnosticSink, DiscardSink};
pub use version::Version;

/// Caller-facing parse policy (see `ERROR HANDLING DESIGN`).
///
/// The only switch exposed is how strictly frame-level errors are
/// treated: `lenient: false` (the default) propagates the first
/// frame-level error as a fatal `Result::Err`; `lenient: true` drops the
/// offending frame, reports it through the `DiagnosticSink`, and
/// continues with the rest of the tag. Header-level errors are always
/// fatal regardless of this setting.
#[derive(Clone, Copy, Debug, Default)]
pub struct ParseOptions {
    pub lenient: bool,
}

/// A fully decoded tag, read from either an ID3v1/v1.1 trailer or an
/// ID3v2.x header.
#[derive(Debug, Clone, PartialEq)]
pub enum Tag {
    V1(id3v1::Id3v1Tag),
    V2(id3v2::Id3v2Tag),
}

impl Tag {
    /// The version this tag was parsed as.
    pub fn version(&self) -> Version {
        match self {
            Tag::V1(tag) => tag.version,
            Tag::V2(tag) => tag.version,
        }
    }
}

/// Parses `bytes` as the given `version`, using the default (discarding)
/// diagnostic sink and fatal frame-error policy.
pub fn parse(bytes: &[u8], version: Version) -> Result<Tag> {
    parse_with(bytes, version, ParseOptions::default(), &mut DiscardSink)
}

/// Parses `bytes` as the given `version`, routing diagnostics to `sink`
/// and applying `options`.
pub fn parse_with(
    bytes: &[u8],
    version: Version,
    options: ParseOptions,
    sink: &mut dyn DiagnosticSink,
) -> Result<Tag> {
    match version {
        Version::V1 | Version::V1_1 => id3v1::parse(bytes).map(Tag::V1),
        Version::V2_2 | Version::V2_3 | Version::V2_4 => {
            id3v2::parse(bytes, version, options, sink).map(Tag::V2)
        }
    }
}

/// Inspects the first ten and last 128 bytes of `bytes` for the ID3v2
/// and ID3v1 header magics, returning the version of whichever tag is
/// present. ID3v2 takes priority when both are present, since a v2 tag
/// normally precedes the audio and a v1 tag trails it.
pub fn probe(bytes: &[u8]) -> Option<Version> {
    if bytes.len() >= 10 && &bytes[0..3] == b"ID3" {
        return match bytes[3] {
            2 => Some(Version::V2_2),
            3 => Some(Version::V2_3),
            4 => Some(Version::V2_4),
            _ => None,
        };
    }

    if bytes.len() >= 128 {
        let trailer = &bytes[bytes.len() - 128..];
        if &trailer[0..3] == b"TAG" {
            return Some(if trailer[125] == 0 && trailer[126] != 0 {
                Version::V1_1
            } else {
                Version::V1
            });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn tag_is_send_and_sync() {
        assert_send_sync::<Tag>();
    }

    #[test]
    fn probes_v2_header() {
        let mut bytes = vec![0u8; 20];
        bytes[0..4].copy_from_slice(b"ID3\x03");
        assert_eq!(probe(&bytes), Some(Version::V2_3));
    }

    #[test]
    fn probes_v1_trailer() {
        let mut bytes = vec![0u8; 128];
        bytes[0..3].copy_from_slice(b"TAG");
        assert_eq!(probe(&bytes), Some(Version::V1));
    }

    #[test]
    fn probes_nothing_when_absent() {
        let bytes = vec![0u8; 128];
        assert_eq!(probe(&bytes), None);
    }
}
