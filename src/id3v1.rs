//! ID3v1 and ID3v1.1: the 128-byte trailer appended after MP3 audio
//! data.

use crate::error::{Error, Result};
use crate::version::Version;

/// A decoded ID3v1 or ID3v1.1 trailer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Id3v1Tag {
    pub version: Version,
    pub songname: String,
    pub artist: String,
    pub album: String,
    pub year: String,
    pub comment: String,
    pub track_number: Option<u8>,
    pub genre: u8,
}

/// Parses a 128-byte ID3v1/v1.1 trailer.
///
/// Fails with `MissingIdentifier` if the block does not start with
/// `"TAG"`. Never fails past that point: every remaining field is a
/// fixed-width slot, so there is nothing left to run out of bytes for.
pub fn parse(bytes: &[u8]) -> Result<Id3v1Tag> {
    if bytes.len() < 128 || &bytes[0..3] != b"TAG" {
        return Err(Error::MissingIdentifier);
    }

    let songname = latin1_trimmed(&bytes[3..33]);
    let artist = latin1_trimmed(&bytes[33..63]);
    let album = latin1_trimmed(&bytes[63..93]);
    let year = latin1_trimmed(&bytes[93..97]);

    // v1.1 packs a zero separator and a track number into the last two
    // bytes of the otherwise 30-byte comment field; a non-zero byte at
    // that position means the comment genuinely uses all 30 bytes (v1).
    let (comment, track_number, version) = if bytes[125] == 0 {
        (
            latin1_trimmed(&bytes[97..125]),
            Some(bytes[126]),
            Version::V1_1,
        )
    } else {
        (latin1_trimmed(&bytes[97..127]), None, Version::V1)
    };

    let genre = bytes[127];

    Ok(Id3v1Tag {
        version,
        songname,
        artist,
        album,
        year,
        comment,
        track_number,
        genre,
    })
}

fn latin1_trimmed(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    bytes[..end].iter().map(|&b| b as char).collect()
}
