//! `PIC`/`APIC`: embedded cover art and other attached pictures.

use crate::core::ByteReader;
use crate::error::Result;
use crate::text::Encoding;
use crate::version::Version;

byte_enum! {
    /// The role a picture plays, per the ID3v2 picture-type table.
    pub enum PictureType {
        Other = 0x00,
        FileIcon = 0x01,
        OtherFileIcon = 0x02,
        CoverFront = 0x03,
        CoverBack = 0x04,
        LeafletPage = 0x05,
        Media = 0x06,
        LeadArtist = 0x07,
        Artist = 0x08,
        Conductor = 0x09,
        Band = 0x0A,
        Composer = 0x0B,
        Lyricist = 0x0C,
        RecordingLocation = 0x0D,
        DuringRecording = 0x0E,
        DuringPerformance = 0x0F,
        MovieScreenCapture = 0x10,
        ColouredFish = 0x11,
        Illustration = 0x12,
        BandLogo = 0x13,
        PublisherLogo = 0x14,
    };
    Self::Other
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PictureFrame {
    pub encoding: Encoding,
    /// Always ISO-8859-1. A 3-character format code in v2.2 (e.g.
    /// `"JPG"`), a full MIME type (e.g. `"image/jpeg"`) in v2.3/v2.4.
    pub mime_type: String,
    pub picture_type: PictureType,
    pub description: String,
    pub data: Vec<u8>,
}

pub fn parse_picture(reader: &mut ByteReader, version: Version) -> Result<PictureFrame> {
    let encoding = Encoding::parse(reader.byte()?)?;

    let mime_type = match version {
        Version::V2_2 => reader.string(3, Some(Encoding::Latin1))?,
        _ => reader.string_until_null(Encoding::Latin1)?,
    };

    let picture_type = PictureType::parse(reader.byte()?);
    let description = reader.string_until_null(encoding)?;
    let data = reader.bytes_to_end().to_vec();

    Ok(PictureFrame { encoding, mime_type, picture_type, description, data })
}
