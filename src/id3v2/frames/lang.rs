//! Language-and-description text bodies: comments/unsynced lyrics, and
//! synchronised lyrics.

use crate::core::ByteReader;
use crate::error::Result;
use crate::text::Encoding;

/// `COMM`/`USLT`/`COM`/`ULT`: a language-tagged, described text body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LangDescTextFrame {
    pub encoding: Encoding,
    pub language: String,
    pub description: String,
    pub text: String,
}

pub fn parse_lang_desc_text(reader: &mut ByteReader) -> Result<LangDescTextFrame> {
    let encoding = Encoding::parse(reader.byte()?)?;
    let language = reader.string(3, None)?;
    let description = reader.string_until_null(encoding)?;
    let text = reader.string_until_end(encoding)?;

    Ok(LangDescTextFrame { encoding, language, description, text })
}

/// `SYLT`/`SLT`: synchronised lyrics/text. The timing payload itself is
/// left as raw bytes — interpreting timestamp events is outside this
/// crate's structural-decoding scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncedLyricsFrame {
    pub encoding: Encoding,
    pub language: String,
    pub timestamp_type: u8,
    pub content_type: u8,
    pub descriptor: String,
    pub data: Vec<u8>,
}

pub fn parse_synced_lyrics(reader: &mut ByteReader) -> Result<SyncedLyricsFrame> {
    let encoding = Encoding::parse(reader.byte()?)?;
    let language = reader.string(3, None)?;
    let timestamp_type = reader.byte()?;
    let content_type = reader.byte()?;
    let descriptor = reader.string_until_null(encoding)?;
    let data = reader.bytes_to_end().to_vec();

    Ok(SyncedLyricsFrame {
        encoding,
        language,
        timestamp_type,
        content_type,
        descriptor,
        data,
    })
}
