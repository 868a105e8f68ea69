//! Encryption, commerce, and cross-reference frames: `AEN`/`AENC`,
//! `COM`/`COMR`, `LNK`/`LINK`, and the v2.2-only `CRM`.

use crate::core::ByteReader;
use crate::error::{Error, Result};
use crate::text::Encoding;
use crate::version::Version;

/// `AENC`/`AEN`: marks a portion of the audio as encrypted, with an
/// unencrypted preview window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioEncryptionFrame {
    pub owner: String,
    pub preview_start: u16,
    pub preview_length: u16,
    pub data: Vec<u8>,
}

pub fn parse_audio_encryption(reader: &mut ByteReader) -> Result<AudioEncryptionFrame> {
    let owner = non_empty_owner(reader)?;
    let preview_start = reader.int(2)? as u16;
    let preview_length = reader.int(2)? as u16;
    let data = reader.bytes_to_end().to_vec();

    Ok(AudioEncryptionFrame { owner, preview_start, preview_length, data })
}

/// `COM`/`COMR`: a commercial offer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommercialFrame {
    pub encoding: Encoding,
    pub price: String,
    pub valid_until: String,
    pub contact_url: String,
    pub received_as: u8,
    pub seller: String,
    pub description: String,
    pub logo: Option<(String, Vec<u8>)>,
}

pub fn parse_commercial(reader: &mut ByteReader) -> Result<CommercialFrame> {
    let encoding = Encoding::parse(reader.byte()?)?;
    let price = reader.string_until_null(Encoding::Latin1)?;
    let valid_until = reader.string(8, Some(Encoding::Latin1))?;
    let contact_url = reader.string_until_null(Encoding::Latin1)?;
    let received_as = reader.byte()?;
    let seller = reader.string_until_null(encoding)?;
    let description = reader.string_until_null(encoding)?;

    let logo = if reader.has_more() {
        let mime = reader.string_until_null(Encoding::Latin1)?;
        let data = reader.bytes_to_end().to_vec();
        Some((mime, data))
    } else {
        None
    };

    Ok(CommercialFrame {
        encoding,
        price,
        valid_until,
        contact_url,
        received_as,
        seller,
        description,
        logo,
    })
}

/// `LNK`/`LINK`: points to a frame with the same content hosted in
/// another tag, identified by URL plus optional selector IDs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedFrame {
    pub linked_label: String,
    pub url: String,
    pub ids: Vec<String>,
}

pub fn parse_linked(reader: &mut ByteReader, version: Version) -> Result<LinkedFrame> {
    let label_len = match version {
        Version::V2_2 => 3,
        _ => 4,
    };
    let linked_label = reader.string(label_len, None)?;
    let url = reader.string_until_null(Encoding::Latin1)?;

    let ids = if reader.has_more() {
        reader.strings_until_end(Encoding::Latin1)?
    } else {
        Vec::new()
    };

    Ok(LinkedFrame { linked_label, url, ids })
}

/// `CRM` (v2.2 only): an encrypted-meta frame wrapping an owner,
/// explanation, and the raw encrypted payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedMetaFrame {
    pub owner: String,
    pub explanation: String,
    pub data: Vec<u8>,
}

pub fn parse_encrypted_meta(reader: &mut ByteReader) -> Result<EncryptedMetaFrame> {
    let owner = non_empty_owner(reader)?;
    let explanation = reader.string_until_null(Encoding::Latin1)?;
    let data = reader.bytes_to_end().to_vec();

    Ok(EncryptedMetaFrame { owner, explanation, data })
}

fn non_empty_owner(reader: &mut ByteReader) -> Result<String> {
    let owner = reader.string_until_null(Encoding::Latin1)?;
    if owner.is_empty() {
        return Err(Error::Malformed("empty owner".to_string()));
    }
    Ok(owner)
}
