//! Owner-keyed frames: unique file identifiers, ownership transactions,
//! private data, and encryption/group registrations.

use crate::core::ByteReader;
use crate::error::{Error, Result};
use crate::text::Encoding;

/// `UFI`/`UFID`: a non-empty owner identifying the scheme, and a raw
/// identifier under that scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueFileIdentifierFrame {
    pub owner: String,
    pub identifier: Vec<u8>,
}

pub fn parse_unique_file_identifier(reader: &mut ByteReader) -> Result<UniqueFileIdentifierFrame> {
    let owner = non_empty_owner(reader)?;
    let identifier = reader.bytes_to_end().to_vec();
    Ok(UniqueFileIdentifierFrame { owner, identifier })
}

/// `OWNE`: a purchase/licensing record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnershipFrame {
    pub encoding: Encoding,
    pub price: String,
    pub purchase_date: String,
    pub seller: String,
}

pub fn parse_ownership(reader: &mut ByteReader) -> Result<OwnershipFrame> {
    let encoding = Encoding::parse(reader.byte()?)?;
    let price = reader.string_until_null(Encoding::Latin1)?;
    let purchase_date = reader.string(8, Some(Encoding::Latin1))?;
    let seller = reader.string_until_end(encoding)?;

    Ok(OwnershipFrame { encoding, price, purchase_date, seller })
}

/// `PRIV`: an owner-tagged opaque blob, not intended for general display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateFrame {
    pub owner: String,
    pub data: Vec<u8>,
}

pub fn parse_private(reader: &mut ByteReader) -> Result<PrivateFrame> {
    let owner = reader.string_until_null(Encoding::Latin1)?;
    let data = reader.bytes_to_end().to_vec();
    Ok(PrivateFrame { owner, data })
}

/// `ENCR`: registers a symbol for an encryption method used elsewhere
/// in the tag by `FrameFlags.encryption_method`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptionRegistrationFrame {
    pub owner: String,
    pub symbol: u8,
    pub data: Vec<u8>,
}

pub fn parse_encryption_registration(
    reader: &mut ByteReader,
) -> Result<EncryptionRegistrationFrame> {
    let owner = reader.string_until_null(Encoding::Latin1)?;
    let symbol = reader.byte()?;
    let data = reader.bytes_to_end().to_vec();
    Ok(EncryptionRegistrationFrame { owner, symbol, data })
}

/// `GRID`: registers a symbol for a grouping identifier used elsewhere
/// in the tag by `FrameFlags.group_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRegistrationFrame {
    pub owner: String,
    pub symbol: u8,
    pub data: Vec<u8>,
}

pub fn parse_group_registration(reader: &mut ByteReader) -> Result<GroupRegistrationFrame> {
    let owner = reader.string_until_null(Encoding::Latin1)?;
    let symbol = reader.byte()?;
    let data = reader.bytes_to_end().to_vec();
    Ok(GroupRegistrationFrame { owner, symbol, data })
}

fn non_empty_owner(reader: &mut ByteReader) -> Result<String> {
    let owner = reader.string_until_null(Encoding::Latin1)?;
    if owner.is_empty() {
        return Err(Error::Malformed("empty owner".to_string()));
    }
    Ok(owner)
}
