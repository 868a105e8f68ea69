//! URL-bearing frame bodies.

use crate::core::ByteReader;
use crate::error::Result;
use crate::text::Encoding;

/// `W***` frames other than `WXXX`: a bare ISO-8859-1 URL filling the
/// whole body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlFrame {
    pub text: String,
}

pub fn parse_url(reader: &mut ByteReader) -> Result<UrlFrame> {
    let text = reader.string_until_end(Encoding::Latin1)?;
    Ok(UrlFrame { text })
}

/// `WXXX`: a user-defined URL with a declared-encoding description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserUrlFrame {
    pub encoding: Encoding,
    pub description: String,
    pub url: String,
}

pub fn parse_user_url(reader: &mut ByteReader) -> Result<UserUrlFrame> {
    let encoding = Encoding::parse(reader.byte()?)?;
    let description = reader.string_until_null(encoding)?;
    let url = reader.string_until_end(Encoding::Latin1)?;

    Ok(UserUrlFrame { encoding, description, url })
}
