//! Text-bearing frame bodies: plain text, user-defined text, and the
//! involved-people list.

use indexmap::IndexMap;

use crate::core::ByteReader;
use crate::error::{Error, Result};
use crate::text::{self, Encoding};
use crate::version::Version;

/// `T***` frames. In v2.2/v2.3 the whole remainder is one string; in
/// v2.4 it may be a NUL-separated list, with `text` aliasing the first
/// value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFrame {
    pub encoding: Encoding,
    pub text: String,
    pub values: Vec<String>,
}

pub fn parse_text(reader: &mut ByteReader, version: Version) -> Result<TextFrame> {
    let encoding = Encoding::parse(reader.byte()?)?;

    let values = match version {
        Version::V2_4 => reader.strings_until_end(encoding)?,
        _ => {
            let bytes = reader.bytes_to_end();
            vec![text::decode(trim_trailing_nul(bytes, encoding.nul_size()), encoding)?]
        }
    };

    let text = values.first().cloned().unwrap_or_default();
    Ok(TextFrame { encoding, text, values })
}

/// v2.2/v2.3 single-value text frames are not NUL-terminated by
/// definition, but writers commonly pad the declared frame size with
/// trailing zero bytes; those are padding, not content.
fn trim_trailing_nul(bytes: &[u8], nul_size: usize) -> &[u8] {
    let mut end = bytes.len();
    while end >= nul_size && bytes[end - nul_size..end].iter().all(|&b| b == 0) {
        end -= nul_size;
    }
    &bytes[..end]
}

/// `TXXX`/`WXXX`-family user-defined text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserTextFrame {
    pub encoding: Encoding,
    pub description: String,
    pub text: String,
}

pub fn parse_user_text(reader: &mut ByteReader) -> Result<UserTextFrame> {
    let encoding = Encoding::parse(reader.byte()?)?;
    let description = reader.string_until_null(encoding)?;
    let text = reader.string_until_end(encoding)?;

    Ok(UserTextFrame { encoding, description, text })
}

/// `IPLS`/`TIPL`/`TMCL`: an ordered mapping of role to person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvolvedPeopleFrame {
    pub encoding: Encoding,
    pub people: IndexMap<String, String>,
}

pub fn parse_involved_people(reader: &mut ByteReader) -> Result<InvolvedPeopleFrame> {
    let encoding = Encoding::parse(reader.byte()?)?;
    let mut people = IndexMap::new();

    while reader.has_more() {
        let role = reader.string_until_null(encoding)?;

        if !reader.has_more() {
            return Err(Error::Malformed("unpaired involved-people key".to_string()));
        }

        let person = reader.string_until_null(encoding)?;
        people.insert(role, person);
    }

    Ok(InvolvedPeopleFrame { encoding, people })
}
