//! Frame bodies: the closed tagged union of every payload shape this
//! crate understands, and the per-version dispatch tables that route a
//! frame identifier to the decoder for its body.

mod buffer;
mod crypto;
mod lang;
mod misc;
mod mpeg;
mod object;
mod owner;
mod picture;
mod reverb;
mod stats;
mod text;
mod url;
mod volume;

pub use buffer::BufferRecommendationFrame;
pub use crypto::{AudioEncryptionFrame, CommercialFrame, EncryptedMetaFrame, LinkedFrame};
pub use lang::{LangDescTextFrame, SyncedLyricsFrame};
pub use misc::{BinaryFrame, TimestampFrame};
pub use mpeg::MpegLookupFrame;
pub use object::EncapsulatedObjectFrame;
pub use owner::{
    EncryptionRegistrationFrame, GroupRegistrationFrame, OwnershipFrame, PrivateFrame,
    UniqueFileIdentifierFrame,
};
pub use picture::{PictureFrame, PictureType};
pub use reverb::ReverbFrame;
pub use stats::{PlayCountFrame, PopularimeterFrame};
pub use text::{InvolvedPeopleFrame, TextFrame, UserTextFrame};
pub use url::{UrlFrame, UserUrlFrame};
pub use volume::{
    EqualisationFrame, EqualisationV4Frame, VolumeAdjustFrame, VolumeAdjustV4Frame,
};

use crate::core::ByteReader;
use crate::error::Result;
use crate::id3v2::header::FrameFlags;
use crate::version::Version;

/// Every frame body shape this crate decodes. The universe is closed:
/// an identifier not covered by one of these variants is an
/// `UnknownFrame` diagnostic, not a new variant.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameBody {
    Text(TextFrame),
    UserText(UserTextFrame),
    Url(UrlFrame),
    UserUrl(UserUrlFrame),
    InvolvedPeople(InvolvedPeopleFrame),
    LangDescText(LangDescTextFrame),
    SyncedLyrics(SyncedLyricsFrame),
    Picture(PictureFrame),
    EncapsulatedObject(EncapsulatedObjectFrame),
    PlayCount(PlayCountFrame),
    Popularimeter(PopularimeterFrame),
    BufferRecommendation(BufferRecommendationFrame),
    UniqueFileIdentifier(UniqueFileIdentifierFrame),
    Ownership(OwnershipFrame),
    Private(PrivateFrame),
    EncryptionRegistration(EncryptionRegistrationFrame),
    GroupRegistration(GroupRegistrationFrame),
    VolumeAdjust(VolumeAdjustFrame),
    VolumeAdjustV4(VolumeAdjustV4Frame),
    Equalisation(EqualisationFrame),
    EqualisationV4(EqualisationV4Frame),
    Reverb(ReverbFrame),
    MpegLookup(MpegLookupFrame),
    AudioEncryption(AudioEncryptionFrame),
    Commercial(CommercialFrame),
    Linked(LinkedFrame),
    EncryptedMeta(EncryptedMetaFrame),
    Binary(BinaryFrame),
    Timestamp(TimestampFrame),
}

/// A single decoded frame: its identifier, its flags (v2.3/v2.4 only —
/// always `None` for v2.2), and its typed body.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub label: String,
    pub flags: Option<FrameFlags>,
    pub body: FrameBody,
}

fn is_user_text(label: &str) -> bool {
    matches!(label, "TXX" | "TXXX")
}

fn is_user_url(label: &str) -> bool {
    matches!(label, "WXX" | "WXXX")
}

fn is_text_label(label: &str) -> bool {
    label.starts_with('T') && !is_user_text(label)
}

fn is_url_label(label: &str) -> bool {
    label.starts_with('W') && !is_user_url(label)
}

/// Looks up and runs the body decoder for `label` under `version`.
/// Returns `Ok(None)` for an identifier outside the closed dispatch
/// table (the caller should still have consumed the frame header and
/// body bytes; this only decides whether a `Frame` gets produced or an
/// `UnknownFrame` diagnostic is raised).
pub fn decode_body(
    label: &str,
    version: Version,
    reader: &mut ByteReader,
) -> Result<Option<FrameBody>> {
    if is_text_label(label) {
        return Ok(Some(FrameBody::Text(text::parse_text(reader, version)?)));
    }
    if is_user_text(label) {
        return Ok(Some(FrameBody::UserText(text::parse_user_text(reader)?)));
    }
    if is_url_label(label) {
        return Ok(Some(FrameBody::Url(url::parse_url(reader)?)));
    }
    if is_user_url(label) {
        return Ok(Some(FrameBody::UserUrl(url::parse_user_url(reader)?)));
    }

    let body = match (version, label) {
        (Version::V2_2, "IPL") | (Version::V2_3, "IPLS") => {
            FrameBody::InvolvedPeople(text::parse_involved_people(reader)?)
        }
        (Version::V2_4, "TIPL") | (Version::V2_4, "TMCL") => {
            FrameBody::InvolvedPeople(text::parse_involved_people(reader)?)
        }

        (Version::V2_2, "COM") | (Version::V2_3, "COMM") | (Version::V2_4, "COMM") => {
            FrameBody::LangDescText(lang::parse_lang_desc_text(reader)?)
        }
        (Version::V2_2, "ULT") | (Version::V2_3, "USLT") | (Version::V2_4, "USLT") => {
            FrameBody::LangDescText(lang::parse_lang_desc_text(reader)?)
        }
        (Version::V2_2, "SLT") | (Version::V2_3, "SYLT") | (Version::V2_4, "SYLT") => {
            FrameBody::SyncedLyrics(lang::parse_synced_lyrics(reader)?)
        }

        (Version::V2_2, "PIC") | (Version::V2_3, "APIC") | (Version::V2_4, "APIC") => {
            FrameBody::Picture(picture::parse_picture(reader, version)?)
        }
        (Version::V2_2, "GEO") | (Version::V2_3, "GEOB") | (Version::V2_4, "GEOB") => {
            FrameBody::EncapsulatedObject(object::parse_object(reader)?)
        }

        (Version::V2_2, "CNT") | (Version::V2_3, "PCNT") | (Version::V2_4, "PCNT") => {
            FrameBody::PlayCount(stats::parse_play_count(reader)?)
        }
        (Version::V2_2, "POP") | (Version::V2_3, "POPM") | (Version::V2_4, "POPM") => {
            FrameBody::Popularimeter(stats::parse_popularimeter(reader)?)
        }

        (Version::V2_2, "BUF") | (Version::V2_3, "RBUF") | (Version::V2_4, "RBUF") => {
            FrameBody::BufferRecommendation(buffer::parse_buffer_recommendation(reader)?)
        }

        (Version::V2_2, "UFI") | (Version::V2_3, "UFID") | (Version::V2_4, "UFID") => {
            FrameBody::UniqueFileIdentifier(owner::parse_unique_file_identifier(reader)?)
        }
        (Version::V2_3, "OWNE") | (Version::V2_4, "OWNE") => {
            FrameBody::Ownership(owner::parse_ownership(reader)?)
        }
        (Version::V2_3, "PRIV") | (Version::V2_4, "PRIV") => {
            FrameBody::Private(owner::parse_private(reader)?)
        }
        (Version::V2_3, "ENCR") | (Version::V2_4, "ENCR") => {
            FrameBody::EncryptionRegistration(owner::parse_encryption_registration(reader)?)
        }
        (Version::V2_3, "GRID") | (Version::V2_4, "GRID") => {
            FrameBody::GroupRegistration(owner::parse_group_registration(reader)?)
        }

        (Version::V2_2, "RVA") => {
            FrameBody::VolumeAdjust(volume::parse_volume_adjust_v22(reader)?)
        }
        (Version::V2_3, "RVAD") => {
            FrameBody::VolumeAdjust(volume::parse_volume_adjust_v23(reader)?)
        }
        (Version::V2_4, "RVA2") => {
            FrameBody::VolumeAdjustV4(volume::parse_volume_adjust_v24(reader)?)
        }
        (Version::V2_2, "EQU") | (Version::V2_3, "EQUA") => {
            FrameBody::Equalisation(volume::parse_equalisation(reader)?)
        }
        (Version::V2_4, "EQU2") => {
            FrameBody::EqualisationV4(volume::parse_equalisation_v24(reader)?)
        }

        (Version::V2_2, "REV") | (Version::V2_3, "RVRB") | (Version::V2_4, "RVRB") => {
            FrameBody::Reverb(reverb::parse_reverb(reader)?)
        }
        (Version::V2_2, "MLL") | (Version::V2_3, "MLLT") | (Version::V2_4, "MLLT") => {
            FrameBody::MpegLookup(mpeg::parse_mpeg_lookup(reader)?)
        }

        (Version::V2_2, "CRA") | (Version::V2_3, "AENC") | (Version::V2_4, "AENC") => {
            FrameBody::AudioEncryption(crypto::parse_audio_encryption(reader)?)
        }
        (Version::V2_3, "COMR") | (Version::V2_4, "COMR") => {
            FrameBody::Commercial(crypto::parse_commercial(reader)?)
        }
        (Version::V2_2, "LNK") | (Version::V2_3, "LINK") | (Version::V2_4, "LINK") => {
            FrameBody::Linked(crypto::parse_linked(reader, version)?)
        }
        (Version::V2_2, "CRM") => {
            FrameBody::EncryptedMeta(crypto::parse_encrypted_meta(reader)?)
        }

        (Version::V2_2, "ETC") | (Version::V2_3, "ETCO") | (Version::V2_4, "ETCO") => {
            FrameBody::Timestamp(misc::parse_timestamp(reader)?)
        }
        (Version::V2_2, "STC") | (Version::V2_3, "SYTC") | (Version::V2_4, "SYTC") => {
            FrameBody::Timestamp(misc::parse_timestamp(reader)?)
        }
        (Version::V2_2, "MCI") | (Version::V2_3, "MCDI") | (Version::V2_4, "MCDI") => {
            FrameBody::Binary(misc::parse_binary(reader)?)
        }

        _ => return Ok(None),
    };

    Ok(Some(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_text_family_by_leading_t() {
        let bytes = [0x00, b'h', b'i'];
        let mut r = ByteReader::new(&bytes);
        let body = decode_body("TIT2", Version::V2_3, &mut r).unwrap().unwrap();
        assert!(matches!(body, FrameBody::Text(_)));
    }

    #[test]
    fn dispatches_user_text_not_plain_text() {
        let mut bytes = vec![0x00];
        bytes.extend_from_slice(b"desc\0value");
        let mut r = ByteReader::new(&bytes);
        let body = decode_body("TXXX", Version::V2_4, &mut r).unwrap().unwrap();
        assert!(matches!(body, FrameBody::UserText(_)));
    }

    #[test]
    fn unknown_identifier_yields_none() {
        let bytes = [0x00];
        let mut r = ByteReader::new(&bytes);
        assert!(decode_body("ZZZZ", Version::V2_3, &mut r).unwrap().is_none());
    }

    #[test]
    fn dispatches_involved_people_by_version() {
        let mut bytes = vec![0x00];
        bytes.extend_from_slice(b"role\0person\0");
        let mut r = ByteReader::new(&bytes);
        let body = decode_body("IPLS", Version::V2_3, &mut r).unwrap().unwrap();
        assert!(matches!(body, FrameBody::InvolvedPeople(_)));
    }

    #[test]
    fn dispatches_v24_volume_adjust_to_simplified_form() {
        let mut bytes = b"id\0".to_vec();
        bytes.push(0xAA);
        let mut r = ByteReader::new(&bytes);
        let body = decode_body("RVA2", Version::V2_4, &mut r).unwrap().unwrap();
        assert!(matches!(body, FrameBody::VolumeAdjustV4(_)));
    }
}
