//! `RVA`/`RVAD` (v2.2/v2.3) and its v2.4 successor, plus `EQU`/`EQUA`
//! equalisation curves.
//!
//! The v2.2/v2.3 volume-adjustment schema is a genuinely bit-packed,
//! variable-width layout; ID3v2.4 replaced it with a different frame
//! (`RVA2`) that this crate does not attempt to model in full — per the
//! simplified v2.4 contract, it is carried as an opaque identifier plus
//! raw bytes.

use crate::core::ByteReader;
use crate::error::{Error, Result};

/// A single channel's delta (and, where present, its peak), read as a
/// `bytes_per_field`-wide big-endian integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelAdjustment {
    pub delta: u64,
    pub peak: Option<u64>,
}

/// `RVA`/`RVAD`: relative volume adjustment, v2.2/v2.3 bit-packed form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeAdjustFrame {
    pub increment_flags: u8,
    pub bits_for_volume: u8,
    pub right: ChannelAdjustment,
    pub left: ChannelAdjustment,
    pub rear: Option<(ChannelAdjustment, ChannelAdjustment)>,
    pub center: Option<ChannelAdjustment>,
    pub bass: Option<ChannelAdjustment>,
}

const V22_INCREMENT_MASK: u8 = 0x03;
const V23_INCREMENT_MASK: u8 = 0x21;

pub fn parse_volume_adjust_v22(reader: &mut ByteReader) -> Result<VolumeAdjustFrame> {
    parse_volume_adjust(reader, V22_INCREMENT_MASK)
}

pub fn parse_volume_adjust_v23(reader: &mut ByteReader) -> Result<VolumeAdjustFrame> {
    parse_volume_adjust(reader, V23_INCREMENT_MASK)
}

fn parse_volume_adjust(reader: &mut ByteReader, allowed_mask: u8) -> Result<VolumeAdjustFrame> {
    let increment_flags = reader.byte()?;
    if increment_flags & !allowed_mask != 0 {
        return Err(Error::Malformed(format!(
            "illegal volume-adjust increment flags {:#04x}",
            increment_flags
        )));
    }

    let bits_for_volume = reader.byte()?;
    if bits_for_volume == 0 {
        return Err(Error::Malformed("bits_for_volume must be nonzero".to_string()));
    }

    let field_bytes = (usize::from(bits_for_volume) + 7) / 8;
    let read_field = |reader: &mut ByteReader| -> Result<u64> { reader.int(field_bytes) };

    let right = ChannelAdjustment { delta: read_field(reader)?, peak: None };
    let left = ChannelAdjustment { delta: read_field(reader)?, peak: None };

    let mut right = right;
    let mut left = left;
    if reader.remaining() >= field_bytes * 2 {
        right.peak = Some(read_field(reader)?);
        left.peak = Some(read_field(reader)?);
    }

    let rear = if reader.remaining() >= field_bytes * 4 {
        let mut right_rear = ChannelAdjustment { delta: read_field(reader)?, peak: None };
        let mut left_rear = ChannelAdjustment { delta: read_field(reader)?, peak: None };
        right_rear.peak = Some(read_field(reader)?);
        left_rear.peak = Some(read_field(reader)?);
        Some((right_rear, left_rear))
    } else {
        None
    };

    let center = if reader.remaining() >= field_bytes * 2 {
        Some(ChannelAdjustment { delta: read_field(reader)?, peak: Some(read_field(reader)?) })
    } else {
        None
    };

    let bass = if reader.remaining() >= field_bytes * 2 {
        Some(ChannelAdjustment { delta: read_field(reader)?, peak: Some(read_field(reader)?) })
    } else {
        None
    };

    Ok(VolumeAdjustFrame {
        increment_flags,
        bits_for_volume,
        right,
        left,
        rear,
        center,
        bass,
    })
}

/// The ID3v2.4 `RVA2` successor, carried in simplified form: an
/// identifier string followed by opaque bytes this crate does not
/// interpret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeAdjustV4Frame {
    pub identifier: String,
    pub data: Vec<u8>,
}

pub fn parse_volume_adjust_v24(reader: &mut ByteReader) -> Result<VolumeAdjustV4Frame> {
    use crate::text::Encoding;
    let identifier = reader.string_until_null(Encoding::Latin1)?;
    let data = reader.bytes_to_end().to_vec();
    Ok(VolumeAdjustV4Frame { identifier, data })
}

/// `EQU`/`EQUA`: an equalisation curve, v2.2/v2.3 form. The curve bytes
/// themselves are not interpreted (no frequency/adjustment unpacking) —
/// structural decoding stops at the raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EqualisationFrame {
    pub adjustment_bits: u8,
    pub curve: Vec<u8>,
}

pub fn parse_equalisation(reader: &mut ByteReader) -> Result<EqualisationFrame> {
    let adjustment_bits = reader.byte()?;
    let curve = reader.bytes_to_end().to_vec();
    Ok(EqualisationFrame { adjustment_bits, curve })
}

/// `EQU2`: the ID3v2.4 equalisation frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EqualisationV4Frame {
    pub interpolation_method: u8,
    pub identifier: String,
    pub data: Vec<u8>,
}

pub fn parse_equalisation_v24(reader: &mut ByteReader) -> Result<EqualisationV4Frame> {
    use crate::text::Encoding;
    let interpolation_method = reader.byte()?;
    let identifier = reader.string_until_null(Encoding::Latin1)?;
    let data = reader.bytes_to_end().to_vec();
    Ok(EqualisationV4Frame { interpolation_method, identifier, data })
}
