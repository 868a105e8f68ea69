//! Catch-all body shapes: opaque binary data, and the single-byte-typed
//! timing frames (`ETCO`/`STC`/`SYTC` and friends).

use crate::core::ByteReader;
use crate::error::Result;

/// A frame whose body this crate does not further decompose: raw bytes
/// only (e.g. `MCDI`'s table-of-contents binary, or any identifier whose
/// schema is just "opaque data").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryFrame {
    pub data: Vec<u8>,
}

pub fn parse_binary(reader: &mut ByteReader) -> Result<BinaryFrame> {
    Ok(BinaryFrame { data: reader.bytes_to_end().to_vec() })
}

/// `ETC`/`ETCO` and `STC`/`SYTC`: a leading type byte (event timing
/// format, or sync tempo format) followed by opaque event data this
/// crate does not interpret event-by-event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampFrame {
    pub timestamp_type: u8,
    pub data: Vec<u8>,
}

pub fn parse_timestamp(reader: &mut ByteReader) -> Result<TimestampFrame> {
    let timestamp_type = reader.byte()?;
    let data = reader.bytes_to_end().to_vec();
    Ok(TimestampFrame { timestamp_type, data })
}
