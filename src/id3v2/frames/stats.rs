//! `CNT`/`PCNT` and `POP`/`POPM`: play counts and user ratings.

use crate::core::ByteReader;
use crate::error::Result;
use crate::text::Encoding;

/// `PCNT`: a play count of arbitrary width — writers extend it past 4
/// bytes once the count overflows a `u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayCountFrame {
    pub count: u64,
}

pub fn parse_play_count(reader: &mut ByteReader) -> Result<PlayCountFrame> {
    Ok(PlayCountFrame { count: reader.int_to_end() })
}

/// `POPM`: an email-keyed rating plus an optional play count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopularimeterFrame {
    pub email: String,
    pub rating: u8,
    pub play_count: Option<u64>,
}

impl PopularimeterFrame {
    /// Maps the raw 0-255 rating to the conventional 0-5 star scale
    /// media players display.
    pub fn rating_simple(&self) -> u8 {
        match self.rating {
            0 => 0,
            1..=31 => 1,
            32..=95 => 2,
            96..=159 => 3,
            160..=223 => 4,
            224..=255 => 5,
        }
    }
}

pub fn parse_popularimeter(reader: &mut ByteReader) -> Result<PopularimeterFrame> {
    let email = reader.string_until_null(Encoding::Latin1)?;
    let rating = reader.byte()?;
    let play_count = if reader.has_more() {
        Some(reader.int_to_end())
    } else {
        None
    };

    Ok(PopularimeterFrame { email, rating, play_count })
}
