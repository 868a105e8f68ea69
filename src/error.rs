//! Error taxonomy for tag parsing.

use std::error;
use std::fmt::{self, Display, Formatter};

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while decoding a tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The expected header magic (`"TAG"` or `"ID3"`) was not present.
    MissingIdentifier,
    /// The version/revision pair in a v2.x header is not one this crate
    /// understands.
    UnsupportedVersion { major: u8, revision: u8 },
    /// A header or extended header carried a reserved flag bit, or some
    /// other header-level structural violation.
    MalformedHeader(String),
    /// A structural violation inside a frame body.
    Malformed(String),
    /// A read would have moved the cursor past the end of the buffer.
    Underflow { needed: usize, available: usize },
    /// A frame identifier was not present in the version's dispatch
    /// table. Never returned from `parse`; only ever handed to a
    /// `DiagnosticSink`.
    UnknownFrame(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Error::MissingIdentifier => write!(f, "missing tag identifier"),
            Error::UnsupportedVersion { major, revision } => write!(
                f,
                "unsupported ID3v2 version 2.{}.{}",
                major, revision
            ),
            Error::MalformedHeader(msg) => write!(f, "malformed header: {}", msg),
            Error::Malformed(msg) => write!(f, "malformed frame: {}", msg),
            Error::Underflow { needed, available } => write!(
                f,
                "buffer underflow: needed {} bytes, {} available",
                needed, available
            ),
            Error::UnknownFrame(label) => write!(f, "unknown frame {:?}", label),
        }
    }
}

impl error::Error for Error {}
