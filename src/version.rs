//! The tag dialects this crate understands.

use std::fmt::{self, Display, Formatter};

/// Which ID3 dialect a tag was (or should be) parsed as.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Version {
    V1,
    V1_1,
    V2_2,
    V2_3,
    V2_4,
}

impl Display for Version {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let name = match self {
            Version::V1 => "ID3v1",
            Version::V1_1 => "ID3v1.1",
            Version::V2_2 => "ID3v2.2",
            Version::V2_3 => "ID3v2.3",
            Version::V2_4 => "ID3v2.4",
        };
        write!(f, "{}", name)
    }
}

impl Version {
    /// The identifier label length used by this version's frame headers
    /// (`3` for ID3v2.2, `4` for ID3v2.3/v2.4). Panics for the v1
    /// variants, which have no frames.
    pub(crate) fn label_len(self) -> usize {
        match self {
            Version::V2_2 => 3,
            Version::V2_3 | Version::V2_4 => 4,
            Version::V1 | Version::V1_1 => {
                unreachable!("ID3v1 has no frame labels")
            }
        }
    }
}
