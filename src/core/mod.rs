//! Core byte-level utilities shared by every version dispatcher.

#[macro_use]
pub(crate) mod macros;
pub(crate) mod io;

pub use io::ByteReader;
