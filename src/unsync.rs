//! The ID3v2 unsynchronisation scheme: removing the escape `0x00` that
//! writers insert after every `0xFF` byte so that MPEG decoders scanning
//! for a frame sync pattern never latch onto one inside tag data.
//!
//! This is an implementation of Taglib's fast syncdata decoding
//! algorithm. Credit goes to them.
//! <https://github.com/taglib/taglib/blob/master/taglib/mpeg/id3v2/id3v2synchdata.cpp#L75>

/// Removes every `0x00` that immediately follows a `0xFF`.
pub fn resync(src: &[u8]) -> Vec<u8> {
    let mut dest = Vec::with_capacity(src.len());
    let mut last = 0u8;
    let mut i = 0;

    while i + 1 < src.len() {
        let cur = src[i];

        if !(last == 0xFF && cur == 0x00) {
            dest.push(cur);
        }

        last = cur;
        i += 1;
    }

    if i < src.len() {
        let cur = src[i];
        if !(last == 0xFF && cur == 0x00) {
            dest.push(cur);
        }
    }

    dest.shrink_to_fit();
    dest
}
