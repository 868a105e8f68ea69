//! End-to-end coverage driving the public API the way a real caller
//! would: raw tag bytes in, a `Tag` (or a `Result::Err`) out.

use tagcore::id3v2::frames::FrameBody;
use tagcore::{parse, parse_with, probe, Error, ParseOptions, Tag, Version};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn s1_v22_title_frame() {
    init_logging();

    let bytes = [
        0x49, 0x44, 0x33, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1A, 0x54, 0x54, 0x32, 0x00, 0x00,
        0x14, 0x00, 0x48, 0x65, 0x6C, 0x6C, 0x6F, 0x2C, 0x20, 0x57, 0x6F, 0x72, 0x6C, 0x64, 0x21,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ];

    let tag = parse(&bytes, Version::V2_2).unwrap();
    let Tag::V2(tag) = tag else { panic!("expected a v2 tag") };
    assert_eq!(tag.version, Version::V2_2);

    let frame = &tag.frames["TT2"][0];
    match &frame.body {
        FrameBody::Text(text) => {
            assert_eq!(text.text, "Hello, World!");
        }
        other => panic!("unexpected body {:?}", other),
    }
}

#[test]
fn s1_trailing_garbage_is_never_read() {
    // Invariant 1: the cursor advances exactly 10 + tag_size, so bytes
    // past that boundary cannot affect the parse, even if they are
    // themselves nonsense.
    let mut bytes = vec![
        0x49, 0x44, 0x33, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1A, 0x54, 0x54, 0x32, 0x00, 0x00,
        0x14, 0x00, 0x48, 0x65, 0x6C, 0x6C, 0x6F, 0x2C, 0x20, 0x57, 0x6F, 0x72, 0x6C, 0x64, 0x21,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ];
    bytes.extend_from_slice(&[0xFF; 64]);

    let tag = parse(&bytes, Version::V2_2).unwrap();
    let Tag::V2(tag) = tag else { panic!("expected a v2 tag") };
    let frame = &tag.frames["TT2"][0];
    match &frame.body {
        FrameBody::Text(text) => assert_eq!(text.text, "Hello, World!"),
        other => panic!("unexpected body {:?}", other),
    }
}

#[test]
fn s2_v22_whole_tag_unsync_hides_the_stuffed_zero() {
    let bytes = [
        0x49, 0x44, 0x33, 0x02, 0x00, 0x80, 0x00, 0x00, 0x00, 0x09, // header, unsync flag set
        0x4D, 0x43, 0x49, // "MCI"
        0x00, 0x00, 0x02, // body_size = 2, declared against the resynced body
        0xFF, 0x00, 0xE0, // stuffed 0xFF 0x00, then 0xE0
    ];

    let tag = parse(&bytes, Version::V2_2).unwrap();
    let Tag::V2(tag) = tag else { panic!("expected a v2 tag") };

    let frame = &tag.frames["MCI"][0];
    match &frame.body {
        FrameBody::Binary(bin) => {
            assert_eq!(bin.data, vec![0xFF, 0xE0]);
            // the consumer never sees 0x00 immediately after 0xFF
            assert!(!bin
                .data
                .windows(2)
                .any(|w| w == [0xFF, 0x00]));
        }
        other => panic!("unexpected body {:?}", other),
    }
}

#[test]
fn s3_v23_extended_header_frame_crc() {
    let mut bytes = vec![
        0x49, 0x44, 0x33, 0x03, 0x00, 0x40, 0x00, 0x00, 0x00, 0x0E, // header, ext flag set
        0x00, 0x00, 0x00, 0x0A, // ext size (informational only)
        0x80, 0x00, // ext flags: crc present
        0x00, 0x00, 0x00, 0x64, // padding_size = 100
    ];
    bytes.extend_from_slice(&0xDEADBEEFu32.to_be_bytes());

    let tag = parse(&bytes, Version::V2_3).unwrap();
    let Tag::V2(tag) = tag else { panic!("expected a v2 tag") };

    use tagcore::id3v2::header::ExtHeader;
    match tag.ext_header {
        Some(ExtHeader::V3(ext)) => {
            assert_eq!(ext.frame_crc, Some(0xDEADBEEF));
            assert_eq!(ext.padding_size, 100);
        }
        other => panic!("unexpected extended header {:?}", other),
    }
}

#[test]
fn s4_v24_multivalue_text() {
    let bytes = [
        0x49, 0x44, 0x33, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, // header
        0x54, 0x50, 0x45, 0x31, // "TPE1"
        0x00, 0x00, 0x00, 0x06, // synch-safe body size = 6
        0x00, 0x00, // flags
        0x03, 0x41, 0x00, 0x42, 0x00, 0x43, // UTF-8, "A\0B\0C"
    ];

    let tag = parse(&bytes, Version::V2_4).unwrap();
    let Tag::V2(tag) = tag else { panic!("expected a v2 tag") };

    let frame = &tag.frames["TPE1"][0];
    match &frame.body {
        FrameBody::Text(text) => {
            assert_eq!(text.values, vec!["A", "B", "C"]);
            assert_eq!(text.text, "A");
        }
        other => panic!("unexpected body {:?}", other),
    }
}

#[test]
fn invariant_flag_word_bits_match_frame_flags_fields() {
    // Invariant 6: set only the group-id bit (0x0040) in a v2.4 frame
    // header and check that exactly that field, and nothing else,
    // reflects it.
    let bytes = [
        0x49, 0x44, 0x33, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0D, // header, tag_size = 13
        0x54, 0x50, 0x45, 0x31, // "TPE1"
        0x00, 0x00, 0x00, 0x03, // synch-safe declared size (2-byte payload + 1 group-id byte)
        0x00, 0x40, // flags: group id present
        0x2A, // group id = 42
        0x03, 0x41, // UTF-8 encoding byte, "A"
    ];

    let tag = parse(&bytes, Version::V2_4).unwrap();
    let Tag::V2(tag) = tag else { panic!("expected a v2 tag") };
    let frame = &tag.frames["TPE1"][0];
    let flags = frame.flags.expect("v2.4 frames always carry flags");

    assert_eq!(flags.group_id, Some(42));
    assert!(!flags.tag_alter_preserve);
    assert!(!flags.file_alter_preserve);
    assert!(!flags.read_only);
    assert!(!flags.compressed);
    assert!(!flags.unsync);
    assert_eq!(flags.decompressed_size, None);
    assert_eq!(flags.encryption_method, None);
    assert_eq!(flags.data_length_indicator, None);
}

#[test]
fn s5_v1_1_track_number_and_comment_length() {
    let mut buf = vec![0u8; 128];
    buf[0..3].copy_from_slice(b"TAG");
    buf[3..18].copy_from_slice(b"My babe just ca");
    buf[33..45].copy_from_slice(b"Nina Simone");
    buf[63..72].copy_from_slice(b"100% Jazz");
    buf[93..97].copy_from_slice(b"1982");
    let comment = b"a great comment track here!";
    buf[97..97 + comment.len()].copy_from_slice(comment);
    buf[125] = 0x00;
    buf[126] = 0x05;
    buf[127] = 10;

    assert_eq!(probe(&buf), Some(Version::V1_1));

    let tag = parse(&buf, Version::V1_1).unwrap();
    let Tag::V1(tag) = tag else { panic!("expected a v1 tag") };
    assert_eq!(tag.track_number, Some(5));
    assert_eq!(tag.comment.len(), 28);
}

#[test]
fn s6_malformed_ufid_owner_is_fatal_by_default() {
    let bytes = [
        0x49, 0x44, 0x33, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, // header
        0x55, 0x46, 0x49, // "UFI"
        0x00, 0x00, 0x01, // body_size = 1
        0x00, // empty owner
    ];

    let result = parse_with(&bytes, Version::V2_2, ParseOptions::default(), &mut tagcore::DiscardSink);
    assert_eq!(result, Err(Error::Malformed("empty owner".to_string())));
}

#[test]
fn s6_malformed_ufid_owner_is_dropped_under_lenient_mode() {
    let bytes = [
        0x49, 0x44, 0x33, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0x55, 0x46, 0x49, 0x00, 0x00,
        0x01, 0x00,
    ];

    let options = ParseOptions { lenient: true };
    let tag = parse_with(&bytes, Version::V2_2, options, &mut tagcore::DiscardSink).unwrap();
    let Tag::V2(tag) = tag else { panic!("expected a v2 tag") };
    assert!(tag.frames.is_empty());
}
