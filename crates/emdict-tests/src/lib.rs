//! Shared fixtures for the integration tests and benches.
//!
//! Binary fixtures are written as hex so a test shows the exact bytes it
//! feeds the decoder. Whitespace inside the hex is ignored, which lets a
//! fixture be laid out one field per line.

use emdict_encoder::compression::{compress, default_level};
use emdict_encoder::{Codec, DictEncoder};
use emdict_types::Record;
use emdict_wire::SizeHeader;
use emdict_wire::header::SIZE_HEADER_LEN;

/// The single-record stream from the reference scenario:
/// "😀", "grinning face", category 1, tags ["happy", "smile"].
pub const GRINNING_FACE_HEX: &str = "
    01000000
    04000000 f09f9880
    0d000000 6772696e6e696e672066616365
    01000000
    02000000
    05000000 6861707079
    05000000 736d696c65
";

/// Decode a hex fixture, ignoring whitespace.
///
/// # Panics
///
/// Panics if the fixture is not valid hex.
#[must_use]
pub fn fixture(hex_str: &str) -> Vec<u8> {
    let compact: String = hex_str.split_whitespace().collect();
    hex::decode(&compact).unwrap_or_else(|e| panic!("bad hex fixture: {e}"))
}

/// Wrap a raw stream in a container, compressing with `codec`.
///
/// The size header always declares the true length; tests that need a
/// lying header patch the first four bytes afterwards.
///
/// # Panics
///
/// Panics if compression fails or `raw` does not fit a `u32` length.
#[must_use]
pub fn container(raw: &[u8], codec: Codec) -> Vec<u8> {
    let declared = u32::try_from(raw.len()).expect("fixture too large");
    let payload = compress(raw, codec, default_level(codec)).expect("compression failed");

    let mut blob = vec![0u8; SIZE_HEADER_LEN];
    SizeHeader::new(declared)
        .write_to(&mut blob)
        .expect("header fits");
    blob.extend_from_slice(&payload);
    blob
}

/// A small dictionary covering multibyte symbols, tags, negative
/// categories, and an empty description.
#[must_use]
pub fn sample_records() -> Vec<Record> {
    vec![
        Record::new("😀", 1, "grinning face").with_tags(["happy", "smile"]),
        Record::new("🔥", 2, "fire").with_tags(["hot", "flame", "lit"]),
        Record::new("🎉", 3, "party popper").with_tags(["celebration"]),
        Record::new("👩‍💻", 7, "woman technologist"),
        Record::new("🇯🇵", -1, "flag: Japan").with_tags(["日本"]),
        Record::new("?", i32::MAX, ""),
    ]
}

/// A generated dictionary of `count` records, each with `tags` tags.
#[must_use]
pub fn synthetic_records(count: usize, tags: usize) -> Vec<Record> {
    (0..count)
        .map(|i| {
            let category = i32::try_from(i % 10).unwrap_or_default();
            Record::new(
                char::from_u32(0x1F600 + u32::try_from(i % 80).unwrap_or_default())
                    .unwrap_or('?')
                    .to_string(),
                category,
                format!("synthetic entry number {i}"),
            )
            .with_tags((0..tags).map(|t| format!("tag{t}")))
        })
        .collect()
}

/// Encode `records` into a container with `codec`.
///
/// # Panics
///
/// Panics if encoding fails.
#[must_use]
pub fn encode_container(records: &[Record], codec: Codec) -> Vec<u8> {
    DictEncoder::new()
        .extend(records.iter().cloned())
        .codec(codec)
        .encode()
        .expect("encoding should succeed")
}

/// Encode `records` as a raw stream.
///
/// # Panics
///
/// Panics if encoding fails.
#[must_use]
pub fn encode_raw(records: &[Record]) -> Vec<u8> {
    DictEncoder::new()
        .extend(records.iter().cloned())
        .encode_raw()
        .expect("encoding should succeed")
}
