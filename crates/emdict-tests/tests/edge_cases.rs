//! Edge case integration tests for the record stream decoder.
//!
//! - **Truncation**: cutting a valid stream anywhere before its last byte
//!   must fail with `UnexpectedEof`, never panic and never return a
//!   partial dictionary.
//!
//! - **Hostile lengths**: a string or tag count near `u32::MAX` must not
//!   wrap the cursor or trigger a huge allocation.
//!
//! - **Encoding**: a string that is not UTF-8 fails with
//!   `InvalidEncoding`; no replacement characters are substituted.
//!
//! - **Trailing data**: ignored and reported by default, rejected in
//!   strict mode.

use emdict_decoder::{DecodeError, DecodeOptions, DictDecoder, Field};
use emdict_tests::{GRINNING_FACE_HEX, encode_raw, fixture, sample_records};
use emdict_types::Record;

// ── Reference scenarios ───────────────────────────────────────────────────────

#[test]
fn zero_count_is_empty_dictionary() {
    let decoded = DictDecoder::decode(&fixture("00000000")).unwrap();
    assert!(decoded.is_empty());
    assert_eq!(decoded.trailing_bytes, 0);
}

#[test]
fn grinning_face_with_tags() {
    let decoded = DictDecoder::decode(&fixture(GRINNING_FACE_HEX)).unwrap();
    assert_eq!(
        decoded.records,
        vec![Record::new("😀", 1, "grinning face").with_tags(["happy", "smile"])]
    );
}

#[test]
fn description_precedes_category_on_the_wire() {
    // symbol "a", description "b", category 0x11223344, no tags
    let raw = fixture("01000000 01000000 61 01000000 62 44332211 00000000");
    let record = &DictDecoder::decode(&raw).unwrap().records[0];
    assert_eq!(record.description, "b");
    assert_eq!(record.category, 0x1122_3344);
}

// ── Truncation ────────────────────────────────────────────────────────────────

#[test]
fn every_truncation_is_unexpected_eof() {
    let raw = encode_raw(&sample_records());
    for len in 0..raw.len() {
        match DictDecoder::decode(&raw[..len]) {
            Err(DecodeError::UnexpectedEof { offset, .. }) => {
                assert!(offset <= len, "offset {offset} past cut {len}");
            }
            other => panic!("cut at {len}: expected UnexpectedEof, got {other:?}"),
        }
    }
}

#[test]
fn truncated_tag_names_record_and_tag() {
    let mut raw = fixture(GRINNING_FACE_HEX);
    raw.truncate(raw.len() - 3);
    let err = DictDecoder::decode(&raw).unwrap_err();
    assert_eq!(err.field(), Some(Field::Tag { record: 0, tag: 1 }));
}

#[test]
fn count_larger_than_data_is_eof_on_next_record() {
    // count 2, one minimal record
    let raw = fixture("02000000 00000000 00000000 00000000 00000000");
    let err = DictDecoder::decode(&raw).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::UnexpectedEof {
            field: Field::Symbol { record: 1 },
            offset: 20,
            ..
        }
    ));
}

// ── Hostile lengths ───────────────────────────────────────────────────────────

#[test]
fn max_string_length_does_not_wrap() {
    let raw = fixture("01000000 ffffffff 41");
    assert!(matches!(
        DictDecoder::decode(&raw),
        Err(DecodeError::UnexpectedEof {
            field: Field::Symbol { record: 0 },
            needed: 0xffff_ffff,
            available: 1,
            ..
        })
    ));
}

#[test]
fn max_tag_count_fails_without_allocating() {
    // one record, empty strings, category 0, tag count u32::MAX, no tags
    let raw = fixture("01000000 00000000 00000000 00000000 ffffffff");
    assert!(matches!(
        DictDecoder::decode(&raw),
        Err(DecodeError::UnexpectedEof {
            field: Field::Tag { record: 0, tag: 0 },
            ..
        })
    ));
}

#[test]
fn max_record_count_fails_without_allocating() {
    assert!(matches!(
        DictDecoder::decode(&fixture("ffffffff")),
        Err(DecodeError::UnexpectedEof {
            field: Field::Symbol { record: 0 },
            ..
        })
    ));
}

#[test]
fn short_body_is_eof_before_utf8_check() {
    // declares 4 bytes, supplies 2 invalid ones
    let raw = fixture("01000000 04000000 ffff");
    assert!(matches!(
        DictDecoder::decode(&raw),
        Err(DecodeError::UnexpectedEof { .. })
    ));
}

// ── Encoding ──────────────────────────────────────────────────────────────────

#[test]
fn invalid_utf8_in_description() {
    let raw = fixture("01000000 01000000 41 02000000 c328 00000000 00000000");
    let err = DictDecoder::decode(&raw).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::InvalidEncoding {
            field: Field::Description { record: 0 },
            offset: 13,
            ..
        }
    ));
}

#[test]
fn invalid_utf8_in_tag() {
    let raw = fixture("01000000 00000000 00000000 00000000 01000000 01000000 ff");
    let err = DictDecoder::decode(&raw).unwrap_err();
    assert_eq!(err.field(), Some(Field::Tag { record: 0, tag: 0 }));
}

#[test]
fn lone_surrogate_encoding_is_rejected() {
    // CESU-style encoded U+D800
    let raw = fixture("01000000 03000000 eda080 00000000 00000000 00000000");
    assert!(matches!(
        DictDecoder::decode(&raw),
        Err(DecodeError::InvalidEncoding { .. })
    ));
}

// ── Idempotence ───────────────────────────────────────────────────────────────

#[test]
fn decoding_twice_gives_equal_results() {
    let raw = encode_raw(&sample_records());
    assert_eq!(DictDecoder::decode(&raw).unwrap(), DictDecoder::decode(&raw).unwrap());
}

// ── Trailing data ─────────────────────────────────────────────────────────────

#[test]
fn trailing_bytes_are_ignored_by_default() {
    let mut raw = fixture(GRINNING_FACE_HEX);
    raw.extend_from_slice(&[0, 0, 0]);
    let decoded = DictDecoder::decode(&raw).unwrap();
    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded.trailing_bytes, 3);
}

#[test]
fn trailing_bytes_are_rejected_when_strict() {
    let clean = fixture(GRINNING_FACE_HEX);
    let mut raw = clean.clone();
    raw.push(0x2a);
    assert!(matches!(
        DictDecoder::decode_with(&raw, &DecodeOptions::strict()),
        Err(DecodeError::TrailingData { offset, extra_bytes: 1 }) if offset == clean.len()
    ));
    assert!(DictDecoder::decode_with(&clean, &DecodeOptions::strict()).is_ok());
}
